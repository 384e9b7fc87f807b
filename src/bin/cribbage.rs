use clap::Parser;
use cribbage_rs::cards::{parse_slots, Card};
use cribbage_rs::deck::Deck;
use cribbage_rs::scoring::{score, Mode};
use log::{error, info};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(version, about = "Score a cribbage hand.")]
struct Cli {
    /// Four hand cards followed by the cut, e.g. `5s 5h 5d Jc 5c`.
    /// A random hand is dealt when omitted.
    cards: Vec<String>,
    /// Score as the crib (a flush needs all five cards).
    #[clap(long)]
    crib: bool,
    /// Also print the score under the other mode.
    #[clap(long)]
    both: bool,
    /// Seed for the random deal. Only valid without card arguments.
    #[clap(long, short, conflicts_with = "cards")]
    seed: Option<u64>,
}

/// Deal five slots from a freshly shuffled deck.
fn deal(seed: Option<u64>) -> Vec<Option<Card>> {
    let mut deck = Deck::standard();
    match seed {
        Some(seed) => deck.shuffle_seeded(seed),
        None => deck.shuffle_with(&mut rand::rng()),
    }
    deck.deal_hand().map(|hand| hand.slots().to_vec()).unwrap_or_default()
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mode = Mode::from_is_crib(cli.crib);

    let slots = if cli.cards.is_empty() { deal(cli.seed) } else { parse_slots(&cli.cards) };

    let modes = if cli.both { vec![mode, mode.toggled()] } else { vec![mode] };
    for (i, mode) in modes.into_iter().enumerate() {
        let report = match score(&slots, mode) {
            Ok(report) => report,
            Err(e) => {
                error!("{e}");
                if e.is_incomplete() {
                    info!("give four hand cards followed by the cut");
                }
                return ExitCode::FAILURE;
            }
        };

        if i == 0 {
            let cards: Vec<String> = slots.iter().flatten().map(|c| c.symbol()).collect();
            println!("{}  |  {}", cards[..4].join(" "), cards[4]);
        }
        println!();
        println!("{report}");
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_only_applies_to_random_deals() {
        let cli = Cli::try_parse_from(["cribbage", "--seed", "7"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert!(cli.cards.is_empty());

        let err = Cli::try_parse_from(["cribbage", "--seed", "7", "5s", "5h", "5d", "Jc", "5c"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn seeded_deal_is_reproducible() {
        assert_eq!(deal(Some(42)), deal(Some(42)));
        assert_eq!(deal(Some(42)).len(), 5);
    }
}
