use super::analysis::HandAnalysis;
use super::{RuleEvaluator, RuleScore};
use crate::cards::{Card, Rank};

const MIN_RUN: usize = 3;

/// The single longest run in a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Number of distinct consecutive ranks.
    pub length: u8,
    /// Product of how many times each rank in the run is held.
    pub multiplier: u8,
    /// Every card taking part, duplicates included, ordered by rank.
    pub cards: Vec<Card>,
}

impl Run {
    pub fn points(&self) -> u32 {
        u32::from(self.length) * u32::from(self.multiplier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Runs {
    points: u32,
    run: Option<Run>,
}

impl Runs {
    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }
}

impl RuleScore for Runs {
    fn points(&self) -> u32 {
        self.points
    }
}

/// Finds the longest window of consecutive distinct ranks (5, then 4, then 3).
///
/// Only that run scores. Duplicated ranks inside it multiply the score:
/// one pair doubles it, trips triple it, two pairs quadruple it.
pub struct RunsEvaluator;

impl RuleEvaluator for RunsEvaluator {
    type Score = Runs;

    fn evaluate(&self, analysis: &HandAnalysis) -> Runs {
        if analysis.present().len() < MIN_RUN {
            return Runs::default();
        }

        let groups = analysis.rank_groups();
        let ranks = groups.ranks();
        let Some(window) = longest_window(&ranks) else {
            return Runs::default();
        };

        let multiplier: u8 = window.iter().map(|&rank| groups.count(rank)).product();
        let mut cards: Vec<Card> =
            analysis.present().iter().filter(|c| window.contains(&c.rank())).copied().collect();
        // Stable sort keeps slot order among duplicates.
        cards.sort_by_key(|c| c.sequence_value());

        let run = Run { length: window.len() as u8, multiplier, cards };
        Runs { points: run.points(), run: Some(run) }
    }
}

/// First window of consecutive ranks, trying the longest length first.
/// `ranks` must be distinct and ascending.
fn longest_window(ranks: &[Rank]) -> Option<&[Rank]> {
    (MIN_RUN..=ranks.len()).rev().find_map(|len| ranks.windows(len).find(|w| is_consecutive(w)))
}

fn is_consecutive(ranks: &[Rank]) -> bool {
    ranks.windows(2).all(|w| w[1].sequence_value() == w[0].sequence_value() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::hand::Hand;

    fn runs(s: &str) -> Runs {
        let hand: Hand = s.parse().unwrap();
        RunsEvaluator.evaluate(&HandAnalysis::from_hand(&hand))
    }

    #[test]
    fn five_card_run() {
        let r = runs("9s 10h Jd Qc Kc");
        let run = r.run().unwrap();
        assert_eq!(run.length, 5);
        assert_eq!(run.multiplier, 1);
        assert_eq!(r.points(), 5);
    }

    #[test]
    fn longest_run_wins_over_shorter() {
        // 2-3-4-5 contains 2-3-4 and 3-4-5; only the four-card run counts.
        let r = runs("2s 3h 4d 5c Kc");
        assert_eq!(r.points(), 4);
        assert_eq!(r.run().unwrap().length, 4);
    }

    #[test]
    fn double_run_of_four() {
        let r = runs("3s 3h 4s 5s 6s");
        let run = r.run().unwrap();
        assert_eq!(run.length, 4);
        assert_eq!(run.multiplier, 2);
        assert_eq!(run.cards.len(), 5);
        assert_eq!(r.points(), 8);
    }

    #[test]
    fn triple_run() {
        let r = runs("3s 3h 3d 4s 5s");
        let run = r.run().unwrap();
        assert_eq!((run.length, run.multiplier), (3, 3));
        assert_eq!(r.points(), 9);
    }

    #[test]
    fn double_double_run() {
        let r = runs("7s 7h 8d 8c 9s");
        let run = r.run().unwrap();
        assert_eq!((run.length, run.multiplier), (3, 4));
        assert_eq!(r.points(), 12);
        assert_eq!(
            run.cards,
            vec![
                Card::new(Rank::Seven, Suit::Spades),
                Card::new(Rank::Seven, Suit::Hearts),
                Card::new(Rank::Eight, Suit::Diamonds),
                Card::new(Rank::Eight, Suit::Clubs),
                Card::new(Rank::Nine, Suit::Spades),
            ]
        );
    }

    #[test]
    fn king_does_not_wrap_to_ace() {
        let r = runs("Qs Kh Ad 2c 7s");
        assert_eq!(r.points(), 0);
        assert!(r.run().is_none());
    }

    #[test]
    fn gap_breaks_run() {
        assert_eq!(runs("As 2h 4d 5c 7s").points(), 0);
        assert_eq!(runs("As 2h 3d 5c 6s").points(), 3);
    }

    #[test]
    fn fewer_than_three_cards_score_nothing() {
        let two = Card::new(Rank::Two, Suit::Clubs);
        let slots = [Some(two), Some(Card::new(Rank::Three, Suit::Clubs)), None, None, None];
        let r = RunsEvaluator.evaluate(&HandAnalysis::new(&slots));
        assert_eq!(r, Runs::default());
    }

    #[test]
    fn window_search() {
        use Rank::*;
        assert_eq!(longest_window(&[Ace, Two, Three]), Some(&[Ace, Two, Three][..]));
        assert_eq!(longest_window(&[Ace, Three, Four, Five, Nine]), Some(&[Three, Four, Five][..]));
        assert_eq!(longest_window(&[Ace, Three, Five]), None);
        assert_eq!(longest_window(&[Ace, Two]), None);
    }
}
