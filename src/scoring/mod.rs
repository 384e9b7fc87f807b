pub mod analysis;
pub mod fifteens;
pub mod flush;
pub mod nobs;
pub mod pairs;
pub mod rank_groups;
pub mod runs;
pub(crate) mod subsets;

use crate::cards::{parse_cards, Card};
use crate::hand::{Hand, HandError};
use analysis::HandAnalysis;
use fifteens::{Fifteens, FifteensEvaluator};
use flush::{Flush, FlushEvaluator, FlushKind};
use log::{debug, trace};
use nobs::{Nobs, NobsEvaluator};
use pairs::{Pairs, PairsEvaluator};
use runs::{Runs, RunsEvaluator};
use std::fmt;

/// Whether a hand is scored as a player's hand or as the crib.
/// Only the flush rule differs between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Hand,
    Crib,
}

impl Mode {
    pub const fn from_is_crib(is_crib: bool) -> Self {
        if is_crib {
            Mode::Crib
        } else {
            Mode::Hand
        }
    }

    /// The other mode, for re-scoring the same cards.
    pub const fn toggled(self) -> Self {
        match self {
            Mode::Hand => Mode::Crib,
            Mode::Crib => Mode::Hand,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Hand => f.write_str("hand"),
            Mode::Crib => f.write_str("crib"),
        }
    }
}

/// Points awarded by one scoring rule.
pub trait RuleScore {
    fn points(&self) -> u32;
}

/// Strategy pattern: each rule knows how to score a pre-computed analysis.
///
/// Evaluators never fail. Empty slots simply contribute nothing.
pub trait RuleEvaluator {
    type Score: RuleScore;

    fn evaluate(&self, analysis: &HandAnalysis) -> Self::Score;
}

/// Full breakdown of a scored hand. `total` is the sum of the five rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScoreReport {
    mode: Mode,
    fifteens: Fifteens,
    pairs: Pairs,
    runs: Runs,
    flush: Flush,
    nobs: Nobs,
    total: u32,
}

impl ScoreReport {
    fn from_analysis(analysis: &HandAnalysis, mode: Mode) -> Self {
        let fifteens = FifteensEvaluator.evaluate(analysis);
        let pairs = PairsEvaluator.evaluate(analysis);
        let runs = RunsEvaluator.evaluate(analysis);
        let flush = FlushEvaluator { mode }.evaluate(analysis);
        let nobs = NobsEvaluator.evaluate(analysis);

        trace!("fifteens: {} ({} combination(s))", fifteens.points(), fifteens.count());
        trace!("pairs: {}", pairs.points());
        trace!("runs: {}", runs.points());
        trace!("flush: {} ({:?})", flush.points(), flush.kind());
        trace!("nobs: {}", nobs.points());

        let total =
            fifteens.points() + pairs.points() + runs.points() + flush.points() + nobs.points();
        Self { mode, fifteens, pairs, runs, flush, nobs, total }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fifteens(&self) -> &Fifteens {
        &self.fifteens
    }

    pub fn pairs(&self) -> &Pairs {
        &self.pairs
    }

    pub fn runs(&self) -> &Runs {
        &self.runs
    }

    pub fn flush(&self) -> &Flush {
        &self.flush
    }

    pub fn nobs(&self) -> &Nobs {
        &self.nobs
    }
}

fn join_cards(cards: &[Card], sep: &str) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(sep)
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let combos: Vec<String> =
            self.fifteens.combos().iter().map(|c| join_cards(c, "+")).collect();
        writeln!(f, "Fifteens: {:>2}  {}", self.fifteens.points(), combos.join(", "))?;

        let labels: Vec<String> = self.pairs.groups().iter().map(|g| g.label()).collect();
        writeln!(f, "Pairs:    {:>2}  {}", self.pairs.points(), labels.join(", "))?;

        match self.runs.run() {
            Some(run) => writeln!(
                f,
                "Runs:     {:>2}  run of {} x{} ({})",
                self.runs.points(),
                run.length,
                run.multiplier,
                join_cards(&run.cards, " ")
            )?,
            None => writeln!(f, "Runs:     {:>2}", self.runs.points())?,
        }

        let flush = match (self.flush.kind(), self.flush.suit()) {
            (FlushKind::FiveCard, Some(suit)) => format!("five {}", suit.symbol()),
            (FlushKind::FourCard, Some(suit)) => format!("four {}", suit.symbol()),
            (FlushKind::CribFourCard, Some(suit)) => {
                format!("four {} (crib needs five)", suit.symbol())
            }
            _ => String::new(),
        };
        writeln!(f, "Flush:    {:>2}  {}", self.flush.points(), flush)?;

        let nobs = self.nobs.jack().map(|j| j.to_string()).unwrap_or_default();
        writeln!(f, "Nobs:     {:>2}  {}", self.nobs.points(), nobs)?;
        write!(f, "Total:    {:>2}  ({} mode)", self.total, self.mode)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("hand not scorable: {0}")]
    InvalidHand(#[from] HandError),
}

impl ScoreError {
    /// True when the hand is only missing cards, e.g. while a user is still picking.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ScoreError::InvalidHand(HandError::Incomplete { .. }))
    }
}

/// Score five card slots (four hand cards, then the cut).
///
/// Refuses to score unless every slot holds a card and no card repeats.
///
/// ```
/// use cribbage_rs::cards::parse_slot;
/// use cribbage_rs::scoring::{score, Mode};
///
/// let slots: Vec<_> = ["5s", "5h", "5d", "Jc", "5c"].iter().map(|t| parse_slot(t)).collect();
/// let report = score(&slots, Mode::Hand).unwrap();
/// assert_eq!(report.total(), 29);
///
/// let partial = [slots[0], slots[1], None, None, None];
/// assert!(score(&partial, Mode::Hand).unwrap_err().is_incomplete());
/// ```
pub fn score(slots: &[Option<Card>], mode: Mode) -> Result<ScoreReport, ScoreError> {
    let hand = Hand::from_slots(slots)?;
    Ok(score_hand(&hand, mode))
}

/// Score an already validated hand.
pub fn score_hand(hand: &Hand, mode: Mode) -> ScoreReport {
    let report = ScoreReport::from_analysis(&HandAnalysis::from_hand(hand), mode);
    debug!("scored {hand} as {mode}: {} points", report.total());
    report
}

/// Parse five whitespace or comma separated cards (cut last) and score them.
///
/// ```
/// use cribbage_rs::scoring::{score_str, Mode, RuleScore};
///
/// let report = score_str("As 2s 3s 4s 5h", Mode::Crib).unwrap();
/// assert_eq!(report.flush().points(), 0);
/// assert_eq!(report.runs().points(), 5);
/// ```
pub fn score_str(input: &str, mode: Mode) -> Result<ScoreReport, ScoreError> {
    let cards = parse_cards(input).map_err(|e| HandError::CardParse(e.to_string()))?;
    let hand = Hand::from_slice(&cards)?;
    Ok(score_hand(&hand, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_flag() {
        assert_eq!(Mode::from_is_crib(true), Mode::Crib);
        assert_eq!(Mode::from_is_crib(false), Mode::Hand);
        assert_eq!(Mode::Hand.toggled(), Mode::Crib);
        assert_eq!(Mode::Crib.toggled(), Mode::Hand);
        assert_eq!(Mode::default(), Mode::Hand);
    }

    #[test]
    fn total_is_sum_of_rules() {
        let report = score_str("3s 3h 3d 4s 5s", Mode::Hand).unwrap();
        assert_eq!(report.pairs().points(), 6);
        assert_eq!(report.runs().points(), 9);
        assert_eq!(report.fifteens().points(), 6);
        assert_eq!(report.flush().points(), 0);
        assert_eq!(report.nobs().points(), 0);
        assert_eq!(report.total(), 21);
    }

    #[test]
    fn refuses_wrong_length_and_duplicates() {
        let err = score(&[], Mode::Hand).unwrap_err();
        assert_eq!(err, ScoreError::InvalidHand(HandError::WrongLength(0)));
        assert!(!err.is_incomplete());

        let err = score_str("5s 5h 5d Jc 5s", Mode::Hand).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidHand(HandError::DuplicateCard(_))));

        let err = score_str("5s 5h 5d Jc Xs", Mode::Hand).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidHand(HandError::CardParse(_))));
    }

    #[test]
    fn evaluators_are_deterministic_on_repeated_cards() {
        use crate::cards::{Rank, Suit};

        let five = Card::new(Rank::Five, Suit::Spades);
        let slots = [
            Some(five),
            Some(five),
            Some(Card::new(Rank::Four, Suit::Hearts)),
            Some(Card::new(Rank::Six, Suit::Clubs)),
            Some(five),
        ];
        assert!(score(&slots, Mode::Hand).is_err());

        let report = ScoreReport::from_analysis(&HandAnalysis::new(&slots), Mode::Hand);
        assert_eq!(report.fifteens().count(), 4);
        assert_eq!(report.fifteens().points(), 8);
        assert_eq!(report.pairs().points(), 6);
        assert_eq!(report.runs().points(), 9);
        let run = report.runs().run().unwrap();
        assert_eq!((run.length, run.multiplier), (3, 3));
        assert_eq!(report.flush().points(), 0);
        assert_eq!(report.nobs().points(), 0);
        assert_eq!(report.total(), 23);

        let again = ScoreReport::from_analysis(&HandAnalysis::new(&slots), Mode::Hand);
        assert_eq!(again, report);
    }

    #[test]
    fn report_display_lists_every_rule() {
        let report = score_str("5s 5h 5d Jc 5c", Mode::Hand).unwrap();
        let text = report.to_string();
        assert!(text.contains("Fifteens: 16"));
        assert!(text.contains("Four 5s"));
        assert!(text.contains("Nobs:      1  Jc"));
        assert!(text.ends_with("Total:    29  (hand mode)"));
    }
}
