use super::analysis::HandAnalysis;
use super::{RuleEvaluator, RuleScore};
use crate::cards::{Card, Rank};

/// One for his nob: the jack in hand matching the cut's suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nobs {
    jack: Option<Card>,
}

impl Nobs {
    pub fn jack(&self) -> Option<Card> {
        self.jack
    }
}

impl RuleScore for Nobs {
    fn points(&self) -> u32 {
        u32::from(self.jack.is_some())
    }
}

pub struct NobsEvaluator;

impl RuleEvaluator for NobsEvaluator {
    type Score = Nobs;

    fn evaluate(&self, analysis: &HandAnalysis) -> Nobs {
        let Some(cut) = analysis.cut() else {
            return Nobs::default();
        };
        let jack = analysis
            .hand_slots()
            .iter()
            .flatten()
            .copied()
            .find(|c| c.rank() == Rank::Jack && c.suit() == cut.suit());
        Nobs { jack }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::hand::Hand;

    fn nobs(s: &str) -> Nobs {
        let hand: Hand = s.parse().unwrap();
        NobsEvaluator.evaluate(&HandAnalysis::from_hand(&hand))
    }

    #[test]
    fn jack_matching_cut_suit() {
        let n = nobs("5s 5h 5d Jc 5c");
        assert_eq!(n.points(), 1);
        assert_eq!(n.jack(), Some(Card::new(Rank::Jack, Suit::Clubs)));
    }

    #[test]
    fn jack_of_other_suit() {
        assert_eq!(nobs("5s 5h 5d Jc 5h").points(), 0);
        assert_eq!(nobs("Js Jh Jd 2c 5c").points(), 0);
    }

    #[test]
    fn jack_cut_is_not_nobs() {
        assert_eq!(nobs("5s 5h 5d 2c Jc").points(), 0);
    }

    #[test]
    fn at_most_one_point() {
        let n = nobs("Js Jh Jd Jc 5h");
        assert_eq!(n.points(), 1);
        assert_eq!(n.jack(), Some(Card::new(Rank::Jack, Suit::Hearts)));
    }

    #[test]
    fn missing_cut_scores_nothing() {
        let slots = [Some(Card::new(Rank::Jack, Suit::Clubs)), None, None, None, None];
        assert_eq!(NobsEvaluator.evaluate(&HandAnalysis::new(&slots)).points(), 0);
    }
}
