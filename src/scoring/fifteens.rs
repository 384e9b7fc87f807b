use super::analysis::HandAnalysis;
use super::subsets::{self, Subsets};
use super::{RuleEvaluator, RuleScore};
use crate::cards::Card;

const TARGET: u32 = 15;
const POINTS_PER_FIFTEEN: u32 = 2;

/// Every combination of cards whose counting values add up to exactly 15.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fifteens {
    points: u32,
    combos: Vec<Vec<Card>>,
}

impl Fifteens {
    /// Qualifying combinations, each listed in slot order.
    pub fn combos(&self) -> &[Vec<Card>] {
        &self.combos
    }

    pub fn count(&self) -> usize {
        self.combos.len()
    }
}

impl RuleScore for Fifteens {
    fn points(&self) -> u32 {
        self.points
    }
}

/// Scores 2 for each subset of the present cards (cut included) summing to 15.
pub struct FifteensEvaluator;

impl RuleEvaluator for FifteensEvaluator {
    type Score = Fifteens;

    fn evaluate(&self, analysis: &HandAnalysis) -> Fifteens {
        let cards = analysis.present();
        let combos: Vec<Vec<Card>> = Subsets::new(cards.len())
            .map(|mask| subsets::members(cards, mask))
            .filter(|combo| sum(combo) == TARGET)
            .collect();

        let points = POINTS_PER_FIFTEEN * combos.len() as u32;
        Fifteens { points, combos }
    }
}

fn sum(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.fifteen_value())).sum()
}
