use super::analysis::HandAnalysis;
use super::{RuleEvaluator, RuleScore};
use crate::cards::Rank;

/// A rank held two or more times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairGroup {
    pub rank: Rank,
    pub count: u8,
}

impl PairGroup {
    /// Every pair within the group scores 2: k cards make k*(k-1)/2 pairs.
    pub fn points(&self) -> u32 {
        let k = u32::from(self.count);
        k * k.saturating_sub(1)
    }

    /// "Pair of 5s", "Three Ks", "Four 7s".
    pub fn label(&self) -> String {
        match self.count {
            2 => format!("Pair of {}s", self.rank),
            3 => format!("Three {}s", self.rank),
            4 => format!("Four {}s", self.rank),
            n => format!("{n} {}s", self.rank),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pairs {
    points: u32,
    groups: Vec<PairGroup>,
}

impl Pairs {
    /// Paired ranks, ascending.
    pub fn groups(&self) -> &[PairGroup] {
        &self.groups
    }
}

impl RuleScore for Pairs {
    fn points(&self) -> u32 {
        self.points
    }
}

pub struct PairsEvaluator;

impl RuleEvaluator for PairsEvaluator {
    type Score = Pairs;

    fn evaluate(&self, analysis: &HandAnalysis) -> Pairs {
        let groups: Vec<PairGroup> = analysis
            .rank_groups()
            .multiples()
            .into_iter()
            .map(|(rank, count)| PairGroup { rank, count })
            .collect();
        let points = groups.iter().map(PairGroup::points).sum();
        Pairs { points, groups }
    }
}
