use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a hand, sorted by rank ascending.
///
/// Example: 3 3 4 5 K groups as [(Three, 2), (Four, 1), (Five, 1), (King, 1)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        // Indexed by sequence value (1-13).
        let mut counts = [0u8; 14];
        for card in cards {
            counts[card.sequence_value() as usize] += 1;
        }

        let groups = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = counts[rank.sequence_value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        Self { groups }
    }

    /// How many cards of `rank` are present.
    pub fn count(&self, rank: Rank) -> u8 {
        self.groups.iter().find(|(r, _)| *r == rank).map_or(0, |(_, count)| *count)
    }

    /// Distinct ranks present, ascending.
    pub fn ranks(&self) -> Vec<Rank> {
        self.groups.iter().map(|(rank, _)| *rank).collect()
    }

    /// Ranks held two or more times, with their counts.
    pub fn multiples(&self) -> Vec<(Rank, u8)> {
        self.groups.iter().filter(|(_, count)| *count >= 2).copied().collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
