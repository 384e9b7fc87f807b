use super::rank_groups::RankGroups;
use crate::cards::Card;
use crate::hand::{Hand, Slots, CUT_INDEX};

/// Pre-computed view of a set of card slots.
/// Built once and shared by all rule evaluators.
///
/// Slots may be empty; each evaluator decides how to treat missing cards.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    slots: Slots,
    present: Vec<Card>,
    rank_groups: RankGroups,
}

impl HandAnalysis {
    pub fn new(slots: &Slots) -> Self {
        let present: Vec<Card> = slots.iter().flatten().copied().collect();
        let rank_groups = RankGroups::from_cards(&present);
        Self { slots: *slots, present, rank_groups }
    }

    pub fn from_hand(hand: &Hand) -> Self {
        Self::new(&hand.slots())
    }

    /// Cards in occupied slots, in slot order. The cut is included.
    pub fn present(&self) -> &[Card] {
        &self.present
    }

    /// Slots 0-3, the cards held in hand.
    pub fn hand_slots(&self) -> &[Option<Card>] {
        &self.slots[..CUT_INDEX]
    }

    pub fn cut(&self) -> Option<Card> {
        self.slots[CUT_INDEX]
    }

    pub fn rank_groups(&self) -> &RankGroups {
        &self.rank_groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn full_hand_analysis() {
        let hand: Hand = "5s 5h 5d Jc 5c".parse().unwrap();
        let analysis = HandAnalysis::from_hand(&hand);

        assert_eq!(analysis.present().len(), 5);
        assert_eq!(analysis.hand_slots().len(), 4);
        assert_eq!(analysis.cut(), Some(Card::new(Rank::Five, Suit::Clubs)));
        assert_eq!(analysis.rank_groups().count(Rank::Five), 4);
        assert_eq!(analysis.rank_groups().count(Rank::Jack), 1);
    }

    #[test]
    fn partial_slots_keep_positions() {
        let jack = Card::new(Rank::Jack, Suit::Hearts);
        let slots = [None, Some(jack), None, None, None];
        let analysis = HandAnalysis::new(&slots);

        assert_eq!(analysis.present(), &[jack]);
        assert_eq!(analysis.hand_slots()[1], Some(jack));
        assert_eq!(analysis.cut(), None);
    }
}
