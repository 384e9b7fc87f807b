use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, CUT_INDEX, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck, the pool a hand and its cut are drawn from.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use cribbage_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Deal four hand cards and then turn the cut.
    /// Returns `None` once fewer than five cards remain.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.len() < HAND_SIZE {
            return None;
        }
        let cards = self.draw_n(HAND_SIZE);
        let hand = [cards[0], cards[1], cards[2], cards[3]];
        // Cards drawn from one deck are always distinct.
        Hand::try_new(hand, cards[CUT_INDEX]).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deals_ten_hands_then_stops() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let mut seen = HashSet::new();
        for _ in 0..10 {
            let hand = d.deal_hand().unwrap();
            for card in hand.as_array() {
                assert!(seen.insert(card), "card dealt twice: {card}");
            }
        }
        assert_eq!(d.len(), 2);
        assert!(d.deal_hand().is_none());
        assert_eq!(d.draw_n(5).len(), 2);
        assert!(d.is_empty());
    }
}
