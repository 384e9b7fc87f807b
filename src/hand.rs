use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards scored together: four hand cards plus the cut.
pub const HAND_SIZE: usize = 5;

/// Index of the cut card within a hand.
pub const CUT_INDEX: usize = 4;

/// Caller-owned selection state: one optional card per position, cut last.
pub type Slots = [Option<Card>; HAND_SIZE];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 card slots, got {0}")]
    WrongLength(usize),
    #[error("hand is incomplete: {missing} of 5 cards missing")]
    Incomplete { missing: usize },
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A complete, validated cribbage hand: four hand cards and the cut.
///
/// ```
/// use cribbage_rs::cards::{Card, Rank, Suit};
/// use cribbage_rs::hand::Hand;
///
/// let hand: Hand = "5s 5h 5d Jc 5c".parse().unwrap();
/// assert_eq!(hand.cut(), Card::new(Rank::Five, Suit::Clubs));
/// assert_eq!(hand.hand_cards().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn try_new(hand: [Card; 4], cut: Card) -> Result<Self, HandError> {
        let cards = [hand[0], hand[1], hand[2], hand[3], cut];
        ensure_distinct(&cards)?;
        Ok(Self { cards })
    }

    /// Build a hand from a slice of four hand cards followed by the cut.
    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != HAND_SIZE {
            return Err(HandError::WrongLength(slice.len()));
        }
        Self::try_new([slice[0], slice[1], slice[2], slice[3]], slice[CUT_INDEX])
    }

    /// Build a hand from optional slots, refusing any empty or repeated slot.
    pub fn from_slots(slots: &[Option<Card>]) -> Result<Self, HandError> {
        if slots.len() != HAND_SIZE {
            return Err(HandError::WrongLength(slots.len()));
        }
        let cards: Vec<Card> = slots.iter().flatten().copied().collect();
        let missing = HAND_SIZE - cards.len();
        if missing > 0 {
            return Err(HandError::Incomplete { missing });
        }
        Self::from_slice(&cards)
    }

    /// The four cards held in hand (positions 0-3).
    pub fn hand_cards(&self) -> &[Card] {
        &self.cards[..CUT_INDEX]
    }

    pub fn cut(&self) -> Card {
        self.cards[CUT_INDEX]
    }

    pub fn as_array(&self) -> [Card; HAND_SIZE] {
        self.cards
    }

    /// The hand as fully populated slots.
    pub fn slots(&self) -> Slots {
        self.cards.map(Some)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, cut] = self.cards;
        write!(f, "{a} {b} {c} {d} | {cut}")
    }
}

fn ensure_distinct(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for &card in cards {
        if !seen.insert(card) {
            return Err(HandError::DuplicateCard(card));
        }
    }
    Ok(())
}
