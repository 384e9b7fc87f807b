use super::analysis::HandAnalysis;
use super::{Mode, RuleEvaluator, RuleScore};
use crate::cards::{Card, Suit};

/// Which flush case applied to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushKind {
    /// The four hand cards do not share a suit.
    #[default]
    NoFlush,
    /// Four hand cards share a suit, the cut does not (hand mode).
    FourCard,
    /// Four hand cards share a suit, the cut does not, and the crib
    /// only counts five-card flushes.
    CribFourCard,
    /// All five cards share a suit.
    FiveCard,
}

impl FlushKind {
    pub const fn points(self) -> u32 {
        match self {
            FlushKind::NoFlush | FlushKind::CribFourCard => 0,
            FlushKind::FourCard => 4,
            FlushKind::FiveCard => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flush {
    kind: FlushKind,
    suit: Option<Suit>,
}

impl Flush {
    pub fn kind(&self) -> FlushKind {
        self.kind
    }

    /// Suit shared by the four hand cards, when they share one.
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }
}

impl RuleScore for Flush {
    fn points(&self) -> u32 {
        self.kind.points()
    }
}

/// Hand mode accepts a four-card flush; crib mode needs the cut to match too.
pub struct FlushEvaluator {
    pub mode: Mode,
}

impl RuleEvaluator for FlushEvaluator {
    type Score = Flush;

    fn evaluate(&self, analysis: &HandAnalysis) -> Flush {
        let Some(suit) = common_suit(analysis.hand_slots()) else {
            return Flush::default();
        };
        let Some(cut) = analysis.cut() else {
            return Flush::default();
        };

        let kind = match (cut.suit() == suit, self.mode) {
            (true, _) => FlushKind::FiveCard,
            (false, Mode::Hand) => FlushKind::FourCard,
            (false, Mode::Crib) => FlushKind::CribFourCard,
        };
        Flush { kind, suit: Some(suit) }
    }
}

/// The suit every slot holds, or `None` if a slot is empty or suits differ.
fn common_suit(slots: &[Option<Card>]) -> Option<Suit> {
    let first = slots.first().copied().flatten()?.suit();
    slots.iter().all(|slot| matches!(slot, Some(c) if c.suit() == first)).then_some(first)
}
