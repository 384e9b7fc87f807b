//! cribbage-rs: Cribbage hand scoring library
//!
//! Goals:
//! - Deterministic scoring of one hand (four cards plus the cut) at a time
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score a hand
//! ```
//! use cribbage_rs::cards::{Card, Rank, Suit};
//! use cribbage_rs::hand::Hand;
//! use cribbage_rs::scoring::{score_hand, Mode, RuleScore};
//!
//! let hand = Hand::try_new(
//!     [
//!         Card::new(Rank::Five, Suit::Spades),
//!         Card::new(Rank::Five, Suit::Hearts),
//!         Card::new(Rank::Five, Suit::Diamonds),
//!         Card::new(Rank::Jack, Suit::Clubs),
//!     ],
//!     Card::new(Rank::Five, Suit::Clubs),
//! ).unwrap();
//!
//! let report = score_hand(&hand, Mode::Hand);
//! assert_eq!(report.total(), 29);
//! assert_eq!(report.pairs().points(), 12);
//! assert_eq!(report.nobs().points(), 1);
//! ```
//!
//! ## CLI
//! Score a hand from the command line, or deal a random one:
//! ```sh
//! cargo run --bin cribbage -- 5s 5h 5d Jc 5c
//! cargo run --bin cribbage -- --crib --seed 42
//! ```

pub mod cards;
pub mod deck;
pub mod hand;
pub mod scoring;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
