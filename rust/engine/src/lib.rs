//! # pokerhand-engine: Five-Card Hand Classification
//!
//! Parses a five-card poker hand from text, classifies it into one of ten
//! combinations and orders hands by strength. Everything here is pure and
//! synchronous; hands are immutable once built and can be shared across
//! threads freely.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and token parsing
//! - [`combination`] - The combination table and its matching rules
//! - [`hand`] - Hand validation, classification and ordering
//! - [`errors`] - Error types for hand construction
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerhand_engine::combination::Combination;
//! use pokerhand_engine::hand::PokerHand;
//!
//! let hand: PokerHand = "AS TS QS JS KS".parse().unwrap();
//! assert_eq!(hand.combination(), Combination::RoyalFlush);
//! assert_eq!(hand.combination_label(), "Royal Flush");
//! ```
//!
//! ## Ordering
//!
//! Stronger hands compare greater. Within the High Card category ranks
//! break the tie from the top card down; every other category ties on the
//! category alone:
//!
//! ```rust
//! use pokerhand_engine::hand::PokerHand;
//!
//! let low = PokerHand::new("2C 5H 4D QC AC").unwrap();
//! let high = PokerHand::new("3C 5H 4D QC AC").unwrap();
//! assert!(high > low);
//!
//! let aces = PokerHand::new("AH AS 2C 3D 4H").unwrap();
//! let twos = PokerHand::new("2H 2S 9C JD KH").unwrap();
//! assert_eq!(aces, twos);
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use pokerhand_engine::errors::HandError;
//! use pokerhand_engine::hand::PokerHand;
//!
//! assert!(matches!(
//!     PokerHand::new("AS AS QC JH TH"),
//!     Err(HandError::DuplicateCard { .. })
//! ));
//! assert!(matches!(
//!     PokerHand::new("1S TS QS JS KS"),
//!     Err(HandError::MalformedInput { .. })
//! ));
//! ```

pub mod cards;
pub mod combination;
pub mod errors;
pub mod hand;
