//! Card, hand, and combination formatters for terminal display.
//!
//! Pure functions turning engine values into text. Combination names are
//! localized here; the engine only carries English labels.
//!
//! ## Suit Styles
//!
//! - **Letters** (default): `H S C D`, the same notation hands are typed in
//! - **Unicode**: `♥ ♠ ♣ ♦`, enabled with `unicode_suits` in the config
//!
//! ## Example
//!
//! ```rust
//! use pokerhand_cli::config::Locale;
//! use pokerhand_cli::formatters::{format_hand, localized_label};
//! use pokerhand_engine::hand::PokerHand;
//!
//! let hand = PokerHand::new("AS TS QS JS KS").unwrap();
//! assert_eq!(format_hand(&hand, false), "TS JS QS KS AS");
//! assert_eq!(format_hand(&hand, true), "T♠ J♠ Q♠ K♠ A♠");
//! assert_eq!(localized_label(hand.combination(), Locale::Ru), "Флеш-Рояль");
//! ```

use crate::config::Locale;
use pokerhand_engine::cards::{Card, Suit};
use pokerhand_engine::combination::Combination;
use pokerhand_engine::hand::PokerHand;

/// Format a Suit as its letter or, with `unicode`, its symbol.
pub fn format_suit(suit: Suit, unicode: bool) -> String {
    if unicode {
        match suit {
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
        }
        .to_string()
    } else {
        suit.symbol().to_string()
    }
}

/// Format a Card as rank followed by suit, e.g. "AS" or "A♠".
pub fn format_card(card: &Card, unicode: bool) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit, unicode))
}

/// Format a hand's cards in canonical order, separated by single spaces.
pub fn format_hand(hand: &PokerHand, unicode: bool) -> String {
    let cards: Vec<String> = hand.cards().iter().map(|c| format_card(c, unicode)).collect();
    cards.join(" ")
}

/// Combination name in the requested language.
pub fn localized_label(combination: Combination, locale: Locale) -> &'static str {
    match locale {
        Locale::En => combination.label(),
        Locale::Ru => match combination {
            Combination::RoyalFlush => "Флеш-Рояль",
            Combination::StraightFlush => "Стрит-флеш",
            Combination::FourOfAKind => "Каре",
            Combination::FullHouse => "Фулл Хаус",
            Combination::Flush => "Флеш",
            Combination::Straight => "Стрит",
            Combination::ThreeOfAKind => "Тройка",
            Combination::TwoPair => "Две пары",
            Combination::Pair => "Пара",
            Combination::HighCard => "Старшая карта",
        },
    }
}

fn high_card_caption(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "high card",
        Locale::Ru => "старшая карта",
    }
}

/// One-line summary: `<hand>: <label> (high card <rank>)`.
pub fn format_classification(hand: &PokerHand, locale: Locale, unicode: bool) -> String {
    format!(
        "{}: {} ({} {})",
        format_hand(hand, unicode),
        localized_label(hand.combination(), locale),
        high_card_caption(locale),
        hand.high_card().symbol()
    )
}
