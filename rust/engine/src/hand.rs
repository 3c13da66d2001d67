use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, Rank, Suit};
use crate::combination::{classify, Combination};
use crate::errors::HandError;

const HAND_SIZE: usize = 5;

/// A validated five-card hand together with its combination.
///
/// Cards are kept sorted ascending by rank (equal ranks keep input order) and
/// the combination is computed once at construction.
///
/// Ordering treats the stronger hand as greater. Hands of the same
/// combination are equal unless both are [`Combination::HighCard`], in which
/// case ranks are compared from the highest card down.
#[derive(Debug, Clone)]
pub struct PokerHand {
    cards: [Card; HAND_SIZE],
    combination: Combination,
}

impl PokerHand {
    /// Parses and classifies a hand written as five space-separated tokens,
    /// e.g. `"AS TS QS JS KS"`.
    ///
    /// # Errors
    ///
    /// - [`HandError::MalformedInput`] if the text is not exactly five tokens
    ///   separated by single spaces, or a token is not a rank from
    ///   `2-9 T J Q K A` followed by a suit from `H S C D`
    /// - [`HandError::DuplicateCard`] if a card appears more than once
    pub fn new(input: &str) -> Result<Self, HandError> {
        let tokens: Vec<&str> = input.split(' ').collect();
        if tokens.len() != HAND_SIZE {
            return Err(HandError::malformed(
                input,
                format!("expected {HAND_SIZE} space-separated cards, found {}", tokens.len()),
            ));
        }

        let mut cards = [Card::new(Rank::Two, Suit::Hearts); HAND_SIZE];
        for (slot, token) in cards.iter_mut().zip(&tokens) {
            *slot = Card::parse_token(token, input)?;
        }

        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for card in &cards {
            if !seen.insert(*card) {
                return Err(HandError::DuplicateCard { card: *card });
            }
        }

        // stable: equal ranks keep input order
        cards.sort_by_key(|c| c.rank);

        let ranks: [Rank; HAND_SIZE] = cards.map(|c| c.rank);
        let suits: [Suit; HAND_SIZE] = cards.map(|c| c.suit);
        let combination = classify(&ranks, &suits)?;

        Ok(Self { cards, combination })
    }

    pub fn combination(&self) -> Combination {
        self.combination
    }

    pub fn combination_label(&self) -> &'static str {
        self.combination.label()
    }

    /// Highest-ranked card's rank.
    pub fn high_card(&self) -> Rank {
        self.cards[HAND_SIZE - 1].rank
    }

    /// Cards in canonical (rank-ascending) order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    fn compare_high_cards(&self, other: &Self) -> Ordering {
        self.cards
            .iter()
            .rev()
            .zip(other.cards.iter().rev())
            .map(|(a, b)| a.rank.cmp(&b.rank))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl FromStr for PokerHand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PokerHand::new(s)
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl Ord for PokerHand {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.combination, other.combination) {
            (Combination::HighCard, Combination::HighCard) => self.compare_high_cards(other),
            // lower strength rank is the stronger hand
            (a, b) => b.strength().cmp(&a.strength()),
        }
    }
}

impl PartialOrd for PokerHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PokerHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PokerHand {}

/// Three-way comparison; `Greater` means `a` beats `b`.
pub fn compare_hands(a: &PokerHand, b: &PokerHand) -> Ordering {
    a.cmp(b)
}

/// Sorts hands strongest first. Equal hands keep their relative order.
pub fn rank_hands(hands: &mut [PokerHand]) {
    hands.sort_by(|a, b| b.cmp(a));
}
