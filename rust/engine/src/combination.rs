use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};
use crate::errors::HandError;

/// The ten five-card categories, declared strongest first.
///
/// The discriminant is the strength rank: `0` for [`Combination::RoyalFlush`]
/// down to `9` for [`Combination::HighCard`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combination {
    RoyalFlush = 0,
    StraightFlush = 1,
    FourOfAKind = 2,
    FullHouse = 3,
    Flush = 4,
    Straight = 5,
    ThreeOfAKind = 6,
    TwoPair = 7,
    Pair = 8,
    HighCard = 9,
}

const ROYAL_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

impl Combination {
    /// Every category in strength order. Also the order predicates are tried in.
    pub const ALL: [Combination; 10] = [
        Combination::RoyalFlush,
        Combination::StraightFlush,
        Combination::FourOfAKind,
        Combination::FullHouse,
        Combination::Flush,
        Combination::Straight,
        Combination::ThreeOfAKind,
        Combination::TwoPair,
        Combination::Pair,
        Combination::HighCard,
    ];

    /// Fixed strength rank, 0 being the strongest.
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// English display label.
    pub fn label(self) -> &'static str {
        match self {
            Combination::RoyalFlush => "Royal Flush",
            Combination::StraightFlush => "Straight Flush",
            Combination::FourOfAKind => "Four of a Kind",
            Combination::FullHouse => "Full House",
            Combination::Flush => "Flush",
            Combination::Straight => "Straight",
            Combination::ThreeOfAKind => "Three of a Kind",
            Combination::TwoPair => "Two Pair",
            Combination::Pair => "Pair",
            Combination::HighCard => "High Card",
        }
    }

    /// Tests this category's pattern on its own, without regard to stronger
    /// categories. `ranks` must be sorted ascending and `suits` aligned to it.
    pub fn matches(self, ranks: &[Rank; 5], suits: &[Suit; 5]) -> bool {
        self.matches_grouped(ranks, suits, &rank_groups(ranks))
    }

    fn matches_grouped(self, ranks: &[Rank; 5], suits: &[Suit; 5], groups: &RankGroups) -> bool {
        match self {
            Combination::RoyalFlush => *ranks == ROYAL_RANKS && is_flush(suits),
            Combination::StraightFlush => is_run(ranks) && is_flush(suits),
            Combination::FourOfAKind => groups[0] == 4,
            Combination::FullHouse => *groups == [3, 2, 0, 0, 0],
            Combination::Flush => is_flush(suits),
            Combination::Straight => is_run(ranks),
            Combination::ThreeOfAKind => *groups == [3, 1, 1, 0, 0],
            Combination::TwoPair => *groups == [2, 2, 1, 0, 0],
            Combination::Pair => *groups == [2, 1, 1, 1, 0],
            Combination::HighCard => true,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the strongest category whose pattern matches.
///
/// `ranks` must be sorted ascending with `suits` aligned to the same order.
pub fn classify(ranks: &[Rank; 5], suits: &[Suit; 5]) -> Result<Combination, HandError> {
    let groups = rank_groups(ranks);
    Combination::ALL
        .into_iter()
        .find(|c| c.matches_grouped(ranks, suits, &groups))
        .ok_or_else(|| HandError::InternalInvariantViolation {
            detail: format!(
                "no combination matched ranks {}",
                ranks.iter().map(|r| r.symbol()).collect::<String>()
            ),
        })
}

fn is_flush(suits: &[Suit; 5]) -> bool {
    suits.iter().all(|&s| s == suits[0])
}

// Five consecutive ranks with the lowest between Two and Nine. The run ending
// in an Ace is left to RoyalFlush, and the Ace never plays low.
fn is_run(ranks: &[Rank; 5]) -> bool {
    ranks[4] != Rank::Ace && ranks.windows(2).all(|w| w[1].value() == w[0].value() + 1)
}

// Multiplicities of each distinct rank, largest first, padded with zeros.
type RankGroups = [u8; 5];

fn rank_groups(sorted_ranks: &[Rank; 5]) -> RankGroups {
    let mut groups = [0u8; 5];
    let mut len = 0;
    for (i, r) in sorted_ranks.iter().enumerate() {
        if i > 0 && sorted_ranks[i - 1] == *r {
            groups[len - 1] += 1;
        } else {
            groups[len] = 1;
            len += 1;
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}
