//! Card ranking policies.
//!
//! A [`RankingPolicy`] turns a card into an integer rank. The comparison
//! operators on [`Card`] use a single process-wide policy, which can be
//! swapped with [`set_ranking_policy`].

use core::cmp::Ordering;

use log::debug;

use crate::card::{Card, Suit, Value};
use crate::error::ConfigurationError;
use crate::sync::Mutex;

const SUIT_COUNT: usize = Suit::ALL.len();
const VALUE_COUNT: usize = Value::ALL.len();

/// Rules for ranking cards.
///
/// Ranks are looked up per suit and per value. When the policy is suit
/// ordered, the rank is `suit_rank * 13 + value_rank`; otherwise the suit is
/// ignored and the rank is the value rank alone.
///
/// ```
/// use cardeck::{Card, RankingPolicy, Suit, Value};
///
/// let policy = RankingPolicy::default().with_suit_ordered(true);
/// let two_of_diamonds = Card::new(Suit::Diamonds, Value::Two);
/// let ace_of_clubs = Card::new(Suit::Clubs, Value::Ace);
/// assert!(policy.less_than(&ace_of_clubs, &two_of_diamonds));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingPolicy {
    /// Rank per suit, indexed by [`Suit::ordinal`].
    suit_ranking: [u8; SUIT_COUNT],
    /// Rank per value, indexed by `nominal - 1`.
    value_ranking: [u8; VALUE_COUNT],
    suit_ordered: bool,
}

impl RankingPolicy {
    /// The default policy: Clubs < Spades < Hearts < Diamonds, Two up to
    /// King then Ace high, suits ignored.
    pub const DEFAULT: Self = Self {
        // Spades, Hearts, Diamonds, Clubs
        suit_ranking: [1, 2, 3, 0],
        // Ace, Two ..= King
        value_ranking: [12, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        suit_ordered: false,
    };

    /// Builds a policy from suit and value ranking tables.
    ///
    /// Any map-like sequence of pairs is accepted; a later entry for the same
    /// key replaces an earlier one. The resulting policy is not suit ordered.
    ///
    /// # Errors
    ///
    /// Returns an error if a suit or value has no entry, or if a suit rank is
    /// above 3 or a value rank above 12.
    ///
    /// ```
    /// use cardeck::{ConfigurationError, RankingPolicy, Suit, Value};
    ///
    /// let suits = [(Suit::Spades, 0), (Suit::Hearts, 1), (Suit::Diamonds, 2)];
    /// let values = Value::ALL.map(|v| (v, v.nominal() - 1));
    /// assert_eq!(
    ///     RankingPolicy::from_tables(suits, values),
    ///     Err(ConfigurationError::MissingSuit(Suit::Clubs))
    /// );
    /// ```
    pub fn from_tables<S, V>(suit_table: S, value_table: V) -> Result<Self, ConfigurationError>
    where
        S: IntoIterator<Item = (Suit, u8)>,
        V: IntoIterator<Item = (Value, u8)>,
    {
        let mut suits = [None; SUIT_COUNT];
        for (suit, rank) in suit_table {
            if usize::from(rank) >= SUIT_COUNT {
                return Err(ConfigurationError::SuitRankOutOfRange { suit, rank });
            }
            suits[suit_index(suit)] = Some(rank);
        }

        let mut values = [None; VALUE_COUNT];
        for (value, rank) in value_table {
            if usize::from(rank) >= VALUE_COUNT {
                return Err(ConfigurationError::ValueRankOutOfRange { value, rank });
            }
            values[value_index(value)] = Some(rank);
        }

        let mut suit_ranking = [0; SUIT_COUNT];
        for suit in Suit::ALL {
            suit_ranking[suit_index(suit)] =
                suits[suit_index(suit)].ok_or(ConfigurationError::MissingSuit(suit))?;
        }

        let mut value_ranking = [0; VALUE_COUNT];
        for value in Value::ALL {
            value_ranking[value_index(value)] =
                values[value_index(value)].ok_or(ConfigurationError::MissingValue(value))?;
        }

        Ok(Self {
            suit_ranking,
            value_ranking,
            suit_ordered: false,
        })
    }

    /// Sets whether suits take part in ranking.
    #[must_use]
    pub const fn with_suit_ordered(mut self, suit_ordered: bool) -> Self {
        self.suit_ordered = suit_ordered;
        self
    }

    /// Returns whether suits take part in ranking.
    #[must_use]
    pub const fn is_suit_ordered(&self) -> bool {
        self.suit_ordered
    }

    /// Returns the configured rank of a suit.
    #[must_use]
    pub const fn suit_rank(&self, suit: Suit) -> u8 {
        self.suit_ranking[suit_index(suit)]
    }

    /// Returns the configured rank of a value.
    #[must_use]
    pub const fn value_rank(&self, value: Value) -> u8 {
        self.value_ranking[value_index(value)]
    }

    /// Computes the rank of a card.
    #[must_use]
    pub const fn rank(&self, card: &Card) -> u8 {
        let value_rank = self.value_rank(card.value());
        if self.suit_ordered {
            self.suit_rank(card.suit()) * VALUE_COUNT as u8 + value_rank
        } else {
            value_rank
        }
    }

    /// Orders two cards by rank.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        self.rank(a).cmp(&self.rank(b))
    }

    /// Returns `true` if `a` ranks strictly below `b`.
    #[must_use]
    pub const fn less_than(&self, a: &Card, b: &Card) -> bool {
        self.rank(a) < self.rank(b)
    }

    /// Returns `true` if `a` and `b` have the same rank.
    #[must_use]
    pub const fn equals(&self, a: &Card, b: &Card) -> bool {
        self.rank(a) == self.rank(b)
    }

    /// Returns `true` if `a` ranks strictly above `b`.
    #[must_use]
    pub const fn rank_gt(&self, a: &Card, b: &Card) -> bool {
        self.rank(a) > self.rank(b)
    }

    /// Compatibility alias of [`RankingPolicy::rank_gt`].
    ///
    /// Returns `rank(a) > rank(b)`, not "less than or equal".
    #[must_use]
    pub const fn less_or_equal(&self, a: &Card, b: &Card) -> bool {
        self.rank_gt(a, b)
    }
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const fn suit_index(suit: Suit) -> usize {
    suit.ordinal() as usize
}

const fn value_index(value: Value) -> usize {
    value.nominal() as usize - 1
}

static POLICY: Mutex<RankingPolicy> = Mutex::new(RankingPolicy::DEFAULT);

/// Returns a copy of the process-wide ranking policy.
#[must_use]
pub fn ranking_policy() -> RankingPolicy {
    *POLICY.lock()
}

/// Installs a process-wide ranking policy and returns the previous one.
///
/// Every comparison between [`Card`] values uses this policy, including
/// deck equality.
#[must_use = "the previous policy is returned so it can be restored"]
pub fn set_ranking_policy(policy: RankingPolicy) -> RankingPolicy {
    debug!("Installing ranking policy {policy:?}");
    POLICY.replace(policy)
}

/// Restores the default process-wide ranking policy and returns the previous
/// one.
#[must_use = "the previous policy is returned so it can be restored"]
pub fn reset_ranking_policy() -> RankingPolicy {
    set_ranking_policy(RankingPolicy::DEFAULT)
}
