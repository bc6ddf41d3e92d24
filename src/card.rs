//! Card types.

use core::cmp::Ordering;
use core::fmt;

use crate::ranking;

/// Card suit.
///
/// Declaration order fixes the suit's ordinal, which only affects the
/// Unicode glyph and the order of a freshly initialised deck. Ranking is
/// supplied by a [`RankingPolicy`](crate::RankingPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the declaration index (Spades = 0 .. Clubs = 3).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Card value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Value {
    /// All values in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the nominal number printed on the card (1 = Ace, 13 = King).
    ///
    /// This is a display number, not a rank.
    #[must_use]
    pub const fn nominal(self) -> u8 {
        self as u8
    }
}

/// Base code point of the Unicode playing cards block.
const GLYPH_BASE: u32 = 0x1F0A0;

/// A playing card.
///
/// Comparison operators rank cards with the process-wide
/// [`RankingPolicy`](crate::RankingPolicy), so with the default policy
/// `Card::new(Suit::Spades, Value::Two) == Card::new(Suit::Clubs, Value::Two)`.
/// Use [`Card::suit`] and [`Card::value`] to compare identities.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    suit: Suit,
    value: Value,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the value of the card.
    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }

    /// Returns whether both cards have the same suit and value, regardless of
    /// ranking.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        self.suit == other.suit && self.value == other.value
    }

    /// Returns the rank of the card under the process-wide ranking policy.
    #[must_use]
    pub fn rank(&self) -> u8 {
        ranking::ranking_policy().rank(self)
    }

    /// Returns `true` if this card ranks strictly higher than `other`.
    ///
    /// Historically named "less or equal"; see [`Card::less_or_equal`].
    #[must_use]
    pub fn rank_gt(&self, other: &Self) -> bool {
        ranking::ranking_policy().rank_gt(self, other)
    }

    /// Compatibility alias of [`Card::rank_gt`].
    ///
    /// Despite the name this returns `rank(self) > rank(other)`. The standard
    /// `<=` operator on `Card` is not affected.
    #[must_use]
    pub fn less_or_equal(&self, other: &Self) -> bool {
        self.rank_gt(other)
    }

    /// Returns the Unicode playing card glyph for this card.
    ///
    /// Values above ten are shifted up by one code point, which puts Queen and
    /// King on their own glyphs and Jack on the Knight glyph of its suit.
    #[must_use]
    pub fn glyph(&self) -> char {
        let nominal = u32::from(self.value.nominal());
        let face_shift = u32::from(nominal > 10);
        let code = GLYPH_BASE + u32::from(self.suit.ordinal()) * 16 + nominal + face_shift;
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        ranking::ranking_policy().equals(self, other)
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        ranking::ranking_policy().compare(self, other)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Value::ALL.len();
