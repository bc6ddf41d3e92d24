//! Lazy draws.
//!
//! Each draw borrows the deck mutably and removes one card per call to
//! `next`. Dropping a draw early leaves the remaining cards in the deck.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use log::trace;
use rand::RngCore;

use crate::card::Card;
use crate::rng::{PickIndex, RngIndex, SharedRng, seed_shared_rng};

use super::Deck;

impl Deck {
    /// Draws up to `n` cards from the top of the deck.
    ///
    /// Stops early, without error, once the deck is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Deck, DeckOptions, Suit, Value};
    ///
    /// let mut deck = Deck::with_options(DeckOptions::default().with_n(2));
    /// let drawn: Vec<_> = deck.draw(3).collect();
    /// assert_eq!(drawn.len(), 2);
    /// assert_eq!(drawn[0].value(), Value::Ace);
    /// assert!(deck.is_empty());
    /// ```
    pub const fn draw(&mut self, n: usize) -> Draw<'_> {
        Draw {
            cards: &mut self.cards,
            remaining: n,
        }
    }

    /// Draws up to `n` cards from the bottom of the deck.
    pub const fn draw_bottom(&mut self, n: usize) -> DrawBottom<'_> {
        DrawBottom {
            cards: &mut self.cards,
            remaining: n,
        }
    }

    /// Draws up to `n` cards from random positions using the shared
    /// generator.
    ///
    /// When `seed` is set the shared generator is reseeded once, when this
    /// method is called, even if the returned draw is never iterated. Later
    /// picks continue from that state, so the cards match CPython's
    /// `random.seed(seed)` followed by one `randint(0, len - 1)` per card.
    pub fn draw_random(&mut self, n: usize, seed: Option<u64>) -> DrawRandom<'_, SharedRng> {
        if let Some(seed) = seed {
            seed_shared_rng(seed);
        }

        DrawRandom {
            cards: &mut self.cards,
            remaining: n,
            picker: SharedRng,
        }
    }

    /// Draws up to `n` cards from random positions using `rng`.
    ///
    /// Pass `&mut rng` to keep using the generator afterwards.
    pub const fn draw_random_with<R: RngCore>(
        &mut self,
        n: usize,
        rng: R,
    ) -> DrawRandom<'_, RngIndex<R>> {
        DrawRandom {
            cards: &mut self.cards,
            remaining: n,
            picker: RngIndex(rng),
        }
    }
}

const fn pending(len: usize, remaining: usize) -> usize {
    if remaining < len { remaining } else { len }
}

/// Iterator returned by [`Deck::draw`].
#[derive(Debug)]
#[must_use = "cards are only removed while the draw is iterated"]
pub struct Draw<'a> {
    cards: &'a mut Vec<Card>,
    remaining: usize,
}

impl Iterator for Draw<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 || self.cards.is_empty() {
            return None;
        }

        self.remaining -= 1;
        let card = self.cards.remove(0);
        trace!("Drew {card:?} from the top");
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = pending(self.cards.len(), self.remaining);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Draw<'_> {}
impl FusedIterator for Draw<'_> {}

/// Iterator returned by [`Deck::draw_bottom`].
#[derive(Debug)]
#[must_use = "cards are only removed while the draw is iterated"]
pub struct DrawBottom<'a> {
    cards: &'a mut Vec<Card>,
    remaining: usize,
}

impl Iterator for DrawBottom<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }

        let card = self.cards.pop()?;
        self.remaining -= 1;
        trace!("Drew {card:?} from the bottom");
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = pending(self.cards.len(), self.remaining);
        (len, Some(len))
    }
}

impl ExactSizeIterator for DrawBottom<'_> {}
impl FusedIterator for DrawBottom<'_> {}

/// Iterator returned by [`Deck::draw_random`] and [`Deck::draw_random_with`].
#[derive(Debug)]
#[must_use = "cards are only removed while the draw is iterated"]
pub struct DrawRandom<'a, P> {
    cards: &'a mut Vec<Card>,
    remaining: usize,
    picker: P,
}

impl<P: PickIndex> Iterator for DrawRandom<'_, P> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 || self.cards.is_empty() {
            return None;
        }

        self.remaining -= 1;
        let index = self.picker.pick_index(self.cards.len());
        let card = self.cards.remove(index);
        trace!("Drew {card:?} from position {index}");
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = pending(self.cards.len(), self.remaining);
        (len, Some(len))
    }
}

impl<P: PickIndex> ExactSizeIterator for DrawRandom<'_, P> {}
impl<P: PickIndex> FusedIterator for DrawRandom<'_, P> {}
