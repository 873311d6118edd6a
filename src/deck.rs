//! The live/discard deck lifecycle.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_cards};
use crate::error::DeckError;

/// A single 52-card deck split into a live pile and a discard pile.
///
/// Drawing takes from the top of the live pile (the end of the sequence) and
/// puts the card on the discard pile. Together the two piles always hold every
/// canonical card exactly once.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Drawable cards; the top is the last element.
    live: Vec<Card>,
    /// Drawn cards in draw order.
    discard: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.cards_remaining(), DECK_SIZE);
    /// assert_eq!(deck.discarded(), 0);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut live: Vec<Card> = standard_cards().collect();
        live.shuffle(&mut rng);

        Self {
            live,
            discard: Vec::with_capacity(DECK_SIZE),
            rng,
        }
    }

    /// Returns every discarded card to the live pile and shuffles it.
    pub fn shuffle(&mut self) {
        self.live.append(&mut self.discard);
        self.live.shuffle(&mut self.rng);

        #[cfg(feature = "std")]
        tracing::debug!(live = self.live.len(), "deck shuffled");
    }

    /// Draws the top card of the live pile and moves it to the discard pile.
    ///
    /// An empty live pile is refilled with [`shuffle`](Self::shuffle) before
    /// drawing, so a healthy deck never runs out.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if both piles are empty.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        if self.live.is_empty() {
            #[cfg(feature = "std")]
            tracing::warn!(
                discarded = self.discard.len(),
                "live pile empty, reshuffling discards"
            );
            self.shuffle();
        }

        let card = self.live.pop().ok_or(DeckError::Exhausted)?;
        self.discard.push(card);

        #[cfg(feature = "std")]
        tracing::debug!(%card, remaining = self.live.len(), "card drawn");

        Ok(card)
    }

    /// Returns the live pile, bottom first.
    #[must_use]
    pub fn live(&self) -> &[Card] {
        &self.live
    }

    /// Returns the discard pile in draw order.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the number of cards left in the live pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.live.len()
    }

    /// Returns the number of cards on the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard.len()
    }

    /// Checks that both piles together hold each of the 52 cards exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::WrongSize`] if cards were lost or added, or
    /// [`DeckError::DuplicateCard`] for the first card seen twice.
    pub fn verify(&self) -> Result<(), DeckError> {
        let found = self.live.len() + self.discard.len();
        if found != DECK_SIZE {
            return Err(DeckError::WrongSize { found });
        }

        let mut seen: u64 = 0;
        for card in self.live.iter().chain(&self.discard) {
            let bit = 1u64 << card.index();
            if seen & bit != 0 {
                return Err(DeckError::DuplicateCard(*card));
            }
            seen |= bit;
        }

        Ok(())
    }
}
