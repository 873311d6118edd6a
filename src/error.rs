//! Error types for deck and console operations.

use thiserror::Error;

use crate::card::Card;

/// Errors raised when the deck no longer holds the canonical 52 cards.
///
/// None of these can be produced through the public [`Deck`](crate::Deck)
/// operations; they indicate corrupted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Both piles are empty, so there is nothing to draw.
    #[error("no cards left in the deck")]
    Exhausted,
    /// The piles together do not hold a full deck.
    #[error("deck holds {found} cards instead of 52")]
    WrongSize {
        /// Number of cards found across both piles.
        found: usize,
    },
    /// A card appears more than once across the piles.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur while talking to the terminal.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Input reached end of file while waiting for a line.
    #[error("failed to read input: stream closed")]
    InputClosed,
    /// Attempted to print empty or whitespace-only text.
    #[error("text cannot be empty or whitespace only")]
    EmptyText,
    /// The deck reported a broken invariant.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
