//! A shuffled 52-card deck with a colored terminal prompt loop.
//!
//! The crate provides a [`Deck`] type that keeps a live pile and a discard
//! pile, plus (with the `std` feature) a [`Session`] that lets a player draw
//! and shuffle from a terminal.
//!
//! # Example
//!
//! ```
//! use cardtable::Deck;
//!
//! let mut deck = Deck::new(42);
//! let card = deck.draw_card().expect("a fresh deck has cards");
//! assert_eq!(deck.cards_remaining(), 51);
//! assert_eq!(deck.discard(), &[card]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
#[cfg(feature = "std")]
pub mod console;
pub mod deck;
pub mod error;
#[cfg(feature = "std")]
pub mod session;

// Re-export main types
pub use action::Action;
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::{Color, Console, ConsoleOptions, Terminal};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use error::DeckError;
#[cfg(feature = "std")]
pub use session::Session;
