//! The interactive play/shuffle/exit loop.

use alloc::format;

use crate::action::Action;
use crate::console::{Color, Console, request_action, request_text};
use crate::deck::Deck;
use crate::error::ConsoleError;

const ACTION_PROMPT: &str = "Please choose an action 'play', 'shuffle' or 'exit'";

/// A single player sitting at the table with one deck.
pub struct Session<C> {
    deck: Deck,
    console: C,
}

impl<C: Console> Session<C> {
    /// Creates a session that deals from `deck` and talks through `console`.
    pub const fn new(deck: Deck, console: C) -> Self {
        Self { deck, console }
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Consumes the session and returns its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Greets the player and handles actions until they choose to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or the deck is corrupted.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        self.console.print_line("Starting card table.", Color::Red)?;

        let name = request_text(&mut self.console, "Please enter your name", true)?;
        self.console
            .print_line(&format!("Hello {name}!"), Color::Blue)?;

        loop {
            match request_action(&mut self.console, ACTION_PROMPT)? {
                Action::Play => {
                    let card = self.deck.draw_card()?;
                    self.console
                        .print_line(&format!("You drew {card}"), Color::Green)?;
                }
                Action::Shuffle => {
                    self.deck.shuffle();
                    self.console.print_line("Deck shuffled.", Color::Yellow)?;
                }
                Action::Exit => {
                    self.console
                        .print_line("Exiting the game...", Color::Yellow)?;
                    self.console
                        .print_line(&format!("Goodbye, {name}."), Color::Magenta)?;
                    return Ok(());
                }
            }
        }
    }
}
