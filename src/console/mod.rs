//! Colored terminal output and validated input prompts.
//!
//! The [`Console`] trait is the only thing the table loop needs from the
//! terminal. [`Terminal`] implements it over any reader/writer pair, and tests
//! can substitute a scripted implementation.

use core::time::Duration;

use alloc::string::String;

use crate::error::ConsoleError;

mod prompt;
mod terminal;

pub use prompt::{request_action, request_number, request_text};
pub use terminal::Terminal;

/// Foreground color of a printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Errors and startup.
    Red,
    /// Drawn cards.
    Green,
    /// Shuffles and exit.
    Yellow,
    /// Greetings.
    Blue,
    /// Magenta.
    Magenta,
    /// Prompts.
    Cyan,
}

impl Color {
    /// ANSI escape sequence that switches to this color.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Red => "\u{1b}[31m",
            Self::Green => "\u{1b}[32m",
            Self::Yellow => "\u{1b}[33m",
            Self::Blue => "\u{1b}[34m",
            Self::Magenta => "\u{1b}[35m",
            Self::Cyan => "\u{1b}[36m",
        }
    }
}

/// ANSI escape sequence that resets the color.
pub const RESET: &str = "\u{1b}[0m";

/// Text I/O used by the table loop.
pub trait Console {
    /// Prints one line of text in the given color.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is blank or the output fails.
    fn print_line(&mut self, text: &str, color: Color) -> Result<(), ConsoleError>;

    /// Shows a prompt and reads one line of input, trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed or the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;
}

/// Output settings for a [`Terminal`].
///
/// ```
/// use core::time::Duration;
/// use cardtable::ConsoleOptions;
///
/// let options = ConsoleOptions::default()
///     .with_char_delay(Duration::ZERO)
///     .with_color(false);
/// assert_eq!(options.char_delay, Duration::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Pause after each printed character (typing effect).
    pub char_delay: Duration,
    /// Whether ANSI color codes are emitted.
    pub color: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(30),
            color: true,
        }
    }
}

impl ConsoleOptions {
    /// Sets the per-character delay.
    #[must_use]
    pub const fn with_char_delay(mut self, delay: Duration) -> Self {
        self.char_delay = delay;
        self
    }

    /// Sets whether color codes are emitted.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
