use std::io::{BufRead, Write};

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ConsoleError;

use super::{Color, Console, ConsoleOptions, RESET};

/// A [`Console`] over a line reader and a writer.
///
/// Output is typed out one character at a time with the configured delay.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal over the given streams.
    pub const fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn type_out(&mut self, text: &str, color: Color) -> Result<(), ConsoleError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConsoleError::EmptyText);
        }

        writeln!(self.output)?;
        if self.options.color {
            self.output.write_all(color.ansi().as_bytes())?;
        }
        if self.options.char_delay.is_zero() {
            self.output.write_all(text.as_bytes())?;
        } else {
            let mut buf = [0u8; 4];
            for ch in text.chars() {
                self.output.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
                self.output.flush()?;
                std::thread::sleep(self.options.char_delay);
            }
        }
        if self.options.color {
            self.output.write_all(RESET.as_bytes())?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn print_line(&mut self, text: &str, color: Color) -> Result<(), ConsoleError> {
        self.type_out(text, color)?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.type_out(prompt, Color::Cyan)?;
        self.output.write_all(b": ")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        // Undecodable bytes become U+FFFD.
        Ok(String::from_utf8_lossy(&line).trim().to_lowercase())
    }
}
