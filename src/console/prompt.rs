use core::ops::RangeInclusive;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::action::Action;
use crate::error::ConsoleError;

use super::{Color, Console};

/// Asks until a non-empty line is entered.
///
/// With `capitalize`, the first letter of every word is uppercased.
///
/// # Errors
///
/// Propagates console failures.
pub fn request_text<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    capitalize: bool,
) -> Result<String, ConsoleError> {
    loop {
        let input = console.read_line(prompt)?;
        if input.is_empty() {
            console.print_line("Input cannot be empty.", Color::Red)?;
            continue;
        }
        return Ok(if capitalize {
            capitalize_words(&input)
        } else {
            input
        });
    }
}

/// Asks until the input names a known [`Action`].
///
/// # Errors
///
/// Propagates console failures.
pub fn request_action<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<Action, ConsoleError> {
    loop {
        let input = request_text(console, prompt, false)?;
        if let Some(action) = Action::parse(&input) {
            return Ok(action);
        }
        let allowed = Action::aliases().collect::<Vec<_>>().join(", ");
        console.print_line(
            &format!("Invalid action '{input}' selected, allowed actions are: {allowed}"),
            Color::Red,
        )?;
    }
}

/// Asks until an integer within `range` is entered.
///
/// Only plain base-10 integers are accepted; `"2.0"` or `"1e1"` count as
/// not a number. The table loop does not use this helper.
///
/// # Errors
///
/// Propagates console failures.
pub fn request_number<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    range: RangeInclusive<i64>,
) -> Result<i64, ConsoleError> {
    loop {
        let input = request_text(console, prompt, false)?;
        let Ok(number) = input.parse::<i64>() else {
            console.print_line(
                &format!("Invalid input: '{input}' is not a number."),
                Color::Red,
            )?;
            continue;
        };
        if range.contains(&number) {
            return Ok(number);
        }
        console.print_line(
            &format!(
                "Invalid input: '{input}' is not between {} and {}.",
                range.start(),
                range.end()
            ),
            Color::Red,
        )?;
    }
}

fn capitalize_words(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}
