//! Console, prompt and session tests.

use core::time::Duration;
use std::collections::VecDeque;
use std::io::Cursor;

use cardtable::console::{request_action, request_number, request_text};
use cardtable::{
    Action, Color, Console, ConsoleError, ConsoleOptions, DECK_SIZE, Deck, Session, Terminal,
};

/// Console fed from a script of input lines that records what was printed.
#[derive(Default)]
struct Scripted {
    inputs: VecDeque<&'static str>,
    printed: Vec<(String, Color)>,
    prompts: Vec<String>,
}

impl Scripted {
    fn new(inputs: &[&'static str]) -> Self {
        Self {
            inputs: inputs.iter().copied().collect(),
            ..Self::default()
        }
    }

    fn lines(&self) -> Vec<&str> {
        self.printed.iter().map(|(text, _)| text.as_str()).collect()
    }
}

impl Console for Scripted {
    fn print_line(&mut self, text: &str, color: Color) -> Result<(), ConsoleError> {
        self.printed.push((text.to_owned(), color));
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.prompts.push(prompt.to_owned());
        let line = self.inputs.pop_front().ok_or(ConsoleError::InputClosed)?;
        Ok(line.trim().to_lowercase())
    }
}

fn quiet() -> ConsoleOptions {
    ConsoleOptions::default().with_char_delay(Duration::ZERO)
}

#[test]
fn action_parsing_is_case_insensitive() {
    assert_eq!(Action::parse("play"), Some(Action::Play));
    assert_eq!(Action::parse("P"), Some(Action::Play));
    assert_eq!(Action::parse("Shuffle"), Some(Action::Shuffle));
    assert_eq!(Action::parse("s"), Some(Action::Shuffle));
    assert_eq!(Action::parse("EXIT"), Some(Action::Exit));
    assert_eq!(Action::parse("e"), Some(Action::Exit));
    assert_eq!(Action::parse("draw"), None);
    assert_eq!(Action::parse(""), None);
    assert_eq!(
        Action::aliases().collect::<Vec<_>>(),
        ["play", "P", "shuffle", "S", "exit", "E"]
    );
}

#[test]
fn options_builder_sets_fields() {
    let options = ConsoleOptions::default()
        .with_char_delay(Duration::from_millis(5))
        .with_color(false);
    assert_eq!(options.char_delay, Duration::from_millis(5));
    assert!(!options.color);

    let defaults = ConsoleOptions::default();
    assert_eq!(defaults.char_delay, Duration::from_millis(30));
    assert!(defaults.color);
}

#[test]
fn terminal_prints_colored_line() {
    let mut terminal = Terminal::new(Cursor::new(Vec::new()), Vec::new(), quiet());
    terminal.print_line("  Hello  ", Color::Green).unwrap();

    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert_eq!(output, "\n\u{1b}[32mHello\u{1b}[0m\n");
}

#[test]
fn terminal_without_color_and_with_delay() {
    let options = ConsoleOptions::default()
        .with_char_delay(Duration::from_micros(1))
        .with_color(false);
    let mut terminal = Terminal::new(Cursor::new(Vec::new()), Vec::new(), options);
    terminal.print_line("Dé", Color::Red).unwrap();

    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert_eq!(output, "\nDé\n");
}

#[test]
fn terminal_rejects_blank_text() {
    let mut terminal = Terminal::new(Cursor::new(Vec::new()), Vec::new(), quiet());
    assert!(matches!(
        terminal.print_line("   ", Color::Red),
        Err(ConsoleError::EmptyText)
    ));
}

#[test]
fn terminal_reads_trimmed_lowercase_line() {
    let input = Cursor::new(b"  PLAY  \n".to_vec());
    let mut terminal = Terminal::new(input, Vec::new(), quiet().with_color(false));

    assert_eq!(terminal.read_line("Action").unwrap(), "play");
    assert!(matches!(
        terminal.read_line("Action"),
        Err(ConsoleError::InputClosed)
    ));

    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert!(output.starts_with("\nAction: "));
}

#[test]
fn request_text_reprompts_on_empty_and_capitalizes() {
    let mut console = Scripted::new(&["", "   ", "ada lovelace"]);
    let name = request_text(&mut console, "Name", true).unwrap();

    assert_eq!(name, "Ada Lovelace");
    assert_eq!(console.prompts.len(), 3);
    assert_eq!(
        console.printed,
        vec![
            ("Input cannot be empty.".to_owned(), Color::Red),
            ("Input cannot be empty.".to_owned(), Color::Red),
        ]
    );
}

#[test]
fn request_action_reprompts_on_unknown() {
    let mut console = Scripted::new(&["fold", "S"]);
    let action = request_action(&mut console, "Action").unwrap();

    assert_eq!(action, Action::Shuffle);
    assert_eq!(
        console.lines(),
        ["Invalid action 'fold' selected, allowed actions are: play, P, shuffle, S, exit, E"]
    );
}

#[test]
fn request_number_validates_range() {
    let mut console = Scripted::new(&["seven", "11", "0", "7"]);
    let number = request_number(&mut console, "Number", 1..=10).unwrap();

    assert_eq!(number, 7);
    assert_eq!(
        console.lines(),
        [
            "Invalid input: 'seven' is not a number.",
            "Invalid input: '11' is not between 1 and 10.",
            "Invalid input: '0' is not between 1 and 10.",
        ]
    );
}

#[test]
fn request_number_accepts_integers_only() {
    let mut console = Scripted::new(&["2.0", "1e1", "-4", "4"]);
    let number = request_number(&mut console, "Number", -10..=10).unwrap();

    assert_eq!(number, -4);
    assert_eq!(
        console.lines(),
        [
            "Invalid input: '2.0' is not a number.",
            "Invalid input: '1e1' is not a number.",
        ]
    );
}

#[test]
fn undecodable_input_reprompts() {
    let input = Cursor::new(b"\xff\xfe\nPLAY\n".to_vec());
    let mut terminal = Terminal::new(input, Vec::new(), quiet().with_color(false));

    assert_eq!(terminal.read_line("Action").unwrap(), "\u{fffd}\u{fffd}");
    assert_eq!(terminal.read_line("Action").unwrap(), "play");

    let input = Cursor::new(b"\xff\nplay\n".to_vec());
    let mut terminal = Terminal::new(input, Vec::new(), quiet().with_color(false));
    assert_eq!(request_action(&mut terminal, "Action").unwrap(), Action::Play);

    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert!(output.contains("Invalid action '\u{fffd}' selected"));
}

#[test]
fn prompts_propagate_closed_input() {
    let mut console = Scripted::new(&[]);
    assert!(matches!(
        request_action(&mut console, "Action"),
        Err(ConsoleError::InputClosed)
    ));
}

#[test]
fn session_draws_shuffles_and_exits() {
    let console = Scripted::new(&["grace", "play", "P", "dance", "shuffle", "play", "E"]);
    let mut session = Session::new(Deck::new(12), console);
    session.run().unwrap();

    assert_eq!(session.deck().cards_remaining(), DECK_SIZE - 1);
    assert_eq!(session.deck().discarded(), 1);
    session.deck().verify().unwrap();

    let last_draw = session.deck().discard()[0];
    let console = session.into_console();
    let lines = console.lines();
    assert_eq!(lines[0], "Starting card table.");
    assert_eq!(lines[1], "Hello Grace!");
    assert!(lines[2].starts_with("You drew "));
    assert!(lines[3].starts_with("You drew "));
    assert!(lines[4].starts_with("Invalid action 'dance'"));
    assert_eq!(lines[5], "Deck shuffled.");
    assert_eq!(lines[6], format!("You drew {last_draw}"));
    assert_eq!(lines[7], "Exiting the game...");
    assert_eq!(lines[8], "Goodbye, Grace.");
    assert_eq!(lines.len(), 9);

    let colors: Vec<Color> = console.printed.iter().map(|(_, color)| *color).collect();
    assert_eq!(colors[2], Color::Green);
    assert_eq!(colors[5], Color::Yellow);
}

#[test]
fn session_over_terminal_streams() {
    let input = Cursor::new(b"Linus\nplay\nexit\n".to_vec());
    let terminal = Terminal::new(input, Vec::new(), quiet().with_color(false));
    let mut session = Session::new(Deck::new(1), terminal);
    session.run().unwrap();

    let card = session.deck().discard()[0];
    let output = String::from_utf8(session.into_console().into_output()).unwrap();
    assert!(output.contains("Hello Linus!"));
    assert!(output.contains(&format!("You drew {card}")));
    assert!(output.contains("Exiting the game..."));
}

#[test]
fn session_stops_when_input_closes() {
    let console = Scripted::new(&["bob", "play"]);
    let mut session = Session::new(Deck::new(4), console);
    assert!(matches!(session.run(), Err(ConsoleError::InputClosed)));
    assert_eq!(session.deck().discarded(), 1);
}
