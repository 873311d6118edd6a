//! Terminal card table: draw and shuffle a single deck.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use cardtable::{ConsoleError, ConsoleOptions, Deck, Session, Terminal};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    let terminal = Terminal::new(io::stdin().lock(), io::stdout(), ConsoleOptions::default());
    let mut session = Session::new(Deck::new(clock_seed()), terminal);

    report(session.run(), &mut io::stderr())
}

/// Seed taken from the wall clock at nanosecond resolution.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// Writes a failed session's error once and maps the result to an exit code.
fn report(result: Result<(), ConsoleError>, err_out: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(err_out, "{err}");
            ExitCode::FAILURE
        }
    }
}
