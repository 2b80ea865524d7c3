//! Provably-fair generalized rock-paper-scissors.
//!
//! The computer commits to its move up front with an HMAC-SHA256 commitment
//! over a fresh 256-bit key, takes exactly one menu choice from the human,
//! then reveals the key so the commitment can be checked independently.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use commit_rps_core::{GameError, GameSession, MoveSet, OutcomeTable};
use rand::rngs::OsRng;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE_EXAMPLE: &str = "Example: commit-rps rock paper scissors";

/// Provably-fair generalized rock-paper-scissors
#[derive(Parser)]
#[command(name = "commit-rps", version)]
struct Args {
    /// An odd number (at least 3) of distinct move names, in cycle order
    #[arg(value_name = "MOVE", num_args = 0..)]
    moves: Vec<String>,
}

/// Application error: message for stderr, always exit code 1
struct AppError(String);

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        AppError(err.to_string())
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError(err.to_string())
    }
}

/// Dispatch of the single line of human input
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Quit,
    Help,
    Move(usize), // 1-based menu index
}

fn parse_choice(input: &str, n: usize) -> Option<Choice> {
    let input = input.trim();
    if input == "?" {
        return Some(Choice::Help);
    }
    match input.parse::<usize>() {
        Ok(0) => Some(Choice::Quit),
        Ok(k) if k <= n => Some(Choice::Move(k)),
        _ => None,
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let moves = MoveSet::new(args.moves).map_err(|err| {
        AppError(format!(
            "Incorrect input: {}. Provide an odd number of non-repeating moves.\n{}",
            err, USAGE_EXAMPLE
        ))
    })?;

    // Key generation and the computer's move both come before any output;
    // an entropy failure aborts with nothing printed.
    let session = GameSession::start(moves, &mut OsRng)?;

    println!("HMAC: {}", session.commitment());
    println!("Available moves:");
    for (i, name) in session.moves().iter().enumerate() {
        println!("{} - {}", i + 1, name);
    }
    println!("0 - Exit");
    println!("? - Help");
    print!("Enter your move: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    match parse_choice(&line, session.moves().len()) {
        Some(Choice::Quit) => {
            println!("Exiting the game...");
            Ok(())
        }
        Some(Choice::Help) => {
            println!("ASCII Table:");
            println!("{}", OutcomeTable::new(session.moves()));
            Ok(())
        }
        Some(Choice::Move(k)) => {
            debug!(choice = k, "human move accepted");
            let reveal = session.play(k)?;
            println!("Your move: {}", reveal.human_move);
            println!("Computer move: {}", reveal.computer_move);
            println!("{}!", reveal.outcome);
            println!("HMAC key: {}", reveal.key);
            Ok(())
        }
        None => Err(AppError(
            "Invalid input. Please enter a valid move number.".to_string(),
        )),
    }
}

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError(message)) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}
