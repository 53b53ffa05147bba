//! Terminal front end.
//!
//! Draws the board, reads picks from the prompt, and drives the session's
//! clock: after a mismatch it waits out the revert delay, then advances the
//! session by the same amount.
//!
//! Set `RUST_LOG=memory_match=debug` to trace the state machine.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::{Confirm, Input};
use memory_match::core::{DEFAULT_COLUMNS, DEFAULT_REVERT_DELAY_MS};
use memory_match::{
    BoardView, CardFace, CardIndex, GameConfig, GameSession, IgnoreReason, SelectOutcome,
};

#[derive(Debug, Parser)]
#[command(name = "memory", about = "Play the memory-matching card game in a terminal")]
struct Args {
    /// Seed for the deal; omit for a random game.
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds a mismatched pair stays face-up.
    #[arg(long, default_value_t = DEFAULT_REVERT_DELAY_MS)]
    delay_ms: u64,

    /// Grid width.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Comma-separated symbols, one per pair.
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<String>,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::new()
            .with_revert_delay_ms(self.delay_ms)
            .with_columns(self.columns);
        if !self.symbols.is_empty() {
            config = config.with_symbols(self.symbols.iter().cloned());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Pick(CardIndex),
    Reset,
    Quit,
}

fn parse_command(input: &str, deck_len: usize) -> Option<Command> {
    match input.trim() {
        "q" | "quit" => Some(Command::Quit),
        "r" | "reset" => Some(Command::Reset),
        other => other
            .parse::<u16>()
            .ok()
            .map(CardIndex::new)
            .filter(|index| index.in_deck(deck_len))
            .map(Command::Pick),
    }
}

fn prompt(deck_len: usize) -> Result<Command> {
    let line = Input::<String>::new()
        .with_prompt(format!("Pick a card (0-{}), r to reset, q to quit", deck_len - 1))
        .report(false)
        .validate_with(move |input: &String| -> std::result::Result<(), &'static str> {
            match parse_command(input, deck_len) {
                Some(_) => Ok(()),
                None => Err("Enter a card number, r or q"),
            }
        })
        .interact_text()?;
    Ok(parse_command(&line, deck_len).unwrap_or(Command::Quit))
}

fn draw(view: &BoardView) {
    println!();
    println!("{}", view.status_line().bold());
    for row in view.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match &cell.face {
                CardFace::Hidden => format!("[{:>2}]", cell.index.raw()).blue().to_string(),
                CardFace::Revealed(glyph) => format!("[{}]", glyph).white().bold().to_string(),
                CardFace::Matched(glyph) => format!("({})", glyph).dimmed().to_string(),
            })
            .collect();
        println!("{}", cells.join(" "));
    }
    if let Some(banner) = view.banner() {
        println!("{}", memory_match::view::BANNER_TITLE.green().bold());
        println!("{}", banner.green());
    }
}

fn explain(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::OutOfRange => "there is no such card",
        IgnoreReason::Locked | IgnoreReason::SelectionFull => "wait for the cards to turn back",
        IgnoreReason::AlreadyRevealed => "that card is already face-up",
        IgnoreReason::AlreadyMatched => "that card is already matched",
    }
}

fn play(session: &mut GameSession) -> Result<()> {
    loop {
        draw(&BoardView::from_session(session));

        if session.is_complete() {
            let again = Confirm::new()
                .with_prompt("Play again?")
                .default(true)
                .interact()?;
            if !again {
                return Ok(());
            }
            session.reset();
            continue;
        }

        match prompt(session.deck().len())? {
            Command::Quit => return Ok(()),
            Command::Reset => session.reset(),
            Command::Pick(index) => match session.select_card(index) {
                SelectOutcome::Ignored(reason) => {
                    println!("{}", explain(reason).yellow());
                }
                SelectOutcome::Mismatched { revert_in, .. } => {
                    draw(&BoardView::from_session(session));
                    wait_for_revert(session, revert_in);
                }
                SelectOutcome::Revealed(_) | SelectOutcome::Matched { .. } => {}
            },
        }
    }
}

fn wait_for_revert(session: &mut GameSession, delay: Duration) {
    thread::sleep(delay);
    let reverted = session.advance(delay);
    log::debug!("host advanced {:?}, {} pair(s) reverted", delay, reverted.len());
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut session = GameSession::new(args.config())?;
    log::info!("playing seed {}", session.seed());

    play(&mut session)
}
