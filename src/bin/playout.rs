//! Headless playout runner.
//!
//! Drives a seeded session with a pseudo-random command stream and prints a
//! one-line summary. Useful for smoke-testing rule changes without a
//! rendering shell, and as the smallest example of the command/outcome
//! contract.

use anyhow::Result;
use clap::Parser;

use blockfall::core::SimpleRng;
use blockfall::{Command, GameConfig, GameSession, Outcome};

#[derive(Parser, Debug)]
#[command(name = "playout", about = "Run a headless blockfall session")]
struct Args {
    /// Seed for piece draws and the command stream
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Stop after this many locked pieces
    #[arg(long, default_value_t = 200)]
    pieces: u32,

    /// Playfield rows
    #[arg(long, default_value_t = 20)]
    rows: u16,

    /// Playfield columns
    #[arg(long, default_value_t = 10)]
    cols: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = GameConfig {
        rows: args.rows,
        cols: args.cols,
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config, args.seed)?;

    // Separate stream for command selection so piece draws stay comparable
    // across runs that change the placement behavior below.
    let mut rng = SimpleRng::new(args.seed ^ 0x9e37_79b9);
    let mut placed = 0u32;

    while placed < args.pieces && !session.game_over() {
        for _ in 0..rng.next_range(6) {
            let command = match rng.next_range(3) {
                0 => Command::MoveLeft,
                1 => Command::MoveRight,
                _ => Command::Rotate,
            };
            session.apply(command);
        }
        match session.apply(Command::HardDrop) {
            Outcome::Locked { .. } => placed += 1,
            Outcome::GameOver => break,
            _ => {}
        }
    }

    println!(
        "pieces={} lines={} level={} score={} game_over={}",
        placed,
        session.lines_cleared(),
        session.level(),
        session.score(),
        session.game_over()
    );

    Ok(())
}
