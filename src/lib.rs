//! blockfall - a deterministic falling-block puzzle simulation core.
//!
//! The crate is the game behind the screen: piece rotation, collision,
//! gravity, locking, row clearing, scoring, leveling, and the hold/next
//! pipeline, with no rendering, input polling, or clock of its own. A shell
//! feeds [`Command`]s into a [`GameSession`] (including `Tick` with elapsed
//! wall time) and reads back state to draw.
//!
//! # Example
//!
//! ```
//! use blockfall::{Command, GameConfig, GameSession, Outcome};
//!
//! let mut game = GameSession::new(GameConfig::default(), 12345).unwrap();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! let outcome = game.apply(Command::HardDrop);
//! assert!(matches!(outcome, Outcome::Locked { .. }));
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.score, game.score());
//! ```
//!
//! # Determinism
//!
//! The only non-deterministic dependency is the piece source. The default
//! [`UniformPieces`] source draws independently and uniformly from a seeded
//! generator, so a seed fully determines a game given the same command
//! stream; [`SequencePieces`] scripts the draws outright.

pub mod config;
pub mod core;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use core::{
    GameSession, Piece, PieceSnapshot, PieceSource, Playfield, SequencePieces, SessionSnapshot,
    UniformPieces,
};
pub use types::{Cell, Command, Outcome, ShapeKind};
