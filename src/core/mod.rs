//! Core simulation - pure game rules with no UI, timing, or I/O.
//!
//! - [`pieces`]: shape catalog and the live falling piece
//! - [`board`]: playfield grid with collision, locking, and row clearing
//! - [`session`]: the state machine driving spawn/fall/lock/clear
//! - [`scoring`]: configurable line-clear awards and gravity pacing
//! - [`rng`]: seedable, injectable piece sources
//! - [`snapshot`]: plain-data state export for rendering shells

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use board::Playfield;
pub use pieces::{rotations, Piece, RotationMask};
pub use rng::{PieceSource, SequencePieces, SimpleRng, UniformPieces};
pub use session::GameSession;
pub use snapshot::{PieceSnapshot, SessionSnapshot};
