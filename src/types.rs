//! Core types shared across the crate
//! Pure data with no behavior beyond small helpers.

use serde::{Deserialize, Serialize};

/// Default playfield dimensions
pub const DEFAULT_ROWS: u16 = 20;
pub const DEFAULT_COLS: u16 = 10;

/// Default gravity pacing (milliseconds)
pub const DEFAULT_BASE_INTERVAL_MS: u32 = 100;
pub const DEFAULT_MIN_INTERVAL_MS: u32 = 30;
pub const DEFAULT_STEP_MS: u32 = 10;

/// Default line-clear awards, indexed by rows cleared in one lock (0..=4)
pub const DEFAULT_LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Default lines required to advance one level
pub const DEFAULT_LINES_PER_LEVEL: u32 = 10;

/// The seven tetromino shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }

    /// Display color (RGB) identifying the piece on screen.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            ShapeKind::I => (0, 255, 255),
            ShapeKind::O => (255, 255, 0),
            ShapeKind::T => (128, 0, 128),
            ShapeKind::S => (0, 255, 0),
            ShapeKind::Z => (255, 0, 0),
            ShapeKind::J => (0, 0, 255),
            ShapeKind::L => (255, 165, 0),
        }
    }
}

/// Cell on the playfield (None = empty, Some = settled piece kind)
pub type Cell = Option<ShapeKind>;

/// Commands a shell feeds into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Hold,
    /// Advance simulated time by the given elapsed milliseconds
    Tick(u32),
}

/// What a command did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command was not applicable (terminal session, or nothing was due)
    Ignored,
    /// A validated movement was refused; state is unchanged
    Rejected,
    /// The active piece moved, rotated, or was exchanged with the hold slot
    Moved,
    /// The active piece settled; `lines_cleared` rows were removed
    Locked { lines_cleared: u32 },
    /// The session reached its terminal state during this command
    GameOver,
}

impl Outcome {
    /// True if the command mutated session state.
    pub fn changed(self) -> bool {
        !matches!(self, Outcome::Ignored | Outcome::Rejected)
    }
}
