//! Game session - the state machine tying playfield, pieces, and pacing
//! together.
//!
//! Spawns pieces, applies gravity and manual commands, locks and clears,
//! scores, levels, and detects game over. The session is the sole mutator of
//! its playfield; every command either applies atomically or is rejected as
//! a no-op within the call, including the hard-drop lock/clear/spawn cascade.
//!
//! Game over is terminal: the session stops accepting commands and a new
//! session must be constructed to play again.

use std::mem;

use crate::config::{ConfigError, GameConfig};
use crate::core::board::Playfield;
use crate::core::pieces::Piece;
use crate::core::rng::{PieceSource, UniformPieces};
use crate::core::scoring;
use crate::core::snapshot::{PieceSnapshot, SessionSnapshot};
use crate::types::{Command, Outcome, ShapeKind};

pub struct GameSession {
    config: GameConfig,
    board: Playfield,
    active: Option<Piece>,
    next: ShapeKind,
    hold: Option<Piece>,
    can_hold: bool,
    score: u32,
    lines: u32,
    level: u32,
    fall_interval_ms: u32,
    fall_acc_ms: u32,
    game_over: bool,
    source: Box<dyn PieceSource>,
}

impl GameSession {
    /// Create a session with uniform random piece draws.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_source(config, Box::new(UniformPieces::new(seed)))
    }

    /// Create a session drawing pieces from the given source.
    ///
    /// Fails fast on an invalid configuration; no game state exists until
    /// the configuration has passed validation. The first piece spawns
    /// immediately, so a fresh session is already falling.
    pub fn with_source(
        config: GameConfig,
        mut source: Box<dyn PieceSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Playfield::new(config.rows, config.cols);
        let first = source.next_kind();
        let next = source.next_kind();
        let fall_interval_ms = scoring::fall_interval_ms(&config, 1);

        let mut session = Self {
            config,
            board,
            active: None,
            next,
            hold: None,
            can_hold: true,
            score: 0,
            lines: 0,
            level: 1,
            fall_interval_ms,
            fall_acc_ms: 0,
            game_over: false,
            source,
        };
        session.activate(first);
        Ok(session)
    }

    /// Apply one command and report what it did.
    pub fn apply(&mut self, command: Command) -> Outcome {
        if self.game_over {
            return Outcome::Ignored;
        }
        match command {
            Command::MoveLeft => self.try_shift(-1),
            Command::MoveRight => self.try_shift(1),
            Command::SoftDrop => self.try_descend(),
            Command::Rotate => self.try_rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::Hold => self.hold(),
            Command::Tick(elapsed_ms) => self.tick(elapsed_ms),
        }
    }

    /// Center the given kind at the top and make it the active piece.
    /// A blocked spawn position is the game-over trigger.
    fn activate(&mut self, kind: ShapeKind) -> bool {
        let piece = Piece::spawn(kind, self.config.cols);
        self.can_hold = true;
        self.fall_acc_ms = 0;
        if self.board.is_valid_placement(&piece, 0, 0, None) {
            self.active = Some(piece);
            true
        } else {
            self.active = None;
            self.game_over = true;
            false
        }
    }

    /// Promote the queued piece and draw a fresh one behind it.
    fn spawn_next(&mut self) -> bool {
        let kind = mem::replace(&mut self.next, self.source.next_kind());
        self.activate(kind)
    }

    fn try_shift(&mut self, col_offset: i16) -> Outcome {
        let Some(piece) = self.active else {
            return Outcome::Ignored;
        };
        if !self.board.is_valid_placement(&piece, col_offset, 0, None) {
            return Outcome::Rejected;
        }
        self.active = Some(Piece {
            col: piece.col + col_offset,
            ..piece
        });
        Outcome::Moved
    }

    /// One validated downward step. Never locks: a refused step is a plain
    /// rejection, and only gravity decides when settling happens.
    fn try_descend(&mut self) -> Outcome {
        let Some(piece) = self.active else {
            return Outcome::Ignored;
        };
        if !self.board.is_valid_placement(&piece, 0, 1, None) {
            return Outcome::Rejected;
        }
        self.active = Some(Piece {
            row: piece.row + 1,
            ..piece
        });
        Outcome::Moved
    }

    /// Advance the rotation index, committing only if the new state fits.
    /// No wall-kick search: an invalid rotation leaves the index unchanged.
    fn try_rotate(&mut self) -> Outcome {
        let Some(piece) = self.active else {
            return Outcome::Ignored;
        };
        let rotation = piece.next_rotation();
        if !self.board.is_valid_placement(&piece, 0, 0, Some(rotation)) {
            return Outcome::Rejected;
        }
        self.active = Some(Piece { rotation, ..piece });
        Outcome::Moved
    }

    /// Drop to the lowest valid position and settle immediately.
    fn hard_drop(&mut self) -> Outcome {
        let Some(piece) = self.active else {
            return Outcome::Ignored;
        };
        let mut distance: i16 = 0;
        while self.board.is_valid_placement(&piece, 0, distance + 1, None) {
            distance += 1;
        }
        if distance > 0 {
            self.active = Some(Piece {
                row: piece.row + distance,
                ..piece
            });
        }
        self.lock_and_respawn()
    }

    /// Exchange the active piece with the hold slot, once per spawn.
    ///
    /// The incoming piece (queued next, or the previously held piece at its
    /// held rotation) is recentered to the spawn position and validated
    /// there; if it does not fit, the hold is rejected outright and nothing
    /// changes, the hold charge included.
    fn hold(&mut self) -> Outcome {
        if !self.can_hold {
            return Outcome::Rejected;
        }
        let Some(piece) = self.active else {
            return Outcome::Ignored;
        };
        match self.hold {
            None => {
                let incoming = Piece::spawn(self.next, self.config.cols);
                if !self.board.is_valid_placement(&incoming, 0, 0, None) {
                    return Outcome::Rejected;
                }
                self.hold = Some(piece);
                self.next = self.source.next_kind();
                self.active = Some(incoming);
            }
            Some(held) => {
                let mut incoming = held;
                incoming.recenter(self.config.cols);
                if !self.board.is_valid_placement(&incoming, 0, 0, None) {
                    return Outcome::Rejected;
                }
                self.hold = Some(piece);
                self.active = Some(incoming);
            }
        }
        self.can_hold = false;
        Outcome::Moved
    }

    /// Advance simulated time. When the accumulator passes the fall
    /// interval, the piece takes one gravity step; a refused step settles
    /// the piece and runs the full lock/clear/score/spawn cascade.
    fn tick(&mut self, elapsed_ms: u32) -> Outcome {
        if self.active.is_none() {
            return Outcome::Ignored;
        }
        self.fall_acc_ms = self.fall_acc_ms.saturating_add(elapsed_ms);
        if self.fall_acc_ms <= self.fall_interval_ms {
            return Outcome::Ignored;
        }
        self.fall_acc_ms = 0;
        match self.try_descend() {
            Outcome::Moved => Outcome::Moved,
            _ => self.lock_and_respawn(),
        }
    }

    fn lock_and_respawn(&mut self) -> Outcome {
        let Some(piece) = self.active.take() else {
            return Outcome::Ignored;
        };

        if self.board.lock(&piece) {
            // settled partly above the visible field
            self.game_over = true;
            return Outcome::GameOver;
        }

        let lines_cleared = self.board.clear_full_rows();
        if lines_cleared > 0 {
            self.score = self
                .score
                .saturating_add(scoring::line_clear_score(&self.config, lines_cleared));
            self.lines = self.lines.saturating_add(lines_cleared);
            // thresholds are spaced one level apart, so a single lock can
            // cross at most one of them
            if self.lines >= self.level.saturating_mul(self.config.lines_per_level) {
                self.level += 1;
                self.fall_interval_ms = scoring::fall_interval_ms(&self.config, self.level);
            }
        }

        if self.spawn_next() {
            Outcome::Locked { lines_cleared }
        } else {
            Outcome::GameOver
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Playfield {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Absolute cells of the active piece, for rendering.
    pub fn active_cells(&self) -> Option<[(i16, i16); 4]> {
        self.active.map(|piece| piece.cells())
    }

    pub fn next_kind(&self) -> ShapeKind {
        self.next
    }

    pub fn held_piece(&self) -> Option<Piece> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// One plain-data view of everything a shell renders.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rows: self.config.rows,
            cols: self.config.cols,
            board: self.board.cells().to_vec(),
            active: self.active.map(PieceSnapshot::from),
            next: self.next,
            hold: self.hold.map(PieceSnapshot::from),
            can_hold: self.can_hold,
            score: self.score,
            lines: self.lines,
            level: self.level,
            fall_interval_ms: self.fall_interval_ms,
            fall_acc_ms: self.fall_acc_ms,
            game_over: self.game_over,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Playfield {
        &mut self.board
    }
}
