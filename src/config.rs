//! Session configuration with fail-fast validation.
//!
//! Every tunable the simulation reads lives here so variant rule sets and
//! test grids can be constructed without touching the core. Validation runs
//! once at session construction; a bad configuration is a programmer error
//! and is reported before any game state exists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    DEFAULT_BASE_INTERVAL_MS, DEFAULT_COLS, DEFAULT_LINES_PER_LEVEL, DEFAULT_LINE_SCORES,
    DEFAULT_MIN_INTERVAL_MS, DEFAULT_ROWS, DEFAULT_STEP_MS,
};

/// Largest bounding box any rotation mask occupies (the vertical and
/// horizontal I states). Grids must be at least this big in both axes so
/// every piece can spawn centered and settle fully inside the field.
pub const MASK_ENVELOPE: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    /// Points awarded per lock, indexed by rows cleared (index 0 unused).
    pub line_scores: [u32; 5],
    pub lines_per_level: u32,
    pub base_interval_ms: u32,
    pub min_interval_ms: u32,
    pub step_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            line_scores: DEFAULT_LINE_SCORES,
            lines_per_level: DEFAULT_LINES_PER_LEVEL,
            base_interval_ms: DEFAULT_BASE_INTERVAL_MS,
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
            step_ms: DEFAULT_STEP_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid {rows}x{cols} is smaller than the 4x4 piece envelope")]
    GridTooSmall { rows: u16, cols: u16 },
    #[error("lines_per_level must be positive")]
    ZeroLinesPerLevel,
    #[error("min_interval_ms must be positive")]
    ZeroMinInterval,
    #[error("base_interval_ms ({base}) is below min_interval_ms ({min})")]
    BaseBelowMin { base: u32, min: u32 },
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MASK_ENVELOPE || self.cols < MASK_ENVELOPE {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        if self.min_interval_ms == 0 {
            return Err(ConfigError::ZeroMinInterval);
        }
        if self.base_interval_ms < self.min_interval_ms {
            return Err(ConfigError::BaseBelowMin {
                base: self.base_interval_ms,
                min: self.min_interval_ms,
            });
        }
        Ok(())
    }
}
