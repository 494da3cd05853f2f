//! Piece randomization - seedable LCG and injectable draw sources.
//!
//! Draws are independent and uniform over the seven kinds: droughts and
//! repeats are possible and intended (no bag fairness). The source is the
//! session's only non-deterministic dependency, so it sits behind a trait
//! and scripted sources can stand in for it during tests.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Where the session gets its pieces from.
pub trait PieceSource {
    fn next_kind(&mut self) -> ShapeKind;
}

/// Independent uniform draws over all seven kinds.
#[derive(Debug, Clone)]
pub struct UniformPieces {
    rng: SimpleRng,
}

impl UniformPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformPieces {
    fn next_kind(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }
}

/// Fixed script of kinds, repeated from the start when exhausted.
/// The reproducibility hook for tests and scripted demos.
#[derive(Debug, Clone)]
pub struct SequencePieces {
    kinds: Vec<ShapeKind>,
    cursor: usize,
}

impl SequencePieces {
    pub fn new(kinds: Vec<ShapeKind>) -> Self {
        assert!(!kinds.is_empty(), "piece script must not be empty");
        Self { kinds, cursor: 0 }
    }
}

impl PieceSource for SequencePieces {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.cursor];
        self.cursor = (self.cursor + 1) % self.kinds.len();
        kind
    }
}
