//! RNG module - piece generation
//!
//! The game draws every new piece by an independent uniform choice among the
//! seven kinds, with no bag or history. Long runs of the same kind are
//! possible.
//!
//! Generation is seeded through `rand_chacha`, so the same seed always yields
//! the same piece sequence. A fixed repeating pattern is also available for
//! scripted scenarios and tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Where new pieces come from.
#[derive(Debug, Clone)]
pub enum PieceSource {
    /// Independent uniform choice per draw.
    Uniform { seed: u64, rng: ChaCha8Rng },
    /// Repeats `pattern` forever, starting at `index`.
    Cycle {
        pattern: Vec<PieceKind>,
        index: usize,
    },
}

impl PieceSource {
    /// Uniform source seeded with `seed`.
    pub fn uniform(seed: u64) -> Self {
        Self::Uniform {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Source that repeats `pattern`. An empty pattern repeats `O`.
    pub fn cycle(pattern: impl Into<Vec<PieceKind>>) -> Self {
        let mut pattern = pattern.into();
        if pattern.is_empty() {
            pattern.push(PieceKind::O);
        }
        Self::Cycle { pattern, index: 0 }
    }

    /// Seed of a uniform source.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Self::Uniform { seed, .. } => Some(*seed),
            Self::Cycle { .. } => None,
        }
    }

    /// Draw the next piece kind.
    pub fn draw(&mut self) -> PieceKind {
        match self {
            Self::Uniform { rng, .. } => PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())],
            Self::Cycle { pattern, index } => {
                let kind = pattern[*index % pattern.len()];
                *index = (*index + 1) % pattern.len();
                kind
            }
        }
    }
}

impl Iterator for PieceSource {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.draw())
    }
}
