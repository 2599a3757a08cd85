//! RNG module - the random source the stage draws new pieces from
//!
//! The stage never reaches for ambient randomness. It is handed a [`RandomSource`]
//! at construction, which keeps games reproducible:
//!
//! - [`SimpleRng`]: seeded LCG for normal play and seeded tests
//! - [`ScriptedSource`]: replays a fixed list of values for exact test setups

use crate::types::{PieceKind, Rotation, KIND_COUNT, ROTATION_COUNT};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Return a value in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Draw a kind, then a rotation.
    fn next_piece(&mut self) -> (PieceKind, Rotation) {
        let kind = PieceKind::from_index(self.next_below(KIND_COUNT as u32) as usize);
        let rotation = Rotation::from_index(self.next_below(ROTATION_COUNT as u32) as usize);
        (kind, rotation)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG cycle with a tiny period; use the high half.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_range(bound)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound, so a script for
/// [`RandomSource::next_piece`] is a flat list of `kind, rotation` index pairs.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, pos: 0 }
    }

    /// Script that yields the given pieces in order, then repeats.
    pub fn pieces(pieces: &[(PieceKind, Rotation)]) -> Self {
        let values: Vec<u32> = pieces
            .iter()
            .flat_map(|&(kind, rotation)| [kind.index() as u32, rotation.index() as u32])
            .collect();
        Self::new(values)
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, bound: u32) -> u32 {
        let value = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        value % bound
    }
}
