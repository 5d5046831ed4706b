//! RNG module - seedable uniform shape selection
//!
//! New shapes are drawn uniformly over the 4 kinds and the 7 block colors.
//! The generator is a simple LCG so games are fully deterministic per seed,
//! which keeps tests reproducible.

use crate::types::{ShapeColor, ShapeKind};

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
        self.next_u32() % max
    }

    /// Current generator state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform source of spawn kinds and colors.
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: SimpleRng,
}

impl ShapePicker {
    /// Create a new picker with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape kind, uniform over the 4 kinds.
    pub fn next_kind(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32);
        ShapeKind::ALL[idx as usize]
    }

    /// Draw the next block color, uniform over the 7 colors.
    pub fn next_color(&mut self) -> ShapeColor {
        let idx = self.rng.next_range(ShapeColor::ALL.len() as u32);
        ShapeColor::ALL[idx as usize]
    }

    /// Current generator state
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ShapePicker {
    fn default() -> Self {
        Self::new(1)
    }
}
