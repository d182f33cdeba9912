//! RNG module - uniform shape selection
//!
//! Every spawn draws one shape uniformly from the catalog. There is no bag or
//! history: consecutive draws are independent.
//!
//! Also provides a scripted source so tests can fix the shape sequence.

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Supplies the kind of each newly spawned piece
pub trait ShapeSource {
    fn next_kind(&mut self) -> ShapeKind;
}

/// Uniform draw over [`ShapeKind::ALL`]
#[derive(Debug, Clone)]
pub struct UniformShapes {
    rng: SimpleRng,
}

impl UniformShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformShapes {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for UniformShapes {
    fn next_kind(&mut self) -> ShapeKind {
        let i = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[i]
    }
}

/// Replays a fixed sequence of kinds, cycling when exhausted
///
/// An empty script always yields `I`.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    kinds: Vec<ShapeKind>,
    next: usize,
}

impl ScriptedShapes {
    pub fn new(kinds: impl Into<Vec<ShapeKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            next: 0,
        }
    }

    /// Always the same kind
    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new(vec![kind])
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_kind(&mut self) -> ShapeKind {
        if self.kinds.is_empty() {
            return ShapeKind::I;
        }
        let kind = self.kinds[self.next % self.kinds.len()];
        self.next = self.next.wrapping_add(1);
        kind
    }
}
