//! Reversible multi-radix gate primitives.
//!
//! This module implements the gate state triple and the two fixed radix
//! modes of the reversible cell. Everything else builds on these - they
//! are the mappings the checker proves bijective.
//!
//! # Representation
//!
//! Gate state: (A, B, G) with each component in [0, n) for its axis.
//! - Ternary mode: ℤ₃ × ℤ₃ × ℤ₅ → 45 states
//! - Pentary mode: ℤ₅ × ℤ₅ × ℤ₅ → 125 states
//!
//! # Update Rule (Must Hold)
//!
//! Both modes share one triangular staged update:
//! - A' = A
//! - B' = (B + A) mod nB
//! - G' = (G + B) mod nG, where B is the ORIGINAL second component
//!
//! Feeding the updated B' into the G formula is a different mapping and
//! is not bijective; the staged structure is load-bearing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One configuration point of the reversible gate.
///
/// Immutable value type: stepping a state produces a new triple.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GateState {
    /// Control component, never modified by a step
    pub a: u8,
    /// Middle component, advanced by A
    pub b: u8,
    /// Tail component, advanced by the original B
    pub g: u8,
}

impl fmt::Debug for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.g)
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.g)
    }
}

impl GateState {
    /// Create a state from raw components. No range check - the radix
    /// mode owning the state defines the valid axis sizes.
    #[inline]
    pub const fn new(a: u8, b: u8, g: u8) -> Self {
        GateState { a, b, g }
    }
}

/// Fixed parameterization of the gate: axis sizes plus the update formula.
///
/// Exactly two modes exist and both are compile-time constants, so this
/// is a plain tagged enum rather than a trait object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadixMode {
    /// ℤ₃ × ℤ₃ × ℤ₅ (45 states)
    Ternary,
    /// ℤ₅ × ℤ₅ × ℤ₅ (125 states)
    Pentary,
}

impl fmt::Display for RadixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl RadixMode {
    /// Both modes in fixed check order, ternary first.
    pub const ALL: [RadixMode; 2] = [RadixMode::Ternary, RadixMode::Pentary];

    /// Exclusive upper bound of each axis: (nA, nB, nG).
    #[inline]
    pub const fn sizes(self) -> (u8, u8, u8) {
        match self {
            RadixMode::Ternary => (3, 3, 5),
            RadixMode::Pentary => (5, 5, 5),
        }
    }

    /// Cardinality of the full state space: nA × nB × nG.
    #[inline]
    pub const fn state_count(self) -> usize {
        let (na, nb, ng) = self.sizes();
        na as usize * nb as usize * ng as usize
    }

    /// Human-readable mode name used in reports.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            RadixMode::Ternary => "Ternary (Z3 x Z3 x Z5)",
            RadixMode::Pentary => "Pentary (Z5^3)",
        }
    }

    /// Forward map for one gate step.
    ///
    /// A' = A
    /// B' = (B + A) mod nB
    /// G' = (G + B) mod nG   (original B - triangular structure)
    #[inline]
    pub const fn step(self, s: GateState) -> GateState {
        let (_, nb, ng) = self.sizes();
        GateState {
            a: s.a,
            b: (s.b + s.a) % nb,
            g: (s.g + s.b) % ng,
        }
    }
}
