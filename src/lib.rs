//! Revgate - Reversible Multi-Radix Gate Verification
//!
//! Copyright (c) 2026 Revgate Contributors
//! Licensed under MIT License
//!
//! Exhaustive bijectivity checker proving that the ternary and pentary
//! modes of the reversible gate are permutations of their full state
//! spaces (zero information loss).

pub mod checker;
pub mod cli;
pub mod gate;

// Re-export main types for convenience
pub use checker::{check_bijective, CheckError, CheckOutcome, CheckReport, Collision};
pub use gate::{GateState, RadixMode};
