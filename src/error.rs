//! Error types for the few fallible entry points of the crate.
//!
//! Instruction execution itself never fails: register and address arithmetic
//! wraps, and the opcode table is complete at compile time.

use thiserror::Error;

/// Errors raised while placing a program image on the bus.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusError {
    #[error("image of {len} bytes at ${base:04X} runs past the end of the address space")]
    ImageOverflow { base: u16, len: usize },

    #[error("image at ${base:04X} ({len} bytes) overlaps the register window at ${window:04X}")]
    RegisterWindowOverlap { base: u16, len: usize, window: u16 },
}
