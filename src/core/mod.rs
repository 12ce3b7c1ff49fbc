//! Unchecked XOR kernels.
//!
//! Callers must have validated operand lengths; see [`crate::ops`] for the
//! checked entry points.

pub mod xor;
