//! Range validation utilities
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions are arithmetic checks on offsets, windows and sizes.

pub mod bounds;

pub use bounds::{validate_bit_offset, validate_pool_size, validate_window};
