//! Foundation types and traits for SPROUT_PAD.
//!
//! This crate contains the platform-agnostic types shared by all SPROUT_PAD
//! crates: colors, geometry, input events, and error types.

pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
