//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! file I/O and persistence of grids.

pub mod persistence;

pub use persistence::*;
