//! TABGRID - Tab-Delimited Grid Formula Evaluator
//!
//! Evaluates a tab-separated grid of cell expressions (text, integer
//! literals, and `+ - * /` formulas) into a grid of display strings.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use domain::*;
pub use application::*;
