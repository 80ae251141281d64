//! Cell classification and grid evaluation services.
//!
//! A raw cell value is one of four kinds: blank, quoted text, an integer
//! literal, or a formula. The classifier turns a raw value into its display
//! string, rendering every failure as a `#`-prefixed marker so that one bad
//! cell never aborts the rest of the grid.

use super::errors::{CellError, EvalResult};
use super::models::Grid;
use super::parser::evaluate_expression;

/// Classifies a single raw cell value and computes its display string.
///
/// Classification rules, in order:
/// - empty or a single space: blank, displays as a single space
/// - leading `'`: literal text, displays the remainder verbatim
/// - leading `=`: formula, evaluated by the expression engine
/// - otherwise: must be a base-10 signed integer, displayed unchanged
///
/// # Examples
///
/// ```
/// use tabgrid::domain::CellEvaluator;
///
/// assert_eq!(CellEvaluator::display_value("42"), "42");
/// assert_eq!(CellEvaluator::display_value("'hello"), "hello");
/// assert_eq!(CellEvaluator::display_value("=2+3*4"), "14");
/// assert_eq!(CellEvaluator::display_value("=8/0"), "#EXPR_ERR!");
/// assert_eq!(CellEvaluator::display_value("notanumber"), "#NAN!");
/// ```
pub struct CellEvaluator;

impl CellEvaluator {
    /// Evaluates a raw cell value to its display string, or the error that
    /// would be rendered as a marker.
    pub fn evaluate(raw: &str) -> EvalResult<String> {
        if raw.is_empty() || raw == " " {
            return Ok(" ".to_string());
        }

        if let Some(text) = raw.strip_prefix('\'') {
            return Ok(text.to_string());
        }

        if let Some(expr) = raw.strip_prefix('=') {
            let value = evaluate_expression(expr)?;
            return Ok(value.to_string());
        }

        match raw.parse::<i64>() {
            Ok(_) => Ok(raw.to_string()),
            Err(_) => Err(CellError::NotANumber),
        }
    }

    /// Total version of [`evaluate`](Self::evaluate): failures become
    /// `#NAN!` / `#EXPR_ERR!` markers instead of errors.
    pub fn display_value(raw: &str) -> String {
        match Self::evaluate(raw) {
            Ok(value) => value,
            Err(err) => err.marker().to_string(),
        }
    }
}

/// Evaluates every cell of a grid in place.
///
/// Cells are independent (formulas cannot reference other cells), so the
/// row-major order is an implementation detail, not a dependency order.
pub struct GridEvaluator;

impl GridEvaluator {
    pub fn evaluate(grid: &mut Grid) {
        for cell in grid.cells_mut() {
            cell.value = CellEvaluator::display_value(&cell.value);
        }
    }
}
