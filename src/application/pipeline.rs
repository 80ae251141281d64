//! End-to-end load-then-evaluate orchestration.

use crate::domain::{Grid, GridEvaluator, LoadResult};
use crate::infrastructure::TsvRepository;
use log::debug;
use std::io::Read;

/// Runs the full pipeline: load a tab-separated grid, evaluate every cell
/// in place, and hand back the evaluated grid.
///
/// Structural load failures propagate; cell-level failures are already
/// rendered as markers by the evaluator and never surface here.
pub struct GridPipeline;

impl GridPipeline {
    pub fn run_reader<R: Read>(reader: R) -> LoadResult<Grid> {
        let mut grid = TsvRepository::load_from_reader(reader)?;
        debug!("evaluating {}x{} grid", grid.rows(), grid.cols());
        GridEvaluator::evaluate(&mut grid);
        Ok(grid)
    }

    pub fn run_str(input: &str) -> LoadResult<Grid> {
        Self::run_reader(input.as_bytes())
    }

    pub fn run_path(filename: &str) -> LoadResult<Grid> {
        let file = std::fs::File::open(filename)?;
        Self::run_reader(file)
    }
}
