use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: String,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            value: String::new(),
        }
    }
}

/// A rectangular rows x columns container of cells.
///
/// Dimensions are fixed at construction; every row holds exactly `cols`
/// cells. The grid exclusively owns its cells and is mutated in place by
/// evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![Cell::default(); cols]; rows],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.value = value.into();
        }
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|r| r.as_slice())
    }

    /// Row-major iteration over every cell, for in-place evaluation.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().flat_map(|r| r.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank_and_rectangular() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        for row in grid.rows_iter() {
            assert_eq!(row.len(), 3);
            for cell in row {
                assert_eq!(cell.value, "");
            }
        }
    }

    #[test]
    fn test_get_and_set() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, "42");
        grid.set(1, 0, "'hello");

        assert_eq!(grid.get(0, 1).map(|c| c.value.as_str()), Some("42"));
        assert_eq!(grid.get(1, 0).map(|c| c.value.as_str()), Some("'hello"));
        assert_eq!(grid.get(0, 0).map(|c| c.value.as_str()), Some(""));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(1, 1);
        assert!(grid.get(1, 0).is_none());
        assert!(grid.get(0, 1).is_none());

        // Out-of-bounds writes are ignored, not panics.
        grid.set(5, 5, "ignored");
        assert_eq!(grid.get(0, 0).map(|c| c.value.as_str()), Some(""));
    }

    #[test]
    fn test_cells_mut_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, "a");
        grid.set(0, 1, "b");
        grid.set(1, 0, "c");
        grid.set(1, 1, "d");

        let order: Vec<String> = grid.cells_mut().map(|c| c.value.clone()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }
}
