use crate::domain::{Grid, LoadResult, StructuralError};
use log::debug;
use std::fs;
use std::io::{Read, Write};

/// Reads and writes grids in the tab-separated wire format: a size header
/// line `<rows>\t<columns>`, then exactly `rows` lines of exactly
/// `columns` tab-separated fields.
pub struct TsvRepository;

impl TsvRepository {
    pub fn load_from_path(filename: &str) -> LoadResult<Grid> {
        let file = fs::File::open(filename)?;
        Self::load_from_reader(file)
    }

    pub fn load_from_reader<R: Read>(reader: R) -> LoadResult<Grid> {
        let mut tsv = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = tsv.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(StructuralError::MissingHeader),
        };
        let (rows_field, cols_field) = match (header.get(0), header.get(1)) {
            (Some(rows), Some(cols)) if header.len() == 2 => (rows, cols),
            _ => {
                let line = header.iter().collect::<Vec<_>>().join("\t");
                return Err(StructuralError::MalformedHeader(line));
            }
        };
        let rows = Self::parse_dimension(rows_field)?;
        let cols = Self::parse_dimension(cols_field)?;

        let mut grid = Grid::new(rows, cols);
        for row_idx in 0..rows {
            let record = match records.next() {
                Some(record) => record?,
                None => {
                    return Err(StructuralError::MissingRows {
                        expected: rows,
                        found: row_idx,
                    });
                }
            };
            if record.len() != cols {
                return Err(StructuralError::FieldCount {
                    line: row_idx + 2,
                    expected: cols,
                    found: record.len(),
                });
            }
            for (col_idx, field) in record.iter().enumerate() {
                grid.set(row_idx, col_idx, field);
            }
        }
        // Lines past the declared row count are ignored.

        debug!("loaded {}x{} grid", rows, cols);
        Ok(grid)
    }

    fn parse_dimension(field: &str) -> LoadResult<usize> {
        field
            .parse::<usize>()
            .map_err(|_| StructuralError::InvalidDimension(field.to_string()))
    }

    /// Writes the grid's data rows as tab-separated lines, without a size
    /// header.
    pub fn write_to_writer<W: Write>(grid: &Grid, writer: W) -> LoadResult<()> {
        let mut tsv = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        for row in grid.rows_iter() {
            tsv.write_record(row.iter().map(|cell| cell.value.as_str()))?;
        }
        tsv.flush()?;
        Ok(())
    }

    pub fn render_to_string(grid: &Grid) -> LoadResult<String> {
        let mut buffer = Vec::new();
        Self::write_to_writer(grid, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Saves and loads grid snapshots as JSON files.
pub struct SnapshotRepository;

impl SnapshotRepository {
    pub fn save_grid(grid: &Grid, filename: &str) -> LoadResult<()> {
        let json = serde_json::to_string_pretty(grid)?;
        fs::write(filename, json)?;
        debug!("saved grid snapshot to {}", filename);
        Ok(())
    }

    pub fn load_grid(filename: &str) -> LoadResult<Grid> {
        let content = fs::read_to_string(filename)?;
        let grid = serde_json::from_str(&content)?;
        Ok(grid)
    }
}
