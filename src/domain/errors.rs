#[derive(Debug, Clone, PartialEq)]
pub enum CellError {
    NotANumber,
    Expression(String),
}

impl CellError {
    /// Marker string rendered into a cell whose evaluation failed.
    pub fn marker(&self) -> &'static str {
        match self {
            CellError::NotANumber => "#NAN!",
            CellError::Expression(_) => "#EXPR_ERR!",
        }
    }
}

impl std::fmt::Display for CellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellError::NotANumber => {
                write!(f, "Cell is not a number")
            }
            CellError::Expression(msg) => {
                write!(f, "Expression evaluation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CellError {}

pub type EvalResult<T> = Result<T, CellError>;

#[derive(Debug)]
pub enum StructuralError {
    MissingHeader,
    MalformedHeader(String),
    InvalidDimension(String),
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    MissingRows {
        expected: usize,
        found: usize,
    },
    Io(std::io::Error),
    Csv(csv::Error),
    Snapshot(serde_json::Error),
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructuralError::MissingHeader => {
                write!(f, "Missing size header line")
            }
            StructuralError::MalformedHeader(line) => {
                write!(f, "Malformed size header: {}", line)
            }
            StructuralError::InvalidDimension(field) => {
                write!(f, "Invalid grid dimension: {}", field)
            }
            StructuralError::FieldCount {
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Line {}: expected {} tab-separated fields, found {}",
                    line, expected, found
                )
            }
            StructuralError::MissingRows { expected, found } => {
                write!(f, "Expected {} data rows, found {}", expected, found)
            }
            StructuralError::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
            StructuralError::Csv(err) => {
                write!(f, "TSV read error: {}", err)
            }
            StructuralError::Snapshot(err) => {
                write!(f, "Snapshot format error: {}", err)
            }
        }
    }
}

impl std::error::Error for StructuralError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StructuralError::Io(err) => Some(err),
            StructuralError::Csv(err) => Some(err),
            StructuralError::Snapshot(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StructuralError {
    fn from(err: std::io::Error) -> Self {
        StructuralError::Io(err)
    }
}

impl From<csv::Error> for StructuralError {
    fn from(err: csv::Error) -> Self {
        StructuralError::Csv(err)
    }
}

impl From<serde_json::Error> for StructuralError {
    fn from(err: serde_json::Error) -> Self {
        StructuralError::Snapshot(err)
    }
}

pub type LoadResult<T> = Result<T, StructuralError>;
