use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("expected {expected} elements, got {actual}")]
    ElementCount { expected: usize, actual: usize },
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("row {row} out of bounds for {rows}x{cols} matrix")]
    RowOutOfBounds { row: usize, rows: usize, cols: usize },
    #[error("use of a matrix whose storage was taken")]
    MovedFrom,
}

pub type MatrixResult<T> = Result<T, MatrixError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
