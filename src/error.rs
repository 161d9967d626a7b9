/// Problems building a grid from hand-written rows
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} letters, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("`{ch}` at row {row}, column {col} is not a letter")]
    InvalidLetter { row: usize, col: usize, ch: char },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown search policy \"{0}\", expected `committed` or `exhaustive`")]
pub struct ParsePolicyError(pub String);
