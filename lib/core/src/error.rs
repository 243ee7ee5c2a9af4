use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a scoring failure.
///
/// Every failure is raised before any score is computed, so the kind tells
/// the caller which input to fix: the table, the parameters, the item
/// addressing, or the response values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Structural,
    Parameter,
    Selection,
    Range,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Table has no columns")]
    NoColumns,

    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Record {0} is not an object")]
    NotARecord(usize),

    #[error("Record {row} has column '{column}' not present in the first record")]
    UnknownRecordColumn { row: usize, column: String },

    #[error("Unsupported value in column '{column}' at row {row}: expected number, text or null")]
    UnsupportedCell { row: usize, column: String },

    #[error("Item column '{column}' holds a non-numeric value at row {row}")]
    NonNumericItem { column: String, row: usize },

    #[error("Missing-item tolerance must be within [0, 1], got {0}")]
    InvalidTolerance(f64),

    #[error("Unrecognized score kind '{0}': expected one of sum, mean, 100, pomp")]
    UnknownScoreKind(String),

    #[error("Score kind '{0}' requires a response range")]
    RangeRequiredForKind(String),

    #[error("Reverse coding requires a response range")]
    RangeRequiredForReverse,

    #[error("Invalid response range: min {min} must be finite and below max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Score name cannot be empty")]
    EmptyScoreName,

    #[error("Output column already exists: {0}")]
    OutputColumnExists(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Item column not found: {0}")]
    ColumnNotFound(String),

    #[error("Item position {position} is out of bounds for a table with {columns} columns")]
    PositionOutOfBounds { position: usize, columns: usize },

    #[error("Item set is empty")]
    EmptyItemSet,

    #[error("Item listed more than once: {0}")]
    DuplicateItem(String),

    #[error("Reverse-coded column '{0}' is not one of the scored items")]
    ReverseNotInItems(String),

    #[error("Value {value} in column '{column}' at row {row} lies outside the response range [{min}, {max}]")]
    OutOfRange {
        column: String,
        row: usize,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoColumns
            | Error::RaggedRow { .. }
            | Error::DuplicateColumn(_)
            | Error::NotARecord(_)
            | Error::UnknownRecordColumn { .. }
            | Error::UnsupportedCell { .. }
            | Error::NonNumericItem { .. } => ErrorKind::Structural,

            Error::InvalidTolerance(_)
            | Error::UnknownScoreKind(_)
            | Error::RangeRequiredForKind(_)
            | Error::RangeRequiredForReverse
            | Error::InvalidRange { .. }
            | Error::EmptyScoreName
            | Error::OutputColumnExists(_)
            | Error::InvalidConfig(_) => ErrorKind::Parameter,

            Error::ColumnNotFound(_)
            | Error::PositionOutOfBounds { .. }
            | Error::EmptyItemSet
            | Error::DuplicateItem(_)
            | Error::ReverseNotInItems(_) => ErrorKind::Selection,

            Error::OutOfRange { .. } => ErrorKind::Range,
        }
    }
}
