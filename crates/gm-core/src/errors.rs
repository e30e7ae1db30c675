//! Errors raised while loading maps
//!
//! Placing and moving tiles never fails; only reading a map from outside
//! the process can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read map '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown token '{token}' at row {row}, column {col}")]
    UnknownToken { token: char, row: i32, col: i32 },

    #[error("Map position row {row}, column {col} does not fit a coordinate")]
    OutOfRange { row: usize, col: usize },
}
