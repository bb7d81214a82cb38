//! Error types for textab

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or writing a table
#[derive(Error, Debug)]
pub enum TexTableError {
    /// Failed to write the rendered table to disk
    #[error("failed to write table to '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Table has no header, no rows, or no value columns
    #[error("table has no {0}")]
    Empty(&'static str),

    /// Header length does not match the declared column counts
    #[error("header has {header} columns but data declares {fixed} fixed + {value} value columns")]
    HeaderShape {
        header: usize,
        fixed: usize,
        value: usize,
    },

    /// A row has a different cell count than the first row
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Fixed (string) rows and value rows disagree on row count
    #[error("{fixed} fixed rows for {rows} value rows")]
    FixedRowCount { fixed: usize, rows: usize },

    /// Column budget leaves no room for value columns after fixed columns
    #[error("max_value_columns = {max_value_columns} leaves no room after {fixed} fixed columns")]
    ColumnBudget {
        max_value_columns: usize,
        fixed: usize,
    },

    /// A frame column has a different length than the first column
    #[error("column '{column}' has {actual} values, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },
}
