//! # textab
//!
//! Render tabular numeric/string data as LaTeX table markup, ready for
//! `\input` into a larger document.
//!
//! ## Overview
//!
//! Built for emitting tables from computed results (experiment
//! summaries, benchmark sweeps) without hand-authoring markup:
//!
//! - **Block splitting**: tables wider than a configurable column
//!   budget are split into stacked blocks; fixed (string) columns are
//!   repeated in every block
//! - **Numeric formatting**: fixed-point to a configurable precision,
//!   with optional exponent notation for extreme magnitudes
//! - **Mean ± std cells**: `(mean, std)` pairs render as `2.50 $\pm$ 0.10`
//! - **Escaping**: `_` and `%` in headers and string cells are escaped
//!   for LaTeX
//!
//! ## Example
//!
//! ```rust
//! use textab::{Frame, LatexTable, RenderOptions};
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//!
//! // Row-oriented: header + rows of values
//! let table = LatexTable::from_values(
//!     vec!["Col1".to_string(), "Col2".to_string()],
//!     vec![vec![1.2345, 2.3456], vec![4.5678, 5.6789]],
//! );
//! table.write(dir.path().join("rows.tex"), &RenderOptions::default()).unwrap();
//!
//! // Column-oriented: build a frame, text columns become row labels
//! let mut frame = Frame::new();
//! frame.push_text("Model", ["resnet", "vit"]);
//! frame.push_numeric("Accuracy", [0.91, 0.88]);
//! let options = RenderOptions::new()
//!     .with_caption("Validation accuracy")
//!     .with_label("tab:val_acc");
//! frame.write(dir.path().join("columns.tex"), &options).unwrap();
//! ```

pub mod cell;
pub mod error;
pub mod frame;
pub mod options;
mod split;
pub mod table;

pub use cell::Numeric;
pub use error::TexTableError;
pub use frame::{Column, Frame};
pub use options::{RenderOptions, DEFAULT_FIXED_NOTATION_RANGE};
pub use table::LatexTable;

/// Result type for textab operations
pub type Result<T> = std::result::Result<T, TexTableError>;
