//! Column-oriented table construction.
//!
//! `Frame` mirrors the shape of a dataframe: named columns in insertion
//! order, each either numeric or text. Text columns become the table's
//! leading fixed columns and numeric columns its value columns, both
//! keeping their relative insertion order. Classification happens here,
//! at ingestion time, through the typed [`Column`] variants.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cell::Numeric;
use crate::error::TexTableError;
use crate::options::{RenderOptions, DEFAULT_FIXED_NOTATION_RANGE};
use crate::table::LatexTable;
use crate::Result;

/// One named column of a [`Frame`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Column {
    /// A value column, chunked across blocks when the table is wide
    Numeric(Vec<Numeric>),
    /// A fixed column, repeated verbatim in every block
    Text(Vec<String>),
}

impl Column {
    fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }
}

/// A column-oriented staging area for table data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<(String, Column)>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a numeric column. Accepts `f64` values or `(mean, std)` pairs.
    pub fn push_numeric(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Numeric>>,
    ) -> &mut Self {
        let values = values.into_iter().map(Into::into).collect();
        self.columns.push((name.into(), Column::Numeric(values)));
        self
    }

    /// Append a text column.
    pub fn push_text(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        let values = values.into_iter().map(Into::into).collect();
        self.columns.push((name.into(), Column::Text(values)));
        self
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken from the first column
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, column)| column.len())
    }

    /// Partition the columns into a row-oriented [`LatexTable`].
    ///
    /// Text columns (in insertion order) become the fixed columns, and
    /// numeric columns (in insertion order) the value columns; the
    /// produced header lists them in that same order.
    pub fn to_table(&self) -> Result<LatexTable> {
        let num_rows = self.num_rows();
        for (name, column) in &self.columns {
            if column.len() != num_rows {
                return Err(TexTableError::RaggedColumns {
                    column: name.clone(),
                    expected: num_rows,
                    actual: column.len(),
                });
            }
        }

        let mut fixed_names = Vec::new();
        let mut value_names = Vec::new();
        let mut text_columns: Vec<&Vec<String>> = Vec::new();
        let mut numeric_columns: Vec<&Vec<Numeric>> = Vec::new();
        for (name, column) in &self.columns {
            match column {
                Column::Numeric(values) => {
                    value_names.push(name.clone());
                    numeric_columns.push(values);
                }
                Column::Text(values) => {
                    fixed_names.push(name.clone());
                    text_columns.push(values);
                }
            }
        }

        let rows: Vec<Vec<Numeric>> = (0..num_rows)
            .map(|row| numeric_columns.iter().map(|col| col[row]).collect())
            .collect();

        let mut header = fixed_names;
        header.append(&mut value_names);
        let mut table = LatexTable::new(header, rows);
        if !text_columns.is_empty() {
            let fixed_rows = (0..num_rows)
                .map(|row| text_columns.iter().map(|col| col[row].clone()).collect())
                .collect();
            table = table.with_fixed_rows(fixed_rows);
        }
        Ok(table)
    }

    /// Render the frame as LaTeX.
    pub fn to_latex(&self, options: &RenderOptions) -> Result<String> {
        self.to_table()?.to_latex(&adapter_options(options))
    }

    /// Render the frame and write it to `path`, overwriting any
    /// existing file.
    pub fn write(&self, path: impl AsRef<Path>, options: &RenderOptions) -> Result<()> {
        self.to_table()?.write(path, &adapter_options(options))
    }
}

/// The frame path defaults to exponent notation for magnitudes outside
/// [`DEFAULT_FIXED_NOTATION_RANGE`] unless the caller set a range.
fn adapter_options(options: &RenderOptions) -> RenderOptions {
    match options.fixed_notation_range {
        Some(_) => options.clone(),
        None => options
            .clone()
            .with_fixed_notation_range(DEFAULT_FIXED_NOTATION_RANGE),
    }
}
