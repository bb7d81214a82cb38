//! Splitting wide tables into stacked blocks.
//!
//! A table whose value columns exceed the per-block budget is rendered
//! as consecutive blocks. Each block repeats the fixed-column names and
//! carries one slice of the value columns; chunk `i` of every row lines
//! up with block header `i` because both are cut at the same width.

use crate::cell::Numeric;

/// One header+rows chunk of the final table.
#[derive(Debug)]
pub(crate) struct Block<'a> {
    /// Fixed-column names followed by this block's slice of value-column names
    pub header: Vec<&'a str>,
    /// Per input row, this block's slice of numeric cells
    pub rows: Vec<&'a [Numeric]>,
}

/// Cut the value columns into blocks of at most `effective_max` columns.
///
/// Callers must have validated that every row has one cell per value
/// column and that `effective_max > 0`.
pub(crate) fn split_blocks<'a>(
    fixed_names: &'a [String],
    value_names: &'a [String],
    rows: &'a [Vec<Numeric>],
    effective_max: usize,
) -> Vec<Block<'a>> {
    value_names
        .chunks(effective_max)
        .enumerate()
        .map(|(index, names)| {
            let start = index * effective_max;
            let header = fixed_names
                .iter()
                .chain(names.iter())
                .map(String::as_str)
                .collect();
            let rows = rows
                .iter()
                .map(|row| &row[start..start + names.len()])
                .collect();
            Block { header, rows }
        })
        .collect()
}
