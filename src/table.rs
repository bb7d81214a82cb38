//! Presentation-ready LaTeX table assembly and output.
//!
//! This module provides `LatexTable`, the final structure before
//! rendering. The data flow is:
//!
//! 1. Raw data (value rows + optional fixed string rows), or a
//!    column-oriented [`Frame`](crate::Frame)
//! 2. Validation of the header/row shape
//! 3. Block splitting for wide tables
//! 4. A single pass that assembles the LaTeX envelope line by line
//!
//! Rendering is pure string formatting - the only side effect lives in
//! [`LatexTable::write`], which overwrites the target file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cell::Numeric;
use crate::error::TexTableError;
use crate::options::RenderOptions;
use crate::split::{split_blocks, Block};
use crate::Result;

const INDENT: &str = "            ";

/// A table ready for LaTeX rendering.
///
/// `header` names the fixed (string) columns first, then the value
/// columns, in the same positional order the rows use. Every value row
/// must have one cell per value column; when `fixed_rows` is present it
/// must have one entry per value row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatexTable {
    /// Column names: fixed-column names first, then value-column names
    pub header: Vec<String>,
    /// Numeric cells, one inner `Vec` per row
    pub rows: Vec<Vec<Numeric>>,
    /// String cells for the leading fixed columns, one inner `Vec` per row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_rows: Option<Vec<Vec<String>>>,
}

impl LatexTable {
    /// Create a table from pre-built numeric cells.
    pub fn new(header: Vec<String>, rows: Vec<Vec<Numeric>>) -> Self {
        LatexTable {
            header,
            rows,
            fixed_rows: None,
        }
    }

    /// Create a table of plain values.
    pub fn from_values(header: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Numeric::single).collect())
            .collect();
        Self::new(header, rows)
    }

    /// Create a table of mean ± standard-deviation cells.
    pub fn from_mean_std(header: Vec<String>, rows: Vec<Vec<(f64, f64)>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Numeric::from).collect())
            .collect();
        Self::new(header, rows)
    }

    /// Builder: attach fixed string columns, repeated verbatim in every
    /// rendered block.
    pub fn with_fixed_rows(mut self, fixed_rows: Vec<Vec<String>>) -> Self {
        self.fixed_rows = Some(fixed_rows);
        self
    }

    fn num_fixed(&self) -> usize {
        self.fixed_rows
            .as_ref()
            .and_then(|rows| rows.first())
            .map_or(0, Vec::len)
    }

    /// Check the shape preconditions before rendering.
    ///
    /// Mismatches that would otherwise yield silently truncated or
    /// misaligned markup are reported as typed errors instead.
    fn validate(&self, options: &RenderOptions) -> Result<()> {
        if self.header.is_empty() {
            return Err(TexTableError::Empty("header"));
        }
        if self.rows.is_empty() {
            return Err(TexTableError::Empty("rows"));
        }
        let num_fixed = self.num_fixed();
        let num_value = self.rows[0].len();
        if num_value == 0 {
            return Err(TexTableError::Empty("value columns"));
        }
        if self.header.len() != num_fixed + num_value {
            return Err(TexTableError::HeaderShape {
                header: self.header.len(),
                fixed: num_fixed,
                value: num_value,
            });
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != num_value {
                return Err(TexTableError::RaggedRows {
                    row: index,
                    expected: num_value,
                    actual: row.len(),
                });
            }
        }
        if let Some(fixed_rows) = &self.fixed_rows {
            if fixed_rows.len() != self.rows.len() {
                return Err(TexTableError::FixedRowCount {
                    fixed: fixed_rows.len(),
                    rows: self.rows.len(),
                });
            }
            for (index, row) in fixed_rows.iter().enumerate() {
                if row.len() != num_fixed {
                    return Err(TexTableError::RaggedRows {
                        row: index,
                        expected: num_fixed,
                        actual: row.len(),
                    });
                }
            }
        }
        if options.max_value_columns <= num_fixed {
            return Err(TexTableError::ColumnBudget {
                max_value_columns: options.max_value_columns,
                fixed: num_fixed,
            });
        }
        Ok(())
    }

    /// Render the complete `table` environment as a string.
    pub fn to_latex(&self, options: &RenderOptions) -> Result<String> {
        self.validate(options)?;

        let num_fixed = self.num_fixed();
        let effective_max = options.max_value_columns - num_fixed;
        let (fixed_names, value_names) = self.header.split_at(num_fixed);
        let blocks = split_blocks(fixed_names, value_names, &self.rows, effective_max);

        // The column spec is sized to the first block; trailing blocks
        // can only be narrower and tabular tolerates short rows.
        let col_spec = column_spec(blocks[0].header.len());

        let mut lines = Vec::new();
        lines.push("\\begin{table}[!ht]".to_string());
        lines.push("    \\centering".to_string());
        lines.push("    \\resizebox{\\textwidth}{!}{".to_string());
        lines.push(format!("        \\begin{{tabular}}{{{}}}", col_spec));
        lines.push(format!("{}\\toprule", INDENT));
        for (index, block) in blocks.iter().enumerate() {
            if index > 0 {
                lines.push(format!("{}\\bottomrule\\midrule", INDENT));
            }
            self.push_block(&mut lines, block, options);
        }
        lines.push(format!("{}\\bottomrule", INDENT));
        lines.push("        \\end{tabular}".to_string());
        lines.push("    }".to_string());
        lines.push(format!("    \\caption{{{}}}", escape_trailer(&options.caption)));
        lines.push(format!("    \\label{{{}}}", escape_trailer(&options.label)));
        lines.push("\\end{table}".to_string());

        Ok(lines.join("\n") + "\n")
    }

    /// Append one block (header row, rule, data rows) to the output lines.
    fn push_block(&self, lines: &mut Vec<String>, block: &Block<'_>, options: &RenderOptions) {
        let header_cells: Vec<String> = block.header.iter().map(|name| escape_text(name)).collect();
        lines.push(format!("{}{} \\\\", INDENT, header_cells.join(" & ")));
        lines.push(format!("{}\\midrule", INDENT));

        for (index, chunk) in block.rows.iter().enumerate() {
            let mut cells: Vec<String> = Vec::with_capacity(block.header.len());
            if let Some(fixed_rows) = &self.fixed_rows {
                cells.extend(fixed_rows[index].iter().map(|cell| escape_text(cell)));
            }
            cells.extend(
                chunk
                    .iter()
                    .map(|cell| cell.to_latex(options.precision, options.fixed_notation_range)),
            );
            lines.push(format!("{}{} \\\\", INDENT, cells.join(" & ")));
        }
    }

    /// Render the table and write it to `path`, overwriting any
    /// existing file.
    pub fn write(&self, path: impl AsRef<Path>, options: &RenderOptions) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_latex(options)?;
        fs::write(path, text).map_err(|source| TexTableError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Build the tabular column spec: `n` centered, bordered columns.
fn column_spec(n: usize) -> String {
    let mut spec = vec!["|c"; n].join(" ");
    spec.push('|');
    spec
}

/// Escape characters LaTeX treats specially in header and cell text.
fn escape_text(text: &str) -> String {
    text.replace('_', "\\_").replace('%', "\\%")
}

/// Escape the caption/label trailer.
///
/// Underscores stay raw here: labels are reference keys where `\_`
/// would change the key, and captions keep whatever the caller wrote.
fn escape_trailer(text: &str) -> String {
    text.replace('%', "\\%")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_column_spec() {
        assert_eq!(column_spec(1), "|c|");
        assert_eq!(column_spec(3), "|c |c |c|");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("acc_top1"), "acc\\_top1");
        assert_eq!(escape_text("50%"), "50\\%");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_escape_trailer_keeps_underscores() {
        assert_eq!(escape_trailer("tab:acc_top1"), "tab:acc_top1");
        assert_eq!(escape_trailer("50% subset"), "50\\% subset");
    }

    #[test]
    fn test_single_block_layout() {
        let table = LatexTable::from_values(
            header(&["Col1", "Col2", "Col3"]),
            vec![vec![1.2345, 2.3456, 3.4567], vec![4.5678, 5.6789, 6.789]],
        );
        let latex = table.to_latex(&RenderOptions::default()).unwrap();

        assert!(latex.contains("\\begin{tabular}{|c |c |c|}"));
        assert!(latex.contains("Col1 & Col2 & Col3 \\\\"));
        assert!(latex.contains("1.2345 & 2.3456 & 3.4567 \\\\"));
        assert!(latex.contains("4.5678 & 5.6789 & 6.7890 \\\\"));
        // one block: no inter-block separator
        assert!(!latex.contains("\\bottomrule\\midrule"));
    }

    #[test]
    fn test_block_split_reconstructs_header() {
        let table = LatexTable::from_values(
            header(&["A", "B", "C", "D", "E"]),
            vec![vec![1.0, 2.0, 3.0, 4.0, 5.0]],
        );
        let options = RenderOptions::new().with_max_value_columns(2);
        let latex = table.to_latex(&options).unwrap();

        assert_eq!(latex.matches("\\bottomrule\\midrule").count(), 2);
        assert!(latex.contains("A & B \\\\"));
        assert!(latex.contains("C & D \\\\"));
        assert!(latex.contains("E \\\\"));
    }

    #[test]
    fn test_fixed_cells_repeat_per_block() {
        let table = LatexTable::from_values(
            header(&["Run", "A", "B", "C", "D"]),
            vec![vec![1.0, 2.0, 3.0, 4.0]],
        )
        .with_fixed_rows(vec![vec!["baseline_run".to_string()]]);
        let options = RenderOptions::new().with_max_value_columns(3);
        let latex = table.to_latex(&options).unwrap();

        // effective budget 2 -> two blocks, fixed cell escaped in both
        assert_eq!(latex.matches("baseline\\_run &").count(), 2);
        assert_eq!(latex.matches("Run &").count(), 2);
    }

    #[test]
    fn test_caption_and_label_trailer() {
        let table = LatexTable::from_values(header(&["A"]), vec![vec![1.0]]);
        let options = RenderOptions::new()
            .with_caption("This is a sample _caption_")
            .with_label("sample_label");
        let latex = table.to_latex(&options).unwrap();

        assert!(latex.contains("\\caption{This is a sample _caption_}"));
        assert!(latex.contains("\\label{sample_label}"));
    }

    #[test]
    fn test_mean_std_cells() {
        let table = LatexTable::from_mean_std(header(&["A"]), vec![vec![(2.5, 0.1)]]);
        let options = RenderOptions::new().with_precision(2);
        let latex = table.to_latex(&options).unwrap();
        assert!(latex.contains("2.50 $\\pm$ 0.10 \\\\"));
    }

    #[test]
    fn test_empty_header_rejected() {
        let table = LatexTable::from_values(vec![], vec![vec![1.0]]);
        assert!(matches!(
            table.to_latex(&RenderOptions::default()),
            Err(TexTableError::Empty("header"))
        ));
    }

    #[test]
    fn test_empty_rows_rejected() {
        let table = LatexTable::from_values(header(&["A"]), vec![]);
        assert!(matches!(
            table.to_latex(&RenderOptions::default()),
            Err(TexTableError::Empty("rows"))
        ));
    }

    #[test]
    fn test_header_shape_mismatch_rejected() {
        let table = LatexTable::from_values(header(&["A", "B"]), vec![vec![1.0]]);
        assert!(matches!(
            table.to_latex(&RenderOptions::default()),
            Err(TexTableError::HeaderShape {
                header: 2,
                fixed: 0,
                value: 1
            })
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let table =
            LatexTable::from_values(header(&["A", "B"]), vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            table.to_latex(&RenderOptions::default()),
            Err(TexTableError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_fixed_row_count_mismatch_rejected() {
        let table = LatexTable::from_values(header(&["Run", "A"]), vec![vec![1.0], vec![2.0]])
            .with_fixed_rows(vec![vec!["only_one".to_string()]]);
        assert!(matches!(
            table.to_latex(&RenderOptions::default()),
            Err(TexTableError::FixedRowCount { fixed: 1, rows: 2 })
        ));
    }

    #[test]
    fn test_column_budget_must_exceed_fixed_columns() {
        let table = LatexTable::from_values(header(&["Run", "A"]), vec![vec![1.0]])
            .with_fixed_rows(vec![vec!["r1".to_string()]]);
        let options = RenderOptions::new().with_max_value_columns(1);
        assert!(matches!(
            table.to_latex(&options),
            Err(TexTableError::ColumnBudget {
                max_value_columns: 1,
                fixed: 1
            })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let table = LatexTable::from_values(header(&["A"]), vec![vec![1.0]]);
        let json = serde_json::to_string(&table).unwrap();
        assert!(!json.contains("fixed_rows"));
        let back: LatexTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.header, table.header);
        assert_eq!(back.rows, table.rows);
    }
}
