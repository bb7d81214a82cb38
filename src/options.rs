//! Rendering options for LaTeX table output.
//!
//! This module contains the configuration that controls how a table is
//! split into blocks and how its numeric cells are formatted.

use serde::{Deserialize, Serialize};

/// Default interval inside which values render in fixed-point notation.
///
/// Used by the [`Frame`](crate::Frame) path when the caller does not set
/// a range of their own; magnitudes below `1e-4` or above `1e4` switch
/// to exponent notation.
pub const DEFAULT_FIXED_NOTATION_RANGE: (f64, f64) = (1e-4, 1e4);

/// Options controlling table layout, numeric formatting, and the
/// caption/label trailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Maximum columns per rendered block. Fixed columns count against
    /// this budget; the value columns are split across blocks so that
    /// no block exceeds it.
    pub max_value_columns: usize,
    /// Decimal digits for numeric cells
    pub precision: usize,
    /// Caption text placed in the `\caption{}` trailer
    pub caption: String,
    /// Cross-reference anchor placed in the `\label{}` trailer
    pub label: String,
    /// When set, values whose magnitude falls outside `(lo, hi)` render
    /// in exponent notation instead of fixed-point. `None` means
    /// fixed-point everywhere.
    pub fixed_notation_range: Option<(f64, f64)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_value_columns: 25,
            precision: 4,
            caption: "Sample Caption".to_string(),
            label: "sample_label".to_string(),
            fixed_notation_range: None,
        }
    }
}

impl RenderOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the per-block column budget
    pub fn with_max_value_columns(mut self, max: usize) -> Self {
        self.max_value_columns = max;
        self
    }

    /// Builder: set the number of decimal digits
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder: set the caption text
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Builder: set the label anchor
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder: set the fixed-notation interval
    pub fn with_fixed_notation_range(mut self, range: (f64, f64)) -> Self {
        self.fixed_notation_range = Some(range);
        self
    }
}
