//! Typed numeric cell values and their LaTeX formatting.

use serde::{Deserialize, Serialize};

/// A single numeric table cell.
///
/// Tables that report measurement spread use `MeanStd` cells, rendered
/// as `mean $\pm$ std`; plain tables use `Single` cells. The variant
/// carries the mode, so there is no table-wide flag to keep in sync
/// with the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Numeric {
    /// A plain value
    Single(f64),
    /// A mean with its standard deviation
    MeanStd { mean: f64, std: f64 },
}

impl Numeric {
    /// Create a plain value cell
    pub fn single(value: f64) -> Self {
        Numeric::Single(value)
    }

    /// Create a mean ± standard-deviation cell
    pub fn mean_std(mean: f64, std: f64) -> Self {
        Numeric::MeanStd { mean, std }
    }

    /// Format this cell for a LaTeX table body.
    ///
    /// Both components of a `MeanStd` cell use the same notation rule
    /// as a `Single` value.
    pub fn to_latex(&self, precision: usize, fixed_range: Option<(f64, f64)>) -> String {
        match self {
            Numeric::Single(value) => format_value(*value, precision, fixed_range),
            Numeric::MeanStd { mean, std } => format!(
                "{} $\\pm$ {}",
                format_value(*mean, precision, fixed_range),
                format_value(*std, precision, fixed_range)
            ),
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Single(value)
    }
}

impl From<(f64, f64)> for Numeric {
    fn from((mean, std): (f64, f64)) -> Self {
        Numeric::MeanStd { mean, std }
    }
}

/// Format one value: fixed-point inside the range, exponent notation outside.
fn format_value(value: f64, precision: usize, fixed_range: Option<(f64, f64)>) -> String {
    match fixed_range {
        Some((lo, hi)) if value.abs() < lo || value.abs() > hi => {
            format_exponent(value, precision)
        }
        _ => format!("{:.prec$}", value, prec = precision),
    }
}

/// Format a value in exponent notation with a signed, two-digit exponent
/// (`1.00e-05`, `1.23e+05`).
fn format_exponent(value: f64, precision: usize) -> String {
    let formatted = format!("{:.prec$e}", value, prec = precision);
    // Rust emits the exponent unpadded and unsigned when positive
    // ("1.00e-5", "1.23e5"); normalize it.
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => formatted,
    }
}
