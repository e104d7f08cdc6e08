//! Chart-spec builders: turn a dataset plus segmentation/windowing into the
//! trace and control descriptors an external renderer consumes.
//!
//! The core generates these descriptors; the rendering layer (out of scope
//! here) decides how they become a figure.

pub mod distribution;
pub mod waterfall;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Trace – one plotted series
// ---------------------------------------------------------------------------

/// A single plottable series: category labels, values, and the text shown
/// next to each value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Name shown for this series (segment label or anchor date).
    pub name: String,
    /// Category labels along the x axis.
    pub x: Vec<String>,
    /// Plotted values.
    pub y: Vec<f64>,
    /// Display text per value; rounded when a precision is set, while `y`
    /// keeps full precision.
    pub text: Vec<String>,
}

/// Format a value for display, optionally rounded to `precision` decimals.
pub(crate) fn format_value(v: f64, precision: Option<u32>) -> String {
    match precision {
        Some(p) => format!("{v:.prec$}", prec = p as usize),
        None => format!("{v}"),
    }
}
