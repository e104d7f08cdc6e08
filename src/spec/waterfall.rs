use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::model::Dataset;
use crate::error::{Error, Result};
use crate::segment::{Control, Segment, segment};
use crate::spec::{Trace, format_value};

// ---------------------------------------------------------------------------
// Measure – how each waterfall bar contributes
// ---------------------------------------------------------------------------

/// How a bar contributes to the running waterfall total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// The bar sets the total to its value.
    Absolute,
    /// The bar adds its (signed) value to the running total.
    Relative,
    /// The bar shows the running total so far.
    Total,
}

// ---------------------------------------------------------------------------
// WaterfallSpec – everything the renderer needs for a dropdown waterfall
// ---------------------------------------------------------------------------

/// The full data side of a dropdown-driven waterfall chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallSpec {
    /// Category labels along the x axis: the dataset columns minus the
    /// dropdown column.
    pub x_labels: Vec<String>,
    /// One measure per x label.
    pub measures: Vec<Measure>,
    /// The slice shown before any dropdown interaction (first segment).
    pub initial: Trace,
    /// One slice per dropdown option, aligned with `controls`.
    pub slices: Vec<Trace>,
    /// Dropdown toggles, one per slice.
    pub controls: Vec<Control>,
}

/// Build the data side of a waterfall chart with a dropdown selector.
///
/// The dataset is segmented on `dropdown_key`; each distinct value becomes
/// one dropdown option whose slice holds the column-wise sums of its rows
/// (for the common one-row-per-bucket layout this is just that row).  The
/// dropdown column itself is excluded from the plotted labels.
///
/// `precision` rounds the display text only; plotted values keep full
/// precision.
///
/// # Errors
/// * [`Error::EmptyDataset`] / [`Error::MissingColumn`] from segmentation.
/// * [`Error::MeasureMismatch`] if `measures` does not line up with the
///   value columns.
/// * [`Error::NonNumericCell`] if a value column holds a non-numeric cell.
pub fn waterfall_spec(
    dataset: &Dataset,
    dropdown_key: &str,
    measures: &[Measure],
    precision: Option<u32>,
) -> Result<WaterfallSpec> {
    let (segments, controls) = segment(dataset, dropdown_key)?;

    // The dropdown column is not plotted.
    let x_labels: Vec<String> = dataset
        .column_names
        .iter()
        .filter(|c| c.as_str() != dropdown_key)
        .cloned()
        .collect();

    if measures.len() != x_labels.len() {
        return Err(Error::MeasureMismatch {
            measures: measures.len(),
            labels: x_labels.len(),
        });
    }

    let slices: Vec<Trace> = segments
        .iter()
        .map(|seg| slice_trace(dataset, seg, &x_labels, precision))
        .collect::<Result<_>>()?;

    debug!(
        "waterfall on '{dropdown_key}': {} slices over {} columns",
        slices.len(),
        x_labels.len()
    );

    Ok(WaterfallSpec {
        x_labels,
        measures: measures.to_vec(),
        initial: slices[0].clone(),
        slices,
        controls,
    })
}

/// Column-wise sums of one segment's rows, as a plottable trace.
fn slice_trace(
    dataset: &Dataset,
    seg: &Segment,
    x_labels: &[String],
    precision: Option<u32>,
) -> Result<Trace> {
    let mut y = Vec::with_capacity(x_labels.len());
    for col in x_labels {
        let mut sum = 0.0;
        for &idx in &seg.row_indices {
            let cell = dataset.rows[idx].get(col);
            let v = cell.and_then(|c| c.as_f64()).ok_or_else(|| {
                Error::NonNumericCell {
                    column: col.clone(),
                    row: idx,
                }
            })?;
            sum += v;
        }
        y.push(sum);
    }

    let text = y.iter().map(|&v| format_value(v, precision)).collect();
    Ok(Trace {
        name: seg.label.clone(),
        x: x_labels.to_vec(),
        y,
        text,
    })
}
