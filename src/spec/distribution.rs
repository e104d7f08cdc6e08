use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::model::Dataset;
use crate::error::{Error, Result};
use crate::segment::Control;
use crate::spec::{Trace, format_value};
use crate::window::{DateWindow, build_ranges};

// ---------------------------------------------------------------------------
// DistributionSpec – per-window value distributions with a dropdown
// ---------------------------------------------------------------------------

/// The data side of a distribution chart: one trace of values per date
/// window, selectable through a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    /// The windows the dataset was sliced against, in anchor order.
    pub windows: Vec<DateWindow>,
    /// One trace per window; `x` holds the row dates, `y` the values.
    pub traces: Vec<Trace>,
    /// Dropdown toggles, one per window.
    pub controls: Vec<Control>,
}

/// Build the data side of a distribution chart.
///
/// A [`DateWindow`] is computed around each anchor via [`build_ranges`];
/// each window's trace holds the `value_key` values of the rows whose
/// `date_key` falls inside it, in dataset order.  Windows are independent:
/// a row inside two overlapping windows appears in both traces, and a row
/// outside every window appears in none.
///
/// # Errors
/// * [`Error::EmptyDataset`] if the dataset has zero rows.
/// * [`Error::MissingColumn`] if `date_key` or `value_key` is absent.
/// * [`Error::InvalidWindow`] if `window_size` is negative.
/// * [`Error::NonDateCell`] / [`Error::NonNumericCell`] on malformed cells.
pub fn distribution_spec(
    dataset: &Dataset,
    date_key: &str,
    value_key: &str,
    anchor_dates: &[NaiveDate],
    window_size: i64,
    precision: Option<u32>,
) -> Result<DistributionSpec> {
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }
    for key in [date_key, value_key] {
        if !dataset.has_column(key) {
            return Err(Error::MissingColumn {
                column: key.to_string(),
            });
        }
    }

    let windows = build_ranges(anchor_dates, window_size)?;

    // Validate and extract the two columns once, before any slicing.
    let mut dated_values: Vec<(NaiveDate, f64)> = Vec::with_capacity(dataset.len());
    for (idx, row) in dataset.rows.iter().enumerate() {
        let date = row
            .get(date_key)
            .and_then(|c| c.as_date())
            .ok_or_else(|| Error::NonDateCell {
                column: date_key.to_string(),
                row: idx,
            })?;
        let value = row
            .get(value_key)
            .and_then(|c| c.as_f64())
            .ok_or_else(|| Error::NonNumericCell {
                column: value_key.to_string(),
                row: idx,
            })?;
        dated_values.push((date, value));
    }

    let mut traces = Vec::with_capacity(windows.len());
    let mut controls = Vec::with_capacity(windows.len());

    for (id, window) in windows.iter().enumerate() {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for &(date, value) in &dated_values {
            if window.contains(date) {
                x.push(date.to_string());
                y.push(value);
            }
        }
        let text = y.iter().map(|&v| format_value(v, precision)).collect();
        let label = window.anchor.to_string();

        traces.push(Trace {
            name: label.clone(),
            x,
            y,
            text,
        });
        controls.push(Control {
            label,
            visible_segment_ids: vec![id],
        });
    }

    debug!(
        "distribution on '{date_key}'/'{value_key}': {} windows of ±{window_size}d",
        windows.len()
    );

    Ok(DistributionSpec {
        windows,
        traces,
        controls,
    })
}
