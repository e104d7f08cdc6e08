use thiserror::Error;

// ---------------------------------------------------------------------------
// Error – everything the chart helpers can reject
// ---------------------------------------------------------------------------

/// Errors raised by the segmentation, windowing and spec-building helpers.
///
/// All of these are raised synchronously before any output is assembled;
/// no partial spec is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input dataset has zero rows.
    #[error("dataset is empty")]
    EmptyDataset,

    /// A named column is not part of the dataset schema.
    #[error("column '{column}' not found in dataset schema")]
    MissingColumn { column: String },

    /// A negative window size was passed to the date-range builder.
    #[error("window size must be non-negative, got {size}")]
    InvalidWindow { size: i64 },

    /// The waterfall measure list does not line up with the x labels.
    #[error("got {measures} measures for {labels} x labels")]
    MeasureMismatch { measures: usize, labels: usize },

    /// A value column holds something that is not a number.
    #[error("column '{column}' row {row}: cell is not numeric")]
    NonNumericCell { column: String, row: usize },

    /// A date column holds something that is not a date.
    #[error("column '{column}' row {row}: cell is not a date")]
    NonDateCell { column: String, row: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(Error::EmptyDataset.to_string(), "dataset is empty");
        assert_eq!(
            Error::MissingColumn {
                column: "month".into()
            }
            .to_string(),
            "column 'month' not found in dataset schema"
        );
        assert_eq!(
            Error::InvalidWindow { size: -3 }.to_string(),
            "window size must be non-negative, got -3"
        );
        assert_eq!(
            Error::MeasureMismatch {
                measures: 1,
                labels: 2
            }
            .to_string(),
            "got 1 measures for 2 x labels"
        );
        assert_eq!(
            Error::NonNumericCell {
                column: "net".into(),
                row: 4
            }
            .to_string(),
            "column 'net' row 4: cell is not numeric"
        );
        assert_eq!(
            Error::NonDateCell {
                column: "date".into(),
                row: 0
            }
            .to_string(),
            "column 'date' row 0: cell is not a date"
        );
    }
}
