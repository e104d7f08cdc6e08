use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// DateWindow – a symmetric date range around an anchor
// ---------------------------------------------------------------------------

/// A computed start/end date pair centered on an anchor date.
///
/// Invariant: `start <= anchor <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub anchor: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Whether a date falls inside the window (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// ---------------------------------------------------------------------------
// Date-range builder
// ---------------------------------------------------------------------------

/// Build one [`DateWindow`] per anchor date, in input order.
///
/// `window_size` is a day count: `start = anchor - window_size`,
/// `end = anchor + window_size`.  A size of `0` yields a degenerate window
/// with `start == end == anchor`.  Overlapping windows are not merged or
/// deduplicated; filtering the dataset against them is the caller's job.
///
/// # Errors
/// [`Error::InvalidWindow`] if `window_size` is negative.
pub fn build_ranges(anchor_dates: &[NaiveDate], window_size: i64) -> Result<Vec<DateWindow>> {
    if window_size < 0 {
        return Err(Error::InvalidWindow { size: window_size });
    }
    let offset = Days::new(window_size as u64);

    Ok(anchor_dates
        .iter()
        .map(|&anchor| DateWindow {
            anchor,
            // Saturate at the calendar bounds to keep start <= anchor <= end.
            start: anchor.checked_sub_days(offset).unwrap_or(NaiveDate::MIN),
            end: anchor.checked_add_days(offset).unwrap_or(NaiveDate::MAX),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_window_per_anchor_in_input_order() {
        let anchors = [date(2023, 6, 15), date(2023, 1, 3)];
        let windows = build_ranges(&anchors, 5).unwrap();

        assert_eq!(windows.len(), 2);
        assert_eq!(
            windows[0],
            DateWindow {
                anchor: date(2023, 6, 15),
                start: date(2023, 6, 10),
                end: date(2023, 6, 20),
            }
        );
        // Crosses a month boundary.
        assert_eq!(windows[1].start, date(2022, 12, 29));
        assert_eq!(windows[1].end, date(2023, 1, 8));
    }

    #[test]
    fn window_invariants_hold() {
        let anchors = [date(2020, 2, 29), date(2023, 12, 31)];
        for size in [0i64, 1, 7, 30, 365] {
            for w in build_ranges(&anchors, size).unwrap() {
                assert!(w.start <= w.anchor && w.anchor <= w.end);
                assert_eq!((w.end - w.start).num_days(), 2 * size);
            }
        }
    }

    #[test]
    fn zero_size_is_a_degenerate_window() {
        let windows = build_ranges(&[date(2023, 6, 15)], 0).unwrap();
        assert_eq!(windows[0].start, windows[0].anchor);
        assert_eq!(windows[0].end, windows[0].anchor);
        assert!(windows[0].contains(date(2023, 6, 15)));
        assert!(!windows[0].contains(date(2023, 6, 16)));
    }

    #[test]
    fn negative_size_is_rejected() {
        assert_eq!(
            build_ranges(&[date(2023, 6, 15)], -1),
            Err(Error::InvalidWindow { size: -1 })
        );
    }

    #[test]
    fn overlapping_windows_are_kept_independent() {
        let anchors = [date(2023, 6, 15), date(2023, 6, 17)];
        let windows = build_ranges(&anchors, 5).unwrap();
        assert_eq!(windows.len(), 2);
        assert!(windows[0].contains(date(2023, 6, 16)));
        assert!(windows[1].contains(date(2023, 6, 16)));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let w = build_ranges(&[date(2023, 6, 15)], 5).unwrap()[0];
        assert!(w.contains(date(2023, 6, 10)));
        assert!(w.contains(date(2023, 6, 20)));
        assert!(!w.contains(date(2023, 6, 9)));
        assert!(!w.contains(date(2023, 6, 21)));
    }
}
