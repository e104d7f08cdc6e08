use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::model::{Dataset, Value};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Segment / Control – dropdown-facing descriptors
// ---------------------------------------------------------------------------

/// A named subset of dataset rows sharing one bucket value.
///
/// `row_indices` index into the caller's dataset; the segment never copies
/// rows and is not retained after the chart spec is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Position of this segment in the output sequence.
    pub id: usize,
    /// The bucket value rendered as a human-readable string.
    pub label: String,
    /// Indices of the rows belonging to this bucket, in dataset order.
    pub row_indices: Vec<usize>,
}

/// A UI toggle descriptor mapping a dropdown option to the segments it
/// reveals.  Consumed by the external rendering call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Text shown in the dropdown.
    pub label: String,
    /// Ids of the segments this option makes visible.
    pub visible_segment_ids: Vec<usize>,
}

/// Ordering of the emitted segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentOrder {
    /// Bucket values appear in the order they are first seen in the dataset.
    #[default]
    FirstSeen,
    /// Bucket values appear in their natural sort order.
    Sorted,
}

// ---------------------------------------------------------------------------
// Segmenter
// ---------------------------------------------------------------------------

/// Partition the dataset by the value of `bucket_key`, first-seen order.
///
/// Returns one [`Segment`] per distinct bucket value and one matching
/// [`Control`] per segment.  The union of all segment row sets is exactly
/// the dataset rows; the input is not mutated.
///
/// # Errors
/// * [`Error::EmptyDataset`] if the dataset has zero rows.
/// * [`Error::MissingColumn`] if `bucket_key` is not in the schema.
pub fn segment(dataset: &Dataset, bucket_key: &str) -> Result<(Vec<Segment>, Vec<Control>)> {
    segment_with_order(dataset, bucket_key, SegmentOrder::FirstSeen)
}

/// [`segment`] with an explicit [`SegmentOrder`].
pub fn segment_with_order(
    dataset: &Dataset,
    bucket_key: &str,
    order: SegmentOrder,
) -> Result<(Vec<Segment>, Vec<Control>)> {
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if !dataset.has_column(bucket_key) {
        return Err(Error::MissingColumn {
            column: bucket_key.to_string(),
        });
    }

    // Buckets in first-seen order; position map avoids a linear scan per row.
    let mut buckets: Vec<(Value, Vec<usize>)> = Vec::new();
    let mut positions: HashMap<Value, usize> = HashMap::new();

    for (idx, row) in dataset.rows.iter().enumerate() {
        // Rows without the bucket cell still belong somewhere: Null bucket.
        let val = row.get(bucket_key).cloned().unwrap_or(Value::Null);
        match positions.get(&val) {
            Some(&pos) => buckets[pos].1.push(idx),
            None => {
                positions.insert(val.clone(), buckets.len());
                buckets.push((val, vec![idx]));
            }
        }
    }

    if order == SegmentOrder::Sorted {
        buckets.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    debug!(
        "segmented {} rows on '{bucket_key}' into {} buckets",
        dataset.len(),
        buckets.len()
    );

    let segments: Vec<Segment> = buckets
        .into_iter()
        .enumerate()
        .map(|(id, (val, row_indices))| Segment {
            id,
            label: val.to_string(),
            row_indices,
        })
        .collect();

    let controls: Vec<Control> = segments
        .iter()
        .map(|seg| Control {
            label: seg.label.clone(),
            visible_segment_ids: vec![seg.id],
        })
        .collect();

    Ok((segments, controls))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn month_dataset() -> Dataset {
        let rows: Vec<Row> = [("2023-01", 1), ("2023-02", 2), ("2023-01", 3)]
            .iter()
            .map(|&(m, v)| {
                let mut row = Row::new();
                row.insert("date".into(), Value::String(m.into()));
                row.insert("v".into(), Value::Integer(v));
                row
            })
            .collect();
        Dataset::from_rows(rows)
    }

    #[test]
    fn groups_rows_by_bucket_in_first_seen_order() {
        let ds = month_dataset();
        let (segments, controls) = segment(&ds, "date").unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "2023-01");
        assert_eq!(segments[0].row_indices, vec![0, 2]);
        assert_eq!(segments[1].label, "2023-02");
        assert_eq!(segments[1].row_indices, vec![1]);

        assert_eq!(controls.len(), 2);
        assert_eq!(controls[0].label, "2023-01");
        assert_eq!(controls[0].visible_segment_ids, vec![0]);
        assert_eq!(controls[1].visible_segment_ids, vec![1]);
    }

    #[test]
    fn union_of_segments_covers_every_row_once() {
        let ds = month_dataset();
        let (segments, _) = segment(&ds, "date").unwrap();

        let mut all: Vec<usize> = segments
            .iter()
            .flat_map(|s| s.row_indices.iter().copied())
            .collect();
        all.sort();
        assert_eq!(all, vec![0, 1, 2]);
    }

    #[test]
    fn sorted_order_uses_natural_value_order() {
        let rows: Vec<Row> = ["2023-03", "2023-01", "2023-02"]
            .iter()
            .map(|&m| {
                let mut row = Row::new();
                row.insert("date".into(), Value::String(m.into()));
                row
            })
            .collect();
        let ds = Dataset::from_rows(rows);

        let (first_seen, _) = segment(&ds, "date").unwrap();
        let labels: Vec<&str> = first_seen.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["2023-03", "2023-01", "2023-02"]);

        let (sorted, _) = segment_with_order(&ds, "date", SegmentOrder::Sorted).unwrap();
        let labels: Vec<&str> = sorted.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["2023-01", "2023-02", "2023-03"]);
        // Ids follow the emitted order, so controls stay aligned.
        assert_eq!(sorted[0].id, 0);
        assert_eq!(sorted[2].id, 2);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let ds = Dataset::from_rows(Vec::new());
        assert_eq!(segment(&ds, "date"), Err(Error::EmptyDataset));
    }

    #[test]
    fn missing_bucket_column_is_rejected() {
        let ds = month_dataset();
        assert_eq!(
            segment(&ds, "timestamp"),
            Err(Error::MissingColumn {
                column: "timestamp".into()
            })
        );
    }

    #[test]
    fn rows_without_the_bucket_cell_fall_into_a_null_segment() {
        let mut full = Row::new();
        full.insert("date".into(), Value::String("2023-01".into()));
        full.insert("v".into(), Value::Integer(1));
        let mut sparse = Row::new();
        sparse.insert("v".into(), Value::Integer(2));
        let ds = Dataset::from_rows(vec![full, sparse]);

        let (segments, _) = segment(&ds, "date").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].label, "<null>");
        assert_eq!(segments[1].row_indices, vec![1]);
    }
}
