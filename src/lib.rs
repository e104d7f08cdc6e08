//! Data segmentation and chart-spec helpers for interactive notebook charts.
//!
//! The crate takes a tabular dataset (a timestamp-like column plus numeric
//! columns) and produces plain descriptors — traces and dropdown controls —
//! that an external charting call turns into a waterfall or distribution
//! figure.  No rendering happens here.
//!
//! * [`segment`] partitions a dataset by a bucket column and emits one
//!   visibility toggle per bucket.
//! * [`build_ranges`] computes symmetric date windows around anchor dates.
//! * [`waterfall_spec`] / [`distribution_spec`] assemble the full data side
//!   of the two chart types on top of those.

pub mod data;
pub mod error;
pub mod segment;
pub mod spec;
pub mod window;

pub use data::loader::load_file;
pub use data::model::{Dataset, Row, Value};
pub use error::{Error, Result};
pub use segment::{Control, Segment, SegmentOrder, segment, segment_with_order};
pub use spec::distribution::{DistributionSpec, distribution_spec};
pub use spec::waterfall::{Measure, WaterfallSpec, waterfall_spec};
pub use spec::Trace;
pub use window::{DateWindow, build_ranges};
