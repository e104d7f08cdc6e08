//! Data layer: core types and loading.
//!
//! Architecture:
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset   │  Vec<Row>, column index
//!   └──────────┘
//!        │
//!        ▼
//!  segment / window / spec builders
//! ```

pub mod loader;
pub mod model;
