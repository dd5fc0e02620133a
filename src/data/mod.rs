/// Data layer: core types, loading, and label partitioning.
///
/// Architecture:
/// ```text
///   data.csv  (x, y, ..., label)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → Vec<Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cluster  │  labels 0..8, stop at first gap → Vec<Cluster>
///   └──────────┘
/// ```

pub mod cluster;
pub mod loader;
pub mod model;
