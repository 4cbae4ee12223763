/// Data layer: core types, loading, filtering, and chart aggregation.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TrendingDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ TrendingDataset│  Vec<VideoRecord>, category + date indexes
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  date-range + category predicates → row indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  top-channel ranking, engagement projection
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
