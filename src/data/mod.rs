/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  orderbook_benchmark.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  check header, parse rows → BenchmarkDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ BenchmarkDataset │  Vec<BenchmarkRow>, one per implementation
///   └──────────────────┘
/// ```

pub mod loader;
pub mod model;
