/// Data layer: core types, the embedded tables, filtering, and aggregation.
///
/// Architecture:
/// ```text
///   embedded literals
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  materialize → LoanDataset / Vec<CourtRecord>
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │   filter    │  servicer selection → record indices
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ aggregate   │  group counts, means, derived court metrics
///   └────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
