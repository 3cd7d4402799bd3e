/// Data layer: values, loading, coercion, aggregation and slicing.
///
/// Architecture:
/// ```text
///   .csv file               caller-built rows
///       │                          │
///       ▼                          │
///   ┌──────────┐                   │
///   │  loader   │  split lines → Dataframe of Text cells
///   └──────────┘                   │
///       │                          │
///       ▼                          ▼
///   ┌──────────────────────────────────┐
///   │ model: Value, Dataframe, shapes   │
///   └──────────────────────────────────┘
///       │              │              │
///       ▼              ▼              ▼
///   ┌─────────┐   ┌─────────┐   ┌─────────┐
///   │ numeric  │   │  stats   │   │  slice   │
///   └─────────┘   └─────────┘   └─────────┘
///   validate,      mean, sum,     filter rows,
///   coerce column  median         project, flatten
/// ```

pub mod loader;
pub mod model;
pub mod numeric;
pub mod slice;
pub mod stats;
