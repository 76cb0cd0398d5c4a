/// Data layer: table model and the three pipeline stages.
///
/// Architecture:
/// ```text
///   measurements .csv
///        │
///        ▼
///   ┌──────────┐
///   │ extract  │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform │  schema check, numeric coercion, pH range, completeness
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   load   │  Table → summary .csv
///   └──────────┘
/// ```

pub mod extract;
pub mod load;
pub mod model;
pub mod transform;

pub use extract::extract;
pub use load::load;
pub use model::{Row, Table, Value};
pub use transform::transform;
