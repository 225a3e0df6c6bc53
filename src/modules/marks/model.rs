//! Mark models, re-exported from `marksheet-models`.

pub use marksheet_models::marks::*;
