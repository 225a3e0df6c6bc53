//! Student models, re-exported from `marksheet-models`.

pub use marksheet_models::students::*;
