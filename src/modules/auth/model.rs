//! Authentication payloads, re-exported from `marksheet-models`.

pub use marksheet_models::auth::*;
pub use marksheet_models::users::{User, UserCredentials};
