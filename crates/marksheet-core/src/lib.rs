//! # Marksheet Core
//!
//! Foundational types shared by every Marksheet crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`serde`]: Lenient deserializers for numeric form fields
//!
//! # Example
//!
//! ```ignore
//! use marksheet_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secure_password")?;
//! if !verify_password("secure_password", &hash)? {
//!     return Err(AppError::unauthorized("Invalid email or password"));
//! }
//! ```

pub mod errors;
pub mod password;
pub mod serde;

pub use errors::AppError;
pub use password::{hash_password, hash_password_with_cost, verify_password};
