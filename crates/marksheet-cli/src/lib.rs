//! # Marksheet CLI
//!
//! Administrative utilities behind the `marksheet-cli` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use marksheet_cli::{admin::create_admin, seeder::{seed_all, SeedConfig}};
//!
//! create_admin(&pool, "Ada Lovelace", "ada@example.com", "s3cret!").await?;
//! seed_all(&pool, SeedConfig::default()).await?;
//! ```

pub mod admin;
pub mod seeder;
