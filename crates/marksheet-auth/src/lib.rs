//! # Marksheet Auth
//!
//! The request authorization core of the Marksheet API:
//!
//! - [`identity`]: [`Role`] and the authenticated [`Identity`]
//! - [`claims`]: JWT payload carried by the `auth_token` cookie
//! - [`jwt`]: [`TokenService`] that issues and verifies tokens
//! - [`session`]: resolves a presented credential into an [`Identity`]
//! - [`authorization`]: role and ownership gate for every mutation
//!
//! # Request flow
//!
//! ```text
//! Unauthenticated --(cookie found)--> Authenticating --(verified)--> Authenticated
//! Authenticated --(authorize = Allow)--> Permitted
//! Authenticated --(authorize = Deny)---> Forbidden (403)
//! Authenticating --(verify failed)-----> Unauthenticated (401)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use marksheet_auth::{Action, Resource, TokenService, authorize, session};
//!
//! let tokens = TokenService::new(&jwt_config);
//! let token = tokens.issue(&identity)?;
//!
//! let caller = session::resolve(Some(&token), &tokens)?;
//! authorize(&caller, Action::Update, &Resource::Subject { teacher_id }).into_result()?;
//! ```

pub mod authorization;
pub mod claims;
pub mod identity;
pub mod jwt;
pub mod session;

pub use authorization::{Action, AuthorizationError, DenyReason, Resource, Verdict, authorize};
pub use claims::Claims;
pub use identity::{Identity, Role};
pub use jwt::{TokenService, VerificationError};
pub use session::AuthError;
