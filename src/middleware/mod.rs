//! Request extractors for authentication and authorization.
//!
//! - [`auth`]: [`AuthUser`](auth::AuthUser) resolves the `auth_token`
//!   cookie into an identity, or rejects with 401
//! - [`role`]: applies the ownership rules to a loaded resource, or rejects
//!   with 403
//!
//! ```ignore
//! async fn update_subject(auth_user: AuthUser, ...) -> Result<_, AppError> {
//!     let subject = SubjectService::find_subject(&state.db, id).await?;
//!     let resource = Resource::Subject { teacher_id: subject.teacher_id };
//!     ensure_allowed(&auth_user, Action::Update, &resource)?;
//!     // mutate
//! }
//! ```

pub mod auth;
pub mod role;
