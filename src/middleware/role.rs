use marksheet_auth::{Action, Resource, authorize};
use marksheet_core::AppError;
use tracing::warn;

use crate::middleware::auth::AuthUser;

/// Fails with 403 unless `auth_user` may perform `action` on `resource`.
pub fn ensure_allowed(
    auth_user: &AuthUser,
    action: Action,
    resource: &Resource,
) -> Result<(), AppError> {
    authorize(auth_user.identity(), action, resource)
        .into_result()
        .map_err(|e| {
            warn!(
                user_id = %auth_user.user_id(),
                role = %auth_user.identity().role,
                ?action,
                ?resource,
                "Authorization denied"
            );
            e.to_app_error()
        })
}
