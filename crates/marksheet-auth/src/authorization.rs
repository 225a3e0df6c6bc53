//! Role and ownership rules for every resource the API exposes.
//!
//! | Action | Student | Subject / Mark (TEACHER) | Subject / Mark (ADMIN) |
//! |--------|---------|--------------------------|------------------------|
//! | Read   | allow   | allow                    | allow                  |
//! | Create | allow   | owner only               | allow                  |
//! | Update | allow   | owner only               | allow                  |
//! | Delete | allow   | owner only               | allow                  |
//!
//! For a subject being created, the owner is the proposed `teacher_id`.
//! For a mark, the owner is the teacher of the mark's subject.
//!
//! [`authorize`] is a pure function: the same inputs always produce the
//! same [`Verdict`].

use marksheet_core::AppError;
use uuid::Uuid;

use crate::identity::{Identity, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

/// The target of an action, reduced to the fields the rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Student,
    Subject { teacher_id: Uuid },
    Mark { subject_teacher_id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotOwner,
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DenyReason::NotOwner => f.write_str("not owner"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Forbidden: {0}")]
    Forbidden(DenyReason),
}

impl AuthorizationError {
    pub fn to_app_error(&self) -> AppError {
        AppError::forbidden(self.to_string())
    }
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    pub fn into_result(self) -> Result<(), AuthorizationError> {
        match self {
            Verdict::Allow => Ok(()),
            Verdict::Deny(reason) => Err(AuthorizationError::Forbidden(reason)),
        }
    }
}

pub fn authorize(identity: &Identity, action: Action, resource: &Resource) -> Verdict {
    if action == Action::Read {
        return Verdict::Allow;
    }

    match identity.role {
        Role::Admin => Verdict::Allow,
        Role::Teacher => match resource {
            Resource::Student => Verdict::Allow,
            Resource::Subject { teacher_id } => owned_by(identity, *teacher_id),
            Resource::Mark { subject_teacher_id } => owned_by(identity, *subject_teacher_id),
        },
    }
}

fn owned_by(identity: &Identity, owner: Uuid) -> Verdict {
    if identity.user_id == owner {
        Verdict::Allow
    } else {
        Verdict::Deny(DenyReason::NotOwner)
    }
}
