//! Seed data shapes and the knobs that control how much gets generated.

use marksheet_auth::Role;
use uuid::Uuid;

pub struct UserSeed {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

pub struct StudentSeed {
    pub username: String,
    pub usn: String,
    pub name: String,
}

pub struct SubjectSeed {
    pub name: String,
    pub code: String,
    pub credits: i32,
    pub teacher_id: Uuid,
}

pub struct MarkSeed {
    pub student_id: Uuid,
    pub subject_id: Uuid,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub teachers: usize,
    pub students: usize,
    pub subjects_per_teacher: usize,
    /// Every seeded account shares this password.
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            teachers: 5,
            students: 60,
            subjects_per_teacher: 2,
            password: "password123".to_string(),
        }
    }
}
