//! # Marksheet Models
//!
//! Database rows, request DTOs and response shapes for the Marksheet API.
//!
//! # Modules
//!
//! - [`auth`]: Registration, login and session payloads
//! - [`users`]: User accounts (teachers and admins)
//! - [`students`]: Registered students
//! - [`subjects`]: Subjects owned by a teacher
//! - [`marks`]: One mark per student per subject

pub mod auth;
pub mod marks;
pub mod students;
pub mod subjects;
pub mod users;

pub use auth::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto, RegisterResponse,
    SessionResponse,
};
pub use marks::{
    Mark, MarkFilterParams, MarkWithDetails, StudentSummary, SubjectSummary, UpsertMarkDto,
};
pub use students::{CreateStudentDto, Student};
pub use subjects::{
    CreateSubjectDto, Subject, SubjectFilterParams, SubjectWithTeacher, TeacherSummary,
    UpdateSubjectDto,
};
pub use users::{User, UserCredentials};
