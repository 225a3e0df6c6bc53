//! Populates a development database with teachers, students, subjects and
//! marks.
//!
//! - [`users`]: teacher accounts
//! - [`students`]: students with sequential USNs
//! - [`subjects`]: subjects spread over teachers, plus a mark per student
//! - [`models`]: seed shapes and [`SeedConfig`]
//!
//! A single bcrypt hash at cost 4 is shared by every seeded account.

pub mod models;
pub mod students;
pub mod subjects;
pub mod users;

pub use models::SeedConfig;

use marksheet_core::hash_password_with_cost;
use sqlx::PgPool;
use std::time::Instant;

const SEED_HASH_COST: u32 = 4;

pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Teachers: {}", config.teachers);
    println!("   - Students: {}", config.students);
    println!("   - Subjects per teacher: {}", config.subjects_per_teacher);

    let password_hash = hash_password_with_cost(&config.password, SEED_HASH_COST)
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let teacher_ids = users::seed_teachers(db, config.teachers, &password_hash).await?;
    let student_ids = students::seed_students(db, config.students).await?;
    let subject_ids =
        subjects::seed_subjects(db, &teacher_ids, config.subjects_per_teacher).await?;
    subjects::seed_marks(db, &student_ids, &subject_ids).await?;

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    println!("   Seeded accounts use the password: {}", config.password);

    Ok(())
}

/// Removes everything except ADMIN accounts.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    println!("🧹 Clearing seeded data...");

    let mut tx = db.begin().await?;
    let marks = sqlx::query("DELETE FROM marks").execute(&mut *tx).await?;
    let subjects = sqlx::query("DELETE FROM subjects").execute(&mut *tx).await?;
    let students = sqlx::query("DELETE FROM students").execute(&mut *tx).await?;
    let teachers = sqlx::query("DELETE FROM users WHERE role = 'TEACHER'")
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    println!(
        "   ✓ Removed {} marks, {} subjects, {} students, {} teachers",
        marks.rows_affected(),
        subjects.rows_affected(),
        students.rows_affected(),
        teachers.rows_affected()
    );
    Ok(())
}
