use marksheet_core::AppError;
use sqlx::PgPool;
use tracing::instrument;

use super::model::{CreateStudentDto, Student};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            r#"INSERT INTO students (username, usn, name)
               VALUES ($1, $2, $3)
               RETURNING id, username, usn, name, created_at, updated_at"#,
        )
        .bind(&dto.username)
        .bind(&dto.usn)
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow::anyhow!(
                    "Student with this USN or username already exists"
                ));
            }
            AppError::database(e)
        })
    }

    #[instrument(skip(db))]
    pub async fn get_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"SELECT id, username, usn, name, created_at, updated_at
               FROM students
               ORDER BY name ASC"#,
        )
        .fetch_all(db)
        .await?;

        Ok(students)
    }
}
