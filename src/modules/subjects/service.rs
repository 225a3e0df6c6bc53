use marksheet_auth::Role;
use marksheet_core::AppError;
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use super::model::{
    CreateSubjectDto, Subject, SubjectFilterParams, SubjectWithTeacher, SubjectWithTeacherRow,
    UpdateSubjectDto,
};

const SUBJECT_WITH_TEACHER: &str = r#"
    SELECT s.id, s.name, s.code, s.credits, s.teacher_id, s.created_at, s.updated_at,
           u.name AS teacher_name, u.email AS teacher_email
    FROM subjects s
    JOIN users u ON u.id = s.teacher_id"#;

fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AppError::conflict(anyhow::anyhow!("Subject with this code already exists"));
    }
    AppError::database(e)
}

fn subject_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Subject not found"))
}

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(db))]
    pub async fn create_subject(
        db: &PgPool,
        teacher_id: Uuid,
        dto: CreateSubjectDto,
    ) -> Result<Subject, AppError> {
        let subject = sqlx::query_as::<_, Subject>(
            r#"INSERT INTO subjects (name, code, credits, teacher_id)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, code, credits, teacher_id, created_at, updated_at"#,
        )
        .bind(&dto.name)
        .bind(&dto.code)
        .bind(dto.credits)
        .bind(teacher_id)
        .fetch_one(db)
        .await
        .map_err(map_write_error)?;

        info!(subject_id = %subject.id, code = %subject.code, "Subject created");
        Ok(subject)
    }

    #[instrument(skip(db))]
    pub async fn get_subjects(
        db: &PgPool,
        filters: SubjectFilterParams,
    ) -> Result<Vec<SubjectWithTeacher>, AppError> {
        let query = format!(
            "{} WHERE ($1::uuid IS NULL OR s.teacher_id = $1) ORDER BY s.name ASC",
            SUBJECT_WITH_TEACHER
        );

        let rows = sqlx::query_as::<_, SubjectWithTeacherRow>(&query)
            .bind(filters.teacher_id)
            .fetch_all(db)
            .await?;

        Ok(rows.into_iter().map(SubjectWithTeacher::from).collect())
    }

    #[instrument(skip(db))]
    pub async fn get_subject_by_id(db: &PgPool, id: Uuid) -> Result<SubjectWithTeacher, AppError> {
        let query = format!("{} WHERE s.id = $1", SUBJECT_WITH_TEACHER);

        sqlx::query_as::<_, SubjectWithTeacherRow>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?
            .map(SubjectWithTeacher::from)
            .ok_or_else(subject_not_found)
    }

    /// The bare subject row, used to decide ownership before a mutation.
    #[instrument(skip(db))]
    pub async fn find_subject(db: &PgPool, id: Uuid) -> Result<Subject, AppError> {
        sqlx::query_as::<_, Subject>(
            r#"SELECT id, name, code, credits, teacher_id, created_at, updated_at
               FROM subjects
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(subject_not_found)
    }

    /// True when `teacher_id` names a user with the TEACHER role. Admins
    /// cannot own subjects.
    #[instrument(skip(db))]
    pub async fn teacher_exists(db: &PgPool, teacher_id: Uuid) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND role = $2)",
        )
        .bind(teacher_id)
        .bind(Role::Teacher)
        .fetch_one(db)
        .await?;

        Ok(exists)
    }

    /// Applies the fields present in `dto`; absent fields keep their value.
    #[instrument(skip(db))]
    pub async fn update_subject(
        db: &PgPool,
        id: Uuid,
        dto: UpdateSubjectDto,
    ) -> Result<Subject, AppError> {
        sqlx::query_as::<_, Subject>(
            r#"UPDATE subjects
               SET name = COALESCE($2, name),
                   code = COALESCE($3, code),
                   credits = COALESCE($4, credits),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING id, name, code, credits, teacher_id, created_at, updated_at"#,
        )
        .bind(id)
        .bind(dto.name.as_deref())
        .bind(dto.code.as_deref())
        .bind(dto.credits)
        .fetch_optional(db)
        .await
        .map_err(map_write_error)?
        .ok_or_else(subject_not_found)
    }

    /// Deletes the subject and every mark recorded against it.
    #[instrument(skip(db))]
    pub async fn delete_subject(db: &PgPool, id: Uuid) -> Result<Subject, AppError> {
        let mut tx = db.begin().await?;

        let marks = sqlx::query("DELETE FROM marks WHERE subject_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let subject = sqlx::query_as::<_, Subject>(
            r#"DELETE FROM subjects
               WHERE id = $1
               RETURNING id, name, code, credits, teacher_id, created_at, updated_at"#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(subject_not_found)?;

        tx.commit().await?;

        info!(
            subject_id = %subject.id,
            marks_deleted = marks.rows_affected(),
            "Subject deleted"
        );
        Ok(subject)
    }
}
