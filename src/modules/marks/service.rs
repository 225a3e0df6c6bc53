use marksheet_core::AppError;
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use super::model::{Mark, MarkFilterParams, MarkWithDetails, MarkWithDetailsRow, UpsertMarkDto};

pub struct MarkService;

impl MarkService {
    #[instrument(skip(db))]
    pub async fn student_exists(db: &PgPool, student_id: Uuid) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
                .bind(student_id)
                .fetch_one(db)
                .await?;

        Ok(exists)
    }

    /// Inserts the mark, or replaces the value of the existing mark for the
    /// same (student, subject) pair.
    #[instrument(skip(db))]
    pub async fn upsert_mark(db: &PgPool, dto: UpsertMarkDto) -> Result<Mark, AppError> {
        let mark = sqlx::query_as::<_, Mark>(
            r#"INSERT INTO marks (student_id, subject_id, value)
               VALUES ($1, $2, $3)
               ON CONFLICT (student_id, subject_id)
               DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
               RETURNING id, value, student_id, subject_id, created_at, updated_at"#,
        )
        .bind(dto.student_id)
        .bind(dto.subject_id)
        .bind(dto.value)
        .fetch_one(db)
        .await
        .map_err(|e| {
            // The subject or student vanished between the existence checks and the insert.
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_foreign_key_violation()
            {
                return AppError::not_found(anyhow::anyhow!("Student or subject not found"));
            }
            AppError::database(e)
        })?;

        info!(
            mark_id = %mark.id,
            student_id = %mark.student_id,
            subject_id = %mark.subject_id,
            "Mark recorded"
        );
        Ok(mark)
    }

    #[instrument(skip(db))]
    pub async fn get_marks(
        db: &PgPool,
        filters: MarkFilterParams,
    ) -> Result<Vec<MarkWithDetails>, AppError> {
        let rows = sqlx::query_as::<_, MarkWithDetailsRow>(
            r#"SELECT m.id, m.value, m.student_id, m.subject_id, m.created_at, m.updated_at,
                      st.name AS student_name, st.usn AS student_usn,
                      st.username AS student_username,
                      su.name AS subject_name, su.code AS subject_code,
                      su.credits AS subject_credits
               FROM marks m
               JOIN students st ON st.id = m.student_id
               JOIN subjects su ON su.id = m.subject_id
               WHERE ($1::uuid IS NULL OR m.subject_id = $1)
                 AND ($2::uuid IS NULL OR m.student_id = $2)
               ORDER BY st.name ASC, su.name ASC"#,
        )
        .bind(filters.subject_id)
        .bind(filters.student_id)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(MarkWithDetails::from).collect())
    }
}
