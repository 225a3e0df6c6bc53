use fake::Fake;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;
use uuid::Uuid;

use super::models::{MarkSeed, SubjectSeed};

const CATALOGUE: [(&str, &str); 12] = [
    ("Data Structures", "CS"),
    ("Operating Systems", "CS"),
    ("Computer Networks", "CS"),
    ("Database Systems", "CS"),
    ("Compiler Design", "CS"),
    ("Discrete Mathematics", "MA"),
    ("Linear Algebra", "MA"),
    ("Probability and Statistics", "MA"),
    ("Digital Electronics", "EC"),
    ("Signals and Systems", "EC"),
    ("Engineering Physics", "PH"),
    ("Technical Writing", "HS"),
];

/// Spreads the catalogue over the given teachers. Codes stay unique by
/// numbering every generated subject.
pub fn generate_subjects(teacher_ids: &[Uuid], per_teacher: usize) -> Vec<SubjectSeed> {
    teacher_ids
        .iter()
        .flat_map(|&teacher_id| std::iter::repeat_n(teacher_id, per_teacher))
        .enumerate()
        .map(|(idx, teacher_id)| {
            let (name, prefix) = CATALOGUE[idx % CATALOGUE.len()];
            SubjectSeed {
                name: name.to_string(),
                code: format!("{}{}", prefix, 301 + idx),
                credits: (2..=4).fake(),
                teacher_id,
            }
        })
        .collect()
}

pub fn generate_marks(student_ids: &[Uuid], subject_ids: &[Uuid]) -> Vec<MarkSeed> {
    subject_ids
        .iter()
        .flat_map(|&subject_id| {
            student_ids.iter().map(move |&student_id| {
                let raw: f64 = (20.0..100.0).fake();
                MarkSeed {
                    student_id,
                    subject_id,
                    value: (raw * 10.0).round() / 10.0,
                }
            })
        })
        .collect()
}

pub async fn seed_subjects(
    db: &PgPool,
    teacher_ids: &[Uuid],
    per_teacher: usize,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    let subjects = generate_subjects(teacher_ids, per_teacher);
    println!("📚 Seeding {} subjects...", subjects.len());

    if subjects.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Postgres>::new("INSERT INTO subjects (name, code, credits, teacher_id) ");
    query.push_values(&subjects, |mut row, subject| {
        row.push_bind(&subject.name)
            .push_bind(&subject.code)
            .push_bind(subject.credits)
            .push_bind(subject.teacher_id);
    });
    query.push(" ON CONFLICT (code) DO NOTHING RETURNING id");

    let ids: Vec<Uuid> = query.build_query_scalar::<Uuid>().fetch_all(db).await?;

    println!(
        "   ✓ Inserted {} subjects in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

pub async fn seed_marks(
    db: &PgPool,
    student_ids: &[Uuid],
    subject_ids: &[Uuid],
) -> Result<usize, Box<dyn std::error::Error>> {
    // 3 params per mark
    const BATCH_SIZE: usize = 5000;

    let start_time = Instant::now();
    let marks = generate_marks(student_ids, subject_ids);
    println!("📝 Seeding {} marks...", marks.len());

    let mut tx = db.begin().await?;
    let mut inserted = 0;

    for chunk in marks.chunks(BATCH_SIZE) {
        let mut query = QueryBuilder::<Postgres>::new("INSERT INTO marks (student_id, subject_id, value) ");
        query.push_values(chunk, |mut row, mark| {
            row.push_bind(mark.student_id)
                .push_bind(mark.subject_id)
                .push_bind(mark.value);
        });
        query.push(" ON CONFLICT (student_id, subject_id) DO NOTHING");

        inserted += query.build().execute(&mut *tx).await?.rows_affected() as usize;
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} marks in {:?}",
        inserted,
        start_time.elapsed()
    );
    Ok(inserted)
}
