use fake::Fake;
use fake::faker::name::en::Name;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;
use uuid::Uuid;

use super::models::StudentSeed;

const BATCH_SIZE: usize = 1000;

/// USNs follow the `1MS24CS001` shape: college, year, branch, roll number.
pub fn generate_students(count: usize) -> Vec<StudentSeed> {
    (0..count)
        .map(|idx| {
            let name: String = Name().fake();
            let usn = format!("1MS24CS{:03}", idx + 1);
            StudentSeed {
                username: usn.to_lowercase(),
                usn,
                name,
            }
        })
        .collect()
}

pub async fn seed_students(
    db: &PgPool,
    count: usize,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", count);

    let students = generate_students(count);
    let mut ids = Vec::with_capacity(students.len());
    let mut tx = db.begin().await?;

    for chunk in students.chunks(BATCH_SIZE) {
        let mut query = QueryBuilder::<Postgres>::new("INSERT INTO students (username, usn, name) ");
        query.push_values(chunk, |mut row, student| {
            row.push_bind(&student.username)
                .push_bind(&student.usn)
                .push_bind(&student.name);
        });
        query.push(" ON CONFLICT DO NOTHING RETURNING id");

        let chunk_ids: Vec<Uuid> = query.build_query_scalar::<Uuid>().fetch_all(&mut *tx).await?;
        ids.extend(chunk_ids);
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_usns() {
        let students = generate_students(3);
        assert_eq!(students[0].usn, "1MS24CS001");
        assert_eq!(students[2].username, "1ms24cs003");
    }
}
