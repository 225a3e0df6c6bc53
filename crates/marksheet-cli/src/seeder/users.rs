use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use marksheet_auth::Role;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;
use uuid::Uuid;

use super::models::UserSeed;

pub fn generate_teachers(count: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            UserSeed {
                email: format!(
                    "{}.{}+teacher{}@example.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase(),
                    idx
                ),
                name: format!("{} {}", first_name, last_name),
                password_hash: password_hash.to_string(),
                role: Role::Teacher,
            }
        })
        .collect()
}

pub async fn seed_teachers(
    db: &PgPool,
    count: usize,
    password_hash: &str,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👩‍🏫 Seeding {} teachers...", count);

    let users = generate_teachers(count, password_hash);
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Postgres>::new("INSERT INTO users (name, email, password, role) ");
    query.push_values(&users, |mut row, user| {
        row.push_bind(&user.name)
            .push_bind(&user.email)
            .push_bind(&user.password_hash)
            .push_bind(user.role);
    });
    query.push(" RETURNING id");

    let ids: Vec<Uuid> = query.build_query_scalar::<Uuid>().fetch_all(db).await?;

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_teacher_emails_are_unique() {
        let teachers = generate_teachers(50, "hash");
        let emails: HashSet<_> = teachers.iter().map(|t| t.email.as_str()).collect();
        assert_eq!(emails.len(), 50);
        assert!(teachers.iter().all(|t| t.role == Role::Teacher));
    }
}
