//! Fake user generation and batch insertion.

use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use std::time::Instant;

use super::models::{SEED_EMAIL_DOMAIN, UserSeed};

/// Rows per INSERT, 7 params each.
const BATCH_SIZE: usize = 1000;

/// Generates `count` users in parallel. `offset` keeps emails and usernames
/// unique across repeated seeding runs.
pub fn generate_users(count: usize, offset: usize) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| generate_user(offset + idx))
        .collect()
}

fn generate_user(idx: usize) -> UserSeed {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let handle: String = first_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();

    UserSeed {
        email: format!("{}.{}+{}@{}", handle, idx, "seed", SEED_EMAIL_DOMAIN),
        username: format!("{}_{}", handle, idx),
        nickname: format!("{} {}", first_name, last_name),
        sex: (idx % 3) as i16,
        company: Some(CompanyName().fake()),
        introduce: Some(Sentence(4..10).fake()),
    }
}

/// Inserts users in chunks inside one transaction. Rows whose email or
/// username already exist are skipped.
pub async fn insert_users(
    db: &PgPool,
    users: &[UserSeed],
    password_hash: &str,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👥 Inserting {} users...", users.len());

    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        ids.extend(insert_users_chunk(&mut tx, chunk, password_hash).await?);
    }

    tx.commit().await?;

    println!("   ✓ Inserted {} users in {:?}", ids.len(), start_time.elapsed());
    Ok(ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
    password_hash: &str,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Postgres>::new(
        "INSERT INTO users (email, username, nickname, password, sex, company, introduce) ",
    );
    query.push_values(users, |mut row, user| {
        row.push_bind(&user.email)
            .push_bind(&user.username)
            .push_bind(&user.nickname)
            .push_bind(password_hash)
            .push_bind(user.sex)
            .push_bind(&user.company)
            .push_bind(&user.introduce);
    });
    query.push(" ON CONFLICT DO NOTHING RETURNING id");

    let ids: Vec<i64> = query.build_query_scalar().fetch_all(&mut **tx).await?;
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_users_unique_and_valid() {
        let users = generate_users(200, 0);
        assert_eq!(users.len(), 200);

        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        let usernames: HashSet<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(emails.len(), 200);
        assert_eq!(usernames.len(), 200);

        for user in &users {
            assert!(user.email.ends_with("@example.com"));
            assert!((0..=2).contains(&user.sex));
            assert!(user.username.len() <= 45);
        }
    }

    #[test]
    fn test_offset_shifts_identities() {
        let first = generate_users(1, 0);
        let second = generate_users(1, 1);
        assert!(first[0].username.ends_with("_0"));
        assert!(second[0].username.ends_with("_1"));
    }
}
