//! Database seeding.
//!
//! Seeding hashes the shared password once at a low bcrypt cost, generates
//! rows in parallel with rayon and inserts them with multi-row statements
//! inside transactions.

pub mod catalog;
pub mod models;
pub mod users;

use bcrypt::hash;
use sqlx::PgPool;
use std::time::Instant;

pub use models::{CoursesPerCategory, SEED_PASSWORD, SeedConfig};

use models::SEED_EMAIL_DOMAIN;

/// Cost used for the shared seed password. Real accounts use the default.
const SEED_BCRYPT_COST: u32 = 4;

fn seed_email_pattern() -> String {
    format!("%@{}", SEED_EMAIL_DOMAIN)
}

/// Seeds settings, categories, users, courses and chapters.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Users: {}", config.num_users);
    println!(
        "   - Per category: {} courses, {} chapters each",
        config.courses_per_category.courses, config.courses_per_category.chapters_per_course
    );

    catalog::ensure_settings(db).await?;
    let category_ids = catalog::ensure_categories(db).await?;

    let password_hash = hash(SEED_PASSWORD, SEED_BCRYPT_COST)
        .map_err(|e| format!("Failed to hash password: {}", e))?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email LIKE $1")
        .bind(seed_email_pattern())
        .fetch_one(db)
        .await?;

    let seeds = users::generate_users(config.num_users, existing as usize);
    let mut author_ids = users::insert_users(db, &seeds, &password_hash).await?;

    if author_ids.is_empty() {
        author_ids = sqlx::query_scalar("SELECT id FROM users WHERE role = 100 ORDER BY id")
            .fetch_all(db)
            .await?;
    }

    let courses = catalog::generate_courses(&category_ids, &author_ids, &config.courses_per_category);
    if courses.is_empty() {
        println!("⚠️  No authors available, skipping courses");
    } else {
        catalog::insert_catalog(db, &courses, config.courses_per_category.chapters_per_course)
            .await?;
    }

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    println!("\n📝 Default password for all seeded users: {}", SEED_PASSWORD);

    Ok(())
}

/// Removes seeded users together with the courses, chapters and likes that
/// belong to them, then any seed category left empty. Administrators and
/// the settings row are kept.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded data...");

    let mut tx = db.begin().await?;
    let pattern = seed_email_pattern();

    let seeded_courses = "SELECT c.id FROM courses c JOIN users u ON u.id = c.user_id
         WHERE u.email LIKE $1 AND u.role <> 100";

    let chapters_deleted = sqlx::query(&format!(
        "DELETE FROM chapters WHERE course_id IN ({})",
        seeded_courses
    ))
    .bind(&pattern)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let courses_deleted = sqlx::query(&format!(
        "DELETE FROM courses WHERE id IN ({})",
        seeded_courses
    ))
    .bind(&pattern)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let users_deleted = sqlx::query("DELETE FROM users WHERE email LIKE $1 AND role <> 100")
        .bind(&pattern)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let categories_deleted = sqlx::query(
        "DELETE FROM categories c
         WHERE c.name = ANY($1)
         AND NOT EXISTS (SELECT 1 FROM courses WHERE courses.category_id = c.id)",
    )
    .bind(&models::SEED_CATEGORIES[..])
    .execute(&mut *tx)
    .await?
    .rows_affected();

    tx.commit().await?;

    println!(
        "   ✓ Deleted {} users, {} courses, {} chapters and {} categories in {:?}",
        users_deleted,
        courses_deleted,
        chapters_deleted,
        categories_deleted,
        start_time.elapsed()
    );
    println!("✅ Seeded data cleared successfully!");

    Ok(())
}
