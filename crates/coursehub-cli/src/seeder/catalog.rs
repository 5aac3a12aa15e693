//! Categories, courses and chapters.

use fake::Fake;
use fake::faker::boolean::en::Boolean;
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;

use super::models::{ChapterSeed, CourseSeed, CoursesPerCategory, SEED_CATEGORIES};

const BATCH_SIZE: usize = 1000;

/// Creates the seed categories that do not exist yet and returns the ids of
/// all of them.
pub async fn ensure_categories(db: &PgPool) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut query = QueryBuilder::<Postgres>::new("INSERT INTO categories (name, rank) ");
    query.push_values(SEED_CATEGORIES.iter().enumerate(), |mut row, (rank, name)| {
        row.push_bind(*name).push_bind(rank as i32 + 1);
    });
    query.push(" ON CONFLICT (name) DO NOTHING");
    query.build().execute(db).await?;

    let ids: Vec<i64> =
        sqlx::query_scalar("SELECT id FROM categories WHERE name = ANY($1) ORDER BY rank, id")
            .bind(&SEED_CATEGORIES[..])
            .fetch_all(db)
            .await?;

    println!("   ✓ {} categories ready", ids.len());
    Ok(ids)
}

/// Makes sure the single settings row exists.
pub async fn ensure_settings(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    sqlx::query(
        "INSERT INTO settings (id, name, copyright) VALUES (1, 'CourseHub', 'CourseHub')
         ON CONFLICT (id) DO NOTHING",
    )
    .execute(db)
    .await?;

    Ok(())
}

/// Spreads `per_category.courses` courses over every category, authored
/// round-robin by `author_ids`.
pub fn generate_courses(
    category_ids: &[i64],
    author_ids: &[i64],
    per_category: &CoursesPerCategory,
) -> Vec<CourseSeed> {
    if author_ids.is_empty() {
        return Vec::new();
    }

    let specs: Vec<(i64, usize)> = category_ids
        .iter()
        .flat_map(|&category_id| (0..per_category.courses).map(move |idx| (category_id, idx)))
        .collect();

    specs
        .into_par_iter()
        .enumerate()
        .map(|(n, (category_id, idx))| {
            let words: Vec<String> = Words(2..4).fake();
            CourseSeed {
                category_id,
                user_id: author_ids[n % author_ids.len()],
                name: capitalize(&words.join(" ")),
                recommended: Boolean(30).fake(),
                introductory: idx == 0,
                content: Paragraph(2..4).fake(),
            }
        })
        .collect()
}

pub fn generate_chapters(course_ids: &[i64], chapters_per_course: usize) -> Vec<ChapterSeed> {
    course_ids
        .par_iter()
        .flat_map(|&course_id| {
            (0..chapters_per_course)
                .map(|idx| ChapterSeed {
                    course_id,
                    title: Sentence(2..5).fake(),
                    content: Paragraph(3..6).fake(),
                    rank: idx as i32 + 1,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Inserts courses and their chapters in one transaction and sets each
/// course's `chapters_count` from what was inserted.
pub async fn insert_catalog(
    db: &PgPool,
    courses: &[CourseSeed],
    chapters_per_course: usize,
) -> Result<(usize, usize), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📚 Inserting {} courses...", courses.len());

    let mut tx = db.begin().await?;
    let mut course_ids: Vec<i64> = Vec::with_capacity(courses.len());

    for chunk in courses.chunks(BATCH_SIZE) {
        let mut query = QueryBuilder::<Postgres>::new(
            "INSERT INTO courses (category_id, user_id, name, recommended, introductory, content) ",
        );
        query.push_values(chunk, |mut row, course| {
            row.push_bind(course.category_id)
                .push_bind(course.user_id)
                .push_bind(&course.name)
                .push_bind(course.recommended)
                .push_bind(course.introductory)
                .push_bind(&course.content);
        });
        query.push(" RETURNING id");

        let ids: Vec<i64> = query.build_query_scalar().fetch_all(&mut *tx).await?;
        course_ids.extend(ids);
    }

    let chapters = generate_chapters(&course_ids, chapters_per_course);
    for chunk in chapters.chunks(BATCH_SIZE) {
        let mut query =
            QueryBuilder::<Postgres>::new("INSERT INTO chapters (course_id, title, content, rank) ");
        query.push_values(chunk, |mut row, chapter| {
            row.push_bind(chapter.course_id)
                .push_bind(&chapter.title)
                .push_bind(&chapter.content)
                .push_bind(chapter.rank);
        });
        query.build().execute(&mut *tx).await?;
    }

    sqlx::query(
        "UPDATE courses SET chapters_count =
            (SELECT COUNT(*) FROM chapters WHERE chapters.course_id = courses.id)
         WHERE id = ANY($1)",
    )
    .bind(&course_ids)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} courses and {} chapters in {:?}",
        course_ids.len(),
        chapters.len(),
        start_time.elapsed()
    );
    Ok((course_ids.len(), chapters.len()))
}
