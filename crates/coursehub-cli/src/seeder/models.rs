//! Seed records and seeding configuration.

/// Categories created by the seeder, in display order.
pub const SEED_CATEGORIES: [&str; 6] = [
    "Frontend",
    "Backend",
    "Mobile",
    "Database",
    "DevOps",
    "Machine Learning",
];

/// Seeded accounts use this email domain, which is how `clear-seed` finds
/// them.
pub const SEED_EMAIL_DOMAIN: &str = "example.com";

/// Shared password of every seeded account.
pub const SEED_PASSWORD: &str = "password123";

pub struct UserSeed {
    pub email: String,
    pub username: String,
    pub nickname: String,
    pub sex: i16,
    pub company: Option<String>,
    pub introduce: Option<String>,
}

pub struct CourseSeed {
    pub category_id: i64,
    pub user_id: i64,
    pub name: String,
    pub recommended: bool,
    pub introductory: bool,
    pub content: String,
}

pub struct ChapterSeed {
    pub course_id: i64,
    pub title: String,
    pub content: String,
    pub rank: i32,
}

/// Catalog size per category.
#[derive(Clone)]
pub struct CoursesPerCategory {
    pub courses: usize,
    pub chapters_per_course: usize,
}

impl Default for CoursesPerCategory {
    fn default() -> Self {
        Self {
            courses: 8,
            chapters_per_course: 6,
        }
    }
}

#[derive(Clone, Default)]
pub struct SeedConfig {
    pub num_users: usize,
    pub courses_per_category: CoursesPerCategory,
}

impl SeedConfig {
    pub fn new(num_users: usize) -> Self {
        Self {
            num_users,
            ..Default::default()
        }
    }

    pub fn with_courses(mut self, courses_per_category: CoursesPerCategory) -> Self {
        self.courses_per_category = courses_per_category;
        self
    }
}
