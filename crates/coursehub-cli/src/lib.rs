//! # CourseHub CLI
//!
//! Administration and database seeding utilities for CourseHub.
//!
//! ## Usage
//!
//! ```ignore
//! use coursehub_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(50); // 50 users with default catalog sizes
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
