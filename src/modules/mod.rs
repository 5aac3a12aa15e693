//! Feature modules.
//!
//! Each module keeps its HTTP handlers in `controller.rs` (and
//! `admin_controller.rs` when it also has an admin surface), its queries in
//! `service.rs` and its routes in `router.rs`. Request and response types
//! live in `coursehub-models`.

pub mod articles;
pub mod auth;
pub mod categories;
pub mod chapters;
pub mod charts;
pub mod courses;
pub mod health;
pub mod home;
pub mod likes;
pub mod search;
pub mod settings;
pub mod users;
