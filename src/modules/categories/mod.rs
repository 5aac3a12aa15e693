pub mod admin_controller;
pub mod controller;
pub mod router;
pub mod service;

pub use router::{init_admin_categories_router, init_categories_router};
