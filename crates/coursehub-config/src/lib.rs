//! # CourseHub Config
//!
//! Configuration types for the CourseHub API, loaded from environment
//! variables. `.env` files are read by the binaries (via `dotenvy`) before any
//! of these constructors run.
//!
//! | Variable | Type | Default |
//! |----------|------|---------|
//! | `DATABASE_URL` | [`DatabaseConfig`] | required |
//! | `DATABASE_MAX_CONNECTIONS` | [`DatabaseConfig`] | `10` |
//! | `JWT_SECRET` | [`JwtConfig`] | development fallback |
//! | `ALLOWED_ORIGINS` | [`CorsConfig`] | localhost dev servers |
//! | `SERVER_HOST` / `SERVER_PORT` | [`ServerConfig`] | `0.0.0.0:3000` |

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
