//! # CourseHub API
//!
//! REST backend for a course platform: users, categories, courses, chapters,
//! articles, likes and a single site settings record, with a public surface
//! for end users and an admin surface under `/admin`.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── coursehub-core/           # AppError, response envelope, pagination, QuerySpec, passwords
//! ├── coursehub-config/         # Environment configuration
//! ├── coursehub-auth/           # Token claims, issuing and verification
//! ├── coursehub-db/             # Pool setup and QuerySpec rendering
//! ├── coursehub-models/         # Rows, DTOs and response payloads
//! ├── coursehub-observability/  # Tracing, request logging, Prometheus
//! └── coursehub-cli/            # create-admin, seed, clear-seed
//! src/
//! ├── middleware/               # require_user, require_admin
//! ├── modules/                  # Feature modules (controller, service, router)
//! ├── docs.rs                   # OpenAPI document
//! ├── router.rs                 # Route tree and global layers
//! ├── state.rs                  # AppState
//! └── validator.rs              # ValidatedJson / ValidatedQuery / ValidatedPath
//! ```
//!
//! ## Authentication
//!
//! Clients send the token returned by `POST /auth/sign_in` (or
//! `POST /admin/auth/sign_in`) in the `token` header. Tokens are HS256 JWTs
//! valid for 30 days. The user surface only checks the token; the admin
//! surface also loads the user and requires the administrator role.
//!
//! ## Responses
//!
//! Every response is `{status, message, data}` on success or
//! `{status: false, message, errors}` on failure. Internal errors carry
//! `error` instead of `errors`.
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use coursehub_auth;
pub use coursehub_config;
pub use coursehub_core;
pub use coursehub_db;
pub use coursehub_models;
pub use coursehub_observability;
