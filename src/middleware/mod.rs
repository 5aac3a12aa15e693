//! Identity middleware.
//!
//! Both trust levels read the token from the `token` request header:
//!
//! - [`auth::require_user`]: verifies the token and stores
//!   [`auth::CurrentUser`] in the request extensions. No database access.
//! - [`admin::require_admin`]: additionally loads the user and requires the
//!   administrator role, storing [`admin::CurrentAdmin`].
//!
//! Both are applied with `middleware::from_fn_with_state` and short-circuit
//! with the failure envelope; the handler never runs on failure.
//!
//! ```ignore
//! Router::new()
//!     .nest("/users", init_users_router())
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_user));
//! ```

pub mod admin;
pub mod auth;
