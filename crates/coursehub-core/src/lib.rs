//! # CourseHub Core
//!
//! Core types, errors, and utilities for the CourseHub API.
//!
//! This crate provides foundational types used throughout the CourseHub application:
//!
//! - [`errors`]: Classified application errors and the failure envelope
//! - [`response`]: The success envelope returned by every handler
//! - [`pagination`]: Coercion of raw `currentPage` / `pageSize` parameters
//! - [`query`]: Database-agnostic query specifications (filters, ordering, paging)
//! - [`password`]: Password length policy, hashing and verification
//! - [`serde`]: Lenient deserializers for query-string filters
//!
//! # Example
//!
//! ```ignore
//! use coursehub_core::{ApiResponse, AppError, PaginationParams, QuerySpec};
//! use coursehub_core::query::Direction;
//!
//! let spec = QuerySpec::builder(&params)
//!     .contains("name", filters.name.as_deref())
//!     .order_by("id", Direction::Desc)
//!     .build();
//!
//! Ok(ApiResponse::ok("Categories fetched", response))
//! ```

pub mod errors;
pub mod pagination;
pub mod password;
pub mod query;
pub mod response;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::{hash_password, hash_password_async, verify_password, verify_password_async};
pub use query::QuerySpec;
pub use response::{ApiResponse, EmptyData};
