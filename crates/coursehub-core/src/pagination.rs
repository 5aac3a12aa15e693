//! Pagination utilities for list endpoints.
//!
//! List endpoints accept two query parameters:
//!
//! - `currentPage`: page number, 1-indexed (default: 1)
//! - `pageSize`: items per page (default: 10, not capped)
//!
//! Raw values are coerced rather than rejected. A value is parsed as a
//! number, truncated toward zero and made absolute; anything missing,
//! non-numeric, non-finite or zero falls back to the default.
//!
//! | Raw | `currentPage()` | `pageSize()` |
//! |-----|-----------------|--------------|
//! | missing | 1 | 10 |
//! | `0` | 1 | 10 |
//! | `-5` | 5 | 5 |
//! | `2.7` | 2 | 2 |
//! | `abc` | 1 | 10 |
//!
//! # Example
//!
//! ```ignore
//! use coursehub_core::PaginationParams;
//!
//! // GET /articles?currentPage=3&pageSize=20
//! let params = PaginationParams::new(Some("3"), Some("20"));
//! assert_eq!(params.offset(), 40);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_CURRENT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Pagination block returned next to every paginated collection.
///
/// ```json
/// { "total": 42, "currentPage": 2, "pageSize": 10 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Number of records matching the filters, across all pages
    pub total: i64,
    pub current_page: i64,
    pub page_size: i64,
}

/// Raw pagination query parameters.
///
/// Kept as strings so malformed input can be coerced instead of failing
/// extraction.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default)]
    #[param(value_type = Option<i64>)]
    #[schema(value_type = Option<i64>)]
    pub current_page: Option<String>,
    /// Items per page (default: 10)
    #[serde(default)]
    #[param(value_type = Option<i64>)]
    #[schema(value_type = Option<i64>)]
    pub page_size: Option<String>,
}

/// Coerces a raw page value: `abs(trunc(n))`, or `None` when that is not a
/// positive integer.
fn coerce(raw: Option<&str>) -> Option<i64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let value = value.trunc().abs();
    if value < 1.0 || value > i64::MAX as f64 {
        return None;
    }

    Some(value as i64)
}

impl PaginationParams {
    pub fn new(current_page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            current_page: current_page.map(str::to_string),
            page_size: page_size.map(str::to_string),
        }
    }

    /// Effective page number, always >= 1.
    #[must_use]
    pub fn current_page(&self) -> i64 {
        coerce(self.current_page.as_deref()).unwrap_or(DEFAULT_CURRENT_PAGE)
    }

    /// Effective page size, always >= 1.
    #[must_use]
    pub fn page_size(&self) -> i64 {
        coerce(self.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Rows to skip: `(current_page - 1) * page_size`.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.current_page() - 1).saturating_mul(self.page_size())
    }

    #[must_use]
    pub fn meta(&self, total: i64) -> PaginationMeta {
        PaginationMeta {
            total,
            current_page: self.current_page(),
            page_size: self.page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let params = PaginationParams::default();
        assert_eq!(params.current_page(), 1);
        assert_eq!(params.page_size(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_zero_falls_back_to_default() {
        let params = PaginationParams::new(Some("0"), Some("0"));
        assert_eq!(params.current_page(), 1);
        assert_eq!(params.page_size(), 10);
    }

    #[test]
    fn test_negative_values_are_made_absolute() {
        let params = PaginationParams::new(Some("-3"), Some("-5"));
        assert_eq!(params.current_page(), 3);
        assert_eq!(params.page_size(), 5);
    }

    #[test]
    fn test_fractions_are_truncated() {
        let params = PaginationParams::new(Some("2.7"), Some("0.5"));
        assert_eq!(params.current_page(), 2);
        assert_eq!(params.page_size(), 10);
    }

    #[test]
    fn test_non_numeric_falls_back_to_default() {
        let params = PaginationParams::new(Some("abc"), Some(""));
        assert_eq!(params.current_page(), 1);
        assert_eq!(params.page_size(), 10);

        let params = PaginationParams::new(Some("NaN"), Some("inf"));
        assert_eq!(params.current_page(), 1);
        assert_eq!(params.page_size(), 10);
    }

    #[test]
    fn test_page_size_is_not_capped() {
        let params = PaginationParams::new(None, Some("500"));
        assert_eq!(params.page_size(), 500);
    }

    #[test]
    fn test_offset() {
        let params = PaginationParams::new(Some("3"), Some("20"));
        assert_eq!(params.offset(), 40);

        let params = PaginationParams::new(Some(" 2 "), None);
        assert_eq!(params.offset(), 10);
    }

    #[test]
    fn test_meta() {
        let params = PaginationParams::new(Some("0"), Some("-5"));
        let meta = params.meta(42);
        assert_eq!(
            meta,
            PaginationMeta {
                total: 42,
                current_page: 1,
                page_size: 5,
            }
        );
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let json = serde_json::to_value(PaginationParams::default().meta(3)).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["total"], 3);
    }
}
