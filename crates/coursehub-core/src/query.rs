//! Database-agnostic description of a list query.
//!
//! A [`QuerySpec`] collects the filters, ordering and page window of a list
//! endpoint. It holds no SQL; `coursehub-db` renders it onto a
//! `sqlx::QueryBuilder`. Column names are `&'static str` so only names
//! written into a service can ever reach SQL.
//!
//! Filters compose with logical AND. A filter whose value is absent (or, for
//! substring filters, blank) adds no predicate.

use crate::pagination::{PaginationMeta, PaginationParams};

/// A bound value for an equality predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value.into())
    }
}

impl From<i16> for FilterValue {
    fn from(value: i16) -> Self {
        FilterValue::Int(value.into())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `column = value`
    Eq(&'static str, FilterValue),
    /// Case-sensitive substring match. The needle is stored unescaped.
    Contains(&'static str, String),
    IsNull(&'static str),
    IsNotNull(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub predicates: Vec<Predicate>,
    pub ordering: Vec<Order>,
    pub limit: i64,
    pub offset: i64,
    pub current_page: i64,
}

impl QuerySpec {
    pub fn builder(params: &PaginationParams) -> QuerySpecBuilder {
        QuerySpecBuilder {
            predicates: Vec::new(),
            ordering: Vec::new(),
            current_page: params.current_page(),
            page_size: params.page_size(),
        }
    }

    /// Pagination block for a result of `total` matching rows.
    pub fn meta(&self, total: i64) -> PaginationMeta {
        PaginationMeta {
            total,
            current_page: self.current_page,
            page_size: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuerySpecBuilder {
    predicates: Vec<Predicate>,
    ordering: Vec<Order>,
    current_page: i64,
    page_size: i64,
}

impl QuerySpecBuilder {
    /// Adds `column = value` when `value` is present.
    pub fn eq<V>(mut self, column: &'static str, value: Option<V>) -> Self
    where
        V: Into<FilterValue>,
    {
        if let Some(value) = value {
            self.predicates.push(Predicate::Eq(column, value.into()));
        }
        self
    }

    /// Adds a substring match when `needle` is present and not blank.
    pub fn contains(mut self, column: &'static str, needle: Option<&str>) -> Self {
        if let Some(needle) = needle.filter(|n| !n.trim().is_empty()) {
            self.predicates
                .push(Predicate::Contains(column, needle.to_string()));
        }
        self
    }

    pub fn is_null(mut self, column: &'static str) -> Self {
        self.predicates.push(Predicate::IsNull(column));
        self
    }

    pub fn is_not_null(mut self, column: &'static str) -> Self {
        self.predicates.push(Predicate::IsNotNull(column));
        self
    }

    pub fn order_by(mut self, column: &'static str, direction: Direction) -> Self {
        self.ordering.push(Order { column, direction });
        self
    }

    /// Finishes the spec. Without explicit ordering rows come back `id DESC`.
    pub fn build(self) -> QuerySpec {
        let ordering = if self.ordering.is_empty() {
            vec![Order {
                column: "id",
                direction: Direction::Desc,
            }]
        } else {
            self.ordering
        };

        QuerySpec {
            predicates: self.predicates,
            ordering,
            limit: self.page_size,
            offset: (self.current_page - 1).saturating_mul(self.page_size),
            current_page: self.current_page,
        }
    }
}

/// Escapes `LIKE` metacharacters so the needle matches literally.
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
