//! Renders a [`QuerySpec`] onto a `sqlx::QueryBuilder`.
//!
//! Every value is bound as a parameter. Only column names, which are
//! `&'static str` chosen by the calling service, are pushed as SQL text.

use coursehub_core::query::{FilterValue, Predicate, QuerySpec, escape_like};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Appends `WHERE p1 AND p2 ...`. Nothing is appended without predicates.
pub fn push_where<'args>(qb: &mut QueryBuilder<'args, Postgres>, predicates: &[Predicate]) {
    for (i, predicate) in predicates.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });

        match predicate {
            Predicate::Eq(column, value) => {
                qb.push(*column).push(" = ");
                match value {
                    FilterValue::Int(v) => qb.push_bind(*v),
                    FilterValue::Bool(v) => qb.push_bind(*v),
                    FilterValue::Text(v) => qb.push_bind(v.clone()),
                };
            }
            Predicate::Contains(column, needle) => {
                qb.push(*column)
                    .push(" LIKE ")
                    .push_bind(format!("%{}%", escape_like(needle)));
            }
            Predicate::IsNull(column) => {
                qb.push(*column).push(" IS NULL");
            }
            Predicate::IsNotNull(column) => {
                qb.push(*column).push(" IS NOT NULL");
            }
        }
    }
}

/// Appends `ORDER BY ... LIMIT $n OFFSET $m`.
pub fn push_order_and_page<'args>(qb: &mut QueryBuilder<'args, Postgres>, spec: &QuerySpec) {
    if !spec.ordering.is_empty() {
        qb.push(" ORDER BY ");
        let mut separated = qb.separated(", ");
        for order in &spec.ordering {
            separated.push(format!("{} {}", order.column, order.direction.as_sql()));
        }
    }

    qb.push(" LIMIT ")
        .push_bind(spec.limit)
        .push(" OFFSET ")
        .push_bind(spec.offset);
}

/// Runs the count query and the page query for a list endpoint.
///
/// `select` is the projection and `from` the table expression (joins
/// included). Returns the page rows and the total number of matches.
pub async fn fetch_page<T>(
    db: &PgPool,
    select: &str,
    from: &str,
    spec: &QuerySpec,
) -> Result<(Vec<T>, i64), sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut count = QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) FROM {}", from));
    push_where(&mut count, &spec.predicates);
    let total: i64 = count.build_query_scalar().fetch_one(db).await?;

    let mut page = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM {}", select, from));
    push_where(&mut page, &spec.predicates);
    push_order_and_page(&mut page, spec);
    let rows = page.build_query_as::<T>().fetch_all(db).await?;

    Ok((rows, total))
}
