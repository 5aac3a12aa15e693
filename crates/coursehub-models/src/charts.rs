use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct SexCount {
    pub sex: i16,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SexChartResponse {
    pub data: Vec<SexCount>,
}

/// Registrations in one calendar month, `month` formatted `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct UserMonthCount {
    pub month: String,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlyUsersResponse {
    pub data: Vec<UserMonthCount>,
}
