use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use coursehub_core::AppError;
use coursehub_models::User;

use crate::middleware::auth::authenticate;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// The administrator behind an admin-surface request.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub User);

/// Accepts only an existing user holding the administrator role.
pub fn ensure_admin(user: Option<User>) -> Result<User, AppError> {
    let user = user.ok_or_else(|| AppError::unauthorized("user not found"))?;

    if !user.role.is_admin() {
        warn!(user_id = user.id, "Non-admin rejected from admin surface");
        return Err(AppError::unauthorized("not authorized as admin"));
    }

    Ok(user)
}

async fn load_admin(headers: &HeaderMap, state: &AppState) -> Result<User, AppError> {
    let current = authenticate(headers, &state.jwt_config)?;
    let user = UserService::find_by_id(&state.db, current.id).await?;
    ensure_admin(user)
}

pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let admin = load_admin(req.headers(), &state).await?;
    req.extensions_mut().insert(CurrentAdmin(admin));

    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(admin) = parts.extensions.get::<CurrentAdmin>() {
            return Ok(admin.clone());
        }

        load_admin(&parts.headers, state).await.map(CurrentAdmin)
    }
}
