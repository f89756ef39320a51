//! User handlers.

use actix_web::{HttpResponse, web};

use ripple_shared::dto::{SearchQuery, UserResponse, format_timestamp};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users
///
/// Mirrors the upstream account service rows as-is, password included.
pub async fn get_users(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let users = state.user_service.get_users(query.q.as_deref()).await?;

    let body: Vec<UserResponse> = users
        .into_iter()
        .map(|u| UserResponse {
            id: u.id,
            name: u.name,
            email: u.email,
            password: u.password,
            role: u.role,
            created_at: format_timestamp(&u.created_at),
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}
