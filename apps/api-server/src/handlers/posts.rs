//! Post handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use ripple_shared::dto::{
    CreatePostRequest, CreatorResponse, EditPostRequest, LikeRequest, LikeResponse,
    MessageResponse, PostResponse, SearchQuery, format_timestamp,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn get_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.post_service.get_posts(query.q.as_deref()).await?;

    let body: Vec<PostResponse> = posts
        .into_iter()
        .map(|p| PostResponse {
            id: p.id,
            content: p.content,
            likes: p.likes,
            dislikes: p.dislikes,
            created_at: format_timestamp(&p.created_at),
            updated_at: format_timestamp(&p.updated_at),
            creator: CreatorResponse {
                id: p.creator.id,
                name: p.creator.name,
            },
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let creator_id = Uuid::parse_str(&req.user)
        .map_err(|_| AppError::BadRequest("'user' inválido. Deve ser um UUID".to_string()))?;

    let message = state.post_service.create_post(&req.content, creator_id).await?;

    Ok(HttpResponse::Created().json(MessageResponse { message }))
}

/// PUT /posts/{id}
pub async fn edit_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<EditPostRequest>,
) -> AppResult<HttpResponse> {
    let message = state
        .post_service
        .edit_post(path.into_inner(), &body.content)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

/// DELETE /posts/{id}
///
/// Takes the raw path segment so the service can reject the unresolved
/// `":id"` placeholder.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let message = state.post_service.delete_post(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

/// PUT /posts/{id}/like
///
/// The acting user comes from the `user-id` request header.
pub async fn like_dislike(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<LikeRequest>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let user_id = req
        .headers()
        .get("user-id")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("'user-id' deve ser informado no header".to_string()))?;
    let user_id = Uuid::parse_str(user_id)
        .map_err(|_| AppError::BadRequest("'user-id' inválido. Deve ser um UUID".to_string()))?;

    let outcome = state
        .post_service
        .like_dislike(path.into_inner(), user_id, body.like)
        .await?;

    Ok(HttpResponse::Ok().json(LikeResponse {
        message: outcome.message,
        result: outcome.had_reaction,
    }))
}
