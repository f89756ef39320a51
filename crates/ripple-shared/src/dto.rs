//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp pattern used on every outgoing date field.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp the way the API presents dates.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Optional search term accepted by the listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Request to create a post. `user` is the creator's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    pub user: String,
}

/// Request to replace a post's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPostRequest {
    pub content: String,
}

/// Request to like (`true`) or dislike (`false`) a post.
///
/// Typed as `bool` so a non-boolean value is rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeRequest {
    pub like: bool,
}

/// Plain acknowledgement carrying a user-facing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Acknowledgement for like/dislike: `result` reports whether the caller
/// already had a reaction recorded before the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub message: String,
    pub result: bool,
}

/// Creator summary embedded in post listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorResponse {
    pub id: Uuid,
    pub name: String,
}

/// A post joined with its creator, as returned by GET /posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: String,
    pub updated_at: String,
    pub creator: CreatorResponse,
}

/// A user row as returned by GET /users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: String,
}
