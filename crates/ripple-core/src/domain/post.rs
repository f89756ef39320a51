use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a short piece of content published by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with zeroed reaction counters.
    ///
    /// Id and timestamp come from the caller so that the service layer can
    /// inject its providers.
    pub fn new(id: Uuid, creator_id: Uuid, content: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            creator_id,
            content,
            likes: 0,
            dislikes: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Summary of a post's author, embedded in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorSummary {
    pub id: Uuid,
    pub name: String,
}

/// Read model joining a post with its creator. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithCreator {
    pub id: Uuid,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub creator: CreatorSummary,
}
