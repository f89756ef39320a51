use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user's reaction to a single post.
///
/// `like == true` is a like, `like == false` a dislike. At most one
/// reaction exists per (user, post) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PostReaction {
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub like: bool,
}
