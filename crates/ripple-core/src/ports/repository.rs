use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostReaction, PostWithCreator, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Persist changes to an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository with domain-specific methods.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Fetch posts joined with their creators, optionally filtered by a
    /// search term matched against the content.
    async fn find_with_creator(&self, q: Option<&str>) -> Result<Vec<PostWithCreator>, RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// List users, optionally filtered by a search term matched against the name.
    async fn find_users(&self, q: Option<&str>) -> Result<Vec<User>, RepoError>;
}

/// Per-user post reactions. Keyed by (user, post), so not `BaseRepository`-shaped.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Look up the reaction a user has recorded for a post, if any.
    async fn find(&self, user_id: Uuid, post_id: Uuid) -> Result<Option<PostReaction>, RepoError>;

    /// Insert or replace the reaction for its (user, post) pair.
    async fn upsert(&self, reaction: PostReaction) -> Result<(), RepoError>;

    /// Remove the reaction for a (user, post) pair, if present.
    async fn remove(&self, user_id: Uuid, post_id: Uuid) -> Result<(), RepoError>;
}
