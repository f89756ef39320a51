//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter};
use uuid::Uuid;

use ripple_core::domain::{CreatorSummary, PostReaction, PostWithCreator, User};
use ripple_core::error::RepoError;
use ripple_core::ports::{PostRepository, ReactionRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_reaction::{self, Entity as ReactionEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_users(&self, q: Option<&str>) -> Result<Vec<User>, RepoError> {
        let mut select = UserEntity::find();
        if let Some(q) = q {
            select = select.filter(user::Column::Name.contains(q));
        }
        let result = select
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_with_creator(&self, q: Option<&str>) -> Result<Vec<PostWithCreator>, RepoError> {
        let mut select = PostEntity::find().find_also_related(UserEntity);
        if let Some(q) = q {
            select = select.filter(post::Column::Content.contains(q));
        }
        let rows = select
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        // The creator_id foreign key makes a missing creator impossible in
        // practice; such rows are simply skipped.
        Ok(rows
            .into_iter()
            .filter_map(|(p, creator)| {
                creator.map(|u| PostWithCreator {
                    id: p.id,
                    content: p.content,
                    likes: p.likes,
                    dislikes: p.dislikes,
                    created_at: p.created_at.into(),
                    updated_at: p.updated_at.into(),
                    creator: CreatorSummary {
                        id: u.id,
                        name: u.name,
                    },
                })
            })
            .collect())
    }
}

/// PostgreSQL reaction repository. Not `BaseRepository`-shaped because the
/// table is keyed by (user, post).
pub struct PostgresReactionRepository {
    db: DbConn,
}

impl PostgresReactionRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReactionRepository for PostgresReactionRepository {
    async fn find(&self, user_id: Uuid, post_id: Uuid) -> Result<Option<PostReaction>, RepoError> {
        let result = ReactionEntity::find_by_id((user_id, post_id))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn upsert(&self, reaction: PostReaction) -> Result<(), RepoError> {
        // Replace semantics: clear any previous reaction, then insert.
        ReactionEntity::delete_by_id((reaction.user_id, reaction.post_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let active_model: post_reaction::ActiveModel = reaction.into();
        ReactionEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, user_id: Uuid, post_id: Uuid) -> Result<(), RepoError> {
        ReactionEntity::delete_by_id((user_id, post_id))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(())
    }
}
