use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostReaction, PostWithCreator};
use crate::error::DomainError;
use crate::ports::{Clock, IdProvider, PostRepository, ReactionRepository, UserRepository};

/// Minimum number of characters a post's content must have.
const MIN_CONTENT_LEN: usize = 2;

/// Result of a like/dislike call: the user-facing message plus whether the
/// caller already had a reaction recorded before this call.
#[derive(Debug, Clone)]
pub struct LikeOutcome {
    pub message: String,
    pub had_reaction: bool,
}

/// Post business rules: input validation, entity construction and the
/// like/dislike toggle. All collaborators are constructor-injected.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    reactions: Arc<dyn ReactionRepository>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdProvider>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        reactions: Arc<dyn ReactionRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdProvider>,
    ) -> Self {
        Self {
            posts,
            users,
            reactions,
            clock,
            ids,
        }
    }

    /// List posts joined with their creators, optionally filtered by `q`.
    pub async fn get_posts(&self, q: Option<&str>) -> Result<Vec<PostWithCreator>, DomainError> {
        let posts = self.posts.find_with_creator(q).await?;
        Ok(posts)
    }

    /// Create a post for `creator_id`. Content must have at least two characters.
    pub async fn create_post(
        &self,
        content: &str,
        creator_id: Uuid,
    ) -> Result<String, DomainError> {
        validate_content(content)?;

        let post = Post::new(
            self.ids.generate(),
            creator_id,
            content.to_owned(),
            self.clock.now(),
        );
        self.posts.insert(post).await?;

        Ok("Post registrado com sucesso".to_owned())
    }

    /// Replace a post's content, stamping `updated_at`. Content is validated
    /// before the existence lookup.
    pub async fn edit_post(&self, id: Uuid, new_content: &str) -> Result<String, DomainError> {
        validate_content(new_content)?;

        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("'id' para editar não existe".to_owned()))?;

        post.content = new_content.to_owned();
        post.updated_at = self.clock.now();
        self.posts.update(post).await?;

        Ok("Post editado com sucesso".to_owned())
    }

    /// Delete a post. Takes the raw route parameter so the unresolved
    /// placeholder `":id"` can be rejected before any lookup.
    pub async fn delete_post(&self, id_raw: &str) -> Result<String, DomainError> {
        if id_raw == ":id" {
            return Err(DomainError::Validation("'id' deve ser informado".to_owned()));
        }
        let id = Uuid::parse_str(id_raw).map_err(|_| {
            DomainError::Validation("'id' do post inválido. Deve ser um UUID".to_owned())
        })?;

        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("'id' para deletar não existe".to_owned()))?;

        self.posts.delete(post.id).await?;

        Ok("Post deletado com sucesso".to_owned())
    }

    /// Record a like (`like == true`) or dislike (`like == false`) by `user_id`
    /// on `post_id`, with toggle semantics:
    ///
    /// - no prior reaction: record it and bump the matching counter;
    /// - same reaction again: remove it (toggle off);
    /// - opposite reaction: flip it, moving one count across.
    pub async fn like_dislike(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        like: bool,
    ) -> Result<LikeOutcome, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("'id' do usuário não existe".to_owned()))?;

        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("'id' do post não existe".to_owned()))?;

        let existing = self.reactions.find(user_id, post_id).await?;
        match existing {
            None => {
                self.reactions
                    .upsert(PostReaction {
                        user_id,
                        post_id,
                        like,
                    })
                    .await?;
                bump(&mut post, like, 1);
            }
            Some(prev) if prev.like == like => {
                self.reactions.remove(user_id, post_id).await?;
                bump(&mut post, like, -1);
            }
            Some(_) => {
                self.reactions
                    .upsert(PostReaction {
                        user_id,
                        post_id,
                        like,
                    })
                    .await?;
                bump(&mut post, !like, -1);
                bump(&mut post, like, 1);
            }
        }
        self.posts.update(post).await?;

        Ok(LikeOutcome {
            message: "Like editado com sucesso".to_owned(),
            had_reaction: existing.is_some(),
        })
    }
}

fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.chars().count() < MIN_CONTENT_LEN {
        return Err(DomainError::Validation(
            "'content' do post inválido. Deve conter no mínimo 2 caracteres".to_owned(),
        ));
    }
    Ok(())
}

/// Adjust the matching counter, clamping at zero.
fn bump(post: &mut Post, like: bool, delta: i64) {
    let counter = if like {
        &mut post.likes
    } else {
        &mut post.dislikes
    };
    *counter = (*counter + delta).max(0);
}
