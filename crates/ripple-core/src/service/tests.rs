use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::{CreatorSummary, Post, PostReaction, PostWithCreator, User};
use crate::error::{DomainError, RepoError};
use crate::ports::{
    BaseRepository, Clock, IdProvider, PostRepository, ReactionRepository, UserRepository,
};
use crate::service::{PostService, UserService};

/// In-memory store backing all three repository ports for service tests.
#[derive(Default)]
struct MemStore {
    posts: Mutex<HashMap<Uuid, Post>>,
    users: Mutex<HashMap<Uuid, User>>,
    reactions: Mutex<HashMap<(Uuid, Uuid), PostReaction>>,
}

impl MemStore {
    fn seed_user(&self, id: Uuid, name: &str) {
        self.users.lock().unwrap().insert(
            id,
            User {
                id,
                name: name.to_owned(),
                email: format!("{name}@example.com"),
                password: "segredo".to_owned(),
                role: "NORMAL".to_owned(),
                created_at: t0(),
            },
        );
    }

    fn seed_post(&self, post: Post) {
        self.posts.lock().unwrap().insert(post.id, post);
    }

    fn post(&self, id: Uuid) -> Option<Post> {
        self.posts.lock().unwrap().get(&id).cloned()
    }

    fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for MemStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        self.posts.lock().unwrap().insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        self.posts.lock().unwrap().insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.posts
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for MemStore {
    async fn find_with_creator(&self, q: Option<&str>) -> Result<Vec<PostWithCreator>, RepoError> {
        let users = self.users.lock().unwrap();
        let rows = self
            .posts
            .lock()
            .unwrap()
            .values()
            .filter(|p| q.is_none_or(|q| p.content.contains(q)))
            .filter_map(|p| {
                users.get(&p.creator_id).map(|u| PostWithCreator {
                    id: p.id,
                    content: p.content.clone(),
                    likes: p.likes,
                    dislikes: p.dislikes,
                    created_at: p.created_at,
                    updated_at: p.updated_at,
                    creator: CreatorSummary {
                        id: u.id,
                        name: u.name.clone(),
                    },
                })
            })
            .collect();
        Ok(rows)
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for MemStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, entity: User) -> Result<User, RepoError> {
        self.users.lock().unwrap().insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: User) -> Result<User, RepoError> {
        self.users.lock().unwrap().insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.users
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for MemStore {
    async fn find_users(&self, q: Option<&str>) -> Result<Vec<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|u| q.is_none_or(|q| u.name.contains(q)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReactionRepository for MemStore {
    async fn find(&self, user_id: Uuid, post_id: Uuid) -> Result<Option<PostReaction>, RepoError> {
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .get(&(user_id, post_id))
            .copied())
    }

    async fn upsert(&self, reaction: PostReaction) -> Result<(), RepoError> {
        self.reactions
            .lock()
            .unwrap()
            .insert((reaction.user_id, reaction.post_id), reaction);
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, post_id: Uuid) -> Result<(), RepoError> {
        self.reactions.lock().unwrap().remove(&(user_id, post_id));
        Ok(())
    }
}

/// Clock frozen at a configurable instant.
struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    fn at(instant: DateTime<Utc>) -> Self {
        Self(Mutex::new(instant))
    }

    fn advance_to(&self, instant: DateTime<Utc>) {
        *self.0.lock().unwrap() = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Deterministic sequential ids.
struct SeqIds(AtomicU64);

impl SeqIds {
    fn new() -> Self {
        Self(AtomicU64::new(1))
    }
}

impl IdProvider for SeqIds {
    fn generate(&self) -> Uuid {
        Uuid::from_u128(self.0.fetch_add(1, Ordering::SeqCst) as u128)
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn t1() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap()
}

struct Fixture {
    store: Arc<MemStore>,
    clock: Arc<FixedClock>,
    service: PostService,
}

fn fixture() -> Fixture {
    let store = Arc::new(MemStore::default());
    let clock = Arc::new(FixedClock::at(t0()));
    let service = PostService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        clock.clone(),
        Arc::new(SeqIds::new()),
    );
    Fixture {
        store,
        clock,
        service,
    }
}

fn assert_validation(err: DomainError, expected: &str) {
    match err {
        DomainError::Validation(msg) => assert_eq!(msg, expected),
        other => panic!("expected validation error, got {other:?}"),
    }
}

fn assert_not_found(err: DomainError, expected: &str) {
    match err {
        DomainError::NotFound(msg) => assert_eq!(msg, expected),
        other => panic!("expected not-found error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_post_rejects_short_content() {
    let fx = fixture();
    let creator = Uuid::new_v4();

    for content in ["", "x", "é"] {
        let err = fx.service.create_post(content, creator).await.unwrap_err();
        assert_validation(
            err,
            "'content' do post inválido. Deve conter no mínimo 2 caracteres",
        );
    }
    assert_eq!(fx.store.post_count(), 0);
}

#[tokio::test]
async fn create_post_persists_with_fresh_id_and_zeroed_counters() {
    let fx = fixture();
    let creator = Uuid::new_v4();

    let message = fx.service.create_post("hi", creator).await.unwrap();
    assert_eq!(message, "Post registrado com sucesso");
    fx.service.create_post("segundo post", creator).await.unwrap();

    let posts: Vec<Post> = {
        let guard = fx.store.posts.lock().unwrap();
        guard.values().cloned().collect()
    };
    assert_eq!(posts.len(), 2);
    assert_ne!(posts[0].id, posts[1].id);

    let first = posts.iter().find(|p| p.content == "hi").unwrap();
    assert_eq!(first.creator_id, creator);
    assert_eq!(first.likes, 0);
    assert_eq!(first.dislikes, 0);
    assert_eq!(first.created_at, t0());
    assert_eq!(first.updated_at, t0());
}

#[tokio::test]
async fn edit_unknown_id_is_not_found() {
    let fx = fixture();

    let err = fx
        .service
        .edit_post(Uuid::new_v4(), "conteúdo válido")
        .await
        .unwrap_err();
    assert_not_found(err, "'id' para editar não existe");
}

#[tokio::test]
async fn edit_validates_content_before_existence() {
    let fx = fixture();

    // The id does not exist either; the length check must win.
    let err = fx.service.edit_post(Uuid::new_v4(), "x").await.unwrap_err();
    assert_validation(
        err,
        "'content' do post inválido. Deve conter no mínimo 2 caracteres",
    );
}

#[tokio::test]
async fn edit_replaces_content_and_stamps_updated_at() {
    let fx = fixture();
    let id = Uuid::new_v4();
    fx.store
        .seed_post(Post::new(id, Uuid::new_v4(), "original".to_owned(), t0()));

    fx.clock.advance_to(t1());
    let message = fx.service.edit_post(id, "ok").await.unwrap();
    assert_eq!(message, "Post editado com sucesso");

    let post = fx.store.post(id).unwrap();
    assert_eq!(post.content, "ok");
    assert_eq!(post.created_at, t0());
    assert_eq!(post.updated_at, t1());
}

#[tokio::test]
async fn delete_rejects_placeholder_and_malformed_ids() {
    let fx = fixture();

    let err = fx.service.delete_post(":id").await.unwrap_err();
    assert_validation(err, "'id' deve ser informado");

    let err = fx.service.delete_post("not-a-uuid").await.unwrap_err();
    assert_validation(err, "'id' do post inválido. Deve ser um UUID");
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let fx = fixture();

    let err = fx
        .service
        .delete_post(&Uuid::new_v4().to_string())
        .await
        .unwrap_err();
    assert_not_found(err, "'id' para deletar não existe");
}

#[tokio::test]
async fn delete_removes_post() {
    let fx = fixture();
    let id = Uuid::new_v4();
    fx.store
        .seed_post(Post::new(id, Uuid::new_v4(), "para deletar".to_owned(), t0()));

    let message = fx.service.delete_post(&id.to_string()).await.unwrap();
    assert_eq!(message, "Post deletado com sucesso");
    assert!(fx.store.post(id).is_none());
}

#[tokio::test]
async fn like_requires_existing_user_and_post() {
    let fx = fixture();
    let user = Uuid::new_v4();
    let post = Uuid::new_v4();

    let err = fx.service.like_dislike(post, user, true).await.unwrap_err();
    assert_not_found(err, "'id' do usuário não existe");

    fx.store.seed_user(user, "ana");
    let err = fx.service.like_dislike(post, user, true).await.unwrap_err();
    assert_not_found(err, "'id' do post não existe");
}

#[tokio::test]
async fn like_toggles_and_flips() {
    let fx = fixture();
    let user = Uuid::new_v4();
    let post_id = Uuid::new_v4();
    fx.store.seed_user(user, "bia");
    fx.store
        .seed_post(Post::new(post_id, Uuid::new_v4(), "reagível".to_owned(), t0()));

    // First like: recorded, counter bumped.
    let out = fx.service.like_dislike(post_id, user, true).await.unwrap();
    assert_eq!(out.message, "Like editado com sucesso");
    assert!(!out.had_reaction);
    assert_eq!(fx.store.post(post_id).unwrap().likes, 1);

    // Same like again: toggled off.
    let out = fx.service.like_dislike(post_id, user, true).await.unwrap();
    assert!(out.had_reaction);
    let post = fx.store.post(post_id).unwrap();
    assert_eq!(post.likes, 0);
    assert_eq!(post.dislikes, 0);

    // Like then dislike: the count moves across.
    fx.service.like_dislike(post_id, user, true).await.unwrap();
    let out = fx.service.like_dislike(post_id, user, false).await.unwrap();
    assert!(out.had_reaction);
    let post = fx.store.post(post_id).unwrap();
    assert_eq!(post.likes, 0);
    assert_eq!(post.dislikes, 1);
}

#[tokio::test]
async fn get_posts_filters_by_content() {
    let fx = fixture();
    let creator = Uuid::new_v4();
    fx.store.seed_user(creator, "carla");
    fx.store
        .seed_post(Post::new(Uuid::new_v4(), creator, "bom dia".to_owned(), t0()));
    fx.store
        .seed_post(Post::new(Uuid::new_v4(), creator, "boa noite".to_owned(), t0()));

    let all = fx.service.get_posts(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].creator.name, "carla");

    let filtered = fx.service.get_posts(Some("noite")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].content, "boa noite");
}

#[tokio::test]
async fn get_users_filters_by_name() {
    let store = Arc::new(MemStore::default());
    store.seed_user(Uuid::new_v4(), "dario");
    store.seed_user(Uuid::new_v4(), "elisa");
    let service = UserService::new(store.clone());

    let all = service.get_users(None).await.unwrap();
    assert_eq!(all.len(), 2);

    let filtered = service.get_users(Some("eli")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "elisa");
}
