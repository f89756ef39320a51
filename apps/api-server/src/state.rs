//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;

use ripple_core::service::{PostService, UserService};
use ripple_infra::database::{
    DbConn, PostgresPostRepository, PostgresReactionRepository, PostgresUserRepository, connect,
};
use ripple_infra::{SystemClock, UuidV4Provider};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
    pub user_service: Arc<UserService>,
    pub db: DbConn,
}

impl AppState {
    /// Connect to the database and wire the services with their
    /// constructor-injected collaborators.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db_config = config
            .database
            .as_ref()
            .context("DATABASE_URL must be set")?;

        let db = connect(db_config)
            .await
            .context("failed to connect to database")?;

        let posts = Arc::new(PostgresPostRepository::new(db.clone()));
        let users = Arc::new(PostgresUserRepository::new(db.clone()));
        let reactions = Arc::new(PostgresReactionRepository::new(db.clone()));

        let post_service = Arc::new(PostService::new(
            posts,
            users.clone(),
            reactions,
            Arc::new(SystemClock),
            Arc::new(UuidV4Provider),
        ));
        let user_service = Arc::new(UserService::new(users));

        tracing::info!("Application state initialized");

        Ok(Self {
            post_service,
            user_service,
            db,
        })
    }
}
