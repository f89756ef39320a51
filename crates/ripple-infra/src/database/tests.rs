#[cfg(test)]
mod tests {
    use crate::database::entity::{post, post_reaction, user};
    use crate::database::postgres_repo::{
        PostgresPostRepository, PostgresReactionRepository, PostgresUserRepository,
    };
    use ripple_core::domain::{Post, User};
    use ripple_core::error::RepoError;
    use ripple_core::ports::{BaseRepository, ReactionRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();
        let creator_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                creator_id,
                content: "bom dia".to_owned(),
                likes: 3,
                dislikes: 1,
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.id, post_id);
        assert_eq!(found.content, "bom dia");
        assert_eq!(found.likes, 3);
    }

    #[tokio::test]
    async fn test_find_post_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_post_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = BaseRepository::<Post, _>::delete(&repo, uuid::Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_find_users_maps_rows() {
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                name: "ana".to_owned(),
                email: "ana@example.com".to_owned(),
                password: "segredo".to_owned(),
                role: "NORMAL".to_owned(),
                created_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let users: Vec<User> = repo.find_users(Some("an")).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "ana");
        assert_eq!(users[0].role, "NORMAL");
    }

    #[tokio::test]
    async fn test_find_reaction_maps_polarity() {
        let user_id = uuid::Uuid::new_v4();
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_reaction::Model {
                user_id,
                post_id,
                liked: false,
            }]])
            .into_connection();

        let repo = PostgresReactionRepository::new(db);

        let reaction = repo.find(user_id, post_id).await.unwrap().unwrap();
        assert_eq!(reaction.user_id, user_id);
        assert!(!reaction.like);
    }
}
