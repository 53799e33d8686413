#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use gram_core::domain::{MAX_SKIP, ObjectId, Page, Post, User};
    use gram_core::error::RepoError;
    use gram_core::ports::{BaseRepository, PostRepository, UserRepository};
    use sea_orm::{
        ConnAcquireErr, DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, RuntimeErr, Value,
    };

    use crate::database::entity::{account, post};
    use crate::database::postgres_base::classify;
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn post_model(id: ObjectId, uid: ObjectId, caption: &str) -> post::Model {
        post::Model {
            id: id.to_hex(),
            uid: uid.to_hex(),
            caption: Some(caption.to_owned()),
            image_url: None,
            posted_timestamp: 1_700_000_000,
        }
    }

    fn empty_db() -> Arc<DatabaseConnection> {
        Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = ObjectId::new();
        let user_id = ObjectId::new();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(post_id, user_id, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db), TIMEOUT);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.caption.as_deref(), Some("Test Post"));
        assert_eq!(post.id, post_id);
        assert_eq!(post.uid, user_id);
        assert_eq!(post.posted_timestamp, 1_700_000_000);
    }

    #[tokio::test]
    async fn test_find_user_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<account::Model>::new()])
            .into_connection();

        let repo = PostgresUserRepository::new(Arc::new(db), TIMEOUT);

        let result: Option<User> = repo.find_by_id(ObjectId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_exists_by_email() {
        let user_id = ObjectId::new();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![account::Model {
                    id: user_id.to_hex(),
                    name: "Ada".to_owned(),
                    email: "ada@example.com".to_owned(),
                    password: "digest".to_owned(),
                }],
                vec![],
            ])
            .into_connection();

        let repo = PostgresUserRepository::new(Arc::new(db), TIMEOUT);

        assert!(repo.exists_by_email("ada@example.com").await.unwrap());
        assert!(!repo.exists_by_email("bob@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_posts_by_user_id() {
        let user_id = ObjectId::new();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                post_model(ObjectId::new(), user_id, "first"),
                post_model(ObjectId::new(), user_id, "second"),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db), TIMEOUT);

        let posts = repo.find_by_user_id(user_id, Page::new(0, 2)).await.unwrap();
        let captions: Vec<_> = posts.iter().filter_map(|p| p.caption.as_deref()).collect();
        assert_eq!(captions, ["first", "second"]);
    }

    #[tokio::test]
    async fn test_corrupt_stored_id_is_a_query_error() {
        let mut model = post_model(ObjectId::new(), ObjectId::new(), "bad");
        model.uid = "not-hex".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db), TIMEOUT);

        let result: Result<Option<Post>, _> = repo.find_by_id(ObjectId::new()).await;
        assert!(matches!(result, Err(RepoError::Query(_))));
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("store exploded".to_owned())])
            .into_connection();

        let repo = PostgresUserRepository::new(Arc::new(db), TIMEOUT);

        let result = repo.exists_by_email("ada@example.com").await;
        assert!(matches!(result, Err(RepoError::Query(msg)) if msg.contains("store exploded")));
    }

    #[tokio::test]
    async fn test_huge_offset_is_bound_to_bigint() {
        let user_id = ObjectId::new();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<post::Model>::new()])
                .into_connection(),
        );

        let repo = PostgresPostRepository::new(Arc::clone(&db), TIMEOUT);
        let posts = repo
            .find_by_user_id(user_id, Page::new(u64::MAX, 10))
            .await
            .unwrap();
        assert!(posts.is_empty());
        drop(repo);

        let Ok(conn) = Arc::try_unwrap(db) else {
            panic!("connection still shared");
        };
        let log = conn.into_transaction_log();
        let values = log[0].statements()[0].values.clone().unwrap().0;
        assert!(values.contains(&Value::BigUnsigned(Some(MAX_SKIP))));
        assert!(!values.contains(&Value::BigUnsigned(Some(u64::MAX))));
    }

    #[tokio::test]
    async fn test_stalled_store_call_times_out() {
        let repo = PostgresUserRepository::new(empty_db(), Duration::from_millis(10));

        let result = repo
            .timed(std::future::pending::<Result<(), DbErr>>())
            .await;

        assert!(matches!(result, Err(RepoError::Timeout(after)) if after == Duration::from_millis(10)));
    }

    #[tokio::test]
    async fn test_prompt_store_call_is_not_timed_out() {
        let repo = PostgresPostRepository::new(empty_db(), Duration::from_millis(10));

        let result = repo.timed(async { Ok::<_, DbErr>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_classify_connection_failures() {
        let refused = classify(DbErr::Conn(RuntimeErr::Internal("refused".to_owned())));
        assert!(matches!(refused, RepoError::Connection(msg) if msg.contains("refused")));

        let exhausted = classify(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        assert!(matches!(exhausted, RepoError::Connection(_)));
    }

    #[test]
    fn test_classify_other_failures_as_query_errors() {
        let err = classify(DbErr::RecordNotInserted);
        assert!(matches!(err, RepoError::Query(_)));

        let err = classify(DbErr::Custom("bad column".to_owned()));
        assert!(matches!(err, RepoError::Query(msg) if msg.contains("bad column")));
    }
}
