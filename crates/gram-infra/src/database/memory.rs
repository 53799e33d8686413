//! In-memory store - used when no database is configured, and in tests.
//!
//! Records are kept in insertion order, which is the store order used for
//! pagination. Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use gram_core::domain::{ObjectId, Page, Post, User};
use gram_core::error::RepoError;
use gram_core::ports::{BaseRepository, PostRepository, UserRepository};

use super::mask_email;

/// In-memory `accounts` collection. Emails are unique, like the SQL index.
#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User> for InMemoryUserRepository {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepoError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, entity: User) -> Result<ObjectId, RepoError> {
        let mut accounts = self.accounts.write().await;

        if accounts.iter().any(|u| u.id == entity.id) {
            return Err(RepoError::Constraint("accounts_pkey".to_string()));
        }
        if accounts.iter().any(|u| u.email == entity.email) {
            return Err(RepoError::Constraint("accounts_email_key".to_string()));
        }

        let id = entity.id;
        accounts.push(entity);
        Ok(id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Checking for existing account");
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().any(|u| u.email == email))
    }
}

/// In-memory `posts` collection.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post> for InMemoryPostRepository {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, entity: Post) -> Result<ObjectId, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.id == entity.id) {
            return Err(RepoError::Constraint("posts_pkey".to_string()));
        }

        let id = entity.id;
        posts.push(entity);
        Ok(id)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_user_id(&self, user_id: ObjectId, page: Page) -> Result<Vec<Post>, RepoError> {
        let skip = usize::try_from(page.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);

        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|p| p.uid == user_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }
}
