use async_trait::async_trait;

use crate::domain::{ObjectId, Page, Post, User};
use crate::error::RepoError;

/// Operations every collection supports.
#[async_trait]
pub trait BaseRepository<T>: Send + Sync {
    /// Exact-match lookup by identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, RepoError>;

    /// Insert a record and return its store-assigned identifier.
    async fn insert(&self, entity: T) -> Result<ObjectId, RepoError>;
}

/// The `accounts` collection.
#[async_trait]
pub trait UserRepository: BaseRepository<User> {
    /// True iff at least one account uses this email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError>;
}

/// The `posts` collection.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    /// Posts owned by `user_id`, in store order, windowed by `page`.
    /// No match yields an empty vector.
    async fn find_by_user_id(&self, user_id: ObjectId, page: Page) -> Result<Vec<Post>, RepoError>;
}
