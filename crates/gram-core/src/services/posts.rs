use std::sync::Arc;

use crate::domain::{DEFAULT_MAX_LIMIT, ObjectId, Page, Post};
use crate::error::DomainError;
use crate::ports::{PostRepository, UserRepository};

/// Reads, creates and lists posts.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    max_page_limit: u64,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            posts,
            users,
            max_page_limit: DEFAULT_MAX_LIMIT,
        }
    }

    pub fn with_max_page_limit(mut self, max: u64) -> Self {
        self.max_page_limit = max;
        self
    }

    /// Look up a post by its hex identifier.
    pub async fn find(&self, id_hex: &str) -> Result<Post, DomainError> {
        let id = ObjectId::parse_str(id_hex)?;
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Post",
                id: id.to_hex(),
            })
    }

    /// Create a post for an existing user, stamped with the server time.
    pub async fn create(
        &self,
        uid: ObjectId,
        caption: Option<String>,
        image_url: Option<String>,
    ) -> Result<ObjectId, DomainError> {
        if self.users.find_by_id(uid).await?.is_none() {
            return Err(DomainError::NotFound {
                entity_type: "User",
                id: uid.to_hex(),
            });
        }

        let post = Post::new(uid, caption, image_url);
        Ok(self.posts.insert(post).await?)
    }

    /// Posts owned by the user with hex identifier `uid_hex`.
    ///
    /// The owner is not required to exist; an unknown owner lists nothing.
    pub async fn list_for_user(&self, uid_hex: &str, page: Page) -> Result<Vec<Post>, DomainError> {
        let uid = ObjectId::parse_str(uid_hex)?;
        let page = page.clamped(self.max_page_limit);
        Ok(self.posts.find_by_user_id(uid, page).await?)
    }
}
