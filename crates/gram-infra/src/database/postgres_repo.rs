//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use gram_core::domain::{MAX_SKIP, ObjectId, Page, Post};
use gram_core::error::RepoError;
use gram_core::ports::{PostRepository, UserRepository};

use super::entity::account::{self, Entity as AccountEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::mask_email;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository over the `accounts` table.
pub type PostgresUserRepository = PostgresBaseRepository<AccountEntity>;

/// PostgreSQL post repository over the `posts` table.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Checking for existing account");

        let found = self
            .timed(
                AccountEntity::find()
                    .filter(account::Column::Email.eq(email))
                    .one(self.db.as_ref()),
            )
            .await?;

        Ok(found.is_some())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_user_id(&self, user_id: ObjectId, page: Page) -> Result<Vec<Post>, RepoError> {
        let models = self
            .timed(
                PostEntity::find()
                    .filter(post::Column::Uid.eq(user_id.to_hex()))
                    .order_by_asc(post::Column::Id)
                    .offset(page.skip.min(MAX_SKIP))
                    .limit(page.limit)
                    .all(self.db.as_ref()),
            )
            .await?;

        models.into_iter().map(Post::try_from).collect()
    }
}
