use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, PrimaryKeyTrait, SqlErr};

use gram_core::domain::ObjectId;
use gram_core::error::RepoError;
use gram_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
///
/// Repositories share one pool through the `Arc`.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    query_timeout: Duration,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>, query_timeout: Duration) -> Self {
        Self {
            db,
            query_timeout,
            _entity: PhantomData,
        }
    }

    /// Run one store call under the configured timeout.
    pub(crate) async fn timed<F, R>(&self, call: F) -> Result<R, RepoError>
    where
        F: Future<Output = Result<R, DbErr>>,
    {
        match tokio::time::timeout(self.query_timeout, call).await {
            Ok(result) => result.map_err(classify),
            Err(_) => {
                tracing::warn!(
                    table = E::default().table_name(),
                    timeout = ?self.query_timeout,
                    "Store call timed out"
                );
                Err(RepoError::Timeout(self.query_timeout))
            }
        }
    }
}

pub(crate) fn classify(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl<E, T> BaseRepository<T> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = String>,
    T: TryFrom<E::Model, Error = RepoError> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, RepoError> {
        let model = self.timed(E::find_by_id(id.to_hex()).one(self.db.as_ref())).await?;
        model.map(T::try_from).transpose()
    }

    async fn insert(&self, entity: T) -> Result<ObjectId, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let result = self.timed(E::insert(active_model).exec(self.db.as_ref())).await?;

        ObjectId::parse_str(&result.last_insert_id).map_err(|e| RepoError::Query(e.to_string()))
    }
}
