use std::sync::Arc;

use crate::domain::{ObjectId, User};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, UserRepository};

/// Reads and registers accounts.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Look up an account by its hex identifier.
    pub async fn find(&self, id_hex: &str) -> Result<User, DomainError> {
        let id = ObjectId::parse_str(id_hex)?;
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "User",
                id: id.to_hex(),
            })
    }

    /// Create an account after checking the email is unused.
    ///
    /// The check and the insert are separate store calls. A concurrent
    /// registration can slip between them; a unique index in the store turns
    /// that into the same `Duplicate` error.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<ObjectId, DomainError> {
        if self.users.exists_by_email(&email).await? {
            return Err(DomainError::Duplicate("User"));
        }

        let digest = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = User::new(name, email, digest);
        match self.users.insert(user).await {
            Ok(id) => Ok(id),
            Err(RepoError::Constraint(_)) => Err(DomainError::Duplicate("User")),
            Err(e) => Err(e.into()),
        }
    }
}
