//! SeaORM entities. Identifiers are stored in their 24-character hex form.

pub mod account;
pub mod post;

use gram_core::domain::ObjectId;
use gram_core::error::RepoError;

pub(crate) fn parse_stored_id(raw: &str) -> Result<ObjectId, RepoError> {
    ObjectId::parse_str(raw).map_err(|e| RepoError::Query(format!("corrupt stored identifier: {e}")))
}
