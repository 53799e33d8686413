use serde::{Deserialize, Serialize};

use super::ObjectId;

/// User account as stored in the `accounts` collection.
///
/// `password` holds the digest produced at registration, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "Id")]
    pub id: ObjectId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
}

impl User {
    /// Create a new user with a freshly generated id.
    pub fn new(name: String, email: String, password_digest: String) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            email,
            password: password_digest,
        }
    }
}
