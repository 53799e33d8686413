//! Data Transfer Objects - request/response types for the API.
//!
//! Field names follow the established wire format (`Name`, `UId`,
//! `Image_URL`, ...), not Rust conventions.

use gram_core::domain::ObjectId;
use serde::{Deserialize, Serialize};

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// Body of `POST /posts`.
///
/// A client-supplied `Timestamp` is accepted and ignored; the server stamps
/// its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(rename = "UId")]
    pub uid: ObjectId,
    #[serde(rename = "Caption", default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(rename = "Image_URL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Acknowledgment returned by both insert endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOneResponse {
    #[serde(rename = "InsertedID")]
    pub inserted_id: ObjectId,
}

impl From<ObjectId> for InsertOneResponse {
    fn from(inserted_id: ObjectId) -> Self {
        Self { inserted_id }
    }
}
