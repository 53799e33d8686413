use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ObjectId;

/// Post entity - an image post owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "Id")]
    pub id: ObjectId,
    #[serde(rename = "UId")]
    pub uid: ObjectId,
    #[serde(rename = "Caption", default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(rename = "Image_URL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Seconds since epoch, assigned by the server.
    #[serde(rename = "Timestamp")]
    pub posted_timestamp: i64,
}

impl Post {
    /// Create a new post stamped with the current server time.
    pub fn new(uid: ObjectId, caption: Option<String>, image_url: Option<String>) -> Self {
        Self {
            id: ObjectId::new(),
            uid,
            caption,
            image_url,
            posted_timestamp: Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_is_stamped_with_server_time() {
        let before = Utc::now().timestamp();
        let post = Post::new(ObjectId::new(), Some("hello".into()), None);
        let after = Utc::now().timestamp();

        assert!(post.posted_timestamp >= before && post.posted_timestamp <= after);
    }

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let uid = ObjectId::parse_str("0123456789abcdef01234567").unwrap();
        let post = Post::new(uid, None, None);
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["UId"], "0123456789abcdef01234567");
        assert!(json.get("Caption").is_none());
        assert!(json.get("Image_URL").is_none());
        assert!(json["Timestamp"].is_i64());
    }
}
