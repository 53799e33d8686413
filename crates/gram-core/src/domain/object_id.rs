//! Store-assigned record identifier.
//!
//! Twelve bytes exchanged externally as 24 hex characters. Generation and
//! parsing are delegated to `bson`; this wrapper pins the JSON form to the
//! plain hex string instead of bson's extended `{"$oid": ...}` shape.

use std::fmt;
use std::str::FromStr;

use bson::oid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when text is not a 24-character hex identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid identifier")]
pub struct InvalidObjectId(pub String);

/// Opaque 12-byte identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(oid::ObjectId);

impl ObjectId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(oid::ObjectId::new())
    }

    /// Parse the 24-character hex form. Either case is accepted.
    pub fn parse_str(s: &str) -> Result<Self, InvalidObjectId> {
        oid::ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidObjectId(s.to_string()))
    }

    /// Lowercase 24-character hex form.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Seconds since epoch embedded at generation time.
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp().timestamp_millis() / 1000
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = InvalidObjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_and_ordered() {
        let first = ObjectId::new();
        let second = ObjectId::new();

        assert_ne!(first, second);
        assert_eq!(first.to_hex().len(), 24);
        // Same second, same process: only the counter differs.
        if first.timestamp() == second.timestamp() && &first.to_hex()[18..] != "ffffff" {
            assert!(first < second);
        }
    }

    #[test]
    fn test_generated_id_carries_current_time() {
        let now = chrono::Utc::now().timestamp();
        let id = ObjectId::new();

        assert!((id.timestamp() - now).abs() <= 5);
    }

    #[test]
    fn test_parse_accepts_canonical_hex() {
        let id = ObjectId::parse_str("5f1d7f1e9c1b2a3d4e5f6a7b").unwrap();
        assert_eq!(id.to_hex(), "5f1d7f1e9c1b2a3d4e5f6a7b");
        assert_eq!(id.timestamp(), 0x5f1d7f1e);

        let upper = ObjectId::parse_str("5F1D7F1E9C1B2A3D4E5F6A7B").unwrap();
        assert_eq!(upper, id);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "",
            "5f1d7f1e9c1b2a3d4e5f6a7",
            "5f1d7f1e9c1b2a3d4e5f6a7b0",
            "5f1d7f1e9c1b2a3d4e5f6a7b00",
            "zz1d7f1e9c1b2a3d4e5f6a7b",
            "+f1d7f1e9c1b2a3d4e5f6a7b",
            "5f1d7f1e9c1b2a3d4e5f6aé",
        ] {
            let err = ObjectId::parse_str(input).unwrap_err();
            assert_eq!(err, InvalidObjectId(input.to_string()));
        }
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let id = ObjectId::parse_str("000000000000000000000001").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"000000000000000000000001\"");

        let bad: Result<ObjectId, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }
}
