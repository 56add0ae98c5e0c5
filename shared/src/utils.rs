//! # Shared Utility Functions
//!
//! Serde helpers shared by the DTO modules.
//!
//! The backend is inconsistent about identifier types: session and speaker ids
//! arrive as JSON numbers from some endpoints and as strings from others. The
//! client keys wishlists and selections by string, so ids are normalised on the
//! way in.
//!
//! ```rust
//! use shared::dto::conference::Speaker;
//!
//! let a: Speaker = serde_json::from_str(r#"{"id": 9, "name": "Ada"}"#).unwrap();
//! let b: Speaker = serde_json::from_str(r#"{"id": "9", "name": "Ada"}"#).unwrap();
//! assert_eq!(a.id, b.id);
//! ```

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

/// Deserialize an identifier sent either as a JSON string or a JSON integer.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    })
}

/// Optional variant of [`string_or_number`].
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(text)) => Some(text),
        Some(RawId::Signed(n)) => Some(n.to_string()),
        Some(RawId::Unsigned(n)) => Some(n.to_string()),
        None => None,
    })
}
