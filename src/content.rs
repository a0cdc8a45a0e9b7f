// SPDX-License-Identifier: MPL-2.0
//! Content records and identifiers as seen by the admin client.
//!
//! The server owns every record; the client only keeps transient copies while
//! a record is being listed or edited. Identifiers are opaque: the server may
//! send them as JSON numbers or strings, and the client only ever echoes them
//! back inside request paths.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire representation accepted for opaque identifiers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a path segment.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value.to_string())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Server-assigned identifier of a content record.
    ContentId
);

opaque_id!(
    /// Server-assigned identifier of an uploaded image.
    ImageId
);

/// A full content record, as returned by the fetch-content call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub id: Option<ContentId>,
    pub title: String,
    /// Body text. The API calls this field `content`.
    #[serde(rename = "content")]
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One row of the content listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentSummary {
    pub id: ContentId,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ContentSummary {
    /// Formats the creation timestamp for display.
    ///
    /// The server stores SQLite `CURRENT_TIMESTAMP` values
    /// (`YYYY-MM-DD HH:MM:SS`); anything else is shown verbatim.
    #[must_use]
    pub fn created_label(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}

/// An image already stored on the server for some content record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredImage {
    pub id: ImageId,
    pub filename: String,
    /// Server-relative path the image can be downloaded from.
    #[serde(alias = "path")]
    pub url: String,
}

/// Title and body of a content record, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_accept_numbers_and_strings() {
        let numeric: ContentId = serde_json::from_str("42").unwrap();
        let text: ContentId = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(numeric.as_str(), "42");
        assert_eq!(text.as_str(), "abc-1");
    }

    #[test]
    fn content_maps_wire_body_field() {
        let content: Content =
            serde_json::from_str(r#"{"id": 7, "title": "Hello", "content": "World"}"#).unwrap();
        assert_eq!(content.id, Some(ContentId::from(7)));
        assert_eq!(content.body, "World");
        assert!(content.author.is_none());
    }

    #[test]
    fn draft_serializes_body_as_content() {
        let draft = Draft {
            title: "T".into(),
            body: "B".into(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"title": "T", "content": "B"}));
    }

    #[test]
    fn stored_image_accepts_path_alias() {
        let image: StoredImage =
            serde_json::from_str(r#"{"id": 3, "filename": "a.png", "path": "/uploads/a.png"}"#)
                .unwrap();
        assert_eq!(image.url, "/uploads/a.png");
    }

    #[test]
    fn created_label_shortens_sqlite_timestamps() {
        let row = ContentSummary {
            id: ContentId::from(1),
            title: "x".into(),
            author: None,
            created_at: Some("2024-03-01 12:34:56".into()),
        };
        assert_eq!(row.created_label(), "2024-03-01 12:34");

        let odd = ContentSummary {
            created_at: Some("yesterday".into()),
            ..row
        };
        assert_eq!(odd.created_label(), "yesterday");
    }
}
