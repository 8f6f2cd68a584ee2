//! Row types returned by the API and request bodies accepted by it.

use chrono::NaiveDateTime;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Singleton couple settings row.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct CoupleData {
    pub id: i64,
    pub start_date: String,
    pub home_message: Option<String>,
    pub intro_text: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Memory {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Legacy column; the API only ever writes `photo_base64`.
    pub photo_filename: Option<String>,
    pub photo_base64: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Perspective {
    pub id: i64,
    pub perspective_number: i64,
    pub content: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Result of a single-perspective lookup. A number that was never written is
/// answered with a placeholder carrying empty content instead of a 404.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PerspectiveView {
    Stored(Perspective),
    Placeholder { perspective_number: i64, content: String },
}

impl PerspectiveView {
    pub fn placeholder(perspective_number: i64) -> Self {
        PerspectiveView::Placeholder {
            perspective_number,
            content: String::new(),
        }
    }
}

/// Whether an upsert inserted a new row or rewrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[derive(Debug, Default, Deserialize)]
pub struct StartDateBody {
    pub start_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HomeMessageBody {
    pub home_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IntroTextBody {
    pub intro_text: Option<String>,
}

/// Body for both creating and replacing a memory.
#[derive(Debug, Default, Deserialize)]
pub struct MemoryBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo_base64: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PerspectiveBody {
    /// Accepts `2` or `"2"`; frontends often post raw input-field values.
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub perspective_number: Option<i64>,
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PerspectiveContentBody {
    pub content: Option<String>,
}

/// Validated memory fields ready for insert/update.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryInput {
    pub title: String,
    pub description: String,
    pub photo_base64: Option<String>,
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientI64;

    impl<'de> Visitor<'de> for LenientI64 {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer or a string holding an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v)
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(LenientI64)
        }
    }

    deserializer.deserialize_any(LenientI64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspective_number_accepts_numeric_strings() {
        let body: PerspectiveBody = serde_json::from_str(r#"{"perspective_number":"2","content":"hi"}"#).unwrap();
        assert_eq!(body.perspective_number, Some(2));

        let body: PerspectiveBody = serde_json::from_str(r#"{"perspective_number":5,"content":"hi"}"#).unwrap();
        assert_eq!(body.perspective_number, Some(5));

        let body: PerspectiveBody = serde_json::from_str(r#"{"perspective_number":null}"#).unwrap();
        assert_eq!(body.perspective_number, None);

        let body: PerspectiveBody = serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(body.perspective_number, None);
    }

    #[test]
    fn perspective_number_rejects_words() {
        let err = serde_json::from_str::<PerspectiveBody>(r#"{"perspective_number":"two"}"#).unwrap_err();
        assert!(err.to_string().contains("integer"));
    }
}
