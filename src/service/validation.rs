//! Required-field checks for request bodies.

use crate::error::AppError;
use crate::model::{MemoryBody, MemoryInput, PerspectiveBody};

pub struct RequestValidator;

impl RequestValidator {
    /// Present and non-empty after trimming. Returns the original (untrimmed) value.
    pub fn require_text(field: &str, value: Option<String>) -> Result<String, AppError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(AppError::Validation(format!("{} is required", field))),
        }
    }

    /// Perspective content: same rule as the create path.
    pub fn require_content(value: Option<String>) -> Result<String, AppError> {
        Self::require_text("content", value)
    }

    /// Title and description are both required; an empty photo is stored as NULL.
    pub fn memory(body: MemoryBody) -> Result<MemoryInput, AppError> {
        let (title, description) = match (non_blank(body.title), non_blank(body.description)) {
            (Some(t), Some(d)) => (t, d),
            _ => {
                return Err(AppError::Validation(
                    "Title and description are required".into(),
                ))
            }
        };
        Ok(MemoryInput {
            title,
            description,
            photo_base64: non_blank(body.photo_base64),
        })
    }

    /// Perspective numbers start at 1; content must be non-empty.
    pub fn perspective(body: PerspectiveBody) -> Result<(i64, String), AppError> {
        match (body.perspective_number, non_blank(body.content)) {
            (Some(n), Some(c)) if n > 0 => Ok((n, c)),
            _ => Err(AppError::Validation(
                "perspective_number and content are required".into(),
            )),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
