use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Note, NoteDraft};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const TITLE_MAX_LENGTH: usize = 255;

/// Raw note fields as submitted by a client.
///
/// Absent fields deserialize to empty strings, so a missing field and an
/// empty one are reported the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteForm {
    /// Note title, at most 255 characters
    #[serde(default)]
    pub title: String,
    /// Note body
    #[serde(default)]
    pub content: String,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

impl NoteForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Builds a form from urlencoded key/value pairs. A repeated field keeps
    /// its last value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "title" => form.title = value,
                "content" => form.content = value,
                _ => {}
            }
        }
        form
    }

    /// Form pre-populated with an existing note's values.
    pub fn from_note(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone())
    }

    /// Checks both fields independently and returns the stripped values on
    /// success.
    pub fn validate(&self) -> Result<NoteDraft, FormErrors> {
        let title = self.title.trim();
        let content = self.content.trim();

        let mut errors = FormErrors::default();

        if title.is_empty() {
            errors.title.push(REQUIRED_MESSAGE.to_string());
        } else {
            let length = title.chars().count();
            if length > TITLE_MAX_LENGTH {
                errors.title.push(format!(
                    "Ensure this value has at most {TITLE_MAX_LENGTH} characters (it has {length})."
                ));
            }
        }

        if content.is_empty() {
            errors.content.push(REQUIRED_MESSAGE.to_string());
        }

        if errors.is_empty() {
            Ok(NoteDraft {
                title: title.to_string(),
                content: content.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}
