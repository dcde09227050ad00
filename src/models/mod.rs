use std::fmt;

/// A persisted sticky note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Validated note fields, ready to be inserted or applied to an existing note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn from_draft(id: i64, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_displays_as_its_title() {
        let note = Note {
            id: 1,
            title: "Test Note".to_string(),
            content: "This is the content of the test note.".to_string(),
        };

        assert_eq!(note.to_string(), "Test Note");
    }
}
