use serde::{Deserialize, Serialize};

use super::{ReportId, SpaceId};
use crate::Timestamp;

/// A dated progress entry within a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub id: ReportId,
    pub space_id: SpaceId,
    pub date: Timestamp,
    /// Markdown
    pub progress: String,
    /// Markdown
    pub next_step: String,
    /// Markdown, empty until annotated
    pub markdown_note: String,
    /// Unset until the first edit
    pub last_modified: Option<Timestamp>,
}

impl ProgressReport {
    pub fn is_edited(&self) -> bool {
        self.last_modified.is_some()
    }

    pub fn has_note(&self) -> bool {
        !self.markdown_note.trim().is_empty()
    }
}

/// Partial update of a progress report. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportPatch {
    pub progress: Option<String>,
    pub next_step: Option<String>,
    pub markdown_note: Option<String>,
    pub date: Option<Timestamp>,
}

impl ReportPatch {
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            markdown_note: Some(note.into()),
            ..Self::default()
        }
    }

    /// Trims `progress` and `next_step`; notes are kept verbatim.
    pub fn normalized(self) -> Self {
        Self {
            progress: self.progress.map(|s| s.trim().to_string()),
            next_step: self.next_step.map(|s| s.trim().to_string()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_text_fields_only() {
        let patch = ReportPatch {
            progress: Some("  ran experiment \n".to_string()),
            next_step: Some("\twrite up".to_string()),
            markdown_note: Some("  indented code\n".to_string()),
            date: None,
        }
        .normalized();

        assert_eq!(patch.progress.as_deref(), Some("ran experiment"));
        assert_eq!(patch.next_step.as_deref(), Some("write up"));
        assert_eq!(patch.markdown_note.as_deref(), Some("  indented code\n"));
    }
}
