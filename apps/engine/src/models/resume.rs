use serde::{Deserialize, Serialize};

/// Prefix the upstream document extractor writes into `content` when it fails
/// to pull text out of a PDF/DOCX. Kept for wire compatibility; internally the
/// failure becomes a typed [`ExtractionOutcome::Failed`].
pub const EXTRACTION_FAILURE_PREFIX: &str = "Could not extract";

/// Result of upstream text extraction for one resume document.
///
/// The extractor runs before the engine and reports failure in-band as a
/// sentinel string. Modeling the outcome as an enum makes that failure
/// visible to callers instead of letting the sentinel text get scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Extracted { text: String },
    Failed { reason: String },
}

impl ExtractionOutcome {
    /// Classifies raw extractor output. Empty text and the "Could not
    /// extract" sentinel both count as failures.
    pub fn from_raw_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ExtractionOutcome::Failed {
                reason: "no text extracted".to_string(),
            };
        }
        if trimmed.starts_with(EXTRACTION_FAILURE_PREFIX) {
            return ExtractionOutcome::Failed {
                reason: trimmed.to_string(),
            };
        }
        ExtractionOutcome::Extracted {
            text: raw.to_string(),
        }
    }

    /// Text to score. Failed extractions score as empty content so every
    /// category degrades to its floor instead of matching the sentinel.
    pub fn text(&self) -> &str {
        match self {
            ExtractionOutcome::Extracted { text } => text,
            ExtractionOutcome::Failed { .. } => "",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed { .. })
    }
}

/// One candidate resume with already-extracted plain text.
///
/// Identity fields are caller-supplied and opaque to the engine; the engine
/// copies them onto the resulting score record unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub id: String,
    pub name: String,
    pub file_name: String,
    pub content: ExtractionOutcome,
}

impl ResumeDocument {
    /// Builds a document from the raw extractor output string.
    pub fn from_raw_text(
        id: impl Into<String>,
        name: impl Into<String>,
        file_name: impl Into<String>,
        raw: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            file_name: file_name.into(),
            content: ExtractionOutcome::from_raw_text(raw),
        }
    }

    pub fn text(&self) -> &str {
        self.content.text()
    }
}
