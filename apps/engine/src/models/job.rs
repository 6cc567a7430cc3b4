use serde::{Deserialize, Serialize};

/// A job posting to score resumes against.
///
/// `skills` may arrive pre-populated by an upstream job-description analyzer
/// or empty, in which case the scorer derives a working skill list from the
/// description text. The engine reads this struct, never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    /// Canonical required skills, in priority order.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-text requirement lines ("3+ years experience", "Bachelor's degree").
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl JobPosting {
    /// True when the posting carries no usable signal at all. The scorer
    /// treats this as a caller contract violation rather than degrading.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
            && self.description.trim().is_empty()
            && self.skills.is_empty()
            && self.requirements.is_empty()
    }
}
