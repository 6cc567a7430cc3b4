use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Scoring category of one [`CategoryScore`] breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Keywords,
    Skills,
    Experience,
    Education,
    Projects,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Keywords => "Keywords",
            Category::Skills => "Skills",
            Category::Experience => "Experience",
            Category::Education => "Education",
            Category::Projects => "Projects",
        };
        f.write_str(name)
    }
}

/// Per-category score breakdown attached to a [`ResumeScore`].
///
/// `contexts` is only populated for the Skills category: canonical skill to
/// the ordered evidence snippets that proved it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
    pub matches: Vec<String>,
    pub misses: Vec<String>,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<BTreeMap<String, Vec<String>>>,
}

/// Full scoring result for one resume against one job posting.
///
/// Created once per resume per scoring call and immutable after return.
/// All score fields are integers in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeScore {
    pub resume_id: String,
    pub resume_name: String,
    pub file_name: String,
    pub overall_score: u32,
    pub keyword_match: u32,
    pub skills_match: u32,
    pub experience_match: u32,
    pub education_match: u32,
    pub evaluation_details: Vec<String>,
    pub score_details: Vec<CategoryScore>,
}

/// Qualitative read of a [`ResumeScore`] for recruiter-facing display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAnalysis {
    pub overall_assessment: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::Keywords).unwrap();
        assert_eq!(json, r#""Keywords""#);
    }

    #[test]
    fn test_contexts_omitted_when_absent() {
        let detail = CategoryScore {
            category: Category::Experience,
            score: 80,
            matches: vec!["5 years of experience".to_string()],
            misses: vec![],
            feedback: String::new(),
            contexts: None,
        };
        let json = serde_json::to_string(&detail).unwrap();
        assert!(!json.contains("contexts"));
    }

    #[test]
    fn test_resume_score_round_trips_wire_casing() {
        let score = ResumeScore {
            resume_id: "r-1".to_string(),
            resume_name: "Jane".to_string(),
            file_name: "jane.pdf".to_string(),
            overall_score: 72,
            keyword_match: 40,
            skills_match: 80,
            experience_match: 60,
            education_match: 100,
            evaluation_details: vec![],
            score_details: vec![],
        };
        let json = serde_json::to_string(&score).unwrap();
        assert!(json.contains(r#""resumeId""#));
        assert!(json.contains(r#""overallScore":72"#));
        let back: ResumeScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.skills_match, 80);
    }
}
