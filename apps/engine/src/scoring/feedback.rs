//! Qualitative feedback sentences attached to category scores. Three tiers
//! per category (>=80, >=60, below), fixed templates per tier.

use std::collections::BTreeMap;

pub fn keyword_feedback(score: u32) -> String {
    if score >= 80 {
        "Excellent keyword match with the job description. The resume contains most of the important terms required.".to_string()
    } else if score >= 60 {
        "Good keyword match found. Consider adding more specific terms from the job description.".to_string()
    } else {
        "Low keyword match. The resume lacks many important terms from the job description.".to_string()
    }
}

pub fn skills_feedback(score: u32, matched_count: usize, required_count: usize) -> String {
    if score >= 80 {
        format!(
            "Excellent skills alignment. The resume demonstrates proficiency in {matched_count} of {required_count} required skills."
        )
    } else if score >= 60 {
        format!(
            "Good skills match, but some key skills could be highlighted more prominently. Found {matched_count} of {required_count} required skills."
        )
    } else {
        format!("Low skills match. Only found {matched_count} of {required_count} required skills.")
    }
}

pub fn experience_feedback(score: u32) -> String {
    if score >= 80 {
        "Work experience aligns very well with the job requirements.".to_string()
    } else if score >= 60 {
        "Relevant work experience found, but could better highlight achievements related to the requirements.".to_string()
    } else {
        "Experience seems insufficient compared to job requirements. Consider highlighting relevant projects or achievements.".to_string()
    }
}

pub fn education_feedback(score: u32) -> String {
    if score >= 80 {
        "Education background is a great match for this role.".to_string()
    } else if score >= 60 {
        "Educational qualifications meet basic requirements, but could highlight relevant coursework or certifications.".to_string()
    } else {
        "Educational background may need supplementing with relevant certifications or courses for this role.".to_string()
    }
}

/// Evaluation-details sentence reporting how many projects were detected.
pub fn projects_sentence(count: usize) -> String {
    format!("Resume includes {count} projects that demonstrate practical application of skills.")
}

/// Feedback line for the optional Projects category breakdown.
pub fn projects_category_feedback(count: usize) -> String {
    format!("Resume includes {count} projects demonstrating practical skills application.")
}

/// Summarizes up to three skill-evidence snippets, with an "and N more"
/// suffix when more matched skills carry evidence. `None` when no matched
/// skill has any evidence.
pub fn skill_context_sentence(
    matched: &[String],
    contexts: &BTreeMap<String, Vec<String>>,
) -> Option<String> {
    let snippets: Vec<String> = matched
        .iter()
        .filter_map(|skill| {
            contexts
                .get(skill)
                .and_then(|evidence| evidence.first())
                .map(|first| format!("{skill}: {first}"))
        })
        .collect();

    if snippets.is_empty() {
        return None;
    }

    let shown = snippets.iter().take(3).cloned().collect::<Vec<_>>().join("; ");
    let sentence = if snippets.len() > 3 {
        format!(
            "Skill context analysis: {shown} and {} more",
            snippets.len() - 3
        )
    } else {
        format!("Skill context analysis: {shown}")
    };
    Some(sentence)
}
