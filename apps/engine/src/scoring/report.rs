//! Qualitative analysis of a finished score: an overall assessment line plus
//! strengths, weaknesses, and recommendations derived from the category
//! scores alone. Pure function of the [`ResumeScore`].

use crate::models::score::{ResumeScore, ScoreAnalysis};

/// Thresholds: strengths at >= 70, weaknesses below 50, recommendations
/// below 60, plus one tailoring hint for mid-range overall scores.
pub fn generate_score_analysis(score: &ResumeScore) -> ScoreAnalysis {
    let overall_assessment = if score.overall_score >= 80 {
        "Excellent match for the position. This candidate meets or exceeds most requirements."
    } else if score.overall_score >= 65 {
        "Good match for the position. This candidate meets many key requirements."
    } else if score.overall_score >= 50 {
        "Moderate match for the position. This candidate meets some requirements but has notable gaps."
    } else {
        "Limited match for the position. This candidate may need significant additional qualifications."
    }
    .to_string();

    let mut strengths = Vec::new();
    if score.keyword_match >= 70 {
        strengths.push("Strong keyword relevance to the job description".to_string());
    }
    if score.skills_match >= 70 {
        strengths.push("Impressive skills alignment with job requirements".to_string());
    }
    if score.experience_match >= 70 {
        strengths.push("Relevant experience level for the position".to_string());
    }
    if score.education_match >= 70 {
        strengths.push("Education credentials match or exceed requirements".to_string());
    }

    let mut weaknesses = Vec::new();
    if score.keyword_match < 50 {
        weaknesses.push("Resume lacks key terminology relevant to the position".to_string());
    }
    if score.skills_match < 50 {
        weaknesses.push("Skills gap compared to job requirements".to_string());
    }
    if score.experience_match < 50 {
        weaknesses.push("Experience level may be insufficient for the role".to_string());
    }
    if score.education_match < 50 {
        weaknesses.push("Educational qualifications may not meet requirements".to_string());
    }

    let mut recommendations = Vec::new();
    if score.keyword_match < 60 {
        recommendations.push(
            "Update resume to include more industry-specific terminology from the job description"
                .to_string(),
        );
    }
    if score.skills_match < 60 {
        recommendations.push(
            "Highlight technical or soft skills that align with the job requirements".to_string(),
        );
    }
    if score.experience_match < 60 {
        recommendations.push(
            "Emphasize relevant work experience and accomplishments related to the role"
                .to_string(),
        );
    }
    if score.education_match < 60 {
        recommendations.push(
            "Consider additional certifications or training to strengthen qualifications"
                .to_string(),
        );
    }
    if score.overall_score >= 50 && score.overall_score < 75 {
        recommendations.push(
            "Tailor the resume structure and content specifically for this type of position"
                .to_string(),
        );
    }

    ScoreAnalysis {
        overall_assessment,
        strengths,
        weaknesses,
        recommendations,
    }
}
