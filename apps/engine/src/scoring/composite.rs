//! End-to-end scoring pipeline.
//!
//! One call scores a batch of resumes against a single posting: derive the
//! working skill list, run the four matching dimensions per resume, blend the
//! category scores into an overall score, attach feedback, and rank the batch
//! highest first. Ties keep the caller's input order.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::matching::education::match_education;
use crate::matching::experience::match_experience;
use crate::matching::keywords::{match_keywords, STOP_WORDS};
use crate::matching::projects::extract_project_descriptions;
use crate::matching::sections::{segment, Section};
use crate::matching::skills::{truncate_brief, SkillMatcher};
use crate::matching::synonyms::COMMON_TECH;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeDocument;
use crate::models::score::{Category, CategoryScore, ResumeScore};
use crate::scoring::feedback;

/// Cap on matches/misses listed in the Keywords breakdown.
const KEYWORD_DETAIL_LIMIT: usize = 10;

/// Cap on project briefs listed in the Projects breakdown.
const PROJECT_DETAIL_LIMIT: usize = 3;

/// Skill-introducing phrases in job description prose. The capture runs to
/// the first character outside the word/space/punctuation class, so it can
/// drag along trailing words; terminal punctuation is stripped afterwards.
static SKILL_PHRASES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)proficiency (?:in|with) ([\w\s./]+)").unwrap(),
        Regex::new(r"(?i)experience (?:in|with) ([\w\s./]+)").unwrap(),
        Regex::new(r"(?i)knowledge of ([\w\s./]+)").unwrap(),
        Regex::new(r"(?i)familiar with ([\w\s./]+)").unwrap(),
        Regex::new(r"(?i)skills (?:in|with) ([\w\s./]+)").unwrap(),
        Regex::new(r"(?i)expertise (?:in|with) ([\w\s./]+)").unwrap(),
    ]
});

/// A run of up to four capitalized tokens, the stand-in for named-entity
/// extraction over the description.
static ENTITY_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z][A-Za-z0-9+#.]*(?: [A-Z][A-Za-z0-9+#.]*){0,3}").unwrap()
});

static COMMON_TECH_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    COMMON_TECH
        .iter()
        .map(|tech| {
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(tech))).unwrap();
            (*tech, pattern)
        })
        .collect()
});

/// Scores every resume against the posting and returns the batch ranked by
/// overall score, highest first.
///
/// The only hard failure is a blank posting; everything else degrades to a
/// documented fallback and still yields a complete score per resume.
pub fn score_resumes(
    job: &JobPosting,
    resumes: &[ResumeDocument],
    config: &EngineConfig,
) -> Result<Vec<ResumeScore>, EngineError> {
    if job.is_blank() {
        return Err(EngineError::BlankJobPosting);
    }

    let effective_skills = if job.skills.is_empty() {
        derive_skills(&job.description, &config.fallback_skills)
    } else {
        job.skills.clone()
    };
    info!(
        job_title = %job.title,
        skill_count = effective_skills.len(),
        resume_count = resumes.len(),
        "scoring batch"
    );

    let matcher = SkillMatcher::new(&effective_skills)?;

    let mut scores: Vec<ResumeScore> = resumes
        .iter()
        .map(|resume| score_one(job, resume, &matcher, config))
        .collect();

    // Stable sort: equal overall scores keep input order.
    scores.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
    Ok(scores)
}

/// Derives a working skill list from description prose when the posting
/// carries none: skill-introducing phrases, capitalized entity runs, then
/// well-known technology names. Deduplicated case-insensitively in discovery
/// order; `fallback` applies when nothing at all is found.
pub fn derive_skills(description: &str, fallback: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut skills: Vec<String> = Vec::new();

    for pattern in SKILL_PHRASES.iter() {
        for caps in pattern.captures_iter(description) {
            if let Some(group) = caps.get(1) {
                let candidate = group
                    .as_str()
                    .trim()
                    .trim_end_matches(['.', ',', ':', ';'])
                    .trim();
                push_unique(&mut skills, &mut seen, candidate);
            }
        }
    }

    for found in ENTITY_RUN.find_iter(description) {
        let candidate = found.as_str().trim();
        if STOP_WORDS.contains(&candidate.to_lowercase().as_str()) {
            continue;
        }
        push_unique(&mut skills, &mut seen, candidate);
    }

    for (tech, pattern) in COMMON_TECH_PATTERNS.iter() {
        if pattern.is_match(description) {
            push_unique(&mut skills, &mut seen, tech);
        }
    }

    if skills.is_empty() {
        fallback.to_vec()
    } else {
        skills
    }
}

fn push_unique(skills: &mut Vec<String>, seen: &mut HashSet<String>, candidate: &str) {
    if candidate.chars().count() <= 2 {
        return;
    }
    if seen.insert(candidate.to_lowercase()) {
        skills.push(candidate.to_string());
    }
}

fn score_one(
    job: &JobPosting,
    resume: &ResumeDocument,
    matcher: &SkillMatcher,
    config: &EngineConfig,
) -> ResumeScore {
    let text = resume.text();
    let sections = segment(text);
    let projects = extract_project_descriptions(&sections);

    let keyword = match_keywords(text, &job.description);
    let skills = matcher.evaluate(&sections, &projects);

    // Date ranges inside project descriptions count toward experience; with
    // no detected projects the full text is scanned instead.
    let experience_text = if projects.is_empty() {
        text.to_string()
    } else {
        format!(
            "{}\n{}",
            sections.text(Section::Experience),
            projects.join("\n")
        )
    };
    let experience = match_experience(
        &experience_text,
        &job.requirements,
        config.current_year,
        config.default_required_years,
    );
    let education = match_education(text, &job.requirements);

    let weights = &config.weights;
    let blended = weights.keyword * keyword.score as f64
        + weights.skills * skills.score as f64
        + weights.experience * experience.score as f64
        + weights.education * education.score as f64;
    let overall_score = blended.round().clamp(0.0, 100.0) as u32;

    let keyword_fb = feedback::keyword_feedback(keyword.score);
    let skills_fb =
        feedback::skills_feedback(skills.score, skills.matched.len(), matcher.required_count());
    let experience_fb = feedback::experience_feedback(experience.score);
    let education_fb = feedback::education_feedback(education.score);

    let mut evaluation_details = vec![keyword_fb.clone(), skills_fb.clone()];
    if !projects.is_empty() {
        evaluation_details.push(feedback::projects_sentence(projects.len()));
    }
    evaluation_details.push(experience_fb.clone());
    evaluation_details.push(education_fb.clone());
    if let Some(sentence) = feedback::skill_context_sentence(&skills.matched, &skills.contexts) {
        evaluation_details.push(sentence);
    }

    // Matched skills carry their strongest evidence snippet inline.
    let skill_matches: Vec<String> = skills
        .matched
        .iter()
        .map(|skill| match skills.contexts.get(skill).and_then(|e| e.first()) {
            Some(context) => format!("{skill} ({context})"),
            None => skill.clone(),
        })
        .collect();

    let mut score_details = vec![
        CategoryScore {
            category: Category::Keywords,
            score: keyword.score,
            matches: keyword
                .matched
                .iter()
                .take(KEYWORD_DETAIL_LIMIT)
                .cloned()
                .collect(),
            misses: keyword
                .missed
                .iter()
                .take(KEYWORD_DETAIL_LIMIT)
                .cloned()
                .collect(),
            feedback: keyword_fb,
            contexts: None,
        },
        CategoryScore {
            category: Category::Skills,
            score: skills.score,
            matches: skill_matches,
            misses: skills.missed.clone(),
            feedback: skills_fb,
            contexts: Some(skills.contexts.clone()),
        },
        CategoryScore {
            category: Category::Experience,
            score: experience.score,
            matches: experience.matches.clone(),
            misses: experience.misses.clone(),
            feedback: experience_fb,
            contexts: None,
        },
        CategoryScore {
            category: Category::Education,
            score: education.score,
            matches: education.matches.clone(),
            misses: education.misses.clone(),
            feedback: education_fb,
            contexts: None,
        },
    ];
    if !projects.is_empty() {
        score_details.push(CategoryScore {
            category: Category::Projects,
            score: (60 + 10 * projects.len() as u32).min(100),
            matches: projects
                .iter()
                .take(PROJECT_DETAIL_LIMIT)
                .map(|p| truncate_brief(p, 100))
                .collect(),
            misses: Vec::new(),
            feedback: feedback::projects_category_feedback(projects.len()),
            contexts: None,
        });
    }

    debug!(
        resume_id = %resume.id,
        overall = overall_score,
        keywords = keyword.score,
        skills = skills.score,
        experience = experience.score,
        education = education.score,
        "scored resume"
    );

    ResumeScore {
        resume_id: resume.id.clone(),
        resume_name: resume.name.clone(),
        file_name: resume.file_name.clone(),
        overall_score,
        keyword_match: keyword.score,
        skills_match: skills.score,
        experience_match: experience.score,
        education_match: education.score,
        evaluation_details,
        score_details,
    }
}
