//! Education classification: infers the candidate's highest education level
//! and compares it against the level the posting requires.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Education ladder, ranked. `rank` drives partial-credit scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EducationLevel {
    HighSchool,
    Certificate,
    Associate,
    Bachelors,
    Masters,
    Phd,
}

impl EducationLevel {
    /// Highest to lowest; both requirement and resume scans walk this order.
    pub const LADDER: [EducationLevel; 6] = [
        EducationLevel::Phd,
        EducationLevel::Masters,
        EducationLevel::Bachelors,
        EducationLevel::Associate,
        EducationLevel::Certificate,
        EducationLevel::HighSchool,
    ];

    pub fn rank(self) -> u32 {
        match self {
            EducationLevel::Phd => 6,
            EducationLevel::Masters => 5,
            EducationLevel::Bachelors => 4,
            EducationLevel::Associate => 3,
            EducationLevel::Certificate => 2,
            EducationLevel::HighSchool => 1,
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            EducationLevel::Phd => &["phd", "ph.d", "doctor of philosophy", "doctorate"],
            EducationLevel::Masters => &["master", "ms", "m.s", "m.a", "mba", "m.b.a"],
            EducationLevel::Bachelors => &["bachelor", "bs", "b.s", "b.a", "undergraduate degree"],
            EducationLevel::Associate => &["associate", "a.s", "a.a"],
            EducationLevel::Certificate => &["certificate", "certification", "certified"],
            EducationLevel::HighSchool => &["high school", "hs", "diploma", "ged"],
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EducationLevel::Phd => "PhD",
            EducationLevel::Masters => "Masters",
            EducationLevel::Bachelors => "Bachelors",
            EducationLevel::Associate => "Associate",
            EducationLevel::Certificate => "Certificate",
            EducationLevel::HighSchool => "High School",
        };
        f.write_str(name)
    }
}

/// Word-boundary patterns per level, compiled once. Requirement scanning uses
/// plain substring containment; resume scanning uses these.
static LEVEL_PATTERNS: Lazy<Vec<(EducationLevel, Vec<Regex>)>> = Lazy::new(|| {
    EducationLevel::LADDER
        .iter()
        .map(|&level| {
            let patterns = level
                .keywords()
                .iter()
                .map(|keyword| {
                    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))).unwrap()
                })
                .collect();
            (level, patterns)
        })
        .collect()
});

/// Result of education scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationMatchOutcome {
    pub score: u32,
    pub resume_level: Option<EducationLevel>,
    pub required_level: EducationLevel,
    pub matches: Vec<String>,
    pub misses: Vec<String>,
}

/// First level whose keywords appear in any requirement string, scanning
/// requirements in order and the ladder top-down per requirement. Defaults to
/// Bachelors.
pub fn required_level(requirements: &[String]) -> EducationLevel {
    for requirement in requirements {
        let lower = requirement.to_lowercase();
        for level in EducationLevel::LADDER {
            if level
                .keywords()
                .iter()
                .any(|keyword| lower.contains(keyword))
            {
                return level;
            }
        }
    }
    EducationLevel::Bachelors
}

/// Highest-ranked level whose keyword appears as a whole word in the resume.
pub fn resume_level(resume_text: &str) -> Option<EducationLevel> {
    let lower = resume_text.to_lowercase();
    for (level, patterns) in LEVEL_PATTERNS.iter() {
        if patterns.iter().any(|pattern| pattern.is_match(&lower)) {
            return Some(*level);
        }
    }
    None
}

/// Scores the candidate's education level against the requirement. Meeting
/// the requirement is 100; anything below earns partial credit capped at 90;
/// no education information at all is 0.
pub fn match_education(resume_text: &str, requirements: &[String]) -> EducationMatchOutcome {
    let required = required_level(requirements);
    let found = resume_level(resume_text);

    let required_rank = required.rank();
    let resume_rank = found.map(EducationLevel::rank).unwrap_or(0);

    let score = if resume_rank >= required_rank {
        100
    } else if resume_rank > 0 {
        let partial = 50.0 + 50.0 * resume_rank as f64 / required_rank as f64;
        partial.min(90.0).round() as u32
    } else {
        0
    };

    let mut matches = Vec::new();
    let mut misses = Vec::new();
    match found {
        Some(level) => matches.push(format!("{level} degree")),
        None => misses.push("No education information found".to_string()),
    }
    if resume_rank < required_rank {
        let found_label = found
            .map(|l| l.to_string())
            .unwrap_or_else(|| "None".to_string());
        misses.push(format!("Required {required}, found {found_label}"));
    }

    EducationMatchOutcome {
        score,
        resume_level: found,
        required_level: required,
        matches,
        misses,
    }
}
