//! Experience estimation: infers years of professional experience from
//! explicit statements or reconstructed employment date ranges, and scores
//! them against the posting's requirement.

use once_cell::sync::Lazy;
use regex::Regex;

/// Explicit year-count statements, tried in priority order; the first match
/// wins.
static EXPLICIT_YEARS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(\d+)\+?\s*years?\s+(?:of\s+)?(?:work\s+)?experience").unwrap(),
        Regex::new(r"(?i)experience\s*:?\s*(\d+)\+?\s*years?").unwrap(),
        Regex::new(r"(?i)(?:professional|work)\s+experience\s*:?\s*(\d+)\+?\s*years?").unwrap(),
        Regex::new(
            r"(?i)worked\s+(?:for|as)(?:\s+an?)?(?:\s+\w+){1,4}\s+(?:for|over)\s+(\d+)\+?\s*years?",
        )
        .unwrap(),
    ]
});

/// Employment date ranges; the capture is the start year.
static YEAR_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{4})\s*-\s*(?:present|current|now|\d{4})").unwrap());
static MONTH_YEAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d{2}/(\d{4})\s*-\s*(?:present|current|now|\d{2}/\d{4})").unwrap()
});

/// Year-count statements inside posting requirement strings.
static REQUIRED_YEARS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d+)\+?\s*years").unwrap(),
        Regex::new(r"(\d+)\+?\s*\+\s*years").unwrap(),
        Regex::new(r"minimum\s+(?:of\s+)?(\d+)").unwrap(),
        Regex::new(r"at\s+least\s+(\d+)").unwrap(),
    ]
});

/// Result of experience scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceMatchOutcome {
    pub score: u32,
    pub resume_years: u32,
    pub required_years: u32,
    pub matches: Vec<String>,
    pub misses: Vec<String>,
}

/// Infers years of experience from resume text.
///
/// Explicit statements take priority; otherwise all employment date ranges
/// are collected and the span from the earliest start year to `current_year`
/// is used (minimum 1 once any range exists). Returns 0 when nothing is
/// found.
pub fn estimate_resume_years(text: &str, current_year: i32) -> u32 {
    for pattern in EXPLICIT_YEARS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Ok(years) = caps[1].parse::<u32>() {
                return years;
            }
        }
    }

    let mut start_years: Vec<i32> = Vec::new();
    for caps in YEAR_RANGE.captures_iter(text) {
        if let Ok(year) = caps[1].parse::<i32>() {
            start_years.push(year);
        }
    }
    for caps in MONTH_YEAR_RANGE.captures_iter(text) {
        if let Ok(year) = caps[1].parse::<i32>() {
            start_years.push(year);
        }
    }

    match start_years.iter().min() {
        Some(&earliest) => (current_year - earliest).max(1) as u32,
        None => 0,
    }
}

/// Scans the posting's requirement strings for a required year count, taking
/// the maximum across all requirements. Falls back to `default_years`.
pub fn required_years(requirements: &[String], default_years: u32) -> u32 {
    let mut required = 0u32;
    for requirement in requirements {
        let lower = requirement.to_lowercase();
        for pattern in REQUIRED_YEARS.iter() {
            if let Some(caps) = pattern.captures(&lower) {
                if let Ok(years) = caps[1].parse::<u32>() {
                    required = required.max(years);
                }
            }
        }
    }
    if required == 0 {
        default_years
    } else {
        required
    }
}

/// Scores inferred experience against the requirement.
pub fn match_experience(
    experience_text: &str,
    requirements: &[String],
    current_year: i32,
    default_required_years: u32,
) -> ExperienceMatchOutcome {
    let resume_years = estimate_resume_years(experience_text, current_year);
    let required = required_years(requirements, default_required_years);

    let score = if resume_years >= required {
        100
    } else if resume_years as f64 >= required as f64 * 0.7 {
        80
    } else if resume_years as f64 >= required as f64 * 0.5 {
        60
    } else if resume_years > 0 {
        40
    } else {
        20
    };

    let matches = vec![format!("{resume_years} years of experience")];
    let mut misses = Vec::new();
    if resume_years < required {
        misses.push(format!("Required {required} years, found {resume_years}"));
    }

    ExperienceMatchOutcome {
        score,
        resume_years,
        required_years: required,
        matches,
        misses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT_YEAR: i32 = 2026;

    fn reqs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_explicit_statement_takes_priority() {
        let text = "8 years of experience\n2015 - present at Acme";
        assert_eq!(estimate_resume_years(text, CURRENT_YEAR), 8);
    }

    #[test]
    fn test_explicit_statement_variants() {
        assert_eq!(estimate_resume_years("Experience: 6 years", CURRENT_YEAR), 6);
        assert_eq!(
            estimate_resume_years("Professional experience: 4 years", CURRENT_YEAR),
            4
        );
        assert_eq!(
            estimate_resume_years("worked as a backend engineer for 7 years", CURRENT_YEAR),
            7
        );
    }

    #[test]
    fn test_date_range_fallback_uses_earliest_start() {
        let text = "Acme 2021 - present\nGlobex 2018 - 2020";
        assert_eq!(estimate_resume_years(text, CURRENT_YEAR), 8);
    }

    #[test]
    fn test_month_year_range_parsed() {
        let text = "03/2019 - 11/2022";
        assert_eq!(estimate_resume_years(text, CURRENT_YEAR), 7);
    }

    #[test]
    fn test_any_range_yields_at_least_one_year() {
        let text = "2026 - present";
        assert_eq!(estimate_resume_years(text, CURRENT_YEAR), 1);
    }

    #[test]
    fn test_no_information_yields_zero() {
        assert_eq!(estimate_resume_years("No dates here", CURRENT_YEAR), 0);
    }

    #[test]
    fn test_required_years_takes_max_across_requirements() {
        let requirements = reqs(&["3+ years experience", "minimum of 5 in backend roles"]);
        assert_eq!(required_years(&requirements, 2), 5);
    }

    #[test]
    fn test_required_years_defaults_when_absent() {
        assert_eq!(required_years(&reqs(&["Bachelor's degree"]), 2), 2);
        assert_eq!(required_years(&[], 2), 2);
    }

    #[test]
    fn test_at_least_pattern() {
        assert_eq!(required_years(&reqs(&["at least 4 years in fintech"]), 2), 4);
    }

    #[test]
    fn test_score_thresholds() {
        let requirements = reqs(&["10+ years"]);
        let cases = [
            ("10 years of experience", 100),
            ("7 years of experience", 80),
            ("5 years of experience", 60),
            ("2 years of experience", 40),
            ("no dates at all", 20),
        ];
        for (text, expected) in cases {
            let outcome = match_experience(text, &requirements, CURRENT_YEAR, 2);
            assert_eq!(outcome.score, expected, "for text: {text}");
        }
    }

    #[test]
    fn test_miss_note_when_below_requirement() {
        let outcome = match_experience(
            "2 years of experience",
            &reqs(&["5+ years"]),
            CURRENT_YEAR,
            2,
        );
        assert_eq!(outcome.matches, vec!["2 years of experience"]);
        assert_eq!(outcome.misses, vec!["Required 5 years, found 2"]);
    }
}
