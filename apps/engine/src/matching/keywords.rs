//! Keyword extraction and overlap scoring.
//!
//! Derives salient lexical tokens from the job description and checks which
//! of them appear in the resume. An extended stop-word filter removes
//! function words and common auxiliary verbs, leaving a deduplicated set of
//! content-bearing tokens.
//!
//! Keyword matching is a raw substring test against the resume text. The
//! skills matcher uses word boundaries instead; the asymmetry is deliberate,
//! see DESIGN.md.

use std::collections::HashSet;

/// Function words, auxiliaries, and generic verbs excluded from the keyword
/// set. Content words (nouns, names, qualifying adjectives) survive.
pub(crate) const STOP_WORDS: &[&str] = &[
    "a", "able", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc", "few", "for",
    "from", "further", "get", "got", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "include", "includes",
    "including", "into", "is", "it", "its", "itself", "just", "like", "made", "make", "may", "me",
    "might", "more", "most", "much", "must", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
    "per", "plus", "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "us", "use", "used", "using", "very", "was",
    "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "within", "without", "would", "you", "your", "yours", "yourself",
];

/// Result of keyword overlap scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatchOutcome {
    pub score: u32,
    pub matched: Vec<String>,
    pub missed: Vec<String>,
}

/// Extracts the deduplicated keyword set from job description text, in first-
/// occurrence order so repeated runs produce identical output.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords: Vec<String> = Vec::new();

    for raw in job_description.split_whitespace() {
        let token = raw
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '#' && c != '+')
            .to_lowercase();
        if token.chars().count() <= 2 {
            continue;
        }
        if !token.chars().any(|c| c.is_alphabetic()) {
            continue;
        }
        if STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        if seen.insert(token.clone()) {
            keywords.push(token);
        }
    }

    keywords
}

/// Scores keyword overlap between a resume and a job description.
pub fn match_keywords(resume_text: &str, job_description: &str) -> KeywordMatchOutcome {
    let keywords = extract_keywords(job_description);
    if keywords.is_empty() {
        return KeywordMatchOutcome {
            score: 0,
            matched: Vec::new(),
            missed: Vec::new(),
        };
    }

    let resume_lower = resume_text.to_lowercase();
    let (matched, missed): (Vec<String>, Vec<String>) = keywords
        .into_iter()
        .partition(|keyword| resume_lower.contains(keyword.as_str()));

    let total = matched.len() + missed.len();
    let ratio = matched.len() as f64 / total as f64;
    let score = (ratio * 100.0).round().min(100.0) as u32;

    KeywordMatchOutcome {
        score,
        matched,
        missed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_and_short_tokens_dropped() {
        let keywords = extract_keywords("We are looking for a senior Rust engineer");
        assert!(keywords.contains(&"senior".to_string()));
        assert!(keywords.contains(&"rust".to_string()));
        assert!(keywords.contains(&"engineer".to_string()));
        assert!(!keywords.contains(&"for".to_string()));
        assert!(!keywords.contains(&"we".to_string()));
    }

    #[test]
    fn test_keywords_deduplicated_in_first_occurrence_order() {
        let keywords = extract_keywords("Rust services. Rust tooling. Kafka services.");
        assert_eq!(keywords, vec!["rust", "services", "tooling", "kafka"]);
    }

    #[test]
    fn test_punctuation_trimmed_from_tokens() {
        let keywords = extract_keywords("Experience with PostgreSQL, Redis, and C++.");
        assert!(keywords.contains(&"postgresql".to_string()));
        assert!(keywords.contains(&"redis".to_string()));
        assert!(keywords.contains(&"c++".to_string()));
    }

    #[test]
    fn test_substring_match_against_resume() {
        let outcome = match_keywords(
            "Senior backend engineer, PostgreSQL tuning",
            "backend engineer with PostgreSQL",
        );
        assert_eq!(outcome.score, 100);
        assert!(outcome.missed.is_empty());
    }

    #[test]
    fn test_partial_overlap_scores_ratio() {
        let outcome = match_keywords("kafka pipelines", "kafka spark flink terraform");
        assert_eq!(outcome.matched, vec!["kafka"]);
        assert_eq!(outcome.missed.len(), 3);
        assert_eq!(outcome.score, 25);
    }

    #[test]
    fn test_empty_description_scores_zero() {
        let outcome = match_keywords("anything", "");
        assert_eq!(outcome.score, 0);
        assert!(outcome.matched.is_empty());
        assert!(outcome.missed.is_empty());
    }

    #[test]
    fn test_empty_resume_matches_nothing() {
        let outcome = match_keywords("", "kafka spark");
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.missed.len(), 2);
    }
}
