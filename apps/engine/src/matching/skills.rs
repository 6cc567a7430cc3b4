//! Skill normalization and context-aware skill matching.
//!
//! A variation map built from the posting's canonical skill list resolves
//! spelling/punctuation variants and known synonyms back to the canonical
//! form. The matcher then hunts for each variant across resume sections,
//! preferring section-specific phrase patterns and recording human-readable
//! evidence for every hit.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::sections::{Section, SectionMap};
use crate::matching::synonyms::{expansions_of, TECH_SYNONYMS};

// ────────────────────────────────────────────────────────────────────────────
// Variation map
// ────────────────────────────────────────────────────────────────────────────

/// Maps normalized variant strings to the canonical skill they represent.
///
/// Insertion order is preserved so matching (and therefore evidence order) is
/// deterministic. When two canonical skills register the same variant, the
/// later registration wins in skill-list order. Known limitation; see
/// DESIGN.md.
#[derive(Debug, Clone, Default)]
pub struct VariationMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl VariationMap {
    pub fn build(skills: &[String]) -> Self {
        let mut map = VariationMap::default();

        for skill in skills {
            let lower = skill.trim().to_lowercase();
            if lower.is_empty() {
                continue;
            }

            // The bare lowercased form keeps its first owner.
            map.insert_keep_first(lower.clone(), skill);

            // Punctuation/spacing variants.
            let variants = [
                lower.replace(' ', ""),
                lower.replace(' ', "-"),
                lower.replace(' ', "."),
                lower.replace('-', " "),
                lower.replace('.', " "),
            ];
            for variant in variants {
                if !variant.is_empty() && variant != lower {
                    map.insert(variant, skill);
                }
            }

            // Abbreviation -> expansions.
            if let Some(expansions) = expansions_of(&lower) {
                for expansion in expansions {
                    map.insert((*expansion).to_string(), skill);
                }
            }

            // Expansion -> abbreviation.
            for (abbreviation, expansions) in TECH_SYNONYMS {
                if expansions.contains(&lower.as_str()) {
                    map.insert((*abbreviation).to_string(), skill);
                }
            }
        }

        map
    }

    /// Registers a variant, overwriting the canonical skill of an existing
    /// entry (last write wins) while keeping its original position.
    fn insert(&mut self, variant: String, canonical: &str) {
        match self.index.get(&variant) {
            Some(&at) => self.entries[at].1 = canonical.to_string(),
            None => {
                self.index.insert(variant.clone(), self.entries.len());
                self.entries.push((variant, canonical.to_string()));
            }
        }
    }

    fn insert_keep_first(&mut self, variant: String, canonical: &str) {
        if !self.index.contains_key(&variant) {
            self.insert(variant, canonical);
        }
    }

    pub fn resolve(&self, variant: &str) -> Option<&str> {
        self.index
            .get(variant)
            .map(|&at| self.entries[at].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(v, c)| (v.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section phrase patterns
// ────────────────────────────────────────────────────────────────────────────

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)(?:used|utilized|developed with|worked with|experienced in|expertise in)\s+([\w\s\.\-,/]+)",
        )
        .unwrap(),
        Regex::new(r"(?i)(?:proficient in|experience with|knowledge of)\s+([\w\s\.\-,/]+)")
            .unwrap(),
    ]
});

static SKILLS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)[•\-\*]\s*([\w\s\.\-,/]+)").unwrap(),
        Regex::new(r"(?i)([\w\s\.\-,/]+?)(?:[:,]|\s+and\s+)").unwrap(),
    ]
});

static PROJECTS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:using|with|built with|developed with|implemented using)\s+([\w\s\.\-,/]+)")
            .unwrap(),
        Regex::new(
            r"(?i)(?:technologies|tech stack|tools|frameworks|languages)(?:\s+used)?(?:\s+include)?(?:\s*:)?\s+([\w\s\.\-,/]+)",
        )
        .unwrap(),
    ]
});

static EDUCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:studied|coursework in|focused on|specialized in)\s+([\w\s\.\-,/]+)")
            .unwrap(),
    ]
});

fn phrase_patterns(section: Section) -> Option<&'static [Regex]> {
    match section {
        Section::Experience => Some(&EXPERIENCE_PATTERNS),
        Section::Skills => Some(&SKILLS_PATTERNS),
        Section::Projects => Some(&PROJECTS_PATTERNS),
        Section::Education => Some(&EDUCATION_PATTERNS),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matcher
// ────────────────────────────────────────────────────────────────────────────

/// Result of matching one resume against the required skill list.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchOutcome {
    pub score: u32,
    /// Canonical skills with at least one evidence entry, in detection order.
    pub matched: Vec<String>,
    /// Required skills with no evidence, in required-list order.
    pub missed: Vec<String>,
    /// Canonical skill -> ordered, deduplicated evidence snippets.
    pub contexts: BTreeMap<String, Vec<String>>,
}

struct VariantPattern {
    variant: String,
    canonical: String,
    word_re: Regex,
}

/// Compiled matcher for one posting's skill list. Built once per scoring
/// call; the compiled variant patterns are reused across every resume.
pub struct SkillMatcher {
    required: Vec<String>,
    variants: Vec<VariantPattern>,
}

impl SkillMatcher {
    pub fn new(required_skills: &[String]) -> Result<Self, regex::Error> {
        let map = VariationMap::build(required_skills);
        let mut variants = Vec::with_capacity(map.len());
        for (variant, canonical) in map.iter() {
            let word_re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(variant)))?;
            variants.push(VariantPattern {
                variant: variant.to_string(),
                canonical: canonical.to_string(),
                word_re,
            });
        }
        Ok(Self {
            required: required_skills.to_vec(),
            variants,
        })
    }

    pub fn required_count(&self) -> usize {
        self.required.len()
    }

    /// Scans sections and project descriptions for evidence of each variant.
    pub fn evaluate(&self, sections: &SectionMap, projects: &[String]) -> SkillMatchOutcome {
        if self.required.is_empty() {
            return SkillMatchOutcome {
                score: 0,
                matched: Vec::new(),
                missed: Vec::new(),
                contexts: BTreeMap::new(),
            };
        }

        let mut matched: Vec<String> = Vec::new();
        let mut contexts: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (section, text) in sections.iter() {
            match phrase_patterns(section) {
                Some(patterns) => {
                    for vp in &self.variants {
                        let mut phrase_hit = false;
                        for pattern in patterns {
                            for caps in pattern.captures_iter(text) {
                                let Some(group) = caps.get(1) else { continue };
                                if group.as_str().to_lowercase().contains(&vp.variant) {
                                    record_evidence(
                                        &mut matched,
                                        &mut contexts,
                                        &vp.canonical,
                                        format!(
                                            "Found in {section} section: '{}'",
                                            group.as_str().trim()
                                        ),
                                    );
                                    phrase_hit = true;
                                }
                            }
                        }
                        if !phrase_hit && vp.word_re.is_match(text) {
                            record_evidence(
                                &mut matched,
                                &mut contexts,
                                &vp.canonical,
                                format!("Mentioned in {section} section"),
                            );
                        }
                    }
                }
                None => {
                    for vp in &self.variants {
                        if vp.word_re.is_match(text) {
                            record_evidence(
                                &mut matched,
                                &mut contexts,
                                &vp.canonical,
                                format!("Mentioned in {section} section"),
                            );
                        }
                    }
                }
            }
        }

        for project in projects {
            for vp in &self.variants {
                if vp.word_re.is_match(project) {
                    record_evidence(
                        &mut matched,
                        &mut contexts,
                        &vp.canonical,
                        format!("Used in project: '{}'", truncate_brief(project, 100)),
                    );
                }
            }
        }

        let missed: Vec<String> = self
            .required
            .iter()
            .filter(|skill| !contexts.contains_key(*skill))
            .cloned()
            .collect();

        let ratio = matched.len() as f64 / self.required.len() as f64;
        let score = (ratio * 100.0).round().min(100.0) as u32;

        SkillMatchOutcome {
            score,
            matched,
            missed,
            contexts,
        }
    }
}

fn record_evidence(
    matched: &mut Vec<String>,
    contexts: &mut BTreeMap<String, Vec<String>>,
    canonical: &str,
    context: String,
) {
    let entry = contexts.entry(canonical.to_string()).or_insert_with(|| {
        matched.push(canonical.to_string());
        Vec::new()
    });
    if !entry.contains(&context) {
        entry.push(context);
    }
}

/// Truncates to `limit` chars with a trailing ellipsis, as shown in evidence.
pub fn truncate_brief(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let head: String = text.chars().take(limit).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::sections::segment;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_variation_map_generates_punctuation_variants() {
        let map = VariationMap::build(&skills(&["React Native"]));
        assert_eq!(map.resolve("react native"), Some("React Native"));
        assert_eq!(map.resolve("react-native"), Some("React Native"));
        assert_eq!(map.resolve("react.native"), Some("React Native"));
        // "react native" is itself a synonym key
        assert_eq!(map.resolve("reactnative"), Some("React Native"));
    }

    #[test]
    fn test_synonyms_register_in_both_directions() {
        let map = VariationMap::build(&skills(&["k8s"]));
        assert_eq!(map.resolve("kubernetes"), Some("k8s"));

        let map = VariationMap::build(&skills(&["Kubernetes"]));
        assert_eq!(map.resolve("k8s"), Some("Kubernetes"));
    }

    #[test]
    fn test_variant_collision_is_last_write_wins() {
        // "JavaScript" registers variant "js" (reverse synonym); "JS" then
        // registers variant "javascript" (forward synonym), overwriting the
        // earlier owner of that variant. Documented limitation.
        let map = VariationMap::build(&skills(&["JavaScript", "JS"]));
        assert_eq!(map.resolve("javascript"), Some("JS"));
        assert_eq!(map.resolve("js"), Some("JavaScript"));
    }

    #[test]
    fn test_react_js_variant_resolves_to_react() {
        let matcher = SkillMatcher::new(&skills(&["Python", "React"])).unwrap();
        let map = segment("5 years of experience as a Python developer, React.js front-end work");
        let outcome = matcher.evaluate(&map, &[]);
        assert_eq!(outcome.score, 100);
        assert!(outcome.matched.contains(&"React".to_string()));
        assert!(outcome.missed.is_empty());
    }

    #[test]
    fn test_phrase_pattern_records_capture_evidence() {
        let matcher = SkillMatcher::new(&skills(&["Python"])).unwrap();
        let map = segment("Experience\nWorked with Python and Django daily");
        let outcome = matcher.evaluate(&map, &[]);
        let evidence = &outcome.contexts["Python"];
        assert!(
            evidence[0].starts_with("Found in experience section: '"),
            "Unexpected evidence: {:?}",
            evidence
        );
        assert!(evidence[0].contains("Python and Django"));
    }

    #[test]
    fn test_bare_mention_falls_back_to_word_boundary() {
        let matcher = SkillMatcher::new(&skills(&["Rust"])).unwrap();
        let map = segment("Summary\nRust enthusiast since 2015");
        let outcome = matcher.evaluate(&map, &[]);
        assert_eq!(
            outcome.contexts["Rust"][0],
            "Mentioned in summary section"
        );
    }

    #[test]
    fn test_project_evidence_truncates_brief() {
        let matcher = SkillMatcher::new(&skills(&["Python"])).unwrap();
        let map = segment("");
        let long_project = format!("Python data pipeline {}", "x".repeat(120));
        let outcome = matcher.evaluate(&map, &[long_project]);
        let evidence = &outcome.contexts["Python"][0];
        assert!(evidence.starts_with("Used in project: '"));
        assert!(evidence.ends_with("...'"));
    }

    #[test]
    fn test_empty_required_list_scores_zero() {
        let matcher = SkillMatcher::new(&[]).unwrap();
        let outcome = matcher.evaluate(&segment("Python everywhere"), &[]);
        assert_eq!(outcome.score, 0);
        assert!(outcome.matched.is_empty());
        assert!(outcome.missed.is_empty());
    }

    #[test]
    fn test_matched_and_missed_partition_required_list() {
        let required = skills(&["Python", "Kubernetes", "GraphQL"]);
        let matcher = SkillMatcher::new(&required).unwrap();
        let map = segment("Skills\nPython, GraphQL");
        let outcome = matcher.evaluate(&map, &[]);

        let mut union: Vec<String> = outcome.matched.clone();
        union.extend(outcome.missed.clone());
        union.sort();
        let mut expected = required.clone();
        expected.sort();
        assert_eq!(union, expected);
        for skill in &outcome.matched {
            assert!(!outcome.missed.contains(skill));
        }
    }

    #[test]
    fn test_adding_missed_skill_does_not_decrease_score() {
        let required = skills(&["Python", "Kubernetes"]);
        let matcher = SkillMatcher::new(&required).unwrap();

        let before = matcher.evaluate(&segment("Skills\nPython"), &[]);
        let after = matcher.evaluate(&segment("Skills\nPython\nKubernetes"), &[]);
        assert!(after.score >= before.score);
        assert_eq!(after.score, 100);
    }

    #[test]
    fn test_evidence_deduplicated_per_skill() {
        let matcher = SkillMatcher::new(&skills(&["Python"])).unwrap();
        let map = segment("Summary\nPython here\nPython there");
        let outcome = matcher.evaluate(&map, &[]);
        assert_eq!(outcome.contexts["Python"].len(), 1);
    }
}
