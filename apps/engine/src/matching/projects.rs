//! Project sub-extraction: pulls individual project descriptions out of the
//! projects section, or out of the experience section when no dedicated
//! projects section exists.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::sections::{Section, SectionMap};

/// Phrases that signal project content inside an experience section.
const PROJECT_INDICATORS: &[&str] = &[
    "project:",
    "project -",
    "project name:",
    "developed",
    "implemented",
    "created",
    "built",
];

/// A line starting a new project chunk: a bullet, a capitalized
/// "<Name> Project" heading, or a numbered "Project N" heading.
static PROJECT_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[•\-\*]\s+|[A-Z][a-z]+\s+[Pp]roject:?|[Pp]roject\s+\d+:?)").unwrap()
});

/// Minimum chunk length (chars) to count as a project description.
const MIN_CHUNK_LEN: usize = 20;

/// Extracts project descriptions from the segmented resume.
pub fn extract_project_descriptions(sections: &SectionMap) -> Vec<String> {
    let projects_text = sections.text(Section::Projects);
    let source = if !projects_text.is_empty() {
        projects_text
    } else {
        let experience_text = sections.text(Section::Experience);
        let lower = experience_text.to_lowercase();
        if PROJECT_INDICATORS
            .iter()
            .any(|indicator| lower.contains(indicator))
        {
            experience_text
        } else {
            return Vec::new();
        }
    };

    split_chunks(source)
        .into_iter()
        .filter(|chunk| chunk.chars().count() > MIN_CHUNK_LEN)
        .collect()
}

/// Splits text into chunks at project boundary lines. The boundary line
/// itself starts the next chunk.
fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if PROJECT_BOUNDARY.is_match(line) && !current.is_empty() {
            chunks.push(current.join("\n").trim().to_string());
            current.clear();
        }
        current.push(line);
    }
    if !current.is_empty() {
        chunks.push(current.join("\n").trim().to_string());
    }

    chunks.into_iter().filter(|c| !c.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::sections::segment;

    #[test]
    fn test_splits_projects_on_bullets() {
        let map = segment(
            "Projects\n\
             - Inventory service built with Rust and PostgreSQL\n\
             - Realtime chat application using WebSockets and Redis",
        );
        let projects = extract_project_descriptions(&map);
        assert_eq!(projects.len(), 2);
        assert!(projects[0].contains("Inventory service"));
        assert!(projects[1].contains("Realtime chat"));
    }

    #[test]
    fn test_short_chunks_are_discarded() {
        let map = segment("Projects\n- Tiny\n- Another project description long enough to keep");
        let projects = extract_project_descriptions(&map);
        assert_eq!(projects.len(), 1);
        assert!(projects[0].contains("long enough to keep"));
    }

    #[test]
    fn test_experience_section_used_when_indicator_present() {
        let map = segment(
            "Experience\n\
             Developed a payment reconciliation pipeline handling 2M events daily",
        );
        let projects = extract_project_descriptions(&map);
        assert_eq!(projects.len(), 1);
        assert!(projects[0].contains("payment reconciliation"));
    }

    #[test]
    fn test_experience_without_indicator_yields_nothing() {
        let map = segment("Experience\nResponsible for team planning and on-call rotation");
        assert!(extract_project_descriptions(&map).is_empty());
    }

    #[test]
    fn test_numbered_project_headings_split() {
        let map = segment(
            "Projects\n\
             Project 1: Static site generator with incremental rebuilds\n\
             Project 2: Command-line task runner with dependency graphs",
        );
        let projects = extract_project_descriptions(&map);
        assert_eq!(projects.len(), 2);
    }
}
