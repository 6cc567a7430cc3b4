//! Section segmentation: splits raw resume text into a fixed set of named
//! sections by scanning for header lines.

use std::fmt;

/// Fixed resume content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Education,
    Experience,
    Skills,
    Projects,
    Achievements,
    Certifications,
    Other,
}

impl Section {
    pub const COUNT: usize = 8;

    /// All sections, in the order the skill matcher scans them.
    pub const ALL: [Section; Section::COUNT] = [
        Section::Summary,
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
        Section::Certifications,
        Section::Other,
    ];

    /// Header matching priority. Checked first-match-wins, so the order is
    /// observable: "Project Experience" resolves to Experience, not Projects.
    const HEADER_PRIORITY: [Section; 7] = [
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
        Section::Certifications,
        Section::Summary,
    ];

    fn index(self) -> usize {
        match self {
            Section::Summary => 0,
            Section::Education => 1,
            Section::Experience => 2,
            Section::Skills => 3,
            Section::Projects => 4,
            Section::Achievements => 5,
            Section::Certifications => 6,
            Section::Other => 7,
        }
    }

    /// Header synonyms recognized for this section, lowercased.
    fn header_synonyms(self) -> &'static [&'static str] {
        match self {
            Section::Education => &[
                "education",
                "academic background",
                "academic qualifications",
                "qualifications",
                "degrees",
            ],
            Section::Experience => &[
                "experience",
                "work experience",
                "employment history",
                "work history",
                "professional experience",
                "career history",
            ],
            Section::Skills => &[
                "skills",
                "technical skills",
                "core skills",
                "competencies",
                "expertise",
                "technical expertise",
                "proficiencies",
            ],
            Section::Projects => &[
                "projects",
                "personal projects",
                "academic projects",
                "key projects",
                "project experience",
                "project work",
            ],
            Section::Achievements => &[
                "achievements",
                "accomplishments",
                "awards",
                "honors",
                "recognitions",
            ],
            Section::Certifications => &[
                "certifications",
                "certificates",
                "professional certifications",
                "accreditations",
            ],
            Section::Summary => &[
                "summary",
                "professional summary",
                "profile",
                "about me",
                "career objective",
                "objective",
                "career summary",
            ],
            Section::Other => &[],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Summary => "summary",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Certifications => "certifications",
            Section::Other => "other",
        };
        f.write_str(name)
    }
}

/// Accumulated text per section. Line order within a section is preserved;
/// concatenating all sections reconstructs the document minus header and
/// blank lines.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    texts: [String; Section::COUNT],
}

impl SectionMap {
    pub fn text(&self, section: Section) -> &str {
        &self.texts[section.index()]
    }

    /// Iterates non-empty sections in the fixed scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::ALL
            .iter()
            .map(move |&s| (s, self.text(s)))
            .filter(|(_, text)| !text.is_empty())
    }

    fn append_block(&mut self, section: Section, lines: &[&str], trailing_newline: bool) {
        if lines.is_empty() {
            return;
        }
        let target = &mut self.texts[section.index()];
        target.push_str(&lines.join("\n"));
        if trailing_newline {
            target.push('\n');
        }
    }
}

/// Maximum length of a line that can still be a section header. Header
/// keywords inside longer lines are content.
const MAX_HEADER_LEN: usize = 50;

/// Splits raw resume text into sections.
///
/// A trimmed, non-empty line is a header iff it is shorter than 50 chars and
/// contains a header synonym (which also covers the "Experience:" colon
/// style). Text before any header lands in [`Section::Other`].
pub fn segment(raw_text: &str) -> SectionMap {
    let mut map = SectionMap::default();
    let mut current = Section::Other;
    let mut buffer: Vec<&str> = Vec::new();

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(section) = classify_header(line) {
            map.append_block(current, &buffer, true);
            buffer.clear();
            current = section;
            continue;
        }

        buffer.push(line);
    }

    map.append_block(current, &buffer, false);
    map
}

fn classify_header(line: &str) -> Option<Section> {
    if line.chars().count() >= MAX_HEADER_LEN {
        return None;
    }
    let lower = line.to_lowercase();
    Section::HEADER_PRIORITY
        .iter()
        .find(|section| {
            section
                .header_synonyms()
                .iter()
                .any(|synonym| lower.contains(synonym))
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Doe
Summary
Backend engineer with a focus on reliability.

Work Experience
Acme Corp, 2019 - present
Built billing pipelines in Python.

Skills
Python, Rust, PostgreSQL

Education
B.S. Computer Science, 2018";

    #[test]
    fn test_segments_named_sections() {
        let map = segment(SAMPLE);
        assert!(map.text(Section::Experience).contains("Acme Corp"));
        assert!(map.text(Section::Skills).contains("PostgreSQL"));
        assert!(map.text(Section::Education).contains("B.S. Computer Science"));
        assert!(map
            .text(Section::Summary)
            .contains("focus on reliability"));
    }

    #[test]
    fn test_preamble_lands_in_other() {
        let map = segment(SAMPLE);
        assert!(map.text(Section::Other).contains("Jane Doe"));
    }

    #[test]
    fn test_colon_style_header() {
        let map = segment("Experience:\nFive years at Acme.");
        assert!(map.text(Section::Experience).contains("Five years at Acme."));
    }

    #[test]
    fn test_long_line_with_keyword_is_content() {
        let long = "I have broad experience building distributed systems at scale for a decade";
        assert!(long.len() >= MAX_HEADER_LEN);
        let map = segment(long);
        assert_eq!(map.text(Section::Other), long);
        assert!(map.text(Section::Experience).is_empty());
    }

    #[test]
    fn test_unknown_colon_line_is_content() {
        let map = segment("Experience\nReferences:\nAvailable on request.");
        assert!(map.text(Section::Experience).contains("References:"));
    }

    #[test]
    fn test_project_experience_header_resolves_to_experience() {
        // "experience" is checked before "projects" in header priority
        let map = segment("Project Experience\nBuilt a compiler.");
        assert!(map.text(Section::Experience).contains("Built a compiler."));
        assert!(map.text(Section::Projects).is_empty());
    }

    #[test]
    fn test_reconstruction_covers_all_content_lines() {
        let map = segment(SAMPLE);
        let combined: String = Section::ALL
            .iter()
            .map(|&s| map.text(s).to_string())
            .collect::<Vec<_>>()
            .join("\n");
        for line in SAMPLE.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if classify_header(line).is_none() {
                assert!(combined.contains(line), "Missing content line: {line}");
            }
        }
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let map = segment("");
        assert_eq!(map.iter().count(), 0);
    }
}
