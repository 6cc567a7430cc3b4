use thiserror::Error;

/// Engine-level error type.
///
/// The scoring pipeline is designed to degrade, not fail: empty resume text,
/// missing skill lists, and pattern misses all resolve to documented
/// fallbacks and still produce a complete score. The only errors surfaced
/// here are caller contract violations and pattern-compilation failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Job posting is blank: provide a title, description, skills, or requirements")]
    BlankJobPosting,

    /// Skill-variant pattern compilation. The current matcher builds every
    /// variant pattern from escaped literals, which cannot fail to compile;
    /// the variant exists because `SkillMatcher::new` still returns the
    /// compiler's `Result`.
    #[error("Failed to compile skill pattern: {0}")]
    Pattern(#[from] regex::Error),
}
