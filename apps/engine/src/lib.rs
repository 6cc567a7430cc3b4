//! Resume-to-job matching engine.
//!
//! Scores batches of extracted resume texts against a job posting across
//! four dimensions (keywords, skills, experience, education), blends them
//! into an overall score, and ranks the batch. All scoring is deterministic:
//! the same posting, resumes, and config always produce identical output.
//!
//! Entry point is [`score_resumes`]; [`generate_score_analysis`] turns a
//! finished score into a recruiter-facing narrative.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod scoring;

pub use config::{EngineConfig, ScoringWeights};
pub use errors::EngineError;
pub use models::job::JobPosting;
pub use models::resume::{ExtractionOutcome, ResumeDocument};
pub use models::score::{Category, CategoryScore, ResumeScore, ScoreAnalysis};
pub use scoring::composite::score_resumes;
pub use scoring::report::generate_score_analysis;
