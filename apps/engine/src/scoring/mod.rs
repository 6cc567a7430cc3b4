// Composite scoring: combines the four matching dimensions, generates
// recruiter-facing feedback, and ranks resumes.

pub mod composite;
pub mod feedback;
pub mod report;
