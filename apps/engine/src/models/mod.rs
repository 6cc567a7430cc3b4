// Engine input/output records. Explicit typed structs replace the loose
// dictionaries the upstream services exchange as JSON.

pub mod job;
pub mod resume;
pub mod score;
