// Resume-to-job matching primitives.
// Each submodule scores one dimension; scoring::composite combines them.

pub mod education;
pub mod experience;
pub mod keywords;
pub mod projects;
pub mod sections;
pub mod skills;
pub mod synonyms;
