use anyhow::{Context, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Weights applied to the four category scores when computing the overall
/// score. The defaults are the product-agreed split; they must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: 0.05,
            skills: 0.45,
            experience: 0.35,
            education: 0.15,
        }
    }
}

/// Engine configuration, fixed for the duration of one scoring call.
///
/// `current_year` anchors the employment date-range fallback; tests pin it so
/// repeated runs stay byte-identical.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub weights: ScoringWeights,
    /// Assumed requirement when no posting requirement states a year count.
    pub default_required_years: u32,
    /// Year used to turn "2019 - present" ranges into a duration.
    pub current_year: i32,
    /// Working skill list when the posting has no skills and none can be
    /// derived from its description.
    pub fallback_skills: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            default_required_years: 2,
            current_year: chrono::Utc::now().year(),
            fallback_skills: default_fallback_skills(),
        }
    }
}

impl EngineConfig {
    /// Loads the config from environment variables, falling back to defaults
    /// for anything unset. A `.env` file is honored if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(raw) = std::env::var("MATCH_DEFAULT_REQUIRED_YEARS") {
            config.default_required_years = raw
                .parse::<u32>()
                .context("MATCH_DEFAULT_REQUIRED_YEARS must be a non-negative integer")?;
        }
        if let Ok(raw) = std::env::var("MATCH_CURRENT_YEAR") {
            config.current_year = raw
                .parse::<i32>()
                .context("MATCH_CURRENT_YEAR must be a four-digit year")?;
        }
        Ok(config)
    }
}

fn default_fallback_skills() -> Vec<String> {
    ["Programming", "Development", "Software", "Web", "Mobile", "Cloud"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
