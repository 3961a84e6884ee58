use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Business assumptions behind the opportunity matrix. Everything here is a
/// judgement call by the revenue team, so it lives in one place and can be
/// overridden from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Half Board share of room nights every agency is pushed towards.
    pub target_hb_pct: f64,
    /// Assumed F&B revenue per additional Half Board night (AED).
    pub incremental_rate_per_night: f64,
    /// Room nights worth one volume point.
    pub volume_divisor: f64,
    pub score_cap: f64,
    pub high_threshold: f64,
    pub medium_threshold: f64,
    pub urgent_min_nights: f64,
    pub urgent_max_hb_pct: f64,
    pub high_min_nights: f64,
    pub high_max_hb_pct: f64,
    pub upsell_min_hb_pct: f64,
    pub large_booking_min_avg_nights: f64,
    pub action_min_nights: f64,
    pub action_max_hb_pct: f64,
    pub action_limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            target_hb_pct: 35.0,
            incremental_rate_per_night: 120.0,
            volume_divisor: 100.0,
            score_cap: 10.0,
            high_threshold: 7.0,
            medium_threshold: 4.0,
            urgent_min_nights: 500.0,
            urgent_max_hb_pct: 10.0,
            high_min_nights: 300.0,
            high_max_hb_pct: 20.0,
            upsell_min_hb_pct: 50.0,
            large_booking_min_avg_nights: 50.0,
            action_min_nights: 300.0,
            action_max_hb_pct: 15.0,
            action_limit: 5,
        }
    }
}

impl ScoringConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ScoringConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let cfg: ScoringConfig =
            serde_json::from_str(r#"{"target_hb_pct": 40.0, "action_limit": 3}"#).unwrap();
        assert_eq!(cfg.target_hb_pct, 40.0);
        assert_eq!(cfg.action_limit, 3);
        assert_eq!(cfg.incremental_rate_per_night, 120.0);
        assert_eq!(cfg.high_threshold, 7.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = ScoringConfig::load_or_default("does/not/exist/hb_config.json").unwrap();
        assert_eq!(cfg, ScoringConfig::default());
    }
}
