// ⚖️ Risk Policy - Thresholds as Data
// Named, overridable monitoring constants (never inlined in rule code)

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable constants behind the four monitoring rules and the
/// narrative/audit wording. Defaults mirror the internal monitoring
/// rule book; a compliance team can override them from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Amounts strictly above this (minor units) trigger the
    /// high-value rule. The boundary value itself does NOT trigger.
    #[serde(default = "default_high_value_threshold")]
    pub high_value_threshold: u64,

    /// Minimum indicator count for a High classification
    #[serde(default = "default_high_tier_min_score")]
    pub high_tier_min_score: usize,

    /// Exact indicator count for a Medium classification.
    /// Anything below is Low.
    #[serde(default = "default_medium_tier_score")]
    pub medium_tier_score: usize,

    /// Currency code printed next to the amount in the narrative
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Monitoring decision label echoed into every audit record
    #[serde(default = "default_decision_label")]
    pub decision_label: String,
}

fn default_high_value_threshold() -> u64 {
    100_000
}

fn default_high_tier_min_score() -> usize {
    3
}

fn default_medium_tier_score() -> usize {
    2
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_decision_label() -> String {
    "Escalated for SAR Filing".to_string()
}

impl Default for RiskPolicy {
    fn default() -> Self {
        RiskPolicy {
            high_value_threshold: default_high_value_threshold(),
            high_tier_min_score: default_high_tier_min_score(),
            medium_tier_score: default_medium_tier_score(),
            currency: default_currency(),
            decision_label: default_decision_label(),
        }
    }
}

impl RiskPolicy {
    /// Load policy overrides from a JSON file. Missing keys fall back
    /// to the defaults above.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read policy file: {:?}", path.as_ref()))?;

        let policy: RiskPolicy =
            serde_json::from_str(&content).context("Failed to parse policy JSON")?;

        Ok(policy)
    }
}
