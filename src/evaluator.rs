// 🚨 Risk Evaluator - Static monitoring rules
// Four independent checks over one record, counted into a three-tier score

use crate::policy::RiskPolicy;
use crate::record::{Location, TransactionPattern, TransactionRecord, TransactionType};
use serde::{Deserialize, Serialize};

// Indicator labels, in rule-evaluation order
pub const INDICATOR_HIGH_VALUE: &str = "Unusually high transaction value";
pub const INDICATOR_CROSS_BORDER: &str = "Cross-border transaction";
pub const INDICATOR_CASH_INTENSIVE: &str = "Cash-intensive activity";
pub const INDICATOR_UNUSUAL_PATTERN: &str = "Unusual transaction pattern";

// ============================================================================
// RISK TIER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// EVALUATION RESULT
// ============================================================================

/// Outcome of one evaluation. Indicator order is the fixed rule order,
/// score is the indicator count, tier is derived from the score alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub indicators: Vec<String>,
    pub score: usize,
    pub tier: RiskTier,
}

// ============================================================================
// RISK EVALUATOR
// ============================================================================

/// Applies the four monitoring rules to a record. Deterministic,
/// side-effect free, total over the closed input domain.
pub struct RiskEvaluator {
    policy: RiskPolicy,
}

impl RiskEvaluator {
    /// Evaluator with the default policy constants
    pub fn new() -> Self {
        RiskEvaluator {
            policy: RiskPolicy::default(),
        }
    }

    pub fn with_policy(policy: RiskPolicy) -> Self {
        RiskEvaluator { policy }
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    /// Run all four rules against the unmodified record.
    /// Each rule fires independently; this is not a decision tree.
    pub fn evaluate(&self, record: &TransactionRecord) -> EvaluationResult {
        let mut indicators = Vec::new();

        // Rule 1: amount strictly above the high-value threshold
        if record.amount > self.policy.high_value_threshold {
            indicators.push(INDICATOR_HIGH_VALUE.to_string());
        }

        // Rule 2: transaction originated outside the home jurisdiction
        if record.location != Location::Domestic {
            indicators.push(INDICATOR_CROSS_BORDER.to_string());
        }

        // Rule 3: cash channel
        if record.transaction_type == TransactionType::CashDeposit {
            indicators.push(INDICATOR_CASH_INTENSIVE.to_string());
        }

        // Rule 4: anything beyond a one-time occurrence
        if record.pattern != TransactionPattern::OneTime {
            indicators.push(INDICATOR_UNUSUAL_PATTERN.to_string());
        }

        let score = indicators.len();
        let tier = self.tier_for_score(score);

        EvaluationResult {
            indicators,
            score,
            tier,
        }
    }

    /// Map an indicator count to a tier. Total over 0..=4.
    pub fn tier_for_score(&self, score: usize) -> RiskTier {
        if score >= self.policy.high_tier_min_score {
            RiskTier::High
        } else if score == self.policy.medium_tier_score {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

impl Default for RiskEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        amount: u64,
        transaction_type: TransactionType,
        location: Location,
        pattern: TransactionPattern,
    ) -> TransactionRecord {
        TransactionRecord::new("ACC-TEST", amount, transaction_type, location, pattern)
            .unwrap()
    }

    #[test]
    fn test_all_four_rules_fire_in_order() {
        let evaluator = RiskEvaluator::new();
        let result = evaluator.evaluate(&record(
            250_000,
            TransactionType::CashDeposit,
            Location::ForeignA,
            TransactionPattern::Repeated,
        ));

        assert_eq!(
            result.indicators,
            vec![
                INDICATOR_HIGH_VALUE,
                INDICATOR_CROSS_BORDER,
                INDICATOR_CASH_INTENSIVE,
                INDICATOR_UNUSUAL_PATTERN,
            ]
        );
        assert_eq!(result.score, 4);
        assert_eq!(result.tier, RiskTier::High);
    }

    #[test]
    fn test_no_rules_fire() {
        let evaluator = RiskEvaluator::new();
        let result = evaluator.evaluate(&record(
            5_000,
            TransactionType::OnlineTransfer,
            Location::Domestic,
            TransactionPattern::OneTime,
        ));

        assert!(result.indicators.is_empty());
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, RiskTier::Low);
    }

    #[test]
    fn test_threshold_boundary() {
        let evaluator = RiskEvaluator::new();

        // Exactly at the threshold: rule 1 silent
        let at = evaluator.evaluate(&record(
            100_000,
            TransactionType::OnlineTransfer,
            Location::Domestic,
            TransactionPattern::OneTime,
        ));
        assert!(at.indicators.is_empty());

        // One minor unit above: rule 1 fires
        let above = evaluator.evaluate(&record(
            100_001,
            TransactionType::OnlineTransfer,
            Location::Domestic,
            TransactionPattern::OneTime,
        ));
        assert_eq!(above.indicators, vec![INDICATOR_HIGH_VALUE]);
    }

    #[test]
    fn test_rule_order_preserved_for_sparse_subsets() {
        let evaluator = RiskEvaluator::new();

        // Rules 2 and 4 only; order must still be declaration order
        let result = evaluator.evaluate(&record(
            1_000,
            TransactionType::WireTransfer,
            Location::ForeignB,
            TransactionPattern::StructuringSuspected,
        ));
        assert_eq!(
            result.indicators,
            vec![INDICATOR_CROSS_BORDER, INDICATOR_UNUSUAL_PATTERN]
        );
        assert_eq!(result.tier, RiskTier::Medium);
    }

    #[test]
    fn test_tier_boundaries() {
        let evaluator = RiskEvaluator::new();
        assert_eq!(evaluator.tier_for_score(0), RiskTier::Low);
        assert_eq!(evaluator.tier_for_score(1), RiskTier::Low);
        assert_eq!(evaluator.tier_for_score(2), RiskTier::Medium);
        assert_eq!(evaluator.tier_for_score(3), RiskTier::High);
        assert_eq!(evaluator.tier_for_score(4), RiskTier::High);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let evaluator = RiskEvaluator::new();
        let input = record(
            150_000,
            TransactionType::CashDeposit,
            Location::Domestic,
            TransactionPattern::OneTime,
        );
        let first = evaluator.evaluate(&input);
        let second = evaluator.evaluate(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_threshold_policy() {
        let mut policy = RiskPolicy::default();
        policy.high_value_threshold = 10_000;
        let evaluator = RiskEvaluator::with_policy(policy);

        let result = evaluator.evaluate(&record(
            10_001,
            TransactionType::OnlineTransfer,
            Location::Domestic,
            TransactionPattern::OneTime,
        ));
        assert_eq!(result.indicators, vec![INDICATOR_HIGH_VALUE]);
    }
}
