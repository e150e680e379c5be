// 📄 Narrative Composer - Regulator-ready SAR text + audit trail
// Fixed prose skeleton with verbatim field substitution, plus a flat
// audit record echoing every input and derived value

use crate::evaluator::{EvaluationResult, RiskTier};
use crate::policy::RiskPolicy;
use crate::record::{
    CaseMetadata, Location, TransactionPattern, TransactionRecord, TransactionType,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Template revision tag stamped into every audit record
pub const NARRATIVE_VERSION: &str = "v1.0";

/// Fallback sentence when no monitoring rule fired
pub const NO_INDICATOR_FALLBACK: &str =
    "No explicit indicators detected, however the activity warrants further review.";

// ============================================================================
// CLOCK
// ============================================================================

/// Time source for audit timestamps. The composer reads it exactly once
/// per composition so the record is internally consistent; tests inject
/// a fixed clock to assert exact audit equality.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

// ============================================================================
// AUDIT RECORD
// ============================================================================

/// Flat echo of case metadata, transaction fields, and evaluation output,
/// plus the decision label and generation timestamp. Straight copy only;
/// nothing is derived here beyond the timestamp read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub case_id: String,
    pub assigned_analyst: String,
    pub account_id: String,
    pub transaction_amount: u64,
    pub currency: String,
    pub transaction_type: TransactionType,
    pub transaction_location: Location,
    pub transaction_pattern: TransactionPattern,
    pub risk_indicators_triggered: Vec<String>,
    pub risk_score: usize,
    pub calculated_risk_level: RiskTier,
    pub monitoring_decision: String,
    /// ISO-8601, UTC
    pub generation_timestamp_utc: String,
    pub narrative_version: String,
}

// ============================================================================
// NARRATIVE COMPOSER
// ============================================================================

pub struct NarrativeComposer {
    policy: RiskPolicy,
    clock: Box<dyn Clock>,
}

impl NarrativeComposer {
    /// Composer with default policy wording and the system clock
    pub fn new() -> Self {
        Self::with_policy(RiskPolicy::default())
    }

    pub fn with_policy(policy: RiskPolicy) -> Self {
        NarrativeComposer {
            policy,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(policy: RiskPolicy, clock: Box<dyn Clock>) -> Self {
        NarrativeComposer { policy, clock }
    }

    /// Render the narrative and build the audit record for one evaluated
    /// case. Every field appears verbatim; indicators keep rule order.
    /// The clock is read once, here, after evaluation.
    pub fn compose(
        &self,
        record: &TransactionRecord,
        eval: &EvaluationResult,
        meta: &CaseMetadata,
    ) -> (String, AuditRecord) {
        let narrative = self.render_narrative(record, eval);

        let generated_at = self.clock.now_utc();
        let audit = AuditRecord {
            case_id: meta.case_id.clone(),
            assigned_analyst: meta.analyst.clone(),
            account_id: record.account_id.clone(),
            transaction_amount: record.amount,
            currency: self.policy.currency.clone(),
            transaction_type: record.transaction_type,
            transaction_location: record.location,
            transaction_pattern: record.pattern,
            risk_indicators_triggered: eval.indicators.clone(),
            risk_score: eval.score,
            calculated_risk_level: eval.tier,
            monitoring_decision: self.policy.decision_label.clone(),
            generation_timestamp_utc: generated_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            narrative_version: NARRATIVE_VERSION.to_string(),
        };

        (narrative, audit)
    }

    fn render_narrative(&self, record: &TransactionRecord, eval: &EvaluationResult) -> String {
        let indicator_line = if eval.indicators.is_empty() {
            NO_INDICATOR_FALLBACK.to_string()
        } else {
            eval.indicators.join(", ")
        };

        format!(
            "This Suspicious Activity Report (SAR) is being filed pursuant to regulatory obligations\n\
             after the detection of activity that may be indicative of potential financial crime.\n\
             \n\
             The account identified as {account_id} conducted a transaction amounting to {currency} {amount}\n\
             via {transaction_type} originating in {location}. The activity exhibited characteristics\n\
             inconsistent with the customer's known profile and expected transactional behavior.\n\
             \n\
             The following risk indicators were identified during the review:\n\
             {indicator_line}\n\
             \n\
             The transaction was assessed as {tier} risk based on internal monitoring rules\n\
             and observed behavioral deviations.\n\
             \n\
             Based on the cumulative risk factors and internal alerts, the activity has been escalated\n\
             for further investigation and regulatory reporting in accordance with AML obligations.\n\
             This report is submitted to ensure timely regulatory awareness and enable appropriate\n\
             follow-up actions by relevant authorities.",
            account_id = record.account_id,
            currency = self.policy.currency,
            amount = record.amount,
            transaction_type = record.transaction_type,
            location = record.location,
            indicator_line = indicator_line,
            tier = eval.tier,
        )
    }
}

impl Default for NarrativeComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Attachment name the presentation shell saves the narrative under
/// (MIME text/plain)
pub fn attachment_filename(case_id: &str) -> String {
    format!("{}_SAR.txt", case_id)
}

// ============================================================================
// TESTS
// ============================================================================
