// SAR Narrative Engine - Core Library
// Exposes the evaluator/composer pair for use in the CLI shell and tests

pub mod evaluator;
pub mod narrative;
pub mod policy;
pub mod record;

// Re-export commonly used types
pub use evaluator::{
    EvaluationResult, RiskEvaluator, RiskTier, INDICATOR_CASH_INTENSIVE, INDICATOR_CROSS_BORDER,
    INDICATOR_HIGH_VALUE, INDICATOR_UNUSUAL_PATTERN,
};
pub use narrative::{
    attachment_filename, AuditRecord, Clock, FixedClock, NarrativeComposer, SystemClock,
    NARRATIVE_VERSION, NO_INDICATOR_FALLBACK,
};
pub use policy::RiskPolicy;
pub use record::{
    CaseInput, CaseMetadata, InvalidInputError, Location, TransactionPattern, TransactionRecord,
    TransactionType,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
