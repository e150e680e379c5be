// 🏦 Transaction Record - Typed input model
// Closed-set enums + fail-fast validation for everything the evaluator consumes

use serde::{Deserialize, Serialize};

// ============================================================================
// INVALID INPUT ERROR
// ============================================================================

/// Raised when external input falls outside the declared domain.
/// The whole input is rejected before any evaluation output is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputError {
    pub field: String,
    pub message: String,
}

impl InvalidInputError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        InvalidInputError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid input [{}]: {}", self.field, self.message)
    }
}

impl std::error::Error for InvalidInputError {}

// ============================================================================
// CLOSED-SET ENUMS
// ============================================================================

/// Channel the transaction came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "Cash Deposit")]
    CashDeposit,
    #[serde(rename = "Wire Transfer")]
    WireTransfer,
    #[serde(rename = "Online Transfer")]
    OnlineTransfer,
}

impl TransactionType {
    pub fn name(&self) -> &'static str {
        match self {
            TransactionType::CashDeposit => "Cash Deposit",
            TransactionType::WireTransfer => "Wire Transfer",
            TransactionType::OnlineTransfer => "Online Transfer",
        }
    }

    /// Parse a user-supplied label ("Cash Deposit", "cash_deposit", ...)
    pub fn parse(value: &str) -> Result<Self, InvalidInputError> {
        match normalize(value).as_str() {
            "cash deposit" => Ok(TransactionType::CashDeposit),
            "wire transfer" => Ok(TransactionType::WireTransfer),
            "online transfer" => Ok(TransactionType::OnlineTransfer),
            _ => Err(InvalidInputError::new(
                "transaction_type",
                format!(
                    "'{}' is not one of: Cash Deposit, Wire Transfer, Online Transfer",
                    value
                ),
            )),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Originating jurisdiction. The home jurisdiction is "Domestic";
/// the two monitored foreign jurisdictions are abstracted as A and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Domestic")]
    Domestic,
    #[serde(rename = "Foreign Jurisdiction A")]
    ForeignA,
    #[serde(rename = "Foreign Jurisdiction B")]
    ForeignB,
}

impl Location {
    pub fn name(&self) -> &'static str {
        match self {
            Location::Domestic => "Domestic",
            Location::ForeignA => "Foreign Jurisdiction A",
            Location::ForeignB => "Foreign Jurisdiction B",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InvalidInputError> {
        match normalize(value).as_str() {
            "domestic" => Ok(Location::Domestic),
            "foreign jurisdiction a" | "foreign a" | "foreigna" => Ok(Location::ForeignA),
            "foreign jurisdiction b" | "foreign b" | "foreignb" => Ok(Location::ForeignB),
            _ => Err(InvalidInputError::new(
                "location",
                format!(
                    "'{}' is not one of: Domestic, Foreign Jurisdiction A, Foreign Jurisdiction B",
                    value
                ),
            )),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Observed repetition pattern across the review window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionPattern {
    #[serde(rename = "One-time")]
    OneTime,
    #[serde(rename = "Repeated")]
    Repeated,
    #[serde(rename = "Structuring Suspected")]
    StructuringSuspected,
}

impl TransactionPattern {
    pub fn name(&self) -> &'static str {
        match self {
            TransactionPattern::OneTime => "One-time",
            TransactionPattern::Repeated => "Repeated",
            TransactionPattern::StructuringSuspected => "Structuring Suspected",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InvalidInputError> {
        match normalize(value).as_str() {
            "one time" | "onetime" => Ok(TransactionPattern::OneTime),
            "repeated" => Ok(TransactionPattern::Repeated),
            "structuring suspected" => Ok(TransactionPattern::StructuringSuspected),
            _ => Err(InvalidInputError::new(
                "pattern",
                format!(
                    "'{}' is not one of: One-time, Repeated, Structuring Suspected",
                    value
                ),
            )),
        }
    }
}

impl std::fmt::Display for TransactionPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase, collapse '-'/'_' to spaces, trim
fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// TRANSACTION RECORD
// ============================================================================

/// The immutable input to one evaluation. Constructed once per
/// user-triggered evaluation, passed by value, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Customer / account identifier (free-form, non-empty)
    pub account_id: String,

    /// Transaction amount in minor currency units
    pub amount: u64,

    pub transaction_type: TransactionType,

    pub location: Location,

    pub pattern: TransactionPattern,
}

impl TransactionRecord {
    pub fn new(
        account_id: impl Into<String>,
        amount: u64,
        transaction_type: TransactionType,
        location: Location,
        pattern: TransactionPattern,
    ) -> Result<Self, InvalidInputError> {
        let account_id = account_id.into();
        if account_id.trim().is_empty() {
            return Err(InvalidInputError::new(
                "account_id",
                "Required field is empty",
            ));
        }
        Ok(TransactionRecord {
            account_id,
            amount,
            transaction_type,
            location,
            pattern,
        })
    }
}

// ============================================================================
// CASE METADATA
// ============================================================================

/// Externally supplied case context. Both fields are opaque strings;
/// the case id also names the exported attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseMetadata {
    pub case_id: String,
    pub analyst: String,
}

impl CaseMetadata {
    pub fn new(case_id: impl Into<String>, analyst: impl Into<String>) -> Self {
        CaseMetadata {
            case_id: case_id.into(),
            analyst: analyst.into(),
        }
    }
}

// ============================================================================
// CASE INPUT (untyped boundary)
// ============================================================================

/// Shape of a case file as it arrives from the presentation shell:
/// enum fields as free-form strings, amount still signed. Validated
/// fail-fast into the typed record; nothing downstream sees raw strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseInput {
    pub case_id: String,
    pub analyst: String,
    pub account_id: String,
    pub amount: i64,
    pub transaction_type: String,
    pub location: String,
    pub pattern: String,
}

impl CaseInput {
    /// Validate every field and produce the typed pair the core consumes.
    /// Rejects the whole input on the first out-of-domain field.
    pub fn into_parts(self) -> Result<(TransactionRecord, CaseMetadata), InvalidInputError> {
        if self.amount < 0 {
            return Err(InvalidInputError::new(
                "amount",
                format!("Must be non-negative, got {}", self.amount),
            ));
        }
        let record = TransactionRecord::new(
            self.account_id,
            self.amount as u64,
            TransactionType::parse(&self.transaction_type)?,
            Location::parse(&self.location)?,
            TransactionPattern::parse(&self.pattern)?,
        )?;
        let meta = CaseMetadata::new(self.case_id, self.analyst);
        Ok((record, meta))
    }
}

// ============================================================================
// TESTS
// ============================================================================
