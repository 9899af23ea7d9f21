//! Core types and data structures for the fee schedule engine

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::index::FeeIndex;
use crate::schedule::parser::ScheduleError;

/// A single fee rule: a percentage applied to transaction totals that fall
/// inside the inclusive range `[from, to]` for a given fee type.
///
/// Rules are created by the schedule parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRule {
    /// Fee type identifier this rule belongs to (e.g. "clearing", "transfer")
    pub fee_type: String,
    /// Inclusive lower bound of the transaction total range
    pub from: BigDecimal,
    /// Inclusive upper bound of the transaction total range
    pub to: BigDecimal,
    /// Fee percentage as a fraction in `[0, 1]` (e.g. 0.0379 for 3.79%)
    pub percentage: BigDecimal,
}

impl FeeRule {
    /// Create a new fee rule
    pub fn new(
        fee_type: String,
        from: BigDecimal,
        to: BigDecimal,
        percentage: BigDecimal,
    ) -> Self {
        Self {
            fee_type,
            from,
            to,
            percentage,
        }
    }

    /// Whether `amount` falls inside this rule's inclusive range.
    ///
    /// A rule whose `from` exceeds its `to` spans an empty interval and
    /// matches no amount.
    pub fn contains(&self, amount: &BigDecimal) -> bool {
        *amount >= self.from && *amount <= self.to
    }
}

/// A parsed rate table: fee rules in file order.
///
/// Produced once per upload, consumed to build a [`FeeIndex`], then discarded.
pub type RateTable = Vec<FeeRule>;

/// A published fee schedule: the range index plus revision metadata.
///
/// Revisions are immutable after publication; a new upload replaces the
/// current revision wholesale rather than merging into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRevision {
    /// Unique identifier for this revision
    pub id: Uuid,
    /// When the revision was published (UTC)
    pub published_at: NaiveDateTime,
    /// Range index consulted at query time
    pub index: FeeIndex,
}

impl ScheduleRevision {
    /// Wrap a freshly built index into a new revision
    pub fn new(index: FeeIndex) -> Self {
        Self {
            id: Uuid::new_v4(),
            published_at: chrono::Utc::now().naive_utc(),
            index,
        }
    }
}

/// Summary returned after a schedule is published successfully
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Identifier of the published revision
    pub revision_id: Uuid,
    /// When the revision was published (UTC)
    pub published_at: NaiveDateTime,
    /// Number of rules in the schedule
    pub rule_count: usize,
    /// Number of distinct fee types
    pub group_count: usize,
}

/// Validated query parameters for a fee quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeQuery {
    /// Fee type to quote
    pub fee_type: String,
    /// Transaction total, guaranteed non-negative
    pub total: BigDecimal,
}

/// Result of a fee quote: the grand total including the fee, the fee type and
/// percentage that applied, and the fee amount itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    /// Transaction total plus the fee amount
    pub total: BigDecimal,
    /// Fee type that was quoted
    #[serde(rename = "type")]
    pub fee_type: String,
    /// Percentage of the matching rule
    pub percentage: BigDecimal,
    /// Fee charged on the transaction total
    pub fee_amount: BigDecimal,
}

/// Errors that can occur in the fee schedule system
#[derive(Debug, thiserror::Error)]
pub enum FeeError {
    #[error("Invalid fee schedule: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("No fee schedule has been configured")]
    ConfigurationMissing,
    #[error("No fee rule matches type '{fee_type}' and amount {amount}")]
    NoMatchingRule { fee_type: String, amount: BigDecimal },
    #[error("Invalid query: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for fee schedule operations
pub type FeeResult<T> = Result<T, FeeError>;
