//! Traits for schedule storage abstraction and query validation

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::{FeeQuery, FeeResult, ScheduleRevision};
use crate::utils::validation::{parse_total, validate_fee_type};

/// Storage abstraction for the published fee schedule.
///
/// This trait allows the fee engine to keep its current schedule in any
/// backend (in-memory, Redis, a database row, etc.) by implementing these
/// two methods. Publishing replaces the current revision wholesale; a reader
/// that already holds a revision keeps a complete, consistent snapshot while
/// later readers observe the replacement.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Atomically replace the current schedule revision
    async fn publish(&self, revision: ScheduleRevision) -> FeeResult<()>;

    /// Get the currently published revision, if any
    async fn current(&self) -> FeeResult<Option<Arc<ScheduleRevision>>>;
}

/// Trait for validating raw quote query parameters before evaluation
pub trait QueryValidator: Send + Sync {
    /// Validate raw `type` and `total` values into a typed query
    fn validate_query(&self, fee_type: Option<&str>, total: Option<&str>) -> FeeResult<FeeQuery>;
}

/// Default query validator: `type` must be present and non-empty, `total`
/// must be present, numeric, and non-negative.
pub struct DefaultQueryValidator;

impl QueryValidator for DefaultQueryValidator {
    fn validate_query(&self, fee_type: Option<&str>, total: Option<&str>) -> FeeResult<FeeQuery> {
        Ok(FeeQuery {
            fee_type: validate_fee_type(fee_type)?,
            total: parse_total(total)?,
        })
    }
}
