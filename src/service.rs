//! Fee service orchestrating schedule publication and fee quoting

use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::evaluator::{find_rule, FeeCalculation};
use crate::schedule::index::FeeIndex;
use crate::schedule::parser::parse_schedule;
use crate::traits::{DefaultQueryValidator, QueryValidator, ScheduleStore};
use crate::types::{FeeError, FeeQuote, FeeResult, ScheduleRevision, ScheduleSummary};

/// Fee service coordinating the upload and query pipelines over a store.
///
/// The upload path parses raw schedule text, builds the range index, and
/// publishes it as the new current revision. The query path validates the
/// parameters, looks up the matching rule against the current revision, and
/// computes the fee.
pub struct FeeService<S: ScheduleStore> {
    store: S,
    validator: Box<dyn QueryValidator>,
}

impl<S: ScheduleStore> FeeService<S> {
    /// Create a fee service with the given store and the default validator
    pub fn new(store: S) -> Self {
        Self {
            store,
            validator: Box::new(DefaultQueryValidator),
        }
    }

    /// Create a fee service with a custom query validator
    pub fn with_validator(store: S, validator: Box<dyn QueryValidator>) -> Self {
        Self { store, validator }
    }

    /// Parse raw schedule text, build the range index, and publish it as the
    /// new current revision, replacing any previous schedule wholesale.
    ///
    /// When parsing fails nothing is published and the previous revision
    /// stays live.
    pub async fn publish_schedule(&self, raw: &str) -> FeeResult<ScheduleSummary> {
        let table = parse_schedule(raw)?;
        let revision = ScheduleRevision::new(FeeIndex::build(table));

        let summary = ScheduleSummary {
            revision_id: revision.id,
            published_at: revision.published_at,
            rule_count: revision.index.rule_count(),
            group_count: revision.index.group_count(),
        };

        self.store.publish(revision).await?;

        Ok(summary)
    }

    /// Quote the fee for a transaction total against the current schedule.
    ///
    /// Fails with [`FeeError::ConfigurationMissing`] when no schedule has
    /// ever been published, and with [`FeeError::NoMatchingRule`] when the
    /// fee type is unknown or the total falls outside every range.
    pub async fn quote(&self, fee_type: &str, total: &BigDecimal) -> FeeResult<FeeQuote> {
        let revision = self
            .store
            .current()
            .await?
            .ok_or(FeeError::ConfigurationMissing)?;

        let rule =
            find_rule(&revision.index, fee_type, total).ok_or_else(|| FeeError::NoMatchingRule {
                fee_type: fee_type.to_string(),
                amount: total.clone(),
            })?;

        let calculation = FeeCalculation::calculate(total.clone(), rule.percentage.clone());

        Ok(FeeQuote {
            total: calculation.total_with_fee,
            fee_type: fee_type.to_string(),
            percentage: calculation.percentage,
            fee_amount: calculation.fee_amount,
        })
    }

    /// Quote from raw query parameters, validating them first.
    ///
    /// Intended for transport layers handing over query-string values as-is.
    pub async fn quote_raw(
        &self,
        fee_type: Option<&str>,
        total: Option<&str>,
    ) -> FeeResult<FeeQuote> {
        let query = self.validator.validate_query(fee_type, total)?;
        self.quote(&query.fee_type, &query.total).await
    }

    /// Currently published revision, if any
    pub async fn current_revision(&self) -> FeeResult<Option<Arc<ScheduleRevision>>> {
        self.store.current().await
    }
}
