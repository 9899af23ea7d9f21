//! Fee evaluation: range lookup and fee computation

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::schedule::index::FeeIndex;
use crate::types::FeeRule;

/// Find the rule whose inclusive range contains `amount` for the given fee
/// type, or `None` when the type is unknown, the amount falls in a gap
/// between ranges, or it lies outside the group's span.
///
/// Binary search over the group's `from`-sorted rules: a midpoint rule
/// containing the amount is returned; otherwise the search continues left of
/// the midpoint when `amount < from` and right of it when `amount > to`.
/// O(log k) for k rules in the group. Assumes ranges within a group do not
/// overlap; with overlapping data an arbitrary one of the matches is
/// returned.
pub fn find_rule<'a>(
    index: &'a FeeIndex,
    fee_type: &str,
    amount: &BigDecimal,
) -> Option<&'a FeeRule> {
    let rules = index.group(fee_type)?;

    let mut left = 0;
    let mut right = rules.len().checked_sub(1)?;

    while left <= right {
        let mid = left + (right - left) / 2;
        let rule = &rules[mid];

        if rule.contains(amount) {
            return Some(rule);
        }

        if *amount < rule.from {
            // checked_sub bails out when the search falls off the left edge
            right = mid.checked_sub(1)?;
        } else {
            left = mid + 1;
        }
    }

    None
}

/// Fee charged on `amount` at the given percentage.
///
/// Exact decimal product, no rounding; callers round for display as needed.
pub fn compute_fee(amount: &BigDecimal, percentage: &BigDecimal) -> BigDecimal {
    amount * percentage
}

/// Detailed fee calculation breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeCalculation {
    /// Transaction total the fee was computed on
    pub amount: BigDecimal,
    /// Percentage applied
    pub percentage: BigDecimal,
    /// Resulting fee amount
    pub fee_amount: BigDecimal,
    /// Transaction total including the fee
    pub total_with_fee: BigDecimal,
}

impl FeeCalculation {
    /// Compute the fee and grand total for an amount and percentage
    pub fn calculate(amount: BigDecimal, percentage: BigDecimal) -> Self {
        let fee_amount = compute_fee(&amount, &percentage);
        let total_with_fee = &amount + &fee_amount;

        Self {
            amount,
            percentage,
            fee_amount,
            total_with_fee,
        }
    }
}
