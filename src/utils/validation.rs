//! Validation utilities for quote query parameters

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::traits::QueryValidator;
use crate::types::{FeeError, FeeQuery, FeeResult};

/// Validate the raw `type` query parameter
pub fn validate_fee_type(value: Option<&str>) -> FeeResult<String> {
    let value = value.map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Err(FeeError::Validation(
            "Query parameter 'type' is required".to_string(),
        ));
    }

    Ok(value.to_string())
}

/// Parse and validate the raw `total` query parameter
pub fn parse_total(value: Option<&str>) -> FeeResult<BigDecimal> {
    let value = value.map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Err(FeeError::Validation(
            "Query parameter 'total' is required".to_string(),
        ));
    }

    let total = BigDecimal::from_str(value).map_err(|_| {
        FeeError::Validation(format!("'{value}' is not a valid number for 'total'"))
    })?;

    if total < BigDecimal::from(0) {
        return Err(FeeError::Validation(
            "Query parameter 'total' cannot be negative".to_string(),
        ));
    }

    Ok(total)
}

/// Strict query validator with identifier limits on the fee type
pub struct StrictQueryValidator;

impl QueryValidator for StrictQueryValidator {
    fn validate_query(&self, fee_type: Option<&str>, total: Option<&str>) -> FeeResult<FeeQuery> {
        let fee_type = validate_fee_type(fee_type)?;

        if fee_type.len() > 50 {
            return Err(FeeError::Validation(
                "Fee type cannot exceed 50 characters".to_string(),
            ));
        }

        if !fee_type
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(FeeError::Validation(
                "Fee type can only contain alphanumeric characters, dashes, and underscores"
                    .to_string(),
            ));
        }

        Ok(FeeQuery {
            fee_type,
            total: parse_total(total)?,
        })
    }
}
