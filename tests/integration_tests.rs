//! Integration tests for fee-schedule-core

use std::str::FromStr;

use bigdecimal::BigDecimal;
use fee_schedule_core::{
    compute_fee, find_rule, parse_schedule, utils::MemoryScheduleStore, utils::StrictQueryValidator,
    FeeError, FeeIndex, FeeService, ScheduleError,
};

const FULL_SCHEDULE: &str = "\
Fee Type,From,To,Percentage
clearing,0,5002,0.0379
clearing,5003,10001,0.0248
clearing,10002,50000,0.033
clearing,50001,100000,0.0165
transfer,0,5002,0.013
transfer,5003,10001,0.0222
transfer,10002,50000,0.0328
transfer,50001,100000,0.0484";

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[tokio::test]
async fn complete_fee_workflow() {
    let service = FeeService::new(MemoryScheduleStore::new());

    // No schedule yet: queries fail with the configuration-missing condition,
    // not not-found.
    let err = service.quote("clearing", &dec("1000")).await.unwrap_err();
    assert!(matches!(err, FeeError::ConfigurationMissing));

    // Upload the schedule
    let summary = service.publish_schedule(FULL_SCHEDULE).await.unwrap();
    assert_eq!(summary.rule_count, 8);
    assert_eq!(summary.group_count, 2);

    // Quote a clearing fee in the first bracket
    let quote = service.quote("clearing", &dec("1000")).await.unwrap();
    assert_eq!(quote.percentage, dec("0.0379"));
    assert_eq!(quote.fee_amount, dec("37.9"));
    assert_eq!(quote.total, dec("1037.9"));

    // Quote a transfer in the second bracket
    let quote = service.quote("transfer", &dec("7500")).await.unwrap();
    assert_eq!(quote.percentage, dec("0.0222"));
    assert_eq!(quote.fee_amount, dec("166.5"));
    assert_eq!(quote.total, dec("7666.5"));

    // Bracket boundaries are inclusive on both ends
    let at_upper = service.quote("clearing", &dec("5002")).await.unwrap();
    assert_eq!(at_upper.percentage, dec("0.0379"));
    let at_lower = service.quote("clearing", &dec("5003")).await.unwrap();
    assert_eq!(at_lower.percentage, dec("0.0248"));

    // Amounts outside every bracket are a not-found condition
    let err = service.quote("clearing", &dec("100001")).await.unwrap_err();
    assert!(matches!(err, FeeError::NoMatchingRule { .. }));
    let err = service.quote("cashout", &dec("1000")).await.unwrap_err();
    assert!(matches!(err, FeeError::NoMatchingRule { .. }));
}

#[tokio::test]
async fn new_upload_replaces_old_schedule_wholesale() {
    let service = FeeService::new(MemoryScheduleStore::new());

    let first = service.publish_schedule(FULL_SCHEDULE).await.unwrap();

    let second = service
        .publish_schedule("Fee Type,From,To,Percentage\nclearing,0,1000,0.05")
        .await
        .unwrap();
    assert_ne!(first.revision_id, second.revision_id);

    // The clearing group now has the new single bracket only
    let quote = service.quote("clearing", &dec("500")).await.unwrap();
    assert_eq!(quote.percentage, dec("0.05"));

    let err = service.quote("clearing", &dec("7500")).await.unwrap_err();
    assert!(matches!(err, FeeError::NoMatchingRule { .. }));

    // Transfer rules from the first upload are gone, not merged
    let err = service.quote("transfer", &dec("100")).await.unwrap_err();
    assert!(matches!(err, FeeError::NoMatchingRule { .. }));
}

#[tokio::test]
async fn rejected_upload_leaves_current_schedule_untouched() {
    let service = FeeService::new(MemoryScheduleStore::new());
    service.publish_schedule(FULL_SCHEDULE).await.unwrap();
    let before = service.current_revision().await.unwrap().unwrap();

    for bad in [
        "",
        "Type,Start,End,Rate\nclearing,0,5002,0.0379",
        "Fee Type,From,To,Percentage\nclearing,0,5002",
        "Fee Type,From,To,Percentage\nclearing,zero,5002,0.0379",
        "Fee Type,From,To,Percentage\nclearing,0,5002,1.5",
    ] {
        let err = service.publish_schedule(bad).await.unwrap_err();
        assert!(matches!(err, FeeError::Schedule(_)));
    }

    let after = service.current_revision().await.unwrap().unwrap();
    assert_eq!(before.id, after.id);
}

#[tokio::test]
async fn raw_query_pipeline_matches_transport_contract() {
    let service = FeeService::new(MemoryScheduleStore::new());
    service.publish_schedule(FULL_SCHEDULE).await.unwrap();

    let quote = service
        .quote_raw(Some("transfer"), Some("7500"))
        .await
        .unwrap();

    assert_eq!(quote.percentage, dec("0.0222"));
    assert_eq!(quote.fee_amount, dec("166.5"));
    assert_eq!(quote.total, dec("7666.5"));

    // The serialized quote carries the transport-facing field names and
    // survives a round trip unchanged
    let json = serde_json::to_value(&quote).unwrap();
    assert_eq!(json["type"], "transfer");
    for key in ["total", "percentage", "feeAmount"] {
        assert!(json.get(key).is_some(), "missing field {key}");
    }
    let back: fee_schedule_core::FeeQuote = serde_json::from_value(json).unwrap();
    assert_eq!(back, quote);

    // Malformed parameters never reach the evaluator
    let err = service.quote_raw(Some("transfer"), Some("-1")).await;
    assert!(matches!(err, Err(FeeError::Validation(_))));
    let err = service.quote_raw(None, None).await;
    assert!(matches!(err, Err(FeeError::Validation(_))));
}

#[tokio::test]
async fn strict_validator_can_replace_the_default() {
    let service = FeeService::with_validator(
        MemoryScheduleStore::new(),
        Box::new(StrictQueryValidator),
    );
    service.publish_schedule(FULL_SCHEDULE).await.unwrap();

    assert!(service
        .quote_raw(Some("clearing"), Some("1000"))
        .await
        .is_ok());

    let err = service
        .quote_raw(Some("clearing fees!"), Some("1000"))
        .await
        .unwrap_err();
    assert!(matches!(err, FeeError::Validation(_)));
}

#[test]
fn parse_and_lookup_compose_without_a_store() {
    let table = parse_schedule(FULL_SCHEDULE).unwrap();
    assert_eq!(table.len(), 8);

    let index = FeeIndex::build(table);
    assert_eq!(index.group_count(), 2);

    // Every rule is reachable at both of its boundaries
    for fee_type in ["clearing", "transfer"] {
        for rule in index.group(fee_type).unwrap() {
            assert_eq!(find_rule(&index, fee_type, &rule.from), Some(rule));
            assert_eq!(find_rule(&index, fee_type, &rule.to), Some(rule));
        }
    }

    let rule = find_rule(&index, "clearing", &dec("1000")).unwrap();
    assert_eq!(compute_fee(&dec("1000"), &rule.percentage), dec("37.9"));
}

#[test]
fn format_errors_carry_readable_messages() {
    let err = parse_schedule("").unwrap_err();
    assert_eq!(err.to_string(), "Schedule input is empty");

    let err = parse_schedule("Type,Start,End,Rate\nclearing,0,5002,0.0379").unwrap_err();
    assert!(err.to_string().contains("expected 'Fee Type,From,To,Percentage'"));

    let err = parse_schedule("Fee Type,From,To,Percentage\nclearing,0,5002,1.5").unwrap_err();
    assert!(matches!(err, ScheduleError::PercentageOutOfRange { .. }));
    assert!(err.to_string().contains("between 0 and 1"));
}
