//! End-to-end fee quoting example

use bigdecimal::BigDecimal;
use fee_schedule_core::utils::MemoryScheduleStore;
use fee_schedule_core::{FeeError, FeeService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("💸 Fee Schedule Core - Quoting Examples\n");

    let service = FeeService::new(MemoryScheduleStore::new());

    // Queries before any upload fail with a distinct configuration error
    match service.quote("clearing", &BigDecimal::from(1000)).await {
        Err(FeeError::ConfigurationMissing) => {
            println!("⚠️  Before upload: no fee schedule has been configured\n")
        }
        other => println!("unexpected: {other:?}"),
    }

    // Upload a schedule
    let schedule = "\
Fee Type,From,To,Percentage
clearing,0,5002,0.0379
clearing,5003,10001,0.0248
transfer,0,5002,0.013
transfer,5003,10001,0.0222";

    let summary = service.publish_schedule(schedule).await?;
    println!(
        "📤 Published revision {} ({} rules, {} fee types)\n",
        summary.revision_id, summary.rule_count, summary.group_count
    );

    // Quote a few transactions
    println!("🧾 Quotes:");
    for (fee_type, total) in [("clearing", "1000"), ("transfer", "7500"), ("transfer", "42.5")] {
        let quote = service.quote_raw(Some(fee_type), Some(total)).await?;
        println!(
            "  {fee_type} on {total}: fee {} at {} -> total {}",
            quote.fee_amount, quote.percentage, quote.total
        );
    }
    println!();

    // Replace the schedule wholesale and show the old brackets are gone
    service
        .publish_schedule("Fee Type,From,To,Percentage\nclearing,0,1000,0.05")
        .await?;
    println!("🔁 After replacement:");
    match service.quote("transfer", &BigDecimal::from(100)).await {
        Err(FeeError::NoMatchingRule { fee_type, .. }) => {
            println!("  '{fee_type}' no longer has any rules")
        }
        other => println!("  unexpected: {other:?}"),
    }

    let quote = service.quote("clearing", &BigDecimal::from(500)).await?;
    println!("  clearing on 500 now quotes at {}", quote.percentage);

    Ok(())
}
