//! Schedule parsing and range index examples

use fee_schedule_core::{find_rule, parse_schedule, FeeIndex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📋 Fee Schedule Core - Parsing Examples\n");

    let schedule = "\
Fee Type,From,To,Percentage
clearing,0,5002,0.0379
clearing,5003,10001,0.0248
clearing,10002,50000,0.033
transfer,0,5002,0.013
transfer,5003,10001,0.0222";

    // 1. Parse the raw schedule into a rate table
    let table = parse_schedule(schedule)?;
    println!("📊 Parsed {} rules:", table.len());
    for rule in &table {
        println!(
            "  {:<10} [{:>6}, {:>6}] -> {}%",
            rule.fee_type,
            rule.from,
            rule.to,
            &rule.percentage * bigdecimal::BigDecimal::from(100)
        );
    }
    println!();

    // 2. Build the range index and inspect its groups
    let index = FeeIndex::build(table);
    println!(
        "🗂️  Index: {} fee types, {} rules total",
        index.group_count(),
        index.rule_count()
    );
    for fee_type in ["clearing", "transfer"] {
        let brackets = index.group(fee_type).map(<[_]>::len).unwrap_or(0);
        println!("  {fee_type}: {brackets} brackets");
    }
    println!();

    // 3. Range lookups, including a gap and an out-of-range amount
    println!("🔎 Lookups:");
    for (fee_type, amount) in [
        ("clearing", "1000"),
        ("clearing", "5002"),
        ("clearing", "5002.5"),
        ("transfer", "7500"),
        ("transfer", "999999"),
    ] {
        let amount = amount.parse()?;
        match find_rule(&index, fee_type, &amount) {
            Some(rule) => println!(
                "  {fee_type} {amount}: matched [{}, {}] at {}",
                rule.from, rule.to, rule.percentage
            ),
            None => println!("  {fee_type} {amount}: no matching range"),
        }
    }
    println!();

    // 4. Malformed schedules are rejected with row-level context
    println!("🚫 Rejected inputs:");
    let bad_inputs = [
        ("empty input", ""),
        ("wrong headers", "Type,Start,End,Rate\nclearing,0,5002,0.0379"),
        (
            "missing column",
            "Fee Type,From,To,Percentage\nclearing,0,5002",
        ),
        (
            "bad number",
            "Fee Type,From,To,Percentage\nclearing,zero,5002,0.0379",
        ),
        (
            "percentage out of range",
            "Fee Type,From,To,Percentage\nclearing,0,5002,1.5",
        ),
    ];
    for (label, input) in bad_inputs {
        let err = parse_schedule(input).unwrap_err();
        println!("  {label}: {err}");
    }

    Ok(())
}
