// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_matcher::prelude::*;

fn report(matcher: &DecimalMatcher, value: Option<&str>) {
    let result = matcher.match_value(value);
    println!("  {:<16} -> {}", format!("{:?}", value), result);
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Matcher Example ===\n");

    let inputs = [
        None,
        Some("123.45"),
        Some("0"),
        Some("1234"),
        Some("123.456"),
        Some("1.5e-3"),
        Some("not-a-number"),
    ];

    let configs = [
        MatcherConfig::Default,
        MatcherConfig::MaxDigits(3),
        MatcherConfig::MaxDigitsAndPlaces(5, 2),
    ];

    for config in configs {
        let matcher = DecimalMatcher::new(config);
        println!(
            "{:?} (max digits {}, max decimal places {:?}):",
            config,
            config.max_total_digits(),
            config.max_decimal_places()
        );
        for value in inputs {
            report(&matcher, value);
        }
        println!();
    }

    println!("=== Zero Values ===");
    let strict = DecimalMatcherBuilder::new()
        .max_digits(0)
        .zero_policy(ZeroValuePolicy::Evaluate)
        .build()
        .expect("valid configuration");
    report(&DecimalMatcher::from_params(&[0]).expect("valid parameters"), Some("0"));
    report(&strict, Some("0"));

    println!("\n=== Accepted Values as rust_decimal ===");
    let matcher = DecimalMatcher::new(MatcherConfig::MaxDigitsAndPlaces(8, 2));
    for value in ["1_234.5", "0x1F", "0b1.1", "12.345"] {
        let result = matcher.match_str(value);
        if result.has_code(MatcherError::TooManyDecimalPlaces.code()) {
            println!("  {:<8} -> too many decimal places", value);
            continue;
        }
        match ParsedDecimal::parse(value).and_then(|parsed| parsed.to_decimal()) {
            Ok(decimal) => println!("  {:<8} -> {}", value, decimal),
            Err(e) => println!("  {:<8} -> {}", value, e),
        }
    }

    println!("\n=== Rejected Configuration ===");
    match DecimalMatcher::from_params(&[5, 2, 1]) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  {}", e),
    }
}
