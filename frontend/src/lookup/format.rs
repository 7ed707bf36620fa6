use rust_decimal::{Decimal, RoundingStrategy};

/// Render a price the way en-US `Intl.NumberFormat` does with two fraction
/// digits and no currency symbol, e.g. `1,234.50`.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) if value.is_finite() => group_thousands(value),
        _ => "N/A".to_string(),
    }
}

/// Two decimals, halves rounded away from zero on the exact binary value.
fn fixed_two_places(magnitude: f64) -> String {
    match Decimal::from_f64_retain(magnitude) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        // Beyond Decimal range there is no fractional part left to round.
        None => format!("{magnitude:.2}"),
    }
}

fn group_thousands(value: f64) -> String {
    let fixed = fixed_two_places(value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() {
        grouped.push('-');
    }
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}
