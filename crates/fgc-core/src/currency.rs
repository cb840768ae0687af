use rust_decimal::{Decimal, RoundingStrategy};

/// Number format applied to currency columns in spreadsheet reports.
pub const SPREADSHEET_CURRENCY_FORMAT: &str = "R$ #,##0.00";

/// Format a monetary value for display, e.g. `R$ 1,234,567.89`.
///
/// Two decimal places, comma thousands separator, dot decimal separator.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol} {grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_currency(dec!(250000), "R$"), "R$ 250,000.00");
        assert_eq!(format_currency(dec!(1234567.891), "R$"), "R$ 1,234,567.89");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(format_currency(dec!(0), "R$"), "R$ 0.00");
        assert_eq!(format_currency(dec!(7.5), "R$"), "R$ 7.50");
        assert_eq!(format_currency(dec!(999), "$"), "$ 999.00");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(format_currency(dec!(0.125), "R$"), "R$ 0.13");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_currency(dec!(-1500), "R$"), "-R$ 1,500.00");
    }
}
