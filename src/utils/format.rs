/// Format an amount as dollars with thousands separators: `$499,900.00`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Format a probability in [0, 1] as a percentage with two decimals: `92.00%`
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(199.99), "$199.99");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(499_900.0), "$499,900.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-15.5), "-$15.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.92), "92.00%");
        assert_eq!(format_percent(0.01), "1.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
