/// Format a price the way the page shows it: en-US digit grouping,
/// at most three fraction digits, trailing zeros dropped.
///
/// ```
/// use gvp::pricing::format_toman;
///
/// assert_eq!(format_toman(100000.0), "100,000");
/// assert_eq!(format_toman(1234.5), "1,234.5");
/// ```
pub fn format_toman(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if amount < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Plain rendering of a resource value (cores, GB): integers without a decimal point.
pub fn plain_number(value: f64) -> String {
    value.to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_toman(0.0), "0");
        assert_eq!(format_toman(999.0), "999");
        assert_eq!(format_toman(1000.0), "1,000");
        assert_eq!(format_toman(2_500_000.0), "2,500,000");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_toman(1500.25), "1,500.25");
        assert_eq!(format_toman(0.12345), "0.123");
        assert_eq!(format_toman(10.0004), "10");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_toman(-1234.0), "-1,234");
        assert_eq!(format_toman(-0.0001), "0");
    }

    #[test]
    fn plain_numbers_drop_trailing_zero() {
        assert_eq!(plain_number(2.0), "2");
        assert_eq!(plain_number(0.5), "0.5");
    }
}
