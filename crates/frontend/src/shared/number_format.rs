//! Number and currency formatting in the Indonesian (id-ID) convention:
//! `.` groups thousands, `,` separates decimals.

/// Largest magnitude still formatted digit by digit; anything beyond goes
/// through the plain fallback
const MAX_GROUPED: f64 = 1e15;

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Formats a number with thousands grouping and `decimals` fraction digits
///
/// ```
/// # use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.5, 2), "1.234,50");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    if !value.is_finite() || value.abs() >= MAX_GROUPED {
        return value.to_string();
    }
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer_part));
    if let Some(f) = fraction {
        out.push(',');
        out.push_str(f);
    }
    out
}

/// Integer count with thousands grouping ("1.234")
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Rupiah amount without fraction digits: `Rp 50.000`, `-Rp 1.500`.
/// Values that cannot be formatted fall back to `Rp {value}`.
pub fn format_rupiah(value: f64) -> String {
    if !value.is_finite() || value.abs() >= MAX_GROUPED {
        return format!("Rp {}", value);
    }
    let rounded = value.round();
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-Rp {}", digits)
    } else {
        format!("Rp {}", digits)
    }
}

/// Share of `part` in `total` as "12,5%"; "0%" when total is zero
pub fn format_percent(part: f64, total: f64) -> String {
    if total == 0.0 || !part.is_finite() || !total.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", format_number_with_decimals(part / total * 100.0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(50000.0), "Rp 50.000");
        assert_eq!(format_rupiah(1234567.0), "Rp 1.234.567");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(-1500.0), "-Rp 1.500");
    }

    #[test]
    fn test_format_rupiah_rounds_fraction() {
        assert_eq!(format_rupiah(1499.5), "Rp 1.500");
        assert_eq!(format_rupiah(10.4), "Rp 10");
        assert_eq!(format_rupiah(-0.4), "Rp 0");
    }

    #[test]
    fn test_format_rupiah_fallback() {
        assert_eq!(format_rupiah(f64::NAN), "Rp NaN");
        assert_eq!(format_rupiah(f64::INFINITY), "Rp inf");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1.234,5");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0,00");
        assert_eq!(format_number_int(1234567.0), "1.234.567");
        assert_eq!(format_number_int(12.0), "12");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.0, 8.0), "12,5%");
        assert_eq!(format_percent(5.0, 0.0), "0%");
    }
}
