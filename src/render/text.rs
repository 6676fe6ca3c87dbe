//! Tick label formatting.

use chrono::DateTime;

/// Whole-number label. Halves round toward positive infinity.
pub fn format_integer(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let n = (v + 0.5).floor();
    if n == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    format!("{n:.0}")
}

/// Shortest label with up to 12 significant digits, trailing zeros trimmed.
///
/// Exponents below -6 or from 12 up switch to exponent form with a signed
/// exponent, e.g. `1.5e+12`.
pub fn format_general(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{v:.11e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if !(-6..12).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{sign}{}", trim_zeros(mantissa), exp.abs());
    }
    let decimals = (11 - exp) as usize;
    trim_zeros(&format!("{v:.decimals$}")).to_string()
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// `YYYY-MM-DD` for an epoch-millisecond position.
pub fn format_date(millis: f64) -> String {
    DateTime::from_timestamp_millis(millis.round() as i64)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format_general(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_labels_round_half_up() {
        assert_eq!(format_integer(11.5), "12");
        assert_eq!(format_integer(-11.5), "-11");
        assert_eq!(format_integer(-0.2), "0");
        assert_eq!(format_integer(5.0), "5");
    }

    #[test]
    fn general_labels_trim_zeros() {
        assert_eq!(format_general(2018.0), "2018");
        assert_eq!(format_general(2018.5), "2018.5");
        assert_eq!(format_general(0.25), "0.25");
        assert_eq!(format_general(-3.0), "-3");
        assert_eq!(format_general(0.1 + 0.2), "0.3");
    }

    #[test]
    fn general_labels_switch_to_signed_exponent() {
        assert_eq!(format_general(999_999_999_999.0), "999999999999");
        assert_eq!(format_general(1.5e12), "1.5e+12");
        assert_eq!(format_general(1e21), "1e+21");
        assert_eq!(format_general(-2.5e13), "-2.5e+13");
        assert_eq!(format_general(0.000001), "0.000001");
        assert_eq!(format_general(1.25e-7), "1.25e-7");
    }

    #[test]
    fn dates_format_as_days() {
        assert_eq!(format_date(0.0), "1970-01-01");
        assert_eq!(format_date(86_400_000.0), "1970-01-02");
    }
}
