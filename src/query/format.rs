//! Number rendering for the text fields of query results

/// Render a float the way dataframe tooling prints it:
/// integral values keep a trailing `.0` (`0.0`, `15.0`), everything else
/// uses the shortest representation that round-trips (`0.30000000000000004`).
/// Decimal exponents below -4 or from 16 up switch to scientific notation
/// with a signed, two-digit exponent (`1e-05`, `1.5e+16`).
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e16`
    let scientific = format!("{:e}", value);
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            if value != 0.0 && !(-4..16).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// `"<sum> USD"`
pub fn usd(amount: f64) -> String {
    format!("{} USD", float_repr(amount))
}

/// `"<ratio with 2 decimals>%"`, or `None` when the ratio is undefined.
pub fn percentage(ratio: Option<f64>) -> Option<String> {
    ratio.filter(|r| r.is_finite()).map(|r| format!("{:.2}%", r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_repr() {
        assert_eq!(float_repr(0.0), "0.0");
        assert_eq!(float_repr(15.0), "15.0");
        assert_eq!(float_repr(59.97), "59.97");
        assert_eq!(float_repr(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(float_repr(f64::NAN), "nan");
    }

    #[test]
    fn test_float_repr_scientific_range() {
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(-1.5e16), "-1.5e+16");
        assert_eq!(float_repr(1.2345678901234568e20), "1.2345678901234568e+20");
        assert_eq!(float_repr(1e-5), "1e-05");
        assert_eq!(float_repr(1.5e-7), "1.5e-07");
        assert_eq!(float_repr(1e100), "1e+100");

        // bounds stay positional
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(9999999999999998.0), "9999999999999998.0");
        assert_eq!(float_repr(-0.0), "-0.0");
    }

    #[test]
    fn test_usd() {
        assert_eq!(usd(0.0), "0.0 USD");
        assert_eq!(usd(4.99), "4.99 USD");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(Some(50.0)), Some("50.00%".to_string()));
        assert_eq!(percentage(Some(100.0 / 3.0)), Some("33.33%".to_string()));
        assert_eq!(percentage(Some(f64::NAN)), None);
        assert_eq!(percentage(None), None);
    }
}
