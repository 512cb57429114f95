//! Number display matching C-style `%g` output.

const PRECISION: usize = 6;

/// Formats `value` with six significant digits, dropping trailing zeros.
///
/// Values whose decimal exponent is below -4 or at least 6 switch to
/// scientific notation with a signed, two-digit exponent (`1e+06`).
pub fn general(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let scientific: String = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value}");
    };

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign: char = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals: usize = (PRECISION as i32 - 1 - exponent) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
