//! Currency display formatting for report output.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format an amount as a dollar string, e.g. `$1,234.50`.
///
/// Negative amounts render with the minus ahead of the symbol, as `-$42.00`.
pub fn currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

#[cfg(test)]
mod tests {
    use super::currency;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(currency(12.34), "$12.34");
        assert_eq!(currency(12.3), "$12.30");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(currency(0.0), "$0.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(currency(-42.0), "-$42.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(currency(1234.5), "$1,234.50");
    }
}
