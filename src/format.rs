//! Locale- and currency-aware display formatting.
//!
//! Pure functions consumed by both the engine's labels and the UI layer.
//! Configuration is passed in on every call; no locale or currency state
//! is retained between calls. Failures are returned to the caller rather
//! than coerced to an empty string.

use numfmt::{Formatter, Precision};
use serde::{Deserialize, Serialize};
use time::{Date, format_description};

use crate::Error;

/// How to render monetary amounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyStyle {
    /// The currency symbol prefix, e.g. `"₹"` or `"$"`.
    pub symbol: String,
    /// The number of minor-unit digits after the decimal point, e.g. `2`
    /// for paise or cents.
    pub minor_unit_digits: u8,
}

impl CurrencyStyle {
    /// Create a currency style.
    pub fn new(symbol: &str, minor_unit_digits: u8) -> Self {
        Self {
            symbol: symbol.to_owned(),
            minor_unit_digits,
        }
    }
}

/// How to render calendar dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateStyle {
    /// A `time` format description, e.g. `"[day] [month repr:short] [year]"`.
    pub format: String,
}

impl DateStyle {
    /// Create a date style from a `time` format description.
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_owned(),
        }
    }
}

/// Formats an amount of minor currency units as a display string.
///
/// Negative amounts render with the sign ahead of the symbol, e.g.
/// `-₹12.30`. Zero renders in full, e.g. `₹0.00`.
///
/// # Errors
///
/// Returns [Error::FormattingFailure] if the style's symbol cannot be used
/// as a currency prefix, or if `minor_unit_digits` exceeds the scale an
/// `i64` amount can carry.
pub fn format_currency(minor_units: i64, style: &CurrencyStyle) -> Result<String, Error> {
    let scale = 10_i64
        .checked_pow(u32::from(style.minor_unit_digits))
        .ok_or_else(|| {
            Error::FormattingFailure(format!(
                "{} minor-unit digits is more than an i64 amount can carry",
                style.minor_unit_digits
            ))
        })?;

    // numfmt hardcodes zero as "0", so the formatted string for zero must
    // be built by hand.
    if minor_units == 0 {
        let mut formatted = format!("{}0", style.symbol);
        pad_minor_units(&mut formatted, style.minor_unit_digits);
        return Ok(formatted);
    }

    let prefix = if minor_units < 0 {
        format!("-{}", style.symbol)
    } else {
        style.symbol.clone()
    };

    let formatter = Formatter::currency(&prefix)
        .map_err(|error| Error::FormattingFailure(error.to_string()))?
        .precision(Precision::Decimals(style.minor_unit_digits));

    let magnitude = minor_units.unsigned_abs() as f64 / scale as f64;
    let mut formatted = formatter.fmt_string(magnitude);

    // numfmt omits trailing zeros, so we must add them ourselves.
    // For example, "₹12.30" is rendered as "₹12.3" so we append "0".
    pad_minor_units(&mut formatted, style.minor_unit_digits);

    Ok(formatted)
}

fn pad_minor_units(formatted: &mut String, minor_unit_digits: u8) {
    if minor_unit_digits == 0 {
        return;
    }

    let fraction_digits = match formatted.rfind('.') {
        Some(index) => formatted.len() - index - 1,
        None => {
            formatted.push('.');
            0
        }
    };

    for _ in fraction_digits..usize::from(minor_unit_digits) {
        formatted.push('0');
    }
}

/// Formats a calendar date as a display string.
///
/// # Errors
///
/// Returns [Error::FormattingFailure] if the style's format description is
/// malformed or the date cannot be rendered with it.
pub fn format_date(date: Date, style: &DateStyle) -> Result<String, Error> {
    let format = format_description::parse(&style.format)
        .map_err(|error| Error::FormattingFailure(error.to_string()))?;

    date.format(&format)
        .map_err(|error| Error::FormattingFailure(error.to_string()))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::Error;

    use super::{CurrencyStyle, DateStyle, format_currency, format_date};

    fn rupees() -> CurrencyStyle {
        CurrencyStyle::new("₹", 2)
    }

    #[test]
    fn format_currency_renders_minor_units() {
        assert_eq!(format_currency(123_450, &rupees()).unwrap(), "₹1,234.50");
    }

    #[test]
    fn format_currency_restores_trailing_zero() {
        assert_eq!(format_currency(1_230, &rupees()).unwrap(), "₹12.30");
    }

    #[test]
    fn format_currency_renders_zero_in_full() {
        assert_eq!(format_currency(0, &rupees()).unwrap(), "₹0.00");
    }

    #[test]
    fn format_currency_puts_sign_before_symbol() {
        assert_eq!(format_currency(-1_230, &rupees()).unwrap(), "-₹12.30");
    }

    #[test]
    fn format_currency_supports_other_symbols() {
        let style = CurrencyStyle::new("$", 2);
        assert_eq!(format_currency(4_000, &style).unwrap(), "$40.00");
    }

    #[test]
    fn format_currency_rejects_oversized_digit_count() {
        // 10^19 does not fit in an i64, so the scale cannot be computed.
        let style = CurrencyStyle::new("$", 19);

        assert!(matches!(
            format_currency(100, &style),
            Err(Error::FormattingFailure(_))
        ));
        assert!(matches!(
            format_currency(0, &style),
            Err(Error::FormattingFailure(_))
        ));
    }

    #[test]
    fn format_date_uses_the_supplied_description() {
        let style = DateStyle::new("[day] [month repr:short] [year]");

        assert_eq!(
            format_date(date!(2024 - 01 - 05), &style).unwrap(),
            "05 Jan 2024"
        );
    }

    #[test]
    fn format_date_fails_loudly_on_bad_description() {
        let style = DateStyle::new("[not a component]");

        assert!(matches!(
            format_date(date!(2024 - 01 - 05), &style),
            Err(Error::FormattingFailure(_))
        ));
    }
}
