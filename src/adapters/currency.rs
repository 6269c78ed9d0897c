use crate::domain::ports::CurrencyFormatter;
use crate::utils::error::{Result, TipError};
use rust_decimal::{Decimal, RoundingStrategy};

/// Locale environment variables, most specific first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub tag: &'static str,
    pub symbol: &'static str,
    pub symbol_first: bool,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub fraction_digits: u32,
}

const STYLES: [CurrencyStyle; 5] = [
    CurrencyStyle {
        tag: "en-US",
        symbol: "$",
        symbol_first: true,
        group_separator: ",",
        decimal_separator: ".",
        fraction_digits: 2,
    },
    CurrencyStyle {
        tag: "en-GB",
        symbol: "£",
        symbol_first: true,
        group_separator: ",",
        decimal_separator: ".",
        fraction_digits: 2,
    },
    CurrencyStyle {
        tag: "de-DE",
        symbol: "\u{a0}€",
        symbol_first: false,
        group_separator: ".",
        decimal_separator: ",",
        fraction_digits: 2,
    },
    CurrencyStyle {
        tag: "fr-FR",
        symbol: "\u{a0}€",
        symbol_first: false,
        group_separator: "\u{202f}",
        decimal_separator: ",",
        fraction_digits: 2,
    },
    CurrencyStyle {
        tag: "ja-JP",
        symbol: "￥",
        symbol_first: true,
        group_separator: ",",
        decimal_separator: ".",
        fraction_digits: 0,
    },
];

pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    STYLES.iter().map(|s| s.tag)
}

/// Currency formatter backed by a fixed table of locale conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCurrencyFormatter {
    style: CurrencyStyle,
}

impl Default for LocaleCurrencyFormatter {
    fn default() -> Self {
        Self { style: STYLES[0] }
    }
}

impl LocaleCurrencyFormatter {
    /// Looks up a locale tag such as `de-DE`, `de_DE` or `de_DE.UTF-8`.
    pub fn for_locale(tag: &str) -> Result<Self> {
        let normalized = normalize_tag(tag);
        if normalized == "c" || normalized == "posix" {
            return Ok(Self::default());
        }

        STYLES
            .iter()
            .find(|s| s.tag.eq_ignore_ascii_case(&normalized))
            .map(|style| Self { style: *style })
            .ok_or_else(|| TipError::UnsupportedLocale {
                locale: tag.to_string(),
            })
    }

    /// Uses `requested` if given, else the platform locale. Unknown locales fall back to en-US.
    pub fn resolve(requested: Option<&str>) -> Self {
        let tag = match requested {
            Some(tag) => Some(tag.to_string()),
            None => detect_locale(|name| std::env::var(name).ok()),
        };

        let Some(tag) = tag else {
            tracing::debug!("No locale configured, using {}", DEFAULT_LOCALE);
            return Self::default();
        };

        match Self::for_locale(&tag) {
            Ok(formatter) => {
                tracing::debug!("Using currency locale {}", formatter.style.tag);
                formatter
            }
            Err(e) => {
                tracing::warn!("{}", e.user_friendly_message());
                Self::default()
            }
        }
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        let style = &self.style;
        let rounded = amount
            .round_dp_with_strategy(style.fraction_digits, RoundingStrategy::MidpointNearestEven);
        let digits = format!("{:.*}", style.fraction_digits as usize, rounded.abs());

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut number = group_digits(whole, style.group_separator);
        if let Some(fraction) = fraction {
            number.push_str(style.decimal_separator);
            number.push_str(fraction);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        if style.symbol_first {
            format!("{}{}{}", sign, style.symbol, number)
        } else {
            format!("{}{}{}", sign, number, style.symbol)
        }
    }
}

/// Picks the first non-empty locale variable, as the C library does.
pub fn detect_locale<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}

fn normalize_tag(tag: &str) -> String {
    let base = tag
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    base.replace('_', "-").to_ascii_lowercase()
}

fn group_digits(whole: &str, separator: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn format_in(tag: &str, amount: Decimal) -> String {
        LocaleCurrencyFormatter::for_locale(tag).unwrap().format(amount)
    }

    #[test]
    fn test_en_us() {
        assert_eq!(format_in("en-US", dec!(10)), "$10.00");
        assert_eq!(format_in("en-US", dec!(0)), "$0.00");
        assert_eq!(format_in("en-US", dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_in("en-US", dec!(999.999)), "$1,000.00");
    }

    #[test]
    fn test_half_even_display_rounding() {
        assert_eq!(format_in("en-US", dec!(4.9995)), "$5.00");
        assert_eq!(format_in("en-US", dec!(0.125)), "$0.12");
        assert_eq!(format_in("en-US", dec!(0.135)), "$0.14");
    }

    #[test]
    fn test_european_locales() {
        assert_eq!(format_in("de-DE", dec!(1234.5)), "1.234,50\u{a0}€");
        assert_eq!(format_in("fr_FR.UTF-8", dec!(1234.5)), "1\u{202f}234,50\u{a0}€");
        assert_eq!(format_in("en_GB", dec!(9)), "£9.00");
    }

    #[test]
    fn test_zero_fraction_digit_locale() {
        assert_eq!(format_in("ja-JP", dec!(1234.5)), "￥1,234");
        assert_eq!(format_in("ja-JP", dec!(1235.5)), "￥1,236");
    }

    #[test]
    fn test_unknown_locale() {
        let err = LocaleCurrencyFormatter::for_locale("xx-YY").unwrap_err();
        assert!(matches!(err, TipError::UnsupportedLocale { .. }));
        assert_eq!(
            LocaleCurrencyFormatter::resolve(Some("xx-YY")),
            LocaleCurrencyFormatter::default()
        );
    }

    #[test]
    fn test_every_suggested_locale_resolves() {
        for tag in supported_locales() {
            assert!(LocaleCurrencyFormatter::for_locale(tag).is_ok(), "{} missing", tag);
        }
    }

    #[test]
    fn test_posix_locale_maps_to_default() {
        assert_eq!(
            LocaleCurrencyFormatter::for_locale("C.UTF-8").unwrap(),
            LocaleCurrencyFormatter::default()
        );
    }

    #[test]
    fn test_detect_locale_precedence() {
        let env: HashMap<&str, &str> =
            HashMap::from([("LC_ALL", ""), ("LC_MONETARY", "de_DE.UTF-8"), ("LANG", "en_US.UTF-8")]);
        let detected = detect_locale(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(detected.as_deref(), Some("de_DE.UTF-8"));

        let empty: HashMap<&str, &str> = HashMap::new();
        assert_eq!(detect_locale(|name| empty.get(name).map(|v| v.to_string())), None);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ","), "1");
        assert_eq!(group_digits("123", ","), "123");
        assert_eq!(group_digits("1234", ","), "1,234");
        assert_eq!(group_digits("123456", ","), "123,456");
    }
}
