//! Amount formatting for the dashboard.
//!
//! Amounts are whole currency units. The default locale groups thousands with
//! `.` and places the symbol after the number, e.g. `1.234.567 ₫`. The shell
//! builds its [`MoneyFormat`] from the configured locale and currency.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("VND")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Before,
    After,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub symbol_position: SymbolPosition,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag("vi-VN")
    }
}

impl LocaleConfig {
    /// Known tags get their conventions; anything else falls back to `vi-VN`.
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "en-US" => Self {
                language_tag: tag.into(),
                decimal_separator: '.',
                grouping_separator: ',',
                symbol_position: SymbolPosition::Before,
            },
            _ => Self {
                language_tag: "vi-VN".into(),
                decimal_separator: ',',
                grouping_separator: '.',
                symbol_position: SymbolPosition::After,
            },
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "VND" => "₫".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "VND" | "JPY" => 0,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let mut out = group_digits(int_part, locale.grouping_separator);
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    if value < 0.0 && out.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        out.insert(0, '-');
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency_value(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let body = format_number(locale, amount, minor_units_for(code.as_str()));
    let symbol = symbol_for(code.as_str());
    match locale.symbol_position {
        SymbolPosition::Before => format!("{}{}", symbol, body),
        SymbolPosition::After => format!("{} {}", body, symbol),
    }
}

/// Locale and currency pair used to render every amount shown to the operator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoneyFormat {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
}

impl MoneyFormat {
    pub fn new(locale_tag: &str, currency: &str) -> Self {
        Self {
            currency: CurrencyCode::new(currency),
            locale: LocaleConfig::for_tag(locale_tag),
        }
    }

    /// Whole amount, e.g. `1.234.567 ₫`.
    pub fn amount(&self, amount: i64) -> String {
        format_currency_value(amount as f64, &self.currency, &self.locale)
    }

    /// Aggregate, rounded to whole units first.
    pub fn aggregate(&self, amount: f64) -> String {
        format_currency_value(amount.round(), &self.currency, &self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        let money = MoneyFormat::default();
        assert_eq!(money.amount(1_234_567), "1.234.567 ₫");
        assert_eq!(money.amount(999), "999 ₫");
        assert_eq!(money.amount(1_000), "1.000 ₫");
        assert_eq!(money.amount(0), "0 ₫");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        let money = MoneyFormat::default();
        assert_eq!(money.amount(-250_000), "-250.000 ₫");
        assert_eq!(money.aggregate(-0.4), "0 ₫");
    }

    #[test]
    fn aggregates_round_to_whole_units() {
        assert_eq!(MoneyFormat::default().aggregate(233_333.33), "233.333 ₫");
    }

    #[test]
    fn configured_locale_and_currency_drive_formatting() {
        let money = MoneyFormat::new("en-US", "usd");
        assert_eq!(money.amount(250_000), "$250,000.00");
        assert_eq!(MoneyFormat::new("en-US", "VND").amount(1_500), "₫1,500");
        assert_eq!(MoneyFormat::new("fr-FR", "VND"), MoneyFormat::default());
    }

    #[test]
    fn other_locales_place_symbol_first() {
        let locale = LocaleConfig::for_tag("en-US");
        let formatted = format_currency_value(1234.5, &CurrencyCode::new("usd"), &locale);
        assert_eq!(formatted, "$1,234.50");
    }
}
