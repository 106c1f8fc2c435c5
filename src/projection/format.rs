//! Display formatting of resolved values.

use serde_json::{Number, Value};

use crate::config::{CURRENCY_CODE, CURRENCY_MAX_FRACTION_DIGITS, CURRENCY_SYMBOL};
use crate::schema::{FieldPath, FormatRule};

use super::resolve::lookup;

/// Applies `rule` to a resolved value.
///
/// `record` is the record the value came from; only
/// [`FormatRule::CurrencyFromField`] reads from it. Returns `None` when the
/// value cannot be rendered by the rule and the column fallback applies.
pub fn format_value(rule: FormatRule, value: &Value, record: &Value) -> Option<String> {
    match rule {
        FormatRule::Identity | FormatRule::DateOrRaw => Some(display(value)),
        FormatRule::Currency => format_currency(value, CURRENCY_SYMBOL),
        FormatRule::CurrencyFromField(field) => {
            let prefix = currency_prefix(record, field);
            format_currency(value, &prefix)
        }
        FormatRule::BooleanLabel {
            true_text,
            false_text,
        } => Some(if is_truthy(value) { true_text } else { false_text }.to_string()),
        FormatRule::TitleCase {
            replace_underscore_with_space,
        } => {
            let text = display(value);
            let text = if replace_underscore_with_space {
                text.replace('_', " ")
            } else {
                text
            };
            Some(title_case(&text))
        }
        FormatRule::DurationDays => Some(match value {
            Value::Number(n) => format!("{} Days", display_number(n)),
            other => display(other),
        }),
        FormatRule::Percentage => Some(match value {
            Value::Number(n) => format!("{}%", display_number(n)),
            other => display(other),
        }),
        FormatRule::Count => Some(display(value)),
    }
}

/// Plain display text of a JSON value.
///
/// Integral floats print without a fraction, arrays join their items with
/// `", "`, objects print as compact JSON.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

pub fn display_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Groups a number with `,` thousands separators, keeping at most
/// `CURRENCY_MAX_FRACTION_DIGITS` fraction digits (trailing zeros dropped).
pub fn group_thousands(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        let grouped = group_digits(&i.unsigned_abs().to_string());
        return if i < 0 { format!("-{grouped}") } else { grouped };
    }
    if let Some(u) = n.as_u64() {
        return group_digits(&u.to_string());
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };

    let fixed = format!("{:.*}", CURRENCY_MAX_FRACTION_DIGITS, f.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let mut grouped = group_digits(int_part);
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    if f < 0.0 && grouped.chars().any(|c| c != '0' && c != '.') {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_currency(value: &Value, prefix: &str) -> Option<String> {
    match value {
        Value::Number(n) => Some(format!("{prefix}{}", group_thousands(n))),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Symbol for amounts whose currency is stored on the record.
///
/// Missing or default-currency codes render as `₦`; any other code is
/// upper-cased and followed by a space (`USD 5,000`).
fn currency_prefix(record: &Value, field: &'static str) -> String {
    let code = lookup(record, FieldPath::new(field))
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();
    if code.is_empty() || code.eq_ignore_ascii_case(CURRENCY_CODE) || code == CURRENCY_SYMBOL {
        CURRENCY_SYMBOL.to_string()
    } else {
        format!("{} ", code.to_uppercase())
    }
}

/// Truthiness the way the dashboard API treats loosely-typed flags.
///
/// `false`, `0`, `NaN`, `""` and `null` are false; everything else is true,
/// including the strings `"false"` and `"0"`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Upper-cases the first character and lower-cases the rest.
///
/// Words after the first are not capitalized: `"in review"` becomes
/// `"In review"`.
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fmt(rule: FormatRule, value: Value) -> Option<String> {
        format_value(rule, &value, &json!({}))
    }

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(fmt(FormatRule::Currency, json!(15000)).as_deref(), Some("₦15,000"));
        assert_eq!(fmt(FormatRule::Currency, json!(999)).as_deref(), Some("₦999"));
        assert_eq!(
            fmt(FormatRule::Currency, json!(1234567)).as_deref(),
            Some("₦1,234,567")
        );
        assert_eq!(fmt(FormatRule::Currency, json!(0)).as_deref(), Some("₦0"));
    }

    #[test]
    fn test_currency_fractions() {
        assert_eq!(
            fmt(FormatRule::Currency, json!(1500.5)).as_deref(),
            Some("₦1,500.5")
        );
        assert_eq!(
            fmt(FormatRule::Currency, json!(2500.0)).as_deref(),
            Some("₦2,500")
        );
        assert_eq!(
            fmt(FormatRule::Currency, json!(10.456)).as_deref(),
            Some("₦10.46")
        );
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(
            fmt(FormatRule::Currency, json!(-1500)).as_deref(),
            Some("₦-1,500")
        );
        assert_eq!(
            fmt(FormatRule::Currency, json!(-0.001)).as_deref(),
            Some("₦0")
        );
    }

    #[test]
    fn test_currency_passes_strings_through() {
        assert_eq!(
            fmt(FormatRule::Currency, json!("₦15,000.00")).as_deref(),
            Some("₦15,000.00")
        );
    }

    #[test]
    fn test_currency_rejects_other_types() {
        assert_eq!(fmt(FormatRule::Currency, json!(true)), None);
        assert_eq!(fmt(FormatRule::Currency, json!({"value": 1})), None);
    }

    #[test]
    fn test_currency_from_field() {
        let rule = FormatRule::CurrencyFromField("currency");
        let usd = json!({"amount": 5000, "currency": "usd"});
        assert_eq!(
            format_value(rule, &json!(5000), &usd).as_deref(),
            Some("USD 5,000")
        );
        let ngn = json!({"amount": 5000, "currency": "NGN"});
        assert_eq!(
            format_value(rule, &json!(5000), &ngn).as_deref(),
            Some("₦5,000")
        );
        let none = json!({"amount": 5000});
        assert_eq!(
            format_value(rule, &json!(5000), &none).as_deref(),
            Some("₦5,000")
        );
    }

    #[test]
    fn test_boolean_label_truthiness() {
        let rule = FormatRule::BooleanLabel {
            true_text: "Yes",
            false_text: "No",
        };
        assert_eq!(fmt(rule, json!(true)).as_deref(), Some("Yes"));
        assert_eq!(fmt(rule, json!(false)).as_deref(), Some("No"));
        assert_eq!(fmt(rule, json!(0)).as_deref(), Some("No"));
        assert_eq!(fmt(rule, json!(1)).as_deref(), Some("Yes"));
        assert_eq!(fmt(rule, json!("false")).as_deref(), Some("Yes"));
    }

    #[test]
    fn test_title_case() {
        let rule = FormatRule::TitleCase {
            replace_underscore_with_space: false,
        };
        assert_eq!(fmt(rule, json!("PENDING")).as_deref(), Some("Pending"));
        assert_eq!(fmt(rule, json!("pending")).as_deref(), Some("Pending"));
        assert_eq!(fmt(rule, json!("in review")).as_deref(), Some("In review"));
        assert_eq!(fmt(rule, json!("on_hold")).as_deref(), Some("On_hold"));
    }

    #[test]
    fn test_title_case_replacing_underscores() {
        let rule = FormatRule::TitleCase {
            replace_underscore_with_space: true,
        };
        assert_eq!(fmt(rule, json!("on_hold")).as_deref(), Some("On hold"));
        assert_eq!(
            fmt(rule, json!("AWAITING_SELLER_RESPONSE")).as_deref(),
            Some("Awaiting seller response")
        );
    }

    #[test]
    fn test_title_case_empty_and_unicode() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("éTÉ"), "Été");
    }

    #[test]
    fn test_duration_days() {
        assert_eq!(fmt(FormatRule::DurationDays, json!(30)).as_deref(), Some("30 Days"));
        assert_eq!(
            fmt(FormatRule::DurationDays, json!("2 weeks")).as_deref(),
            Some("2 weeks")
        );
    }

    #[test]
    fn test_percentage() {
        assert_eq!(fmt(FormatRule::Percentage, json!(15)).as_deref(), Some("15%"));
        assert_eq!(fmt(FormatRule::Percentage, json!(12.5)).as_deref(), Some("12.5%"));
        assert_eq!(fmt(FormatRule::Percentage, json!("10%")).as_deref(), Some("10%"));
    }

    #[test]
    fn test_count_and_identity() {
        assert_eq!(fmt(FormatRule::Count, json!(0)).as_deref(), Some("0"));
        assert_eq!(fmt(FormatRule::Count, json!(42)).as_deref(), Some("42"));
        assert_eq!(
            fmt(FormatRule::DateOrRaw, json!("Jan 5, 2024")).as_deref(),
            Some("Jan 5, 2024")
        );
        assert_eq!(fmt(FormatRule::Identity, json!(4.0)).as_deref(), Some("4"));
    }

    #[test]
    fn test_display_compound_values() {
        assert_eq!(display(&json!(["red", "blue", 3])), "red, blue, 3");
        assert_eq!(display(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(display(&json!(4.25)), "4.25");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123456"), "123,456");
        assert_eq!(group_digits("1234567890"), "1,234,567,890");
    }
}
