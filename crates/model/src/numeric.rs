//! Forgiving conversions for loosely typed JSON coming from the inventory API.
//!
//! Every function here recovers instead of failing: the report must still be
//! produced when one line carries a malformed quantity or price.

use crate::price::PriceMap;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Integer, truncated float, or numeric string. Anything else is zero.
pub fn quantity_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => quantity_from_str(s),
        Value::Null => 0,
        other => {
            warn!("Non-numeric quantity {} treated as 0", other);
            0
        }
    }
}

fn quantity_from_str(text: &str) -> i64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(q) = trimmed.parse::<i64>() {
        return q;
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => {
            warn!("Malformed quantity '{}' treated as 0", text);
            0
        }
    }
}

/// Number or numeric string. `None` for anything that is not a finite amount.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => decimal_from_str(&n.to_string()),
        Value::String(s) => {
            let parsed = decimal_from_str(s);
            if parsed.is_none() && !s.trim().is_empty() {
                warn!("Malformed amount '{}' ignored", s);
            }
            parsed
        }
        _ => None,
    }
}

fn decimal_from_str(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// A currency map, or a JSON string holding one. Currency codes are upper-cased
/// and entries whose amount cannot be parsed are dropped.
pub fn price_map_from_value(value: &Value) -> Option<PriceMap> {
    match value {
        Value::Object(entries) => {
            let map: PriceMap = entries
                .iter()
                .filter_map(|(code, amount)| {
                    let code = code.trim().to_uppercase();
                    if code.is_empty() {
                        return None;
                    }
                    decimal_from_value(amount).map(|amount| (code, amount))
                })
                .collect();
            (!map.is_empty()).then_some(map)
        }
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(inner @ Value::Object(_)) => price_map_from_value(&inner),
            _ => {
                warn!("Price map '{}' is not a JSON object, ignored", s);
                None
            }
        },
        Value::Null => None,
        other => {
            warn!("Unexpected price map {} ignored", other);
            None
        }
    }
}

/// RFC 3339, naive ISO date-time (read as UTC) or a bare `YYYY-MM-DD` date.
pub fn timestamp_from_value(value: &Value) -> Option<DateTime<FixedOffset>> {
    let text = value.as_str()?.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts);
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    let parsed = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset());
    if parsed.is_none() {
        warn!("Unrecognised timestamp '{}' ignored", text);
    }
    parsed
}

pub fn text_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn lenient_quantity<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(quantity_from_value(&Value::deserialize(d)?))
}

pub(crate) fn lenient_decimal<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Decimal>, D::Error> {
    Ok(decimal_from_value(&Value::deserialize(d)?))
}

pub(crate) fn lenient_price_map<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<PriceMap>, D::Error> {
    Ok(price_map_from_value(&Value::deserialize(d)?))
}

pub(crate) fn lenient_timestamp<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
    Ok(timestamp_from_value(&Value::deserialize(d)?))
}

pub(crate) fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match &value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(text_from_value(&Value::deserialize(d)?))
}

pub(crate) fn lenient_optional_text<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<String>, D::Error> {
    let text = text_from_value(&Value::deserialize(d)?);
    Ok((!text.trim().is_empty()).then_some(text))
}
