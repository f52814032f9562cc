//! Display formatting for money, counts, dates and long strings.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};
use stockreport_model::UnitPrice;

const THOUSANDS_SEPARATOR: char = '.';

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// `$30.000` style: no decimals (half away from zero), `.` as thousands separator.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = group_thousands(&rounded.abs().trunc().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// The price cell text: base-currency prices plain, others with their code.
pub fn format_price(price: &UnitPrice) -> String {
    match price.display_suffix() {
        Some(code) => format!("{} {}", format_currency(price.amount), code),
        None => format_currency(price.amount),
    }
}

/// Integer with `.` grouping, e.g. `12.500`.
pub fn format_count(value: i64) -> String {
    let digits = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Keeps at most `max_chars` characters, appending `...` when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Spanish long form, e.g. `lunes, 19 de octubre de 2026, 14:05`.
pub fn format_generated_at(ts: &DateTime<FixedOffset>) -> String {
    format!(
        "{}, {} de {} de {}, {:02}:{:02}",
        WEEKDAYS[ts.weekday().num_days_from_monday() as usize],
        ts.day(),
        MONTHS[ts.month0() as usize],
        ts.year(),
        ts.hour(),
        ts.minute()
    )
}

/// `dd/mm/yyyy`, or `-` when the date is unknown.
pub fn format_short_date(ts: Option<&DateTime<FixedOffset>>) -> String {
    ts.map(|ts| ts.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}
