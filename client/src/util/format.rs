//! Date, time, and currency formatting for job-board views.
//!
//! Backend timestamps are ISO 8601. Inputs without an offset are treated the
//! way browsers treat them: a bare date is midnight UTC, a bare date-time is
//! wall-clock time in the viewer's zone, which for this app is WIB (UTC+7).
//! Rendering always happens in WIB.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::{format_description, offset};
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Western Indonesia Time.
pub const WIB: UtcOffset = offset!(+7);

/// Why a timestamp could not be formatted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid date provided")]
    Empty,
    #[error("invalid date: {0}")]
    Invalid(String),
    #[error("date formatting failed: {0}")]
    Render(String),
}

/// Parse an ISO 8601 timestamp, bare date, or `datetime-local` value.
///
/// # Errors
///
/// Returns [`FormatError::Empty`] for blank input and
/// [`FormatError::Invalid`] when no supported shape matches.
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, FormatError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormatError::Empty);
    }
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(at);
    }
    let local_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let local_minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    if let Ok(at) = PrimitiveDateTime::parse(raw, local_seconds)
        .or_else(|_| PrimitiveDateTime::parse(raw, local_minutes))
    {
        return Ok(at.assume_offset(WIB));
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| FormatError::Invalid(raw.to_owned()))
}

/// `dd MMMM yyyy` in WIB, e.g. `05 March 2024`.
///
/// # Errors
///
/// Propagates [`parse_timestamp`] failures.
pub fn format_date(raw: &str) -> Result<String, FormatError> {
    let at = parse_timestamp(raw)?.to_offset(WIB);
    at.format(format_description!("[day] [month repr:long] [year]"))
        .map_err(|e| FormatError::Render(e.to_string()))
}

/// `dd MMMM yyyy, HH:mm WIB`, e.g. `05 March 2024, 17:30 WIB`.
///
/// # Errors
///
/// Propagates [`parse_timestamp`] failures.
pub fn format_date_time_wib(raw: &str) -> Result<String, FormatError> {
    let at = parse_timestamp(raw)?.to_offset(WIB);
    at.format(format_description!("[day] [month repr:long] [year], [hour]:[minute] WIB"))
        .map_err(|e| FormatError::Render(e.to_string()))
}

/// [`format_date`] for views: unparseable input renders as a dash.
pub fn display_date(raw: &str) -> String {
    format_date(raw).unwrap_or_else(|_| "-".to_owned())
}

/// [`format_date_time_wib`] for views: unparseable input renders as a dash.
pub fn display_date_time(raw: &str) -> String {
    format_date_time_wib(raw).unwrap_or_else(|_| "-".to_owned())
}

/// Rupiah amount with `.` thousands separators and no fraction digits.
///
/// Input that does not start with a number is returned unchanged, so free-text
/// salaries such as `"Negotiable"` display as entered.
pub fn format_currency(raw: &str) -> String {
    match leading_number(raw) {
        Some(amount) => format_idr(amount),
        None => raw.to_owned(),
    }
}

/// Format a numeric amount as `Rp 1.500.000`, rounding half away from zero.
pub fn format_idr(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}Rp\u{a0}{grouped}")
}

/// Longest leading decimal number in `raw`, after leading whitespace.
fn leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }
    trimmed[..end].parse().ok()
}
