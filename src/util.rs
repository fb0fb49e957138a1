//! Shared Helpers
//!
//! Formatting, date boundaries for invoice filters, invoice numbering,
//! and the debounce timer used by the search boxes.

use chrono::{Local, NaiveDate, NaiveTime, TimeZone, Utc};
use gloo_timers::callback::Timeout;

/// Format an amount with thousands separators, keeping cents only when present.
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && cents != 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac != 0 {
        out.push_str(&format!(".{:02}", frac));
    }
    out
}

/// Render an ISO timestamp as e.g. "Aug 22, 2026".
pub fn format_date(iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%b %d, %Y").to_string(),
        Err(_) => iso.split('T').next().unwrap_or(iso).to_string(),
    }
}

/// Invoice number for a given date and serial: INV-YYYYMMDD-NNN.
pub fn invoice_number_for(date: NaiveDate, serial: u32) -> String {
    format!("INV-{}-{:03}", date.format("%Y%m%d"), serial % 1000)
}

/// Fresh invoice number for today with a random 3-digit suffix.
pub fn new_invoice_number() -> String {
    let serial = (js_sys::Math::random() * 1000.0) as u32;
    invoice_number_for(Local::now().date_naive(), serial)
}

/// RFC3339 timestamp for local midnight `days_back` days ago.
pub fn start_of_day_iso(days_back: i64) -> String {
    day_bound_iso(
        Local::now().date_naive() - chrono::Duration::days(days_back),
        false,
    )
}

/// RFC3339 timestamp for the end of today (local time).
pub fn end_of_day_iso() -> String {
    day_bound_iso(Local::now().date_naive(), true)
}

/// Convert an `<input type="date">` value ("YYYY-MM-DD") to an RFC3339 day bound.
pub fn date_input_iso(value: &str, end: bool) -> Option<String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(day_bound_iso(date, end))
}

fn day_bound_iso(date: NaiveDate, end: bool) -> String {
    let time = if end {
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap()
    } else {
        NaiveTime::from_hms_opt(0, 0, 0).unwrap()
    };
    let naive = date.and_time(time);
    naive
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive).to_rfc3339())
}

/// One pending callback at a time; scheduling again cancels the previous one.
///
/// Dropping a `Timeout` clears the underlying JS timer, so replacing the
/// stored handle is the whole cancellation story.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Run `f` after the delay unless another call supersedes it first.
    pub fn run(&mut self, f: impl FnOnce() + 'static) {
        self.pending = Some(Timeout::new(self.delay_ms, f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(999.0), "999");
        assert_eq!(format_money(1000.0), "1,000");
        assert_eq!(format_money(1234567.0), "1,234,567");
    }

    #[test]
    fn test_format_money_cents() {
        assert_eq!(format_money(1234.5), "1,234.50");
        assert_eq!(format_money(0.25), "0.25");
        // Rounding carries into the whole part
        assert_eq!(format_money(999.999), "1,000");
        assert_eq!(format_money(-45.5), "-45.50");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-22T10:30:00+00:00"), "Aug 22, 2026");
        assert_eq!(format_date("2026-01-05T00:00:00.000Z"), "Jan 05, 2026");
        // Unparseable input falls back to the date part
        assert_eq!(format_date("2026-08-22Tjunk"), "2026-08-22");
    }

    #[test]
    fn test_invoice_number_shape() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        assert_eq!(invoice_number_for(date, 7), "INV-20260822-007");
        assert_eq!(invoice_number_for(date, 999), "INV-20260822-999");
        // Serial wraps into three digits
        assert_eq!(invoice_number_for(date, 1234), "INV-20260822-234");
    }

    #[test]
    fn test_date_input_iso_bounds() {
        let start = date_input_iso("2026-08-22", false).unwrap();
        let parsed = chrono::DateTime::parse_from_rfc3339(&start).unwrap();
        assert_eq!(parsed.format("%H:%M:%S").to_string(), "00:00:00");

        let end = date_input_iso("2026-08-22", true).unwrap();
        let parsed = chrono::DateTime::parse_from_rfc3339(&end).unwrap();
        assert_eq!(parsed.format("%H:%M:%S%.3f").to_string(), "23:59:59.999");

        assert!(date_input_iso("not-a-date", false).is_none());
    }

    #[test]
    fn test_start_of_day_iso_parses() {
        let iso = start_of_day_iso(7);
        let parsed = chrono::DateTime::parse_from_rfc3339(&iso).unwrap();
        assert_eq!(parsed.format("%H:%M:%S").to_string(), "00:00:00");
    }
}
