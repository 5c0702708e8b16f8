//! Date normalization for ERP import timestamps
//!
//! Vendor exports carry dates in three shapes: native date cells, Excel
//! serial-day numbers, and plain date strings. All three normalize to
//! `YYYY/MM/DD`; shipment and return events additionally carry a fixed
//! time of day the downstream import expects.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::convert::types::Cell;

/// Excel serial day for 1970-01-01 (serial day 0 is 1899-12-30).
const UNIX_EPOCH_SERIAL_DAYS: f64 = 25_569.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Time of day the ERP records shipment events at.
const SHIP_TIME: &str = "15:00:00";
/// Time of day the ERP records return events at.
const RETURN_TIME: &str = "11:00:00";

/// Normalize a date-like cell to `YYYY/MM/DD`.
///
/// Falsy cells and unparseable values yield the empty string, never an
/// error; a bad date must not abort the rest of the row.
pub fn order_date(cell: &Cell) -> String {
    if cell.is_falsy() {
        return String::new();
    }

    let date = match cell {
        Cell::DateTime(dt) => Some(dt.date()),
        Cell::Number(serial) => serial_to_date(*serial),
        Cell::Text(s) => parse_text_date(s),
        _ => None,
    };

    date.map(|d| d.format("%Y/%m/%d").to_string())
        .unwrap_or_default()
}

/// Normalize a shipment date: `order_date` plus the fixed ship time.
pub fn ship_date(cell: &Cell) -> String {
    with_time(order_date(cell), SHIP_TIME)
}

/// Normalize a return date: `order_date` plus the fixed return time.
pub fn return_date(cell: &Cell) -> String {
    with_time(order_date(cell), RETURN_TIME)
}

fn with_time(date: String, time: &str) -> String {
    if date.is_empty() {
        date
    } else {
        format!("{} {}", date, time)
    }
}

/// Convert an Excel serial-day number to a calendar date.
fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    let millis = ((serial - UNIX_EPOCH_SERIAL_DAYS) * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.date_naive())
}

/// Parse the date strings seen in vendor exports, most common first.
fn parse_text_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.naive_utc().date())
}
