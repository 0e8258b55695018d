//! Time arithmetic and timestamp conversion

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone};

/// Datetime format shared by the time tools
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Add day/hour offsets to a base time (now when absent).
pub fn shift_time(base: Option<&str>, days: f64, hours: f64) -> Result<String, String> {
    let start = match base {
        Some(s) if !s.trim().is_empty() => NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
            .map_err(|e| format!("invalid base time: {}", e))?,
        _ => Local::now().naive_local(),
    };
    let offset_secs = (days * 86400.0 + hours * 3600.0).round() as i64;
    let offset =
        Duration::try_seconds(offset_secs).ok_or_else(|| "offset out of range".to_string())?;
    let shifted = start
        .checked_add_signed(offset)
        .ok_or_else(|| "resulting date out of range".to_string())?;
    Ok(shifted.format(DATETIME_FORMAT).to_string())
}

/// Render a unix timestamp (seconds, or milliseconds when `unit_ms`) as a
/// local datetime with millisecond precision. Empty input means now.
pub fn timestamp_to_date(input: &str, unit_ms: bool) -> Result<String, String> {
    let mut ts: f64 = if input.trim().is_empty() {
        Local::now().timestamp_millis() as f64 / 1000.0
    } else {
        input
            .trim()
            .parse()
            .map_err(|e| format!("invalid timestamp: {}", e))?
    };
    if unit_ms {
        ts /= 1000.0;
    }

    let millis = (ts * 1000.0).round() as i64;
    let dt = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| "timestamp out of range".to_string())?;
    Ok(dt
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string())
}

/// Convert a local datetime string to a unix timestamp (seconds, or
/// milliseconds when `unit_ms`). Empty input means now.
pub fn date_to_timestamp(input: &str, unit_ms: bool) -> Result<String, String> {
    let naive = if input.trim().is_empty() {
        Local::now().naive_local()
    } else {
        NaiveDateTime::parse_from_str(input.trim(), DATETIME_FORMAT)
            .map_err(|e| format!("invalid date: {}", e))?
    };
    let dt = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| "nonexistent local time".to_string())?;
    let ts = if unit_ms {
        dt.timestamp_millis()
    } else {
        dt.timestamp()
    };
    Ok(ts.to_string())
}
