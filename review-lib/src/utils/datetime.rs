use chrono::prelude::Local;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Timestamp layout used in the run log, e.g. `2020-09-21 14:03:11.123456`
pub const RUN_LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn get_local_datetime_with_format(format: &str) -> String {
    return Local::now().format(format).to_string();
}

pub fn get_run_log_timestamp() -> String {
    return get_local_datetime_with_format(RUN_LOG_TIMESTAMP_FORMAT);
}

/// Convert an Excel serial date (1900 date system) to a chrono datetime
pub fn excel_serial_to_datetime(value: f64) -> Option<NaiveDateTime> {
    if !value.is_finite() {
        return None;
    }
    let excel_base = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let days = value.trunc() as i64;
    let seconds = ((value - days as f64) * 86400.0).round() as i64;
    excel_base.checked_add_signed(Duration::try_days(days)? + Duration::try_seconds(seconds)?)
}
