//! Display formatting for dates and times.

use chrono::{NaiveDate, NaiveTime};

/// Formats a date as `dd.mm.yyyy`.
pub fn format_date(date: NaiveDate) -> String {
	date.format("%d.%m.%Y").to_string()
}

/// Formats a time as `HH:MM:SS`.
pub fn format_time(time: NaiveTime) -> String {
	time.format("%H:%M:%S").to_string()
}

/// Formats an optional finishing time, with a dash when absent.
pub fn format_optional_time(time: Option<NaiveTime>) -> String {
	time.map(format_time).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(2024, 5, 1, "01.05.2024")]
	#[case(1999, 12, 31, "31.12.1999")]
	fn test_format_date(#[case] y: i32, #[case] m: u32, #[case] d: u32, #[case] expected: &str) {
		assert_eq!(format_date(NaiveDate::from_ymd_opt(y, m, d).unwrap()), expected);
	}

	#[rstest]
	fn test_format_optional_time() {
		assert_eq!(format_optional_time(NaiveTime::from_hms_opt(0, 1, 58)), "00:01:58");
		assert_eq!(format_optional_time(None), "—");
	}
}
