// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, TimeZone};

/// `YYYY-MM-DD HH:MM:SS`
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The text of the canvas clock for `now`.
pub fn clock_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Time: {}", now.format(CLOCK_FORMAT))
}

/// The text of the canvas clock for the current local time.
pub fn local_clock_text() -> String {
    clock_text(&chrono::Local::now())
}

#[test]
fn test_clock_text() {
    let when = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(7, 8, 9)
        .unwrap()
        .and_utc();

    assert_eq!(clock_text(&when), "Time: 2024-03-05 07:08:09");
}

#[test]
fn test_local_clock_text_shape() {
    let text = local_clock_text();
    let stamp = text.strip_prefix("Time: ").unwrap();

    assert!(chrono::NaiveDateTime::parse_from_str(stamp, CLOCK_FORMAT).is_ok());
}
