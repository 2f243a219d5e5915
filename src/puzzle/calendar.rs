//! Daily puzzle ids and play-time formatting

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Date of puzzle 0, at local midnight
#[must_use]
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 24).expect("valid calendar date")
}

/// Puzzle id for a moment in time
///
/// Counts days since local midnight of the start date, rounding up, so a new id
/// begins just after each midnight in the caller's time zone.
#[must_use]
pub fn puzzle_id_at<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let tz = now.timezone();
    let midnight = start_date().and_time(NaiveTime::MIN);
    let start = tz
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight));

    let elapsed_ms = now.clone().signed_duration_since(start).num_milliseconds();
    (elapsed_ms as f64 / MS_PER_DAY).ceil() as i64
}

/// Today's puzzle id in the local time zone
#[must_use]
pub fn todays_id() -> i64 {
    puzzle_id_at(&Local::now())
}

/// Random id for a practice game
#[must_use]
pub fn practice_id() -> i64 {
    i64::from(rand::random::<u32>())
}

/// Current time in milliseconds since the Unix epoch
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format elapsed milliseconds as `MM:SS.hh`
///
/// Negative durations display as zero.
///
/// # Examples
/// ```
/// use duotrigordle::puzzle::format_time_elapsed;
///
/// assert_eq!(format_time_elapsed(83_456), "01:23.45");
/// ```
#[must_use]
pub fn format_time_elapsed(milliseconds: i64) -> String {
    let milliseconds = milliseconds.max(0);
    let minutes = milliseconds / 1000 / 60;
    let seconds = (milliseconds / 1000) % 60;
    let hundredths = (milliseconds / 10) % 100;
    format!("{minutes:02}:{seconds:02}.{hundredths:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn start_midnight_is_puzzle_zero() {
        assert_eq!(puzzle_id_at(&utc(2022, 1, 24, 0, 0, 0)), 0);
    }

    #[test]
    fn id_rolls_over_just_after_midnight() {
        assert_eq!(puzzle_id_at(&utc(2022, 1, 24, 0, 0, 1)), 1);
        assert_eq!(puzzle_id_at(&utc(2022, 1, 24, 23, 59, 59)), 1);
        assert_eq!(puzzle_id_at(&utc(2022, 1, 25, 0, 0, 0)), 1);
        assert_eq!(puzzle_id_at(&utc(2022, 1, 25, 12, 0, 0)), 2);
    }

    #[test]
    fn later_dates_count_days() {
        assert_eq!(puzzle_id_at(&utc(2023, 1, 24, 12, 0, 0)), 366);
    }

    #[test]
    fn midnight_is_local_to_the_time_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let noon = tokyo.with_ymd_and_hms(2022, 1, 25, 12, 0, 0).unwrap();
        assert_eq!(puzzle_id_at(&noon), 2);
    }

    #[test]
    fn dates_before_start_are_not_positive() {
        assert_eq!(puzzle_id_at(&utc(2022, 1, 23, 12, 0, 0)), 0);
        assert_eq!(puzzle_id_at(&utc(2022, 1, 22, 12, 0, 0)), -1);
    }

    #[test]
    fn format_time_elapsed_pads_fields() {
        assert_eq!(format_time_elapsed(0), "00:00.00");
        assert_eq!(format_time_elapsed(5_070), "00:05.07");
        assert_eq!(format_time_elapsed(3_599_990), "59:59.99");
        assert_eq!(format_time_elapsed(6_000_000), "100:00.00");
    }

    #[test]
    fn format_time_elapsed_clamps_negative() {
        assert_eq!(format_time_elapsed(-500), "00:00.00");
    }
}
