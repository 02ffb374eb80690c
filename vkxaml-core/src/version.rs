//! Date-based version stamps embedded in every generated dictionary.

use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// `(year - 2000) * 10^6 + month * 10^4 + day * 10^2 + hour`, in UTC.
///
/// 2026-10-19 14:05Z → `26101914`. Years before 2000 clamp to zero.
pub fn version_at(at: DateTime<Utc>) -> u32 {
    let year = u32::try_from(at.year() - 2000).unwrap_or(0);
    year * 1_000_000 + at.month() * 10_000 + at.day() * 100 + at.hour()
}

/// Generation date and version number, captured once per run so that all
/// outputs of that run agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStamp {
    /// Calendar date printed in the header comment.
    pub generated_on: NaiveDate,
    /// Value of the `*Version` string resources.
    pub version: u32,
}

impl RenderStamp {
    /// Stamp for the current moment: local date for the header, UTC hour for
    /// the version.
    pub fn now() -> Self {
        Self {
            generated_on: Local::now().date_naive(),
            version: version_at(Utc::now()),
        }
    }

    /// Stamp for a fixed UTC instant; both fields derive from `at`.
    pub fn at(at: DateTime<Utc>) -> Self {
        Self {
            generated_on: at.date_naive(),
            version: version_at(at),
        }
    }

    /// Header date as `YYYY/MM/DD`.
    pub fn header_date(&self) -> String {
        self.generated_on.format("%Y/%m/%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn version_components_are_zero_padded() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 9, 59, 0).unwrap();
        assert_eq!(version_at(at), 26_030_709);
    }

    #[test]
    fn version_uses_two_digit_hour() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 23, 0, 0).unwrap();
        assert_eq!(version_at(at), 26_101_923);
    }

    #[test]
    fn version_non_decreasing_across_hours() {
        let mut at = Utc.with_ymd_and_hms(2025, 12, 31, 20, 30, 0).unwrap();
        let mut previous = version_at(at);
        for _ in 0..48 {
            at += Duration::hours(1);
            let current = version_at(at);
            assert!(current > previous, "{current} <= {previous} at {at}");
            previous = current;
        }
    }

    #[test]
    fn header_date_format() {
        let stamp = RenderStamp::at(Utc.with_ymd_and_hms(2026, 1, 2, 3, 0, 0).unwrap());
        assert_eq!(stamp.header_date(), "2026/01/02");
        assert_eq!(stamp.version, 26_010_203);
    }

    #[test]
    fn now_is_not_behind_a_fixed_past_instant() {
        let past = RenderStamp::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(RenderStamp::now().version >= past.version);
    }
}
