//! Week-window arithmetic: the 7-day span containing a reference date,
//! aligned to a configurable start weekday.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Inclusive 7-day date range aligned to a configured start weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Computes the window containing `today` for a week starting on
    /// `week_start` (0 = Sunday through 6 = Saturday).
    pub fn containing(today: NaiveDate, week_start: u8) -> Self {
        let start_day = u32::from(week_start % 7);
        let diff = (today.weekday().num_days_from_sunday() + 7 - start_day) % 7;
        let start = today - Duration::days(i64::from(diff));
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// First instant of the window, 00:00:00.000 on the start day.
    pub fn start_at(&self) -> NaiveDateTime {
        self.start.and_hms_opt(0, 0, 0).unwrap()
    }

    /// Last instant of the window, 23:59:59.999 on the end day.
    pub fn end_at(&self) -> NaiveDateTime {
        self.end.and_hms_milli_opt(23, 59, 59, 999).unwrap()
    }

    /// Short human label, e.g. `Aug 18 - Aug 24`.
    pub fn label(&self) -> String {
        format!("{} - {}", short_date(self.start), short_date(self.end))
    }
}

/// Abbreviated month-day form used across summary output.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
