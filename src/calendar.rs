//! Month grid for the appointment date picker.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    /// 1-based, always within 1..=12
    month: u32,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            _ => 0,
        }
    }

    /// Monday-first rows; cells outside the month are `None`
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = self.first_day() else {
            return Vec::new();
        };
        let offset = first.weekday().num_days_from_monday() as usize;
        let days = self.days_in_month() as usize;

        let mut weeks = Vec::with_capacity((offset + days).div_ceil(7));
        let mut row = [None; 7];
        for cell in 0..offset + days {
            if cell >= offset {
                row[cell % 7] = first.with_day((cell - offset + 1) as u32);
            }
            if cell % 7 == 6 {
                weeks.push(row);
                row = [None; 7];
            }
        }
        if row.iter().any(Option::is_some) {
            weeks.push(row);
        }
        weeks
    }
}

/// Move `datetime` to `date`, keeping its time of day, both read in `tz`.
///
/// `None` when the resulting wall-clock time does not exist in `tz`.
pub fn with_date_in<Tz: TimeZone>(
    datetime: DateTime<Utc>,
    date: NaiveDate,
    tz: &Tz,
) -> Option<DateTime<Utc>> {
    let time = datetime.with_timezone(tz).time();
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Keep the calendar day of `datetime` in `tz`, set the time of day
pub fn with_time_in<Tz: TimeZone>(
    datetime: DateTime<Utc>,
    time: NaiveTime,
    tz: &Tz,
) -> Option<DateTime<Utc>> {
    let date = datetime.with_timezone(tz).date_naive();
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps_years() {
        let view = MonthView::new(2024, 1);
        assert_eq!(view.prev(), MonthView::new(2023, 12));
        assert_eq!(view.prev().next(), view);
        assert_eq!(MonthView::new(2024, 12).next(), MonthView::new(2025, 1));
        assert_eq!(view.label(), "January 2024");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthView::new(2024, 2).days_in_month(), 29);
        assert_eq!(MonthView::new(2023, 2).days_in_month(), 28);
        assert_eq!(MonthView::new(2024, 4).days_in_month(), 30);
    }

    #[test]
    fn test_weeks_layout() {
        // 1 January 2024 is a Monday
        let weeks = MonthView::new(2024, 1).weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(weeks[4][2], NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(weeks[4][3], None);

        // 1 September 2024 is a Sunday
        let weeks = MonthView::new(2024, 9).weeks();
        assert_eq!(weeks[0][5], None);
        assert_eq!(weeks[0][6], NaiveDate::from_ymd_opt(2024, 9, 1));
        let total: usize = weeks.iter().map(|w| w.iter().flatten().count()).sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn test_month_is_clamped() {
        let view = MonthView::new(2024, 0);
        assert_eq!(view.month(), 1);
        assert_eq!(view.label(), "January 2024");
        assert_eq!(MonthView::new(2024, 13).month(), 12);
        assert_eq!(MonthView::new(2024, 13).year(), 2024);
    }

    #[test]
    fn test_with_date_in_offset_zone() {
        // 23:30 UTC on 1 Jan is 01:30 on 2 Jan at UTC+2
        let tz = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap();

        let moved = with_date_in(dt, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), &tz).unwrap();
        assert_eq!(moved, Utc.with_ymd_and_hms(2024, 1, 9, 23, 30, 0).unwrap());

        let retimed = with_time_in(dt, NaiveTime::from_hms_opt(9, 0, 0).unwrap(), &tz).unwrap();
        assert_eq!(retimed, Utc.with_ymd_and_hms(2024, 1, 2, 7, 0, 0).unwrap());
    }
}
