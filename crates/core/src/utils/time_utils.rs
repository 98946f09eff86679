use chrono::{Days, Local, NaiveDate};

/// Returns the calendar date used as "today" by the analytics views.
///
/// Investments carry plain dates with no timezone, so the server's local
/// date is the reference point for every time-windowed computation.
pub fn valuation_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Subtracts `days` from `date`, saturating at the earliest representable date.
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}
