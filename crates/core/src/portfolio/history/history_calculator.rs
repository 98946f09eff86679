use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::investments::Investment;
use crate::utils::decimal_utils::percentage_of;
use crate::utils::time_utils::days_before;

use super::{HistoryPeriod, ValueHistory, ValuePoint};

/// Builds the value series for investments dated within `period` of `as_of`.
///
/// Each point is one investment's current value placed on its purchase date;
/// same-day investments yield separate points, ordered by id.
pub fn calculate_value_history(
    investments: &[Investment],
    period: HistoryPeriod,
    as_of: NaiveDate,
) -> ValueHistory {
    let start_date = days_before(as_of, period.window_days());

    let mut in_window: Vec<&Investment> = investments
        .iter()
        .filter(|i| i.date >= start_date)
        .collect();
    in_window.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let history: Vec<ValuePoint> = in_window
        .into_iter()
        .map(|i| ValuePoint {
            date: i.date,
            value: i.current_value(),
        })
        .collect();

    let (first_value, last_value) = match (history.first(), history.last()) {
        (Some(first), Some(last)) => (first.value, last.value),
        _ => (Decimal::ZERO, Decimal::ZERO),
    };
    let change_amount = last_value - first_value;

    ValueHistory {
        period,
        start_date,
        history,
        total_value: last_value,
        change_amount,
        change_percentage: percentage_of(change_amount, first_value)
            .round_dp(DISPLAY_DECIMAL_PRECISION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn inv(id: i32, date: NaiveDate, amount: Decimal, returns: Decimal) -> Investment {
        Investment {
            id,
            user_id: 1,
            fund_id: 1,
            date,
            amount_invested: amount,
            nav_at_investment: dec!(100),
            returns_since_investment: returns,
        }
    }

    #[test]
    fn test_only_old_investments_yield_empty_history() {
        let today = date(2024, 6, 30);
        let investments = vec![inv(1, date(2024, 5, 1), dec!(1000), dec!(5))];
        let result = calculate_value_history(&investments, HistoryPeriod::OneMonth, today);

        assert_eq!(result.start_date, date(2024, 5, 31));
        assert!(result.history.is_empty());
        assert_eq!(result.total_value, Decimal::ZERO);
        assert_eq!(result.change_amount, Decimal::ZERO);
        assert_eq!(result.change_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_window_start_is_inclusive() {
        let today = date(2024, 6, 30);
        let investments = vec![inv(1, date(2024, 5, 31), dec!(1000), dec!(0))];
        let result = calculate_value_history(&investments, HistoryPeriod::OneMonth, today);
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.change_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_series_is_sorted_and_changes_are_first_to_last() {
        let today = date(2024, 6, 30);
        let investments = vec![
            inv(3, date(2024, 6, 20), dec!(3000), dec!(10)),
            inv(1, date(2024, 4, 15), dec!(1000), dec!(0)),
            inv(2, date(2024, 5, 1), dec!(2000), dec!(0)),
            inv(4, date(2020, 1, 1), dec!(9999), dec!(0)),
        ];
        let result = calculate_value_history(&investments, HistoryPeriod::ThreeMonths, today);

        let dates: Vec<_> = result.history.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2024, 4, 15), date(2024, 5, 1), date(2024, 6, 20)]);
        assert_eq!(result.total_value, dec!(3300));
        assert_eq!(result.change_amount, dec!(2300));
        assert_eq!(result.change_percentage, dec!(230));
    }

    #[test]
    fn test_change_percentage_is_rounded_for_display() {
        let today = date(2024, 6, 30);
        let investments = vec![
            inv(1, date(2024, 6, 1), dec!(300), dec!(0)),
            inv(2, date(2024, 6, 2), dec!(400), dec!(0)),
        ];
        let result = calculate_value_history(&investments, HistoryPeriod::OneMonth, today);
        assert_eq!(result.change_amount, dec!(100));
        assert_eq!(result.change_percentage, dec!(33.33));
    }

    #[test]
    fn test_max_period_reaches_back_ten_years() {
        let today = date(2024, 6, 30);
        let investments = vec![
            inv(1, date(2015, 1, 1), dec!(500), dec!(0)),
            inv(2, date(2013, 1, 1), dec!(500), dec!(0)),
        ];
        let result = calculate_value_history(&investments, HistoryPeriod::Max, today);
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.history[0].date, date(2015, 1, 1));
    }

    #[test]
    fn test_change_percentage_with_zero_first_value() {
        let today = date(2024, 6, 30);
        let investments = vec![
            inv(1, date(2024, 6, 1), dec!(1000), dec!(-100)),
            inv(2, date(2024, 6, 2), dec!(1000), dec!(0)),
        ];
        let result = calculate_value_history(&investments, HistoryPeriod::OneMonth, today);
        assert_eq!(result.change_amount, dec!(1000));
        assert_eq!(result.change_percentage, Decimal::ZERO);
    }
}
