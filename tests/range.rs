use month_picker::{end_of_previous_month, start_of_next_month, Clamp, DateRange, MonthValue, PickerError};
use time::macros::datetime;

/// January looks back across the year boundary:
/// the end of the month before January 2021 is the last millisecond of December 2020.
#[test]
fn end_of_previous_month_crosses_year() {
    let end = end_of_previous_month(0, 2021).unwrap();
    assert_eq!(end, datetime!(2020-12-31 23:59:59.999));
}

/// December rolls forward into January of the next year.
#[test]
fn start_of_next_month_crosses_year() {
    let start = start_of_next_month(11, 2020).unwrap();
    assert_eq!(start, datetime!(2021-01-01 0:00));
}

/// Stepping back from March lands on Feb 29 in a leap year and Feb 28 otherwise.
#[test]
fn end_of_previous_month_respects_leap_years() {
    assert_eq!(end_of_previous_month(2, 2024).unwrap(), datetime!(2024-02-29 23:59:59.999));
    assert_eq!(end_of_previous_month(2, 2023).unwrap(), datetime!(2023-02-28 23:59:59.999));
    // century rule: 1900 is not a leap year, 2000 is
    assert_eq!(end_of_previous_month(2, 1900).unwrap().day(), 28);
    assert_eq!(end_of_previous_month(2, 2000).unwrap().day(), 29);
}

/// Month indexes outside 0..=11 have no boundary instants.
#[test]
fn boundary_helpers_reject_bad_month_index() {
    assert!(end_of_previous_month(12, 2020).is_none());
    assert!(start_of_next_month(12, 2020).is_none());
}

/// `min > max` is a configuration error; `min == max` is a valid single-instant range.
#[test]
fn range_requires_min_not_after_max() {
    let err = DateRange::new(datetime!(2021-01-01 0:00), datetime!(2020-01-01 0:00)).unwrap_err();
    assert_eq!(err, PickerError::Configuration("min exceeds max".into()));
    assert!(err.is_configuration());

    let point = DateRange::new(datetime!(2020-05-05 12:00), datetime!(2020-05-05 12:00)).unwrap();
    assert!(point.contains(datetime!(2020-05-05 12:00)));
}

/// Clamping compares full instants, so a mid-month maximum keeps its day and time.
#[test]
fn clamp_keeps_mid_month_bounds() {
    let r = DateRange::new(datetime!(2020-01-10 8:00), datetime!(2020-06-15 17:30)).unwrap();

    assert_eq!(r.clamp(datetime!(2020-08-01 0:00)), (datetime!(2020-06-15 17:30), Clamp::Above));
    assert_eq!(r.clamp(datetime!(2020-06-15 18:00)), (datetime!(2020-06-15 17:30), Clamp::Above));
    assert_eq!(r.clamp(datetime!(2020-01-10 7:59)), (datetime!(2020-01-10 8:00), Clamp::Below));
    assert_eq!(r.clamp(datetime!(2020-03-03 3:03)), (datetime!(2020-03-03 3:03), Clamp::Within));
}

/// Year options run from the max year down to the min year.
#[test]
fn years_are_descending_and_inclusive() {
    let r = DateRange::new(datetime!(2017-07-01 0:00), datetime!(2020-02-01 0:00)).unwrap();
    let years: Vec<i32> = r.years().collect();
    assert_eq!(years, vec![2020, 2019, 2018, 2017]);
}

/// Month-option rule at both boundary years and an interior year.
#[test]
fn month_disabled_rule() {
    let r = DateRange::new(datetime!(2018-04-20 0:00), datetime!(2020-09-01 0:00)).unwrap();

    let lo: Vec<u8> = (0..12).filter(|&m| r.month_disabled(2018, m)).collect();
    assert_eq!(lo, vec![0, 1, 2]);

    let hi: Vec<u8> = (0..12).filter(|&m| r.month_disabled(2020, m)).collect();
    assert_eq!(hi, vec![9, 10, 11]);

    assert!((0..12).all(|m| !r.month_disabled(2019, m)));
}

/// Back/forward availability looks at the neighbouring month's edge, not the first of the month.
#[test]
fn navigation_availability_uses_month_edges() {
    let r = DateRange::new(datetime!(2020-01-15 0:00), datetime!(2020-06-15 0:00)).unwrap();

    // the end of January is after the mid-January minimum
    assert!(r.can_go_back(MonthValue::new(2020, 1)));
    assert!(!r.can_go_back(MonthValue::new(2020, 0)));

    // June 1 is before the mid-June maximum
    assert!(r.can_go_forward(MonthValue::new(2020, 4)));
    assert!(!r.can_go_forward(MonthValue::new(2020, 5)));
}
