use luach_calendar::{DateUnit, JewishDate, JewishMonth};

fn assert_consistent(date: &JewishDate) {
    let fresh = JewishDate::from_absolute(date.absolute_date()).unwrap();
    assert_eq!(
        (
            date.jewish_year(),
            date.jewish_month(),
            date.jewish_day_of_month(),
            date.gregorian_year(),
            date.gregorian_month(),
            date.gregorian_day_of_month(),
            date.day_of_week(),
        ),
        (
            fresh.jewish_year(),
            fresh.jewish_month(),
            fresh.jewish_day_of_month(),
            fresh.gregorian_year(),
            fresh.gregorian_month(),
            fresh.gregorian_day_of_month(),
            fresh.day_of_week(),
        ),
        "stepped fields drifted at absolute {}",
        date.absolute_date()
    );
}

#[test]
fn single_day_steps_stay_consistent() {
    // 5783..5787 covers a leap year and every Cheshvan/Kislev pattern boundary.
    let mut date = JewishDate::from_jewish(5783, JewishMonth::Tishrei, 1).unwrap();
    let end = JewishDate::from_jewish(5787, JewishMonth::Tishrei, 1).unwrap();
    while date < end {
        date.forward(DateUnit::Day, 1).unwrap();
        assert_consistent(&date);
    }
}

#[test]
fn back_inverts_forward() {
    let start = JewishDate::from_gregorian(1999, 12, 25).unwrap();
    let mut date = start;
    date.forward(DateUnit::Day, 800).unwrap();
    assert_eq!(date.absolute_date(), start.absolute_date() + 800);
    assert_consistent(&date);
    for _ in 0..800 {
        date.back().unwrap();
        assert_consistent(&date);
    }
    assert_eq!(date, start);
    assert_eq!(date.gregorian_year(), 1999);
}

#[test]
fn forward_many_days_matches_absolute() {
    let mut date = JewishDate::from_gregorian(2000, 1, 1).unwrap();
    date.forward(DateUnit::Day, 10_000).unwrap();
    assert_eq!(date.absolute_date(), 730_120 + 10_000);
    assert_consistent(&date);
}

#[test]
fn forward_months_through_a_leap_year() {
    let mut date = JewishDate::from_jewish(5784, JewishMonth::Shevat, 10).unwrap();
    let expected = [
        JewishMonth::Adar,
        JewishMonth::AdarII,
        JewishMonth::Nissan,
        JewishMonth::Iyar,
    ];
    for month in expected {
        date.forward(DateUnit::Month, 1).unwrap();
        assert_eq!(date.jewish_month(), month);
        assert_eq!(date.jewish_day_of_month(), 10);
        assert_consistent(&date);
    }
}

#[test]
fn forward_months_in_one_call_matches_repeated_calls() {
    let start = JewishDate::from_jewish(5782, JewishMonth::Cheshvan, 30).unwrap();
    let mut stepped = start;
    for _ in 0..14 {
        stepped.forward(DateUnit::Month, 1).unwrap();
    }
    let mut jumped = start;
    jumped.forward(DateUnit::Month, 14).unwrap();
    assert_eq!(stepped, jumped);
    assert_eq!(jumped.jewish_day_of_month(), stepped.jewish_day_of_month());
}

#[test]
fn forward_years_keeps_month_and_day() {
    let mut date = JewishDate::from_jewish(5780, JewishMonth::Sivan, 6).unwrap();
    date.forward(DateUnit::Year, 5).unwrap();
    assert_eq!(
        (date.jewish_year(), date.jewish_month(), date.jewish_day_of_month()),
        (5785, JewishMonth::Sivan, 6)
    );
    assert_consistent(&date);
}

#[test]
fn forward_years_out_of_range_is_rejected() {
    let mut date = JewishDate::from_jewish(5785, JewishMonth::Nissan, 1).unwrap();
    let before = date;
    assert!(date.forward(DateUnit::Year, u32::MAX).is_err());
    assert!(date.forward(DateUnit::Year, 9000).is_err());
    assert_eq!(date, before);
}

#[test]
fn stepping_preserves_molad_fields_on_day_steps() {
    let mut date =
        JewishDate::from_jewish_with_molad(5785, JewishMonth::Nissan, 1, 10, 20, 3).unwrap();
    date.forward(DateUnit::Day, 3).unwrap();
    assert_eq!((date.molad_hours(), date.molad_minutes(), date.molad_chalakim()), (10, 20, 3));
    date.forward(DateUnit::Month, 1).unwrap();
    assert_eq!((date.molad_hours(), date.molad_minutes(), date.molad_chalakim()), (0, 0, 0));
}
