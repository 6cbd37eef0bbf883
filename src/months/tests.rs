//! Unit tests for the month lookup table

use super::*;

#[test]
fn test_month_indexes_are_calendar_numbers() {
    let expected = [
        (Month::January, 1),
        (Month::February, 2),
        (Month::March, 3),
        (Month::April, 4),
        (Month::May, 5),
        (Month::June, 6),
        (Month::July, 7),
        (Month::August, 8),
        (Month::September, 9),
        (Month::October, 10),
        (Month::November, 11),
        (Month::December, 12),
    ];

    for (month, index) in expected {
        assert_eq!(month.index(), index);
        assert_eq!(u8::from(month), index);
    }
}

#[test]
fn test_parse_full_names() {
    assert_eq!("January".parse::<Month>().unwrap(), Month::January);
    assert_eq!("December".parse::<Month>().unwrap(), Month::December);
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("october".parse::<Month>().unwrap(), Month::October);
    assert_eq!("OCTOBER".parse::<Month>().unwrap(), Month::October);
}

#[test]
fn test_parse_rejects_unknown_names() {
    let err = "Octember".parse::<Month>().unwrap_err();
    match err {
        StatsError::UnknownMonth { name } => assert_eq!(name, "Octember"),
        _ => panic!("Expected UnknownMonth error variant"),
    }
}

#[test]
fn test_display_round_trips_through_parse() {
    let month = Month::September;
    assert_eq!(month.to_string(), "September");
    assert_eq!(month.to_string().parse::<Month>().unwrap(), month);
}
