use isoduration::{format, parse, Duration, ErrorKind};

#[test]
fn parse_second() {
    let duration = parse("PT5S").unwrap();
    assert_eq!(duration.get_seconds(), Some(5));
}

#[test]
fn parse_minute() {
    let duration = parse("PT40M").unwrap();
    assert_eq!(duration.get_minutes(), Some(40));
}

#[test]
fn parse_hour() {
    let duration = parse("PT1H").unwrap();
    assert_eq!(duration.get_hours(), Some(1));
}

#[test]
fn parse_time() {
    let duration = parse("PT1H40M45S").unwrap();
    assert_eq!(duration.get_hours(), Some(1));
    assert_eq!(duration.get_minutes(), Some(40));
    assert_eq!(duration.get_seconds(), Some(45));
}

#[test]
fn parse_day() {
    let duration = parse("P20D").unwrap();
    assert_eq!(duration.get_days(), Some(20));
}

#[test]
fn parse_week() {
    let duration = parse("P1W").unwrap();
    assert_eq!(duration.get_weeks(), Some(1));
}

#[test]
fn parse_month() {
    let duration = parse("P3M").unwrap();
    assert_eq!(duration.get_months(), Some(3));
}

#[test]
fn parse_year() {
    let duration = parse("P6Y").unwrap();
    assert_eq!(duration.get_years(), Some(6));
}

#[test]
fn parse_date() {
    let duration = parse("P6Y3M1W20D").unwrap();
    assert_eq!(
        duration,
        Duration::new().years(6).months(3).weeks(1).days(20),
    );
}

#[test]
fn parse_complete() {
    let duration = parse("P6Y3M1W20DT3H40M3S").unwrap();
    assert_eq!(
        duration,
        Duration::new()
            .years(6)
            .months(3)
            .weeks(1)
            .days(20)
            .hours(3)
            .minutes(40)
            .seconds(3),
    );
}

#[test]
fn parse_segment_independence() {
    // Only the units actually written end up present.
    let duration = parse("P1Y").unwrap();
    assert_eq!(duration, Duration::new().years(1));

    let duration = parse("PT1S").unwrap();
    assert_eq!(duration, Duration::new().seconds(1));
}

#[test]
fn parse_negative() {
    let duration = parse("-P6Y3M1W20DT3H40M3S").unwrap();
    assert_eq!(
        duration,
        Duration::new()
            .years(-6)
            .months(-3)
            .weeks(-1)
            .days(-20)
            .hours(-3)
            .minutes(-40)
            .seconds(-3),
    );
}

#[test]
fn parse_negative_preserves_absence() {
    let duration = parse("-P1Y2M").unwrap();
    assert_eq!(duration, Duration::new().years(-1).months(-2));
    assert_eq!(duration.get_days(), None);
}

#[test]
fn parse_fraction_fails() {
    let err = parse("P1.5M22S").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FractionalValueNotSupported);
    assert_eq!(err.offset(), None);
}

#[test]
fn parse_missing_prefix_fails() {
    let err = parse("6Y3M1W20DT3H40M3S").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PrefixMissing);
}

#[test]
fn parse_invalid_character_fails() {
    let err = parse("PSomethingElse").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCharacter { offset: 1 });
}

#[test]
fn parse_invalid_character_at_end_fails() {
    let err = parse("P5MG").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCharacter { offset: 3 });
    assert_eq!(err.offset(), Some(3));
}

#[test]
fn format_all_units() {
    let duration = Duration::new()
        .years(6)
        .months(2)
        .weeks(2)
        .days(2)
        .hours(4)
        .minutes(44)
        .seconds(22);
    assert_eq!(format(&duration, false), "P6Y2M2W2DT4H44M22S");
}

#[test]
fn format_all_units_when_all_zero() {
    let duration = Duration::new()
        .years(0)
        .months(0)
        .weeks(0)
        .days(0)
        .hours(0)
        .minutes(0)
        .seconds(0);
    assert_eq!(format(&duration, false), "P0Y0M0W0DT0H0M0S");
}

#[test]
fn format_all_units_when_all_absent() {
    assert_eq!(format(&Duration::new(), false), "P0Y0M0W0DT0H0M0S");
}

#[test]
fn format_omit_when_all_zero() {
    let duration = Duration::new()
        .years(0)
        .months(0)
        .weeks(0)
        .days(0)
        .hours(0)
        .minutes(0)
        .seconds(0);
    assert_eq!(format(&duration, true), "PT0S");
}

#[test]
fn format_omit_when_all_absent() {
    assert_eq!(format(&Duration::new(), true), "PT0S");
}

#[test]
fn format_omit_drops_zero_units() {
    let duration = Duration::new()
        .years(0)
        .months(1)
        .weeks(1)
        .days(1)
        .hours(1)
        .minutes(1)
        .seconds(1);
    assert_eq!(format(&duration, true), "P1M1W1DT1H1M1S");
}

#[test]
fn format_omit_drops_absent_units() {
    let duration = Duration::new()
        .months(1)
        .weeks(1)
        .days(1)
        .hours(1)
        .minutes(1)
        .seconds(1);
    assert_eq!(format(&duration, true), "P1M1W1DT1H1M1S");
}

#[test]
fn format_omit_drops_zero_time_segment() {
    let duration = Duration::new()
        .years(1)
        .months(1)
        .weeks(1)
        .days(1)
        .hours(0)
        .minutes(0)
        .seconds(0);
    assert_eq!(format(&duration, true), "P1Y1M1W1D");
}

#[test]
fn format_omit_drops_absent_time_segment() {
    let duration = Duration::new().years(1).months(1).weeks(1).days(1);
    assert_eq!(format(&duration, true), "P1Y1M1W1D");
}

#[test]
fn all_units_round_trip() {
    let duration = Duration::new()
        .years(6)
        .months(2)
        .weeks(2)
        .days(2)
        .hours(4)
        .minutes(44)
        .seconds(22);
    let reparsed = parse(format(&duration, false)).unwrap();
    assert_eq!(reparsed, duration);
}

#[test]
fn from_str_and_display() {
    let duration: Duration = "PT40M30S".parse().unwrap();
    assert_eq!(duration.get_minutes(), Some(40));
    assert_eq!(duration.get_seconds(), Some(30));
    assert_eq!(duration.to_string(), "PT40M30S");
}
