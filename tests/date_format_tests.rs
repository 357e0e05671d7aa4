use chrono::{NaiveDate, NaiveDateTime};
use compfmt::{format_date, Culture};

fn sample() -> NaiveDateTime {
    // A Monday afternoon.
    NaiveDate::from_ymd_opt(2009, 6, 15)
        .unwrap()
        .and_hms_opt(13, 45, 30)
        .unwrap()
}

fn midnight() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2009, 6, 15)
        .unwrap()
        .and_hms_opt(0, 5, 0)
        .unwrap()
}

fn en() -> std::sync::Arc<Culture> {
    Culture::lookup("en-US")
}

#[test]
fn test_named_patterns() {
    let en = en();
    assert_eq!(format_date(&sample(), "d", &en), "6/15/2009");
    assert_eq!(format_date(&sample(), "D", &en), "Monday, June 15, 2009");
    assert_eq!(format_date(&sample(), "t", &en), "1:45 PM");
    assert_eq!(format_date(&sample(), "T", &en), "1:45:30 PM");
    assert_eq!(format_date(&sample(), "s", &en), "2009-06-15T13:45:30");
    assert_eq!(format_date(&sample(), "M", &en), "June 15");
    assert_eq!(format_date(&sample(), "Y", &en), "June 2009");
}

#[test]
fn test_composite_named_patterns() {
    let en = en();
    assert_eq!(format_date(&sample(), "g", &en), "6/15/2009 1:45 PM");
    assert_eq!(format_date(&sample(), "G", &en), "6/15/2009 1:45:30 PM");
    assert_eq!(
        format_date(&sample(), "f", &en),
        "Monday, June 15, 2009 1:45 PM"
    );
    assert_eq!(
        format_date(&sample(), "F", &en),
        "Monday, June 15, 2009 1:45:30 PM"
    );
}

#[test]
fn test_empty_spec_uses_general_pattern() {
    let en = en();
    assert_eq!(format_date(&sample(), "", &en), format_date(&sample(), "G", &en));
}

#[test]
fn test_custom_patterns() {
    let en = en();
    assert_eq!(
        format_date(&sample(), "yyyy-MM-dd HH:mm:ss", &en),
        "2009-06-15 13:45:30"
    );
    assert_eq!(format_date(&sample(), "ddd d MMM", &en), "Mon 15 Jun");
    assert_eq!(format_date(&sample(), "dd/MM/yy", &en), "15/06/09");
    assert_eq!(format_date(&sample(), "h.mm", &en), "1.45");
}

#[test]
fn test_twelve_hour_clock() {
    let en = en();
    assert_eq!(format_date(&midnight(), "hh:mm tt", &en), "12:05 AM");
    assert_eq!(format_date(&sample(), "h tt", &en), "1 PM");
    assert_eq!(format_date(&sample(), "t", &en), "1:45 PM");
    // Single t takes the first character of the marker.
    assert_eq!(format_date(&sample(), "h.mm.t", &en), "1.45.P");
}

#[test]
fn test_localized_names() {
    let sv = Culture::lookup("sv");
    assert_eq!(format_date(&sample(), "d", &sv), "2009-06-15");
    assert_eq!(format_date(&sample(), "D", &sv), "den 15 juni 2009");
    assert_eq!(format_date(&sample(), "dddd", &sv), "måndag");

    let de = Culture::lookup("de");
    assert_eq!(format_date(&sample(), "D", &de), "Montag, 15. Juni 2009");
}

#[test]
fn test_quoted_text_is_verbatim() {
    let en = en();
    assert_eq!(
        format_date(&sample(), "'week of' dd MMM", &en),
        "week of 15 Jun"
    );
}

#[test]
fn test_unknown_single_letter_is_literal() {
    let en = en();
    assert_eq!(format_date(&sample(), "j", &en), "j");
}
