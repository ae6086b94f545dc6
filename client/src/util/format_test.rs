use super::*;

#[test]
fn format_date_uses_long_month_names() {
    assert_eq!(format_date("2024-03-05T02:00:00.000Z").unwrap(), "05 March 2024");
}

#[test]
fn format_date_shifts_late_utc_into_next_wib_day() {
    assert_eq!(format_date("2024-03-05T20:00:00Z").unwrap(), "06 March 2024");
}

#[test]
fn format_date_accepts_bare_dates() {
    assert_eq!(format_date("2024-12-31").unwrap(), "31 December 2024");
}

#[test]
fn format_date_time_wib_converts_from_utc() {
    assert_eq!(
        format_date_time_wib("2024-03-05T10:30:00.000Z").unwrap(),
        "05 March 2024, 17:30 WIB"
    );
}

#[test]
fn format_date_time_wib_keeps_explicit_offsets() {
    assert_eq!(
        format_date_time_wib("2024-03-05T09:15:00+07:00").unwrap(),
        "05 March 2024, 09:15 WIB"
    );
}

#[test]
fn datetime_local_values_are_read_as_wib() {
    assert_eq!(format_date_time_wib("2024-06-01T14:00").unwrap(), "01 June 2024, 14:00 WIB");
    assert_eq!(format_date_time_wib("2024-06-01T14:00:30").unwrap(), "01 June 2024, 14:00 WIB");
}

#[test]
fn blank_input_is_rejected() {
    assert_eq!(format_date("  "), Err(FormatError::Empty));
}

#[test]
fn garbage_input_is_rejected() {
    assert!(matches!(format_date("next tuesday"), Err(FormatError::Invalid(_))));
    assert_eq!(display_date("next tuesday"), "-");
    assert_eq!(display_date_time(""), "-");
}

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency("5000000"), "Rp\u{a0}5.000.000");
    assert_eq!(format_currency("750"), "Rp\u{a0}750");
    assert_eq!(format_currency("1000"), "Rp\u{a0}1.000");
}

#[test]
fn format_currency_rounds_fractions() {
    assert_eq!(format_currency("1234.5"), "Rp\u{a0}1.235");
    assert_eq!(format_currency("999.4"), "Rp\u{a0}999");
}

#[test]
fn format_currency_reads_leading_number_like_parse_float() {
    assert_eq!(format_currency("8000000 per month"), "Rp\u{a0}8.000.000");
}

#[test]
fn format_currency_passes_through_text() {
    assert_eq!(format_currency("Negotiable"), "Negotiable");
    assert_eq!(format_currency(""), "");
    assert_eq!(format_currency("-"), "-");
}

#[test]
fn format_idr_handles_negative_amounts() {
    assert_eq!(format_idr(-2500.0), "-Rp\u{a0}2.500");
    assert_eq!(format_idr(0.0), "Rp\u{a0}0");
}
