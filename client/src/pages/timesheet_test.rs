use super::*;

fn entry(date: &str, hours: f64) -> TimesheetEntry {
    TimesheetEntry {
        date: date.into(),
        check_in: Some("09:00".into()),
        check_out: Some("17:30".into()),
        hours,
    }
}

#[test]
fn total_hours_sums_entries() {
    let entries = vec![entry("2025-06-02", 8.5), entry("2025-06-03", 7.0)];
    assert!((total_hours(&entries) - 15.5).abs() < f64::EPSILON);
}

#[test]
fn total_hours_empty_sheet_is_zero() {
    assert!(total_hours(&[]).abs() < f64::EPSILON);
}

#[test]
fn format_hours_one_decimal() {
    assert_eq!(format_hours(8.0), "8.0 h");
    assert_eq!(format_hours(7.25), "7.2 h");
    assert_eq!(format_hours(0.0), "0.0 h");
}
