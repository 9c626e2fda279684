use super::*;

#[test]
fn formats_small_amounts_without_separator() {
    assert_eq!(format_points(0), "0");
    assert_eq!(format_points(999), "999");
}

#[test]
fn formats_thousands_with_separator() {
    assert_eq!(format_points(1_500), "1,500");
    assert_eq!(format_points(2_500), "2,500");
}

#[test]
fn formats_millions_with_two_separators() {
    assert_eq!(format_points(1_000_000), "1,000,000");
    assert_eq!(format_points(123_456_789), "123,456,789");
}

#[test]
fn formats_negative_amounts() {
    assert_eq!(format_points(-200), "-200");
    assert_eq!(format_points(-1_500), "-1,500");
}
