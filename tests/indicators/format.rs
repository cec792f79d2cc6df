use sitiometrics::indicators::format::ValueFormat;

#[test]
fn counts_get_thousands_separators() {
    assert_eq!(ValueFormat::Count.render(1234.0), "1,234");
    assert_eq!(ValueFormat::Count.render(0.0), "0");
}

#[test]
fn percents_render_one_decimal() {
    assert_eq!(ValueFormat::Percent.render(66.666_666), "66.7%");
    assert_eq!(ValueFormat::Percent.render(0.0), "0.0%");
}

#[test]
fn flags_render_yes_no() {
    assert_eq!(ValueFormat::Flag.render(1.0), "Yes");
    assert_eq!(ValueFormat::Flag.render(0.0), "No");
}

#[test]
fn lengths_and_ratings() {
    assert_eq!(ValueFormat::Kilometers.render(12.5), "12.5 km");
    assert_eq!(ValueFormat::Hectares.render(3.25), "3.2 ha");
    assert_eq!(ValueFormat::Rating.render(4.0), "4/5");
    assert_eq!(ValueFormat::Decimal.render(4.249), "4.25");
}

#[test]
fn only_percent_is_percentage() {
    assert!(ValueFormat::Percent.is_percentage());
    assert!(!ValueFormat::Count.is_percentage());
    assert!(!ValueFormat::Flag.is_percentage());
}
