use super::*;

#[test]
fn article_date_keeps_only_the_calendar_day() {
    assert_eq!(article_date("2023-01-05T12:30:00"), "2023-01-05");
    assert_eq!(article_date("2023-01-05"), "2023-01-05");
    assert_eq!(article_date(""), "");
}
