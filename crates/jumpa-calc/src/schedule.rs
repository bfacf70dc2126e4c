use chrono::{Duration, Local, NaiveDate};

/// `today + days`.
pub fn due_date(today: NaiveDate, days: u32) -> NaiveDate {
    today + Duration::days(i64::from(days))
}

/// Fecha larga en formato británico: `19 October 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Días completos entre dos fechas; negativo si `end` es anterior.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crosses_month_and_year() {
        let d = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
        assert_eq!(format_long_date(due_date(d, 7)), "1 January 2027");
        assert_eq!(format_long_date(due_date(d, 0)), "25 December 2026");
    }

    #[test]
    fn span() {
        let a = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(days_between(a, b), 59);
        assert_eq!(days_between(b, a), -59);
    }
}
