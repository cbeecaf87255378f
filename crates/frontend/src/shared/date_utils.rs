/// Date helpers for the pallet tables and the report.
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

const WEEKDAYS: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];
const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
    "septiembre", "octubre", "noviembre", "diciembre",
];

/// "2024-03-15T14:02:26.123" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    let trimmed = datetime_str.trim_end_matches('Z');
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"));
    match parsed {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Today as `YYYY-MM-DD`, the format `<input type="date">` uses.
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// "LUNES, 3 DE MARZO DE 2025", the banner over the live entries panel.
pub fn long_date_es(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{}, {} de {} de {}", weekday, date.day(), month, date.year()).to_uppercase()
}

pub fn today_long_es() -> String {
    long_date_es(Local::now().date_naive())
}

/// Clock text for the "recent associations" panel.
pub fn now_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123"),
            "15/03/2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_long_date_es() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(long_date_es(date), "LUNES, 3 DE MARZO DE 2025");
        let date = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        assert_eq!(long_date_es(date), "SÁBADO, 28 DE DICIEMBRE DE 2024");
    }

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
