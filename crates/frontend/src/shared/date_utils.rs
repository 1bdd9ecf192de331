//! Форматирование дат для списочных экранов.

use chrono::NaiveDate;

/// "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(value: &str) -> String {
    let Some((date_part, time_part)) = value.split_once('T') else {
        return value.to_string();
    };
    let time = time_part
        .trim_end_matches('Z')
        .split('.')
        .next()
        .unwrap_or("")
        .rsplit_once(':')
        .map(|(hm, _)| hm.to_string())
        .unwrap_or_else(|| time_part.to_string());
    format!("{} {}", format_date(date_part), time)
}

/// "2024-03-15" (или ISO datetime) -> "15.03.2024"
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
