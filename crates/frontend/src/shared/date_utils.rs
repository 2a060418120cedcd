//! Форматирование серверных дат и сумм для отображения.

/// "2026-08-30T14:02:26Z" → "30.08.2026 14:02:26"; если строка не
/// распарсилась, возвращается как есть.
pub fn format_datetime(iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// "2026-08-30" (или полная метка времени) → "30.08.2026".
pub fn format_date(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    match chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Денежный формат для таблиц: разделители тысяч, без копеек.
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as i64;
    let digits = rounded.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2026-08-30T14:02:26Z"),
            "30.08.2026 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-30"), "30.08.2026");
        assert_eq!(format_date("2026-08-30T14:02:26Z"), "30.08.2026");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(1234.0), "1 234");
        assert_eq!(format_money(1234567.4), "1 234 567");
        assert_eq!(format_money(-5000.0), "-5 000");
    }
}
