//! Форматирование чисел для карточек и таблиц

/// Целое с разделителем тысяч: 1234567 -> "1,234,567"
pub fn format_int(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Денежная сумма с двумя знаками: 1234.5 -> "$1,234.50"
pub fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, format_int(cents / 100), cents % 100)
}

/// Изменение в процентах со знаком: 12.345 -> "+12.3%"
pub fn format_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(999), "999");
        assert_eq!(format_int(1000), "1,000");
        assert_eq!(format_int(1234567), "1,234,567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-12.5), "-$12.50");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(12.345), "+12.3%");
        assert_eq!(format_change(-3.0), "-3.0%");
    }
}
