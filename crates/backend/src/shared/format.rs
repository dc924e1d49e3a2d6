/// Группирует разряды числа по три с заданным разделителем
pub fn format_thousands(n: u64, separator: char) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Размер для лога запросов: разделитель тысяч: точка
pub fn format_number(n: usize) -> String {
    format_thousands(n as u64, '.')
}

/// Денежная сумма для карточек POS-продаж: `$45,231`
pub fn format_currency(amount: u64) -> String {
    format!("${}", format_thousands(amount, ','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(87), "$87");
        assert_eq!(format_currency(45231), "$45,231");
        assert_eq!(format_thousands(1234, ','), "1,234");
    }
}
