/// Распознанное намерение сообщения чата
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Остаток сообщения без ключевой фразы уходит в прогноз как контекст
    Forecast { user_prompt: String },
    SalesReport,
    SmartregiConnect,
    NotRecognized,
}

const FORECAST_PHRASE: &str = "help me to forecast";
const REPORT_PHRASE: &str = "help me to generate report";

/// Разобрать сообщение без учёта регистра
pub fn interpret(message: &str) -> Intent {
    // ASCII-нижний регистр сохраняет байтовые позиции исходной строки
    let lower = message.to_ascii_lowercase();

    if lower.contains(FORECAST_PHRASE) {
        return Intent::Forecast {
            user_prompt: strip_phrase(message, &lower, FORECAST_PHRASE),
        };
    }
    // "report" покрывает и "reports"
    if lower.contains(REPORT_PHRASE) {
        return Intent::SalesReport;
    }
    if lower.contains("smartregi") || (lower.contains("connect") && lower.contains("pos")) {
        return Intent::SmartregiConnect;
    }
    Intent::NotRecognized
}

fn strip_phrase(message: &str, lower: &str, phrase: &str) -> String {
    let mut result = String::with_capacity(message.len());
    let mut rest = 0;
    for (start, _) in lower.match_indices(phrase) {
        result.push_str(&message[rest..start]);
        rest = start + phrase.len();
    }
    result.push_str(&message[rest..]);
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_phrase_is_removed_from_prompt() {
        assert_eq!(
            interpret("Help me to forecast with a summer sale in June"),
            Intent::Forecast {
                user_prompt: "with a summer sale in June".into()
            }
        );
        assert_eq!(
            interpret("HELP ME TO FORECAST"),
            Intent::Forecast {
                user_prompt: String::new()
            }
        );
    }

    #[test]
    fn report_singular_and_plural() {
        assert_eq!(interpret("please help me to generate reports"), Intent::SalesReport);
        assert_eq!(interpret("Help me to generate report"), Intent::SalesReport);
    }

    #[test]
    fn smartregi_and_pos_connection() {
        assert_eq!(interpret("How do I link Smartregi?"), Intent::SmartregiConnect);
        assert_eq!(interpret("connect my POS"), Intent::SmartregiConnect);
        assert_eq!(interpret("connect to the warehouse"), Intent::NotRecognized);
    }

    #[test]
    fn forecast_wins_over_other_phrases() {
        assert!(matches!(
            interpret("help me to forecast and help me to generate report"),
            Intent::Forecast { .. }
        ));
    }

    #[test]
    fn non_ascii_text_survives() {
        assert_eq!(
            interpret("help me to forecast 夏のセール"),
            Intent::Forecast {
                user_prompt: "夏のセール".into()
            }
        );
        assert_eq!(interpret("こんにちは"), Intent::NotRecognized);
    }
}
