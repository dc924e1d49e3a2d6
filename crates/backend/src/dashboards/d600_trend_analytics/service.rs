use crate::shared::data::sources::TrendDataSource;
use crate::shared::i18n::t;
use contracts::dashboards::d600_trend_analytics::dto::{
    ColorTrend, TrendAnalyticsResponse, TrendArticle,
};
use contracts::shared::i18n::Locale;
use std::collections::BTreeMap;

/// Поле серии -> ключ перевода подписи
const SILHOUETTE_LABELS: [(&str, &str); 5] = [
    ("a_line", "analyticsPage.silhouette.aLine"),
    ("sheath", "analyticsPage.silhouette.sheath"),
    ("oversized", "analyticsPage.silhouette.oversized"),
    ("bodycon", "analyticsPage.silhouette.bodycon"),
    ("asymmetrical", "analyticsPage.silhouette.asymmetrical"),
];

const PATTERN_LABELS: [(&str, &str); 5] = [
    ("floral", "analyticsPage.pattern.floral"),
    ("geometric", "analyticsPage.pattern.geometric"),
    ("stripes", "analyticsPage.pattern.stripes"),
    ("animal_prints", "analyticsPage.pattern.animalPrints"),
    ("abstract", "analyticsPage.pattern.abstract"),
];

fn labels(keys: &[(&str, &str)], locale: Locale) -> BTreeMap<String, String> {
    keys.iter()
        .map(|(field, key)| (field.to_string(), t(locale, key)))
        .collect()
}

/// Данные страницы трендов
pub fn get_trend_analytics(source: &dyn TrendDataSource, locale: Locale) -> TrendAnalyticsResponse {
    let colors = source
        .colors()
        .into_iter()
        .map(|c| ColorTrend {
            name: c.name.to_string(),
            label: t(locale, c.label_key),
            popularity: c.popularity,
            description_key: c.description_key.to_string(),
        })
        .collect();

    TrendAnalyticsResponse {
        latest_trend_title: t(locale, "analyticsPage.latestTrendTitle"),
        latest_trend_description: t(locale, "analyticsPage.latestTrendDescription"),
        article: TrendArticle {
            title: t(locale, "analyticsPage.galaArticle.title"),
            paragraphs: vec![
                t(locale, "analyticsPage.galaArticle.paragraph1"),
                t(locale, "analyticsPage.galaArticle.paragraph2"),
            ],
        },
        silhouettes: source.silhouettes(),
        silhouette_labels: labels(&SILHOUETTE_LABELS, locale),
        patterns: source.patterns(),
        pattern_labels: labels(&PATTERN_LABELS, locale),
        colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::sources::MockTrendDataSource;

    #[test]
    fn labels_are_localized() {
        let en = get_trend_analytics(&MockTrendDataSource, Locale::En);
        assert_eq!(en.silhouette_labels["oversized"], "Oversized/Boxy");
        assert_eq!(en.pattern_labels["animal_prints"], "Animal Prints");
        assert_eq!(en.colors[0].label, "Deep Sapphire");
        assert_eq!(en.article.paragraphs.len(), 2);

        let ja = get_trend_analytics(&MockTrendDataSource, Locale::Ja);
        assert_ne!(ja.latest_trend_title, "analyticsPage.latestTrendTitle");
        // канонические имена цветов не переводятся
        assert_eq!(ja.colors[0].name, "Deep Sapphire");
    }

    #[test]
    fn series_cover_every_month() {
        let response = get_trend_analytics(&MockTrendDataSource, Locale::En);
        assert_eq!(response.silhouettes.len(), 28);
        assert_eq!(response.patterns.len(), 28);
        assert_eq!(
            response.patterns.last().map(|p| p.month_year.as_str()),
            Some("Apr-2025")
        );
    }
}
