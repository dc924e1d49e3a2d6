use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Популярность силуэтов за месяц (значения: индекс популярности)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SilhouettePoint {
    pub month_year: String,
    pub a_line: u32,
    pub sheath: u32,
    pub oversized: u32,
    pub bodycon: u32,
    pub asymmetrical: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPoint {
    pub month_year: String,
    pub floral: u32,
    pub geometric: u32,
    pub stripes: u32,
    pub animal_prints: u32,
    pub r#abstract: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTrend {
    /// Каноническое имя цвета (используется для генерации изображения)
    pub name: String,
    pub label: String,
    pub popularity: u32,
    pub description_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendArticle {
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalyticsResponse {
    pub latest_trend_title: String,
    pub latest_trend_description: String,
    pub article: TrendArticle,
    pub silhouettes: Vec<SilhouettePoint>,
    /// Поле серии -> локализованная подпись
    pub silhouette_labels: BTreeMap<String, String>,
    pub patterns: Vec<PatternPoint>,
    pub pattern_labels: BTreeMap<String, String>,
    pub colors: Vec<ColorTrend>,
}
