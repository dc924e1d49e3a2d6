use axum::extract::{Json, Path, Query};
use contracts::shared::i18n::Locale;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::shared::i18n::translator;

#[derive(Deserialize)]
pub struct KeyParams {
    pub key: String,
}

/// GET /api/i18n/:locale
pub async fn bundle(Path(locale): Path<Locale>) -> Json<Value> {
    Json(translator().bundle(locale))
}

/// GET /api/i18n/:locale/t?key=...
pub async fn translate(Path(locale): Path<Locale>, Query(params): Query<KeyParams>) -> Json<Value> {
    Json(json!({
        "key": params.key,
        "value": translator().t(locale, &params.key),
    }))
}
