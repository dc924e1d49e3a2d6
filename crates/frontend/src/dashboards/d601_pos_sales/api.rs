use contracts::dashboards::d601_pos_sales::dto::PosSalesOverviewResponse;

use crate::shared::api;
use crate::shared::api_utils::with_lang;

pub async fn get_overview(lang: &str) -> Result<PosSalesOverviewResponse, String> {
    api::get_json(&with_lang("/api/pos-sales", lang)).await
}
