use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorTrendImageInput {
    /// Например, "Deep Sapphire"
    pub color_name: String,
    /// Характер цвета и типичное применение в B2B-одежде
    pub color_description: String,
}
