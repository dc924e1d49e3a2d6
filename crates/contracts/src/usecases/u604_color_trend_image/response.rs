use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTrendImageOutput {
    /// `data:image/png;base64,<...>`
    pub image_data_uri: String,
    pub revised_prompt: Option<String>,
}
