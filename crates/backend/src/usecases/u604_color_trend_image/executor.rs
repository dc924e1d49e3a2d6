use crate::shared::i18n::Localized;
use crate::shared::llm::LlmProvider;
use contracts::shared::i18n::Locale;
use contracts::usecases::u604_color_trend_image::request::ColorTrendImageInput;
use contracts::usecases::u604_color_trend_image::response::ColorTrendImageOutput;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorImageError {
    #[error("{0}")]
    InvalidInput(Localized),

    /// "Failed to generate image for <color>."
    #[error("{0}")]
    Generation(Localized),
}

pub fn render_prompt(input: &ColorTrendImageInput) -> String {
    format!(
        "Generate an image representing the B2B apparel color trend '{}'. \
         The style should suit a fashion trend presentation. \
         Consider its characteristics: {}. \
         Show apparel items or fabric textures that embody this color trend, \
         with a clean, modern aesthetic.",
        input.color_name.trim(),
        input.color_description.trim()
    )
}

pub async fn generate(
    provider: &dyn LlmProvider,
    input: &ColorTrendImageInput,
    locale: Locale,
) -> Result<ColorTrendImageOutput, ColorImageError> {
    if input.color_name.trim().is_empty() {
        return Err(ColorImageError::InvalidInput(Localized::new(
            locale,
            "errors.colorNameRequired",
            &[],
        )));
    }

    let prompt = render_prompt(input);
    tracing::info!("Generating color trend image for {}", input.color_name);

    match provider.generate_image(&prompt).await {
        Ok(image) if !image.data_uri.trim().is_empty() => Ok(ColorTrendImageOutput {
            image_data_uri: image.data_uri,
            revised_prompt: image.revised_prompt,
        }),
        Ok(_) => {
            tracing::error!("Image generation for {} returned no media", input.color_name);
            Err(generation_failed(input, locale))
        }
        Err(e) => {
            tracing::error!("Image generation for {} failed: {}", input.color_name, e);
            Err(generation_failed(input, locale))
        }
    }
}

fn generation_failed(input: &ColorTrendImageInput, locale: Locale) -> ColorImageError {
    ColorImageError::Generation(Localized::new(
        locale,
        "errors.imageGeneration",
        &[("colorName", input.color_name.trim())],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::testing::RecordingProvider;
    use crate::shared::llm::{ImageResponse, LlmError};

    fn sapphire() -> ColorTrendImageInput {
        ColorTrendImageInput {
            color_name: "Deep Sapphire".into(),
            color_description: "luxurious, evening wear".into(),
        }
    }

    #[tokio::test]
    async fn returns_data_uri() {
        let provider = RecordingProvider::with_image(Ok(ImageResponse {
            data_uri: "data:image/png;base64,AAAA".into(),
            revised_prompt: Some("sapphire fabrics".into()),
        }));
        let out = generate(&provider, &sapphire(), Locale::En).await.unwrap();
        assert_eq!(out.image_data_uri, "data:image/png;base64,AAAA");
        assert!(provider.image_prompts()[0].contains("'Deep Sapphire'"));
    }

    #[tokio::test]
    async fn any_failure_names_the_color() {
        for provider in [
            RecordingProvider::with_image(Err(LlmError::RateLimitExceeded)),
            RecordingProvider::with_image(Err(LlmError::NoMedia("empty".into()))),
            RecordingProvider::with_image(Ok(ImageResponse {
                data_uri: String::new(),
                revised_prompt: None,
            })),
        ] {
            let err = generate(&provider, &sapphire(), Locale::En).await.unwrap_err();
            assert_eq!(err.to_string(), "Failed to generate image for Deep Sapphire.");
            assert!(matches!(err, ColorImageError::Generation(ref m) if m.key == "errors.imageGeneration"));
        }
    }

    #[tokio::test]
    async fn blank_color_is_rejected_before_provider() {
        let provider = RecordingProvider::default();
        let input = ColorTrendImageInput {
            color_name: "  ".into(),
            color_description: "anything".into(),
        };
        let err = generate(&provider, &input, Locale::En).await.unwrap_err();
        assert!(matches!(err, ColorImageError::InvalidInput(ref m) if m.key == "errors.colorNameRequired"));
        assert!(provider.image_prompts().is_empty());
    }
}
