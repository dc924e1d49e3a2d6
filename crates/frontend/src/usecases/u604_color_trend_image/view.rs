use contracts::usecases::u604_color_trend_image::request::ColorTrendImageInput;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::use_i18n;
use crate::shared::toast::use_toasts;

/// Кнопка генерации образа в цвете тренда и сама картинка
#[component]
pub fn ColorImageButton(color_name: String, color_description: String) -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let (image, set_image) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);
    let input = StoredValue::new(ColorTrendImageInput {
        color_name,
        color_description,
    });

    let on_click = move |_| {
        let input = input.get_value();
        set_is_loading.set(true);
        spawn_local(async move {
            match super::api::generate(&input, i18n.lang()).await {
                Ok(output) => set_image.set(Some(output.image_data_uri)),
                Err(e) => toasts.error(i18n.t("analyticsPage.colorImage.errorTitle"), e),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <button class="btn-primary" on:click=on_click disabled=move || is_loading.get()>
            {move || if is_loading.get() {
                i18n.t("analyticsPage.colorImage.generatingButton")
            } else {
                i18n.t("analyticsPage.colorImage.generateButton")
            }}
        </button>
        {move || image.get().map(|src| {
            let alt = input.with_value(|i| i.color_name.clone());
            view! { <img class="trend-image" src=src alt=alt /> }
        })}
    }
}
