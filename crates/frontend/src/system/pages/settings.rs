use contracts::shared::i18n::Locale;
use contracts::system::settings::UserSettings;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api;
use crate::shared::i18n::use_i18n;
use crate::shared::toast::use_toasts;

const SETTINGS_PATH: &str = "/api/system/settings";

/// Тёмная тема через класс на `<body>`
pub fn apply_dark_mode(enabled: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let class = if enabled { "dark" } else { "" };
    body.set_class_name(class);
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let (settings, set_settings) = signal(Option::<UserSettings>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_json::<UserSettings>(SETTINGS_PATH).await {
                Ok(loaded) => set_settings.set(Some(loaded)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let update = move |f: fn(&mut UserSettings, bool), value: bool| {
        set_settings.update(|s| {
            if let Some(s) = s.as_mut() {
                f(s, value);
            }
        });
    };

    let on_save = move |_| {
        let Some(current) = settings.get() else {
            return;
        };
        set_is_saving.set(true);
        spawn_local(async move {
            match api::put_json::<_, UserSettings>(SETTINGS_PATH, &current).await {
                Ok(saved) => {
                    if saved.language != i18n.locale.get_untracked() {
                        i18n.set_locale(saved.language);
                    }
                    apply_dark_mode(saved.dark_mode);
                    set_settings.set(Some(saved));
                    toasts.success(
                        i18n.t("settingsPage.preferences.saveSuccessTitle"),
                        i18n.t("settingsPage.preferences.saveSuccessDescription"),
                    );
                }
                Err(e) => toasts.error(i18n.t("settingsPage.preferences.saveErrorTitle"), e),
            }
            set_is_saving.set(false);
        });
    };

    let toggle = move |label: &'static str, get: fn(&UserSettings) -> bool, set: fn(&mut UserSettings, bool)| {
        view! {
            <div class="form-group">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || settings.get().as_ref().map(get).unwrap_or(false)
                        on:change=move |ev| update(set, event_target_checked(&ev))
                    />
                    " " {move || i18n.t(label)}
                </label>
            </div>
        }
    };

    view! {
        <h1>{move || i18n.t("settingsPage.title")}</h1>
        <p class="description">{move || i18n.t("settingsPage.description")}</p>

        {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

        <div class="card">
            <h3>{move || i18n.t("settingsPage.preferences.title")}</h3>
            <p class="description">{move || i18n.t("settingsPage.preferences.description")}</p>

            <div class="form-group">
                <label for="language">{move || i18n.t("common.language")}</label>
                <select
                    id="language"
                    prop:value=move || settings.get().map(|s| s.language.as_str()).unwrap_or("en")
                    on:change=move |ev| {
                        if let Ok(locale) = event_target_value(&ev).parse::<Locale>() {
                            set_settings.update(|s| {
                                if let Some(s) = s.as_mut() {
                                    s.language = locale;
                                }
                            });
                        }
                    }
                >
                    <option value="en">{move || i18n.t("common.english")}</option>
                    <option value="ja">{move || i18n.t("common.japanese")}</option>
                </select>
            </div>

            {toggle("settingsPage.preferences.emailNotifications", |s| s.email_notifications, |s, v| s.email_notifications = v)}
            {toggle("settingsPage.preferences.inAppNotifications", |s| s.in_app_notifications, |s, v| s.in_app_notifications = v)}
            {toggle("settingsPage.preferences.darkMode", |s| s.dark_mode, |s, v| s.dark_mode = v)}

            <button
                class="btn-primary"
                on:click=on_save
                disabled=move || is_saving.get() || settings.get().is_none()
            >
                {move || if is_saving.get() {
                    i18n.t("common.saving")
                } else {
                    i18n.t("settingsPage.preferences.saveButton")
                }}
            </button>
        </div>
    }
}
