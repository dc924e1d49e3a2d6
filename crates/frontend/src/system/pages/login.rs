use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{navigate, use_page, AuthView, Page};
use crate::shared::i18n::use_i18n;
use crate::shared::toast::use_toasts;
use crate::system::auth::api;
use crate::system::auth::context::{start_session, use_auth};

/// Простая проверка формы перед запросом
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let page = use_page();
    let auth_view = use_context::<RwSignal<AuthView>>().expect("AuthView context not found");
    let (_, set_auth_state) = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        if !looks_like_email(&email_val) {
            set_error_message.set(Some(i18n.t("loginPage.emailInvalid")));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val, i18n.lang()).await {
                Ok(response) => {
                    let target = Page::from_path(&response.redirect_to).unwrap_or(Page::Analytics);
                    start_session(set_auth_state, response);
                    navigate(page, target);
                    toasts.success(
                        i18n.t("loginPage.loginSuccessTitle"),
                        i18n.t("loginPage.loginSuccessDescription"),
                    );
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    toasts.error(
                        i18n.t("loginPage.loginErrorTitle"),
                        i18n.t("loginPage.loginErrorDescription"),
                    );
                }
            }
            set_is_loading.set(false);
        });
    };

    let to_register = move |_| {
        crate::routes::page::push_path(AuthView::Register.path());
        auth_view.set(AuthView::Register);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Alyka"</h1>
                <h2>{move || i18n.t("loginPage.title")}</h2>
                <p class="description">{move || i18n.t("loginPage.description")}</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">{move || i18n.t("loginPage.emailLabel")}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder=move || i18n.t("loginPage.emailPlaceholder")
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{move || i18n.t("loginPage.passwordLabel")}</label>
                        <input
                            type="password"
                            id="password"
                            placeholder=move || i18n.t("loginPage.passwordPlaceholder")
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || i18n.t("loginPage.loginButton")}
                    </button>
                </form>

                <p>
                    {move || i18n.t("loginPage.registerLinkText")} " "
                    <button class="btn-link" on:click=to_register>
                        {move || i18n.t("loginPage.registerLinkAction")}
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_is_checked() {
        assert!(looks_like_email("test@alyka.io"));
        assert!(looks_like_email("  a@b.co "));
        assert!(!looks_like_email("test"));
        assert!(!looks_like_email("@alyka.io"));
        assert!(!looks_like_email("test@alyka"));
        assert!(!looks_like_email("test@.io"));
    }
}
