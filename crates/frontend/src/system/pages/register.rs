use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::page::push_path;
use crate::routes::AuthView;
use crate::shared::i18n::use_i18n;
use crate::shared::toast::use_toasts;
use crate::system::auth::api;

/// Ключ перевода для первой ошибки формы; остальное проверит сервер
pub fn form_error(request: &RegisterRequest) -> Option<&'static str> {
    if request.username.trim().chars().count() < 3 {
        return Some("registerPage.usernameTooShort");
    }
    if !super::login::looks_like_email(&request.email) {
        return Some("loginPage.emailInvalid");
    }
    if request.password.chars().count() < 6 {
        return Some("registerPage.passwordTooShort");
    }
    if request.password != request.confirm_password {
        return Some("registerPage.passwordMismatch");
    }
    None
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let auth_view = use_context::<RwSignal<AuthView>>().expect("AuthView context not found");

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let to_login = move || {
        push_path(AuthView::Login.path());
        auth_view.set(AuthView::Login);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = RegisterRequest {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm.get(),
        };
        if let Some(key) = form_error(&request) {
            set_error_message.set(Some(i18n.t(key)));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::register(request, i18n.lang()).await {
                Ok(_) => {
                    toasts.success(
                        i18n.t("registerPage.registrationSuccessTitle"),
                        i18n.t("registerPage.registrationSuccessDescription"),
                    );
                    to_login();
                }
                Err(e) => {
                    toasts.error(i18n.t("registerPage.registrationErrorTitle"), e.clone());
                    set_error_message.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    let field = move |id: &'static str,
                      kind: &'static str,
                      label: &'static str,
                      placeholder: &'static str,
                      value: ReadSignal<String>,
                      set_value: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{move || i18n.t(label)}</label>
                <input
                    type=kind
                    id=id
                    placeholder=move || i18n.t(placeholder)
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>{move || i18n.t("registerPage.title")}</h2>
                <p class="description">{move || i18n.t("registerPage.description")}</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {field("username", "text", "registerPage.usernameLabel", "registerPage.usernamePlaceholder", username, set_username)}
                    {field("email", "email", "loginPage.emailLabel", "loginPage.emailPlaceholder", email, set_email)}
                    {field("password", "password", "registerPage.passwordLabel", "registerPage.passwordPlaceholder", password, set_password)}
                    {field("confirm", "password", "registerPage.confirmPasswordLabel", "registerPage.confirmPasswordPlaceholder", confirm, set_confirm)}
                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || i18n.t("registerPage.registerButton")}
                    </button>
                </form>

                <p>
                    {move || i18n.t("registerPage.loginLinkText")} " "
                    <button class="btn-link" on:click=move |_| to_login()>
                        {move || i18n.t("registerPage.loginLinkAction")}
                    </button>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn first_form_problem_is_reported() {
        assert_eq!(
            form_error(&request("ab", "a@b.io", "secret1", "secret1")),
            Some("registerPage.usernameTooShort")
        );
        assert_eq!(
            form_error(&request("anna", "a@b", "secret1", "secret1")),
            Some("loginPage.emailInvalid")
        );
        assert_eq!(
            form_error(&request("anna", "a@b.io", "12345", "12345")),
            Some("registerPage.passwordTooShort")
        );
        assert_eq!(
            form_error(&request("anna", "a@b.io", "secret1", "secret2")),
            Some("registerPage.passwordMismatch")
        );
        assert_eq!(form_error(&request("anna", "a@b.io", "secret1", "secret1")), None);
    }
}
