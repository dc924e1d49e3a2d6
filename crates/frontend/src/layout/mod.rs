use contracts::shared::i18n::Locale;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{navigate, use_page, Page};
use crate::shared::i18n::use_i18n;
use crate::system::auth::context::{end_session, use_auth};

#[component]
fn Sidebar() -> impl IntoView {
    let i18n = use_i18n();
    let page = use_page();

    let items = Page::NAV
        .into_iter()
        .map(|item| {
            view! {
                <button
                    class=move || if page.get() == item { "active" } else { "" }
                    on:click=move |_| navigate(page, item)
                >
                    {move || i18n.t(item.title_key())}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <div class="brand">"Alyka"</div>
            {items}
        </nav>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    let i18n = use_i18n();
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.username)
            .unwrap_or_else(|| i18n.t("header.userMenu.defaultGreeting"))
    };

    let on_language = move |ev| {
        if let Ok(locale) = event_target_value(&ev).parse::<Locale>() {
            i18n.set_locale(locale);
        }
    };

    let on_logout = move |_| {
        spawn_local(async move {
            end_session(set_auth_state).await;
        });
    };

    view! {
        <header class="top-header">
            <select on:change=on_language prop:value=move || i18n.locale.get().as_str()>
                <option value="en">{move || i18n.t("common.english")}</option>
                <option value="ja">{move || i18n.t("common.japanese")}</option>
            </select>
            <span>{user_name}</span>
            <button class="btn-link" on:click=on_logout>
                {move || i18n.t("common.logout")}
            </button>
        </header>
    }
}

/// Каркас страниц после входа: меню слева, шапка, контент
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar />
            <div class="main">
                <TopHeader />
                <main class="page">{children()}</main>
            </div>
        </div>
    }
}
