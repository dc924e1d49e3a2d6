//! Навигация без роутера: текущая страница в сигнале, адрес через History API.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Analytics,
    Forecast,
    PosSales,
    Tasks,
    Reports,
    Settings,
    Feedback,
}

impl Page {
    pub const NAV: [Page; 7] = [
        Page::Analytics,
        Page::Forecast,
        Page::PosSales,
        Page::Tasks,
        Page::Reports,
        Page::Settings,
        Page::Feedback,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Analytics => "/analytics",
            Page::Forecast => "/forecast",
            Page::PosSales => "/pos-sales",
            Page::Tasks => "/tasks",
            Page::Reports => "/reports",
            Page::Settings => "/settings",
            Page::Feedback => "/feedback",
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Analytics => "nav.analytics",
            Page::Forecast => "nav.forecast",
            Page::PosSales => "nav.posSales",
            Page::Tasks => "nav.tasksManager",
            Page::Reports => "nav.reports",
            Page::Settings => "common.settings",
            Page::Feedback => "feedbackPage.title",
        }
    }

    /// Страница по пути; query и завершающий слэш игнорируются
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        Page::NAV.into_iter().find(|p| p.path() == path)
    }
}

/// Экран до входа
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
}

impl AuthView {
    pub fn path(&self) -> &'static str {
        match self {
            AuthView::Login => "/login",
            AuthView::Register => "/register",
        }
    }

    pub fn from_path(path: &str) -> AuthView {
        if path.trim_end_matches('/').ends_with("/register") {
            AuthView::Register
        } else {
            AuthView::Login
        }
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Записать путь в адресную строку
pub fn push_path(path: &str) {
    if current_path() == path {
        return;
    }
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

pub fn use_page() -> RwSignal<Page> {
    use_context::<RwSignal<Page>>().expect("Page context not found in component tree")
}

pub fn navigate(page: RwSignal<Page>, to: Page) {
    push_path(to.path());
    page.set(to);
}
