use leptos::prelude::*;

use super::page::{current_path, AuthView, Page};
use crate::dashboards::{PosSalesDashboard, TrendAnalyticsDashboard};
use crate::domain::{FeedbackPage, ReportsPage, TasksPage};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::{LoginPage, RegisterPage, SettingsPage};
use crate::usecases::ForecastPage;

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Analytics => view! { <TrendAnalyticsDashboard /> }.into_any(),
        Page::Forecast => view! { <ForecastPage /> }.into_any(),
        Page::PosSales => view! { <PosSalesDashboard /> }.into_any(),
        Page::Tasks => view! { <TasksPage /> }.into_any(),
        Page::Reports => view! { <ReportsPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
        Page::Feedback => view! { <FeedbackPage /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let page = super::use_page();

    view! {
        <Shell>
            {move || page_view(page.get())}
        </Shell>
    }
}

#[component]
fn AuthScreens() -> impl IntoView {
    let auth_view = use_context::<RwSignal<AuthView>>().expect("AuthView context not found");

    move || match auth_view.get() {
        AuthView::Login => view! { <LoginPage /> }.into_any(),
        AuthView::Register => view! { <RegisterPage /> }.into_any(),
    }
}

/// Начальные значения навигации по адресной строке
pub fn provide_navigation() {
    let path = current_path();
    provide_context(RwSignal::new(
        Page::from_path(&path).unwrap_or(Page::Analytics),
    ));
    provide_context(RwSignal::new(AuthView::from_path(&path)));
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <AuthScreens /> }
        >
            <MainLayout />
        </Show>
    }
}
