use leptos::prelude::*;

use crate::routes::routes::{provide_navigation, AppRoutes};
use crate::shared::i18n::provide_i18n;
use crate::shared::toast::{ToastStack, Toasts};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_i18n();
    provide_context(Toasts::new());
    provide_navigation();

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <ToastStack />
    }
}
