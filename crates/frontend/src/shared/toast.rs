use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub is_error: bool,
}

/// Всплывающие уведомления страниц
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn push(&self, title: String, description: String, is_error: bool) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.items.update(|items| {
            items.push(Toast {
                id,
                title,
                description,
                is_error,
            })
        });

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            items.update(|items| items.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, title: String, description: String) {
        self.push(title, description, false);
    }

    pub fn error(&self, title: String, description: String) {
        self.push(title, description, true);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts context not found in component tree")
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = if toast.is_error { "toast error" } else { "toast" };
                    view! {
                        <div class=class>
                            <strong>{toast.title}</strong>
                            <span>{toast.description}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
