//! Toast overlay with auto-expiry.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// How long a toast stays up before dismissing itself.
#[cfg(feature = "hydrate")]
const TOAST_DISMISS_MS: u32 = 4000;

/// Renders the toast queue; each toast dismisses itself after a delay or
/// when clicked.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    #[cfg(feature = "hydrate")]
                    {
                        leptos::task::spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                            toasts.update(|state| state.dismiss(id));
                        });
                    }
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                        ToastKind::Info => "toast toast--info",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.update(|state| state.dismiss(id))>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
