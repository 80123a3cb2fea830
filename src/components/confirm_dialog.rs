//! Confirmation dialog for destructive row actions.

use leptos::prelude::*;

use crate::components::modal::Modal;

/// Generic confirm/cancel modal. The caller owns the pending flag and only
/// closes the dialog once its operation succeeded.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: &'static str,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            visible=Signal::derive(|| true)
            title=title
            on_close=on_cancel
            body=move || view! { <p class="dialog__message">{message.clone()}</p> }
            footer=move || {
                view! {
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || pending.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                }
            }
        />
    }
}
