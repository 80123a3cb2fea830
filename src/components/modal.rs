//! Non-dismissible modal dialog shell.

use leptos::prelude::*;

/// Overlay dialog rendering an injected title, body, and footer.
///
/// Closing happens only through the footer actions or the explicit close
/// button. Backdrop clicks and Escape are ignored so an open edit buffer
/// survives stray input.
#[component]
pub fn Modal(
    /// Whether the overlay is rendered at all.
    #[prop(into)]
    visible: Signal<bool>,
    /// Dialog heading.
    title: String,
    /// Main dialog content.
    #[prop(into)]
    body: ViewFn,
    /// Action row rendered beneath the body.
    #[prop(into)]
    footer: ViewFn,
    /// Invoked by the title-bar close button.
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <div class="dialog__header">
                        <h2>{title.clone()}</h2>
                        <button
                            class="dialog__close"
                            title="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </div>
                    <div class="dialog__body">{body.run()}</div>
                    <div class="dialog__actions">{footer.run()}</div>
                </div>
            </div>
        </Show>
    }
}

/// Inline error list rendered inside dialog bodies.
#[component]
pub fn DialogErrors(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !errors.get().is_empty()>
            <ul class="dialog__errors">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|message| view! { <li>{message}</li> })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}
