//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::net::types::DirectoryKind;
use crate::pages::{files::FilesPage, users::UsersPage};
use crate::state::editor::EditorState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::state::users::UsersStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let editor = RwSignal::new(EditorState::default());
    let toasts = RwSignal::new(ToastState::default());
    let users = UsersStore::new();

    provide_context(session);
    provide_context(editor);
    provide_context(toasts);
    provide_context(users);

    // Session bootstrap: the self-row rules need the signed-in username.
    #[cfg(feature = "hydrate")]
    {
        session.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            session.update(|state| {
                state.user = user;
                state.loading = false;
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <nav class="top-nav">
                <span class="top-nav__brand">"Admin Console"</span>
                <A href="/">"Netlist Files"</A>
                <A href="/tech">"Tech Files"</A>
                <A href="/users">"Users"</A>
                <span class="top-nav__user">
                    {move || {
                        session
                            .get()
                            .user
                            .map_or_else(String::new, |user| user.name)
                    }}
                </span>
            </nav>
            <main class="page-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <FilesPage kind=DirectoryKind::Netlist/> }
                    />
                    <Route
                        path=StaticSegment("tech")
                        view=|| view! { <FilesPage kind=DirectoryKind::Tech/> }
                    />
                    <Route path=StaticSegment("users") view=UsersPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
