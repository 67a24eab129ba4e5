use contracts::system::config::UiBootstrap;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app_shell::AppShell;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::events::AuthEvents;
use crate::system::config::fetch_ui_bootstrap;

#[component]
pub fn App() -> impl IntoView {
    // The event hub outlives every subscriber, so it is provided at the
    // very root, above the auth provider that emits into it.
    provide_context(AuthEvents::new());

    let bootstrap: RwSignal<Option<UiBootstrap>> = RwSignal::new(None);
    let load_error: RwSignal<Option<String>> = RwSignal::new(None);

    create_effect(move |_| {
        spawn_local(async move {
            match fetch_ui_bootstrap().await {
                Ok(config) => bootstrap.set(Some(config)),
                Err(e) => load_error.set(Some(e)),
            }
        });
    });

    view! {
        <AuthProvider>
            <Show
                when=move || bootstrap.get().is_some()
                fallback=move || {
                    view! {
                        <div class="app-loading">
                            {move || match load_error.get() {
                                Some(e) => format!("Failed to load application config: {e}"),
                                None => "Loading...".to_string(),
                            }}
                        </div>
                    }
                }
            >
                {move || bootstrap.get().map(|config| view! { <AppShell bootstrap=config /> })}
            </Show>
        </AuthProvider>
    }
}
