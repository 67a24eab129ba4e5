use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_logout, use_auth};
use crate::system::auth::events::use_auth_events;

/// Шапка приложения: заголовок, текущий пользователь, выход.
#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    // StoredValue keeps the handler Copy so it can live inside <Show>
    let events = StoredValue::new(use_auth_events());

    let on_sign_out = move |_| {
        let events = events.get_value();
        spawn_local(async move {
            do_logout(set_auth_state, events).await;
        });
    };

    view! {
        <header class="app-header">
            <h1 class="app-header__title">"Knowledge Desk"</h1>
            <Show when=move || auth_state.get().user_info.is_some()>
                <div class="app-header__user">
                    <span class="app-header__username">
                        {move || {
                            auth_state
                                .get()
                                .user_info
                                .map(|u| u.display_name.unwrap_or(u.username))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button class="app-header__signout" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </header>
    }
}
