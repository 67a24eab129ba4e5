//! Application Shell - корневой компонент таб-интерфейса.
//!
//! Здесь собирается реестр табов, подключается обработчик видимости к
//! событиям входа/выхода и рендерится каркас (шапка + полоса табов +
//! страницы).

use contracts::system::config::UiBootstrap;
use contracts::system::tabs::{resolve_visibility, AuthChange, SpecialTabs, TabRegistry};
use leptos::logging::log;
use leptos::prelude::*;

use crate::layout::header::Header;
use crate::layout::tab_bar::TabBar;
use crate::layout::tab_page::TabPage;
use crate::layout::tabs_context::TabsContext;
use crate::system::auth::context::use_auth;
use crate::system::auth::events::use_auth_events;

pub const LOGIN_TAB: &str = "login-tab";
pub const CHAT_TAB: &str = "chat-tab";
pub const ADMIN_TAB: &str = "admin-tab";
pub const SETTINGS_TAB: &str = "settings-tab";
pub const HELP_TAB: &str = "help-tab";

fn index_tab_key(id: &str) -> String {
    format!("{id}-tab")
}

/// Build the ordered tab registry. With user management enabled the login
/// tab comes first and everything else starts hidden until the first auth
/// event; without it there is no login tab and nothing is gated.
fn build_registry(bootstrap: &UiBootstrap) -> TabRegistry {
    let mut registry = TabRegistry::new();
    let gated = bootstrap.user_management_enabled;

    if gated {
        register(&mut registry, LOGIN_TAB, "Login", true);
    }
    register(&mut registry, CHAT_TAB, "Chat", !gated);
    for index in &bootstrap.indices {
        register(
            &mut registry,
            &index_tab_key(&index.id),
            &format!("{} Index", index.name),
            !gated,
        );
    }
    register(&mut registry, ADMIN_TAB, "Admin", !gated);
    register(&mut registry, SETTINGS_TAB, "Settings", !gated);
    register(&mut registry, HELP_TAB, "Help", !gated);

    registry
}

fn register(registry: &mut TabRegistry, key: &str, title: &str, visible: bool) {
    // An index id colliding with a fixed tab is a config mistake; drop the
    // duplicate instead of tearing down the shell.
    if let Err(e) = registry.register(key, title, visible) {
        log!("⚠️ Skipping tab registration: {e}");
    }
}

#[component]
pub fn AppShell(bootstrap: UiBootstrap) -> impl IntoView {
    let tabs = TabsContext::new(build_registry(&bootstrap));
    provide_context(tabs);
    tabs.init_router_integration();

    // Единственная проверка capability-флага: без user management нет ни
    // логина, ни подписки на события.
    if bootstrap.user_management_enabled {
        let (auth_state, _) = use_auth();
        let events = use_auth_events();
        let special = SpecialTabs {
            login: LOGIN_TAB.to_string(),
            admin: ADMIN_TAB.to_string(),
        };
        let registry = tabs.registry;

        // One subscription covers both sign-in and sign-out. The lookup
        // capability reads the record the auth flow fetched for this event.
        events.subscribe(
            move |change: &AuthChange| {
                let current = auth_state.get_untracked();
                registry.with_value(|registry| {
                    resolve_visibility(change.user_id.as_ref(), registry, &special, |id| {
                        current.user_info.clone().filter(|u| &u.id == id)
                    })
                })
            },
            move |flags| tabs.apply_visibility(flags),
        );

        // Session restore may have signed us in before this subscription
        // existed; replay the current state once.
        let user_id = auth_state.with_untracked(|s| s.user_info.as_ref().map(|u| u.id));
        events.emit(&AuthChange { user_id });
    }

    let entries = tabs.registry.with_value(|r| r.entries().to_vec());

    view! {
        <div class="app-layout">
            <Header />
            <div class="app-main">
                <TabBar />
                <div class="tab-content">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            let bootstrap = bootstrap.clone();
                            view! { <TabPage entry=entry bootstrap=bootstrap /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
