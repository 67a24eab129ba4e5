//! Tab content registry - единственный источник правды для маппинга
//! tab key → View.

use contracts::system::config::UiBootstrap;
use leptos::logging::log;
use leptos::prelude::*;

use crate::system::pages::admin::AdminPage;
use crate::system::pages::chat::ChatPage;
use crate::system::pages::help::HelpPage;
use crate::system::pages::index::IndexPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::settings::SettingsPage;

/// Рендерит контент таба по его ключу. Табы индексов ищутся по суффиксу
/// `-tab` среди сконфигурированных индексов.
pub fn render_tab_content(key: &str, bootstrap: &UiBootstrap) -> AnyView {
    match key {
        "login-tab" => view! { <LoginPage /> }.into_any(),
        "chat-tab" => view! { <ChatPage /> }.into_any(),
        "admin-tab" => view! { <AdminPage /> }.into_any(),
        "settings-tab" => view! { <SettingsPage /> }.into_any(),
        "help-tab" => view! { <HelpPage /> }.into_any(),
        k => {
            let index = k
                .strip_suffix("-tab")
                .and_then(|id| bootstrap.indices.iter().find(|i| i.id == id));
            match index {
                Some(index) => view! { <IndexPage index=index.clone() /> }.into_any(),
                None => {
                    log!("⚠️ Unknown tab type: {}", k);
                    view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
                }
            }
        }
    }
}
