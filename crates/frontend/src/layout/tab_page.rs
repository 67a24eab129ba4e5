//! TabPage component - wrapper для отображения контента таба.
//!
//! Контент создаётся один раз; показ/скрытие делается CSS-классом по
//! активности и видимости таба.

use contracts::system::config::UiBootstrap;
use contracts::system::tabs::TabEntry;
use leptos::prelude::*;

use super::tab_content::render_tab_content;
use crate::layout::tabs_context::TabsContext;

#[component]
pub fn TabPage(entry: TabEntry, bootstrap: UiBootstrap) -> impl IntoView {
    let tabs = use_context::<TabsContext>().expect("TabsContext context not found");

    let key = entry.key.clone();
    let shown = {
        let key = key.clone();
        move || tabs.is_active(&key) && tabs.is_visible(&key)
    };

    let content = render_tab_content(&entry.key, &bootstrap);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !shown()
            data-tab-key=key
        >
            {content}
        </div>
    }
}
