use leptos::prelude::*;

use crate::layout::tabs_context::TabsContext;

/// Полоса табов. Скрытые табы не убираются из DOM, а прячутся классом,
/// чтобы порядок регистрации оставался стабильным.
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs = use_context::<TabsContext>().expect("TabsContext context not found");
    let entries = tabs.registry.with_value(|r| r.entries().to_vec());

    view! {
        <div class="tab-strip">
            {entries
                .into_iter()
                .map(|entry| {
                    let key_for_active = entry.key.clone();
                    let key_for_visible = entry.key.clone();
                    let key_for_click = entry.key.clone();
                    view! {
                        <button
                            class="tab-strip__item"
                            class:tab-strip__item--active=move || tabs.is_active(&key_for_active)
                            class:tab-strip__item--hidden=move || !tabs.is_visible(&key_for_visible)
                            on:click=move |_| tabs.activate_tab(&key_for_click)
                        >
                            {entry.title.clone()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
