//! Реактивное состояние таб-шелла.
//!
//! Набор табов фиксируется при старте (см. `app_shell::build_registry`);
//! дальше меняются только видимость и активный таб.

use contracts::system::tabs::TabRegistry;
use leptos::logging::log;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct TabsContext {
    /// Registration-ordered tab set; read-only after construction.
    pub registry: StoredValue<TabRegistry>,
    /// One flag per registered tab, same order as the registry.
    pub visibility: RwSignal<Vec<bool>>,
    pub active: RwSignal<Option<String>>,
}

impl TabsContext {
    pub fn new(registry: TabRegistry) -> Self {
        let initial = registry.initial_visibility();
        let active = RwSignal::new(first_visible_key(&registry, &initial));
        Self {
            registry: StoredValue::new(registry),
            visibility: RwSignal::new(initial),
            active,
        }
    }

    /// Apply a freshly resolved visibility vector. If the active tab just
    /// became hidden, fall over to the first visible one.
    pub fn apply_visibility(&self, flags: Vec<bool>) {
        debug_assert_eq!(flags.len(), self.registry.with_value(|r| r.len()));

        let active_hidden = self.active.with_untracked(|active| match active {
            Some(key) => self
                .registry
                .with_value(|r| r.position(key))
                .map_or(true, |i| !flags.get(i).copied().unwrap_or(false)),
            None => true,
        });

        self.visibility.set(flags);

        if active_hidden {
            let next = self
                .registry
                .with_value(|r| first_visible_key(r, &self.visibility.get_untracked()));
            log!("🔶 active tab hidden, switching to {:?}", next);
            self.active.set(next);
        }
    }

    pub fn activate_tab(&self, key: &str) {
        log!("🔶 activate_tab: key='{}'", key);
        self.active.set(Some(key.to_string()));
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active.as_deref() == Some(key))
    }

    pub fn is_visible(&self, key: &str) -> bool {
        match self.registry.with_value(|r| r.position(key)) {
            Some(i) => self.visibility.with(|v| v.get(i).copied().unwrap_or(false)),
            None => false,
        }
    }

    fn is_visible_untracked(&self, key: &str) -> bool {
        match self.registry.with_value(|r| r.position(key)) {
            Some(i) => self
                .visibility
                .with_untracked(|v| v.get(i).copied().unwrap_or(false)),
            None => false,
        }
    }

    /// Синхронизация активного таба с URL (?active=...).
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            if self.is_visible_untracked(active_key) {
                self.activate_tab(active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string = serde_qs::to_string(&HashMap::from([(
                    "active".to_string(),
                    active_key.clone(),
                )]))
                .unwrap_or_default();

                let new_url = format!("?{}", query_string);

                // Use untracked reads to avoid extra reactive dependencies
                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }
}

fn first_visible_key(registry: &TabRegistry, flags: &[bool]) -> Option<String> {
    registry
        .entries()
        .iter()
        .zip(flags)
        .find(|(_, visible)| **visible)
        .map(|(entry, _)| entry.key.clone())
}
