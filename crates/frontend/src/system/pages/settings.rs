use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const SETTINGS_KEY: &str = "kd_ui_settings";

/// Per-browser UI preferences, persisted as JSON in localStorage.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
struct SettingsForm {
    language: String,
    compact_layout: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            compact_layout: false,
        }
    }
}

fn load_settings() -> SettingsForm {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SETTINGS_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn save_settings(form: &SettingsForm) {
    let Ok(raw) = serde_json::to_string(form) else {
        return;
    };
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SETTINGS_KEY, &raw);
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let initial = load_settings();
    let (language, set_language) = create_signal(initial.language.clone());
    let (compact_layout, set_compact_layout) = create_signal(initial.compact_layout);
    let (saved, set_saved) = create_signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        save_settings(&SettingsForm {
            language: language.get(),
            compact_layout: compact_layout.get(),
        });
        set_saved.set(true);
    };

    view! {
        <div class="settings-page">
            <h2>"Settings"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="language">"Language"</label>
                    <select
                        id="language"
                        prop:value=move || language.get()
                        on:change=move |ev| {
                            set_saved.set(false);
                            set_language.set(event_target_value(&ev));
                        }
                    >
                        <option value="en">"English"</option>
                        <option value="ru">"Русский"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || compact_layout.get()
                            on:change=move |ev| {
                                set_saved.set(false);
                                set_compact_layout.set(event_target_checked(&ev));
                            }
                        />
                        " Compact layout"
                    </label>
                </div>

                <button type="submit" class="btn-primary">"Save"</button>
                <Show when=move || saved.get()>
                    <span class="settings-page__saved">"Saved"</span>
                </Show>
            </form>
        </div>
    }
}
