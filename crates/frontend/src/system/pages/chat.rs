use leptos::prelude::*;
use uuid::Uuid;

/// Chat tab. The conversation pane is a thin shell: messages are kept
/// locally until an answering engine is attached.
#[component]
pub fn ChatPage() -> impl IntoView {
    let messages: RwSignal<Vec<(Uuid, String)>> = RwSignal::new(Vec::new());
    let (draft, set_draft) = create_signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.trim().is_empty() {
            return;
        }
        messages.update(|list| list.push((Uuid::new_v4(), text)));
        set_draft.set(String::new());
    };

    view! {
        <div class="chat-page">
            <h2>"Chat"</h2>
            <div class="chat-page__history">
                <Show when=move || messages.get().is_empty()>
                    <p class="chat-page__empty">
                        "Ask a question about your documents to get started."
                    </p>
                </Show>
                <For
                    each=move || messages.get()
                    key=|(id, _)| *id
                    children=|(_, text): (Uuid, String)| {
                        view! { <div class="chat-page__message">{text}</div> }
                    }
                />
            </div>
            <form class="chat-page__composer" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Type a message"
                    value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit">"Send"</button>
            </form>
        </div>
    }
}
