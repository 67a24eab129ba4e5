use contracts::system::config::IndexInfo;
use leptos::prelude::*;

/// Per-index tab: one per configured document collection.
#[component]
pub fn IndexPage(index: IndexInfo) -> impl IntoView {
    let title = format!("{} Index", index.name);
    let description = format!(
        "Browse and manage documents in the \"{}\" collection.",
        index.name
    );

    view! {
        <div class="index-page">
            <h2>{title}</h2>
            <p>{description}</p>
            <p class="index-page__empty">"No documents have been indexed yet."</p>
        </div>
    }
}
