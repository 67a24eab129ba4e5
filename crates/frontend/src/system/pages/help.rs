use leptos::prelude::*;

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <div class="help-page">
            <h2>"Help"</h2>
            <p>"Knowledge Desk is a workspace for chatting with your document collections."</p>
            <ul>
                <li>"Chat: ask questions about indexed documents."</li>
                <li>"Index tabs: browse the configured document collections."</li>
                <li>"Admin: manage user accounts (administrators only)."</li>
                <li>"Settings: per-browser UI preferences."</li>
            </ul>
        </div>
    }
}
