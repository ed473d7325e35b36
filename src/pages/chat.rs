use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::{PROFILE_PATH, View};

/// Conversation view; only reachable with a token.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <Title text=View::Chat.title() />
        <header class="header">
            <h1 class="text-xl font-bold">"Chat"</h1>
            <nav>
                <a href=PROFILE_PATH class="btn btn-ghost">"Profile"</a>
            </nav>
        </header>
        <section id="chat" class="chat-container"></section>
    }
}
