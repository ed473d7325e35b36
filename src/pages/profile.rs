use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::{CHAT_PATH, View};

/// Account profile view; only reachable with a token.
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Title text=View::Profile.title() />
        <header class="header">
            <h1 class="text-xl font-bold">"Profile"</h1>
            <nav>
                <a href=CHAT_PATH class="btn btn-ghost">"Back to chat"</a>
            </nav>
        </header>
        <section id="profile" class="profile-container"></section>
    }
}
