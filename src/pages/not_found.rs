use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::CHAT_PATH;

/// 404 page for paths outside the route table.
///
/// Links to the chat; the guard sends anonymous visitors on to the login page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"This page does not exist."</p>
                <a href=CHAT_PATH class="btn btn-primary">
                    "Back to chat"
                </a>
            </div>
        </div>
    }
}
