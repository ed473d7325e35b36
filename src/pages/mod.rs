//! Views mounted by the route table

pub mod auth;
pub mod chat;
pub mod not_found;
pub mod profile;

pub use auth::{LoginPage, SignupPage};
pub use chat::ChatPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;

use crate::routes::View;
use leptos::prelude::*;

/// Renders the component for `view`.
pub fn render(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginPage /> }.into_any(),
        View::Signup => view! { <SignupPage /> }.into_any(),
        View::Chat => view! { <ChatPage /> }.into_any(),
        View::Profile => view! { <ProfilePage /> }.into_any(),
    }
}
