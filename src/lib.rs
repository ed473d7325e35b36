//! Chat web frontend: routes and authentication guard
//!
//! The route table in [`routes`] maps paths to views and is mounted through
//! `leptos_router`. Before a matched view is mounted, [`router::AppRouter`]
//! runs the [`guard::AuthGuard`] against an injected
//! [`auth::AuthStateProvider`]:
//!
//! - anonymous users on protected routes go to `/login`
//! - authenticated users on `/login` or `/signup` go to `/chat`
//! - `/` is an alias for `/chat`, guarded like any other hop
//!
//! ```
//! use chat_web::auth::MemoryAuth;
//! use chat_web::guard::Navigation;
//! use chat_web::router::AppRouter;
//!
//! let router = AppRouter::default();
//! let res = router.resolve(&Navigation::new("/chat"), &MemoryAuth::anonymous()).unwrap();
//! assert_eq!(res.path, "/login");
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod pages;
pub mod router;
pub mod routes;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
    path, NavigateOptions,
};

use auth::{LocalStorageAuth, SharedAuth};
use config::AppConfig;
use guard::Navigation;
use pages::NotFoundPage;
use router::AppRouter;
use routes::{Route as RouteEntry, CHAT, CHAT_PATH, LOGIN, PROFILE, SIGNUP};

/// Main application component, reading the token from local storage.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let auth: SharedAuth = Arc::new(LocalStorageAuth::new(config.token_key));
    view! { <GuardedApp auth=auth /> }
}

/// Application shell with an explicitly injected auth provider.
#[component]
pub fn GuardedApp(auth: SharedAuth) -> impl IntoView {
    provide_meta_context();
    provide_context(auth);
    provide_context(AppRouter::default());
    provide_context(LastPath(StoredValue::new(None)));

    view! {
        <Router>
            <main class="min-h-screen bg-slate-900 text-slate-100">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=CHAT_PATH /> } />
                    <Route path=path!("/login") view=|| view! { <GuardedRoute route=LOGIN /> } />
                    <Route path=path!("/signup") view=|| view! { <GuardedRoute route=SIGNUP /> } />
                    <Route path=path!("/chat") view=|| view! { <GuardedRoute route=CHAT /> } />
                    <Route path=path!("/profile") view=|| view! { <GuardedRoute route=PROFILE /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Path of the last view that was allowed to mount, used as the origin of
/// the next navigation.
#[derive(Clone, Copy)]
struct LastPath(StoredValue<Option<String>>);

/// Runs the auth guard for a route matched by the router.
///
/// When the guard allows the navigation the view mounts at the current URL,
/// query and fragment untouched. Otherwise the history entry is replaced with
/// the redirect target and nothing is rendered.
#[component]
fn GuardedRoute(route: RouteEntry) -> impl IntoView {
    let auth = expect_context::<SharedAuth>();
    let router = expect_context::<AppRouter>();
    let LastPath(last_path) = expect_context::<LastPath>();
    let location = use_location();
    let navigate = use_navigate();

    let resolution = Memo::new(move |_| {
        let to = location.pathname.get();
        let from = last_path.get_value();
        let navigation = Navigation {
            to: &to,
            from: from.as_deref(),
        };
        match router.resolve_matched(Some(&route), &navigation, auth.as_ref()) {
            Ok(resolution) => Some(resolution),
            Err(err) => {
                tracing::error!(error = %err, "navigation failed");
                None
            }
        }
    });

    Effect::new(move |_| match resolution.get() {
        Some(res) if res.redirected() => {
            navigate(
                &res.path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
        Some(res) => last_path.set_value(Some(res.requested)),
        None => {}
    });

    move || match resolution.get() {
        Some(res) if res.redirected() => ().into_any(),
        Some(res) => match res.view {
            Some(view) => pages::render(view),
            None => view! { <NotFoundPage /> }.into_any(),
        },
        None => view! { <NotFoundPage /> }.into_any(),
    }
}
