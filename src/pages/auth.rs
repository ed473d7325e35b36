//! Login and signup entry points
//!
//! Credential forms and token issuance belong to the auth flow; these views
//! only provide the mount points the guard redirects to.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::{LOGIN_PATH, SIGNUP_PATH, View};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text=View::Login.title() />
        <AuthCard
            heading="Welcome Back"
            prompt="Don't have an account? "
            link_href=SIGNUP_PATH
            link_label="Sign up"
        />
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <Title text=View::Signup.title() />
        <AuthCard
            heading="Create Account"
            prompt="Already have an account? "
            link_href=LOGIN_PATH
            link_label="Sign in"
        />
    }
}

#[component]
fn AuthCard(
    heading: &'static str,
    prompt: &'static str,
    link_href: &'static str,
    link_label: &'static str,
) -> impl IntoView {
    view! {
        <section class="auth-container">
            <div class="auth-card">
                <h1 class="auth-title">{heading}</h1>
                <div id="auth-form" class="auth-form"></div>
                <div class="auth-footer">
                    {prompt}
                    <a href=link_href class="auth-link">{link_label}</a>
                </div>
            </div>
        </section>
    }
}
