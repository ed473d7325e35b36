//! Pre-navigation authentication guard
//!
//! Evaluated once per navigation attempt, in order:
//!
//! 1. protected destination and no token: redirect to the login page
//! 2. token present and the requested path is a guest-only page: redirect to
//!    the chat
//! 3. otherwise proceed
//!
//! Rule 2 compares the path exactly as requested (query and fragment aside),
//! so `/Login` or `/login/` are not treated as the login page even when the
//! router mounts the login view for them.

use crate::auth::AuthStateProvider;
use crate::routes::{strip_query, Route, CHAT_PATH, LOGIN_PATH, SIGNUP_PATH};

/// A navigation request. `to` is the path as requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation<'a> {
    pub to: &'a str,
    pub from: Option<&'a str>,
}

impl<'a> Navigation<'a> {
    pub fn new(to: &'a str) -> Self {
        Self { to, from: None }
    }

    pub fn with_origin(mut self, from: &'a str) -> Self {
        self.from = Some(from);
        self
    }
}

/// Decision taken by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(&'static str),
}

/// Authentication guard configuration.
#[derive(Debug, Clone, Copy)]
pub struct AuthGuard {
    login_path: &'static str,
    landing_path: &'static str,
    guest_only: &'static [&'static str],
}

impl AuthGuard {
    pub const fn new(
        login_path: &'static str,
        landing_path: &'static str,
        guest_only: &'static [&'static str],
    ) -> Self {
        Self {
            login_path,
            landing_path,
            guest_only,
        }
    }

    /// Decides whether navigation to `route` may proceed.
    ///
    /// `route` is the matched destination, `None` for unknown paths. The
    /// token is read from `auth` exactly once.
    pub fn check(
        &self,
        navigation: &Navigation<'_>,
        route: Option<&Route>,
        auth: &dyn AuthStateProvider,
    ) -> GuardOutcome {
        let authenticated = auth.is_authenticated();
        let requires_auth = route.is_some_and(|r| r.requires_auth);
        let requested = strip_query(navigation.to);
        let guest_only = self.guest_only.iter().any(|path| *path == requested);

        let outcome = if requires_auth && !authenticated {
            GuardOutcome::Redirect(self.login_path)
        } else if authenticated && guest_only {
            GuardOutcome::Redirect(self.landing_path)
        } else {
            GuardOutcome::Proceed
        };

        tracing::debug!(
            to = navigation.to,
            from = navigation.from.unwrap_or(""),
            authenticated,
            ?outcome,
            "auth guard evaluated"
        );
        outcome
    }
}

impl Default for AuthGuard {
    fn default() -> Self {
        const GUEST_ONLY: &[&str] = &[LOGIN_PATH, SIGNUP_PATH];
        Self::new(LOGIN_PATH, CHAT_PATH, GUEST_ONLY)
    }
}
