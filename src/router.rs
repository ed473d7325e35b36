//! Navigation resolution
//!
//! Combines the route table and the auth guard. Alias routes and guard
//! redirects are followed, and the guard runs again after every redirect,
//! until the navigation settles on a location that proceeds. A navigation
//! that proceeds without redirecting stays at the path as requested.

use crate::auth::AuthStateProvider;
use crate::error::{Result, RouterError};
use crate::guard::{AuthGuard, GuardOutcome, Navigation};
use crate::routes::{strip_query, Route, RouteTable, Target, View};

/// Maximum redirects followed before a navigation is considered looping.
pub const MAX_REDIRECTS: u8 = 10;

/// Where a navigation ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Path originally requested, without query or fragment.
    pub requested: String,
    /// Final path: `requested` when nothing redirected, else the last target.
    pub path: String,
    /// View mounted at `path`; `None` when no route matches.
    pub view: Option<View>,
    /// Number of redirects followed.
    pub redirects: u8,
}

impl Resolution {
    pub fn redirected(&self) -> bool {
        self.redirects > 0
    }
}

/// Route table plus guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppRouter {
    table: RouteTable,
    guard: AuthGuard,
}

impl AppRouter {
    pub fn new(table: RouteTable, guard: AuthGuard) -> Self {
        Self { table, guard }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Runs the guard for a single hop without following redirects.
    pub fn check(
        &self,
        navigation: &Navigation<'_>,
        auth: &dyn AuthStateProvider,
    ) -> GuardOutcome {
        self.guard
            .check(navigation, self.table.get(navigation.to), auth)
    }

    /// Resolves `navigation`, looking the destination up by exact path.
    pub fn resolve(
        &self,
        navigation: &Navigation<'_>,
        auth: &dyn AuthStateProvider,
    ) -> Result<Resolution> {
        self.resolve_matched(self.table.get(navigation.to), navigation, auth)
    }

    /// Resolves `navigation` whose destination has already been matched to
    /// `route`, e.g. by `leptos_router`. Redirect targets are looked up in
    /// the table.
    pub fn resolve_matched(
        &self,
        route: Option<&Route>,
        navigation: &Navigation<'_>,
        auth: &dyn AuthStateProvider,
    ) -> Result<Resolution> {
        let requested = strip_query(navigation.to).to_string();
        let mut current = requested.clone();
        let mut route = route.copied();
        let mut redirects = 0u8;

        loop {
            let hop = Navigation {
                to: &current,
                from: navigation.from,
            };

            let next = match route.map(|r| r.target) {
                Some(Target::Redirect(to)) => to,
                _ => match self.guard.check(&hop, route.as_ref(), auth) {
                    GuardOutcome::Redirect(to) => to,
                    GuardOutcome::Proceed => {
                        if redirects > 0 {
                            tracing::info!(
                                requested = %requested,
                                path = %current,
                                redirects,
                                "navigation redirected"
                            );
                        }
                        return Ok(Resolution {
                            requested,
                            path: current,
                            view: route.and_then(|r| r.mounted_view()),
                            redirects,
                        });
                    }
                },
            };

            if redirects >= MAX_REDIRECTS {
                return Err(RouterError::RedirectLoop {
                    path: requested,
                    hops: redirects,
                });
            }
            redirects += 1;
            current = next.to_string();
            route = self.table.get(next).copied();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryAuth;
    use crate::routes::{CHAT, LOGIN, PROFILE};

    #[test]
    fn test_root_resolves_through_chat_to_login_when_anonymous() {
        let router = AppRouter::default();
        let res = router
            .resolve(&Navigation::new("/"), &MemoryAuth::anonymous())
            .unwrap();
        assert_eq!(res.path, "/login");
        assert_eq!(res.view, Some(View::Login));
        assert_eq!(res.redirects, 2);
        assert_eq!(res.requested, "/");
    }

    #[test]
    fn test_root_resolves_to_chat_when_authenticated() {
        let router = AppRouter::default();
        let res = router
            .resolve(&Navigation::new("/"), &MemoryAuth::with_token("t"))
            .unwrap();
        assert_eq!(res.path, "/chat");
        assert_eq!(res.view, Some(View::Chat));
        assert_eq!(res.redirects, 1);
    }

    #[test]
    fn test_direct_hit_is_not_redirected() {
        let router = AppRouter::default();
        let res = router
            .resolve(&Navigation::new("/profile"), &MemoryAuth::with_token("t"))
            .unwrap();
        assert!(!res.redirected());
        assert_eq!(res.path, "/profile");
    }

    #[test]
    fn test_matched_route_keeps_requested_path() {
        let router = AppRouter::default();
        let res = router
            .resolve_matched(
                Some(&PROFILE),
                &Navigation::new("/Profile/?tab=keys"),
                &MemoryAuth::with_token("t"),
            )
            .unwrap();
        assert_eq!(res.path, "/Profile/");
        assert_eq!(res.view, Some(View::Profile));
        assert!(!res.redirected());
    }

    #[test]
    fn test_matched_guest_variant_proceeds_with_token() {
        let router = AppRouter::default();
        let auth = MemoryAuth::with_token("t");
        for path in ["/Login", "/login/"] {
            let res = router
                .resolve_matched(Some(&LOGIN), &Navigation::new(path), &auth)
                .unwrap();
            assert!(!res.redirected(), "path {path}");
            assert_eq!(res.view, Some(View::Login));
        }
    }

    #[test]
    fn test_matched_protected_redirect_drops_query() {
        let router = AppRouter::default();
        let res = router
            .resolve_matched(
                Some(&CHAT),
                &Navigation::new("/chat/#bottom"),
                &MemoryAuth::anonymous(),
            )
            .unwrap();
        assert_eq!(res.requested, "/chat/");
        assert_eq!(res.path, "/login");
        assert_eq!(res.redirects, 1);
    }

    #[test]
    fn test_unknown_path_has_no_view() {
        let router = AppRouter::default();
        let res = router
            .resolve(&Navigation::new("/missing/"), &MemoryAuth::anonymous())
            .unwrap();
        assert_eq!(res.path, "/missing/");
        assert_eq!(res.view, None);
        assert!(!res.redirected());
    }

    #[test]
    fn test_alias_cycle_is_reported() {
        static LOOP: &[Route] = &[Route::redirect("/a", "/b"), Route::redirect("/b", "/a")];
        let router = AppRouter::new(RouteTable::new(LOOP), AuthGuard::default());
        let err = router
            .resolve(&Navigation::new("/a"), &MemoryAuth::anonymous())
            .unwrap_err();
        assert_eq!(
            err,
            RouterError::RedirectLoop {
                path: "/a".to_string(),
                hops: MAX_REDIRECTS,
            }
        );
    }

    #[test]
    fn test_guard_cycle_is_reported() {
        // login page itself protected: anonymous users bounce forever
        static BROKEN: &[Route] = &[Route::protected("/login", View::Login)];
        let router = AppRouter::new(RouteTable::new(BROKEN), AuthGuard::default());
        let err = router
            .resolve(&Navigation::new("/login"), &MemoryAuth::anonymous())
            .unwrap_err();
        assert!(matches!(err, RouterError::RedirectLoop { .. }));
    }

    #[test]
    fn test_single_hop_check() {
        let router = AppRouter::default();
        let outcome = router.check(&Navigation::new("/"), &MemoryAuth::anonymous());
        assert_eq!(outcome, GuardOutcome::Proceed);
    }
}
