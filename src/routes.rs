//! Static route table
//!
//! Declares which views exist, where they live and which of them need a
//! token. URL matching itself is done by `leptos_router` when the table is
//! mounted in [`crate::App`]; the table is also looked up directly, by exact
//! path, when following redirects.

/// Views the rendering layer knows how to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Signup,
    Chat,
    Profile,
}

impl View {
    /// Document title shown while the view is mounted.
    pub fn title(self) -> &'static str {
        match self {
            View::Login => "Sign In",
            View::Signup => "Create Account",
            View::Chat => "Chat",
            View::Profile => "Profile",
        }
    }
}

/// What a matched route leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    View(View),
    /// Path alias: navigation continues at the given path.
    Redirect(&'static str),
}

/// A single entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub target: Target,
    pub requires_auth: bool,
}

impl Route {
    /// Public route mounting `view`.
    pub const fn view(path: &'static str, view: View) -> Self {
        Self {
            path,
            target: Target::View(view),
            requires_auth: false,
        }
    }

    /// Route mounting `view` that only authenticated users may enter.
    pub const fn protected(path: &'static str, view: View) -> Self {
        Self {
            path,
            target: Target::View(view),
            requires_auth: true,
        }
    }

    /// Alias that forwards navigation to `to`.
    pub const fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            target: Target::Redirect(to),
            requires_auth: false,
        }
    }

    /// The view this route mounts, if it is not an alias.
    pub fn mounted_view(&self) -> Option<View> {
        match self.target {
            Target::View(view) => Some(view),
            Target::Redirect(_) => None,
        }
    }
}

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const CHAT_PATH: &str = "/chat";
pub const PROFILE_PATH: &str = "/profile";

pub const ROOT: Route = Route::redirect(ROOT_PATH, CHAT_PATH);
pub const LOGIN: Route = Route::view(LOGIN_PATH, View::Login);
pub const SIGNUP: Route = Route::view(SIGNUP_PATH, View::Signup);
pub const CHAT: Route = Route::protected(CHAT_PATH, View::Chat);
pub const PROFILE: Route = Route::protected(PROFILE_PATH, View::Profile);

/// The application's routes, in declaration order.
pub static ROUTES: &[Route] = &[ROOT, LOGIN, SIGNUP, CHAT, PROFILE];

/// Ordered, immutable set of routes.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl RouteTable {
    pub const fn new(routes: &'static [Route]) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    /// Returns the route declared at exactly `path`.
    pub fn get(&self, path: &str) -> Option<&'static Route> {
        let path = strip_query(path);
        self.routes.iter().find(|route| route.path == path)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(ROUTES)
    }
}

/// Drops the query string and fragment, leaving the path as typed.
pub fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("/chat"), "/chat");
        assert_eq!(strip_query("/chat?tab=1"), "/chat");
        assert_eq!(strip_query("/chat/#bottom"), "/chat/");
        assert_eq!(strip_query("/Login?next=/chat"), "/Login");
        assert_eq!(strip_query(""), "");
    }

    #[test]
    fn test_table_order_and_flags() {
        let paths: Vec<_> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths, ["/", "/login", "/signup", "/chat", "/profile"]);

        let protected: Vec<_> = ROUTES
            .iter()
            .filter(|r| r.requires_auth)
            .map(|r| r.path)
            .collect();
        assert_eq!(protected, [CHAT_PATH, PROFILE_PATH]);
    }

    #[test]
    fn test_root_is_alias_for_chat() {
        let table = RouteTable::default();
        let root = table.get("/").unwrap();
        assert_eq!(root.target, Target::Redirect(CHAT_PATH));
        assert_eq!(root.mounted_view(), None);
    }

    #[test]
    fn test_get_is_exact() {
        let table = RouteTable::default();
        assert_eq!(table.get("/chat"), Some(&CHAT));
        assert_eq!(table.get("/chat?x=1"), Some(&CHAT));
        assert!(table.get("/Chat").is_none());
        assert!(table.get("/chat/").is_none());
        assert!(table.get("/settings").is_none());
    }
}
