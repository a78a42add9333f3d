//! View Routes
//!
//! Maps browser paths to dashboard views.

use std::fmt;

/// A dashboard view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Levels,
    Members,
    Servers,
    Server { id: String },
    NotFound,
}

impl Route {
    /// Match a path against the route table
    ///
    /// Query strings, fragments and trailing slashes are ignored. Anything
    /// unmatched is [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["levels"] => Route::Levels,
            ["members"] => Route::Members,
            ["servers"] => Route::Servers,
            ["servers", id] => Route::Server { id: id.to_string() },
            _ => Route::NotFound,
        }
    }

    /// Canonical path; `NotFound` has none and renders as `/404`
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Levels => "/levels".to_string(),
            Route::Members => "/members".to_string(),
            Route::Servers => "/servers".to_string(),
            Route::Server { id } => format!("/servers/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// View name
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Levels => "Levels",
            Route::Members => "Members",
            Route::Servers => "Servers",
            Route::Server { .. } => "Server",
            Route::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.path())
    }
}

/// Route table mounted under a base path
#[derive(Debug, Clone)]
pub struct Router {
    base: String,
}

impl Router {
    /// `base` is the prefix the app is served under, e.g. `/` or `/dashboard/`
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve a full browser path; paths outside the base are not found
    pub fn resolve(&self, path: &str) -> Route {
        if self.base.is_empty() {
            return Route::resolve(path);
        }

        match path.strip_prefix(&self.base) {
            Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => {
                Route::resolve(rest)
            }
            _ => Route::NotFound,
        }
    }

    /// Browser path for a route under the base
    pub fn href(&self, route: &Route) -> String {
        format!("{}{}", self.base, route.path())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_table() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/about"), Route::About);
        assert_eq!(Route::resolve("/levels/"), Route::Levels);
        assert_eq!(Route::resolve("/members?page=2"), Route::Members);
        assert_eq!(Route::resolve("/servers#top"), Route::Servers);
        assert_eq!(
            Route::resolve("/servers/1234"),
            Route::Server {
                id: "1234".to_string()
            }
        );
    }

    #[test]
    fn test_unmatched_paths() {
        assert_eq!(Route::resolve("/servers/1/members"), Route::NotFound);
        assert_eq!(Route::resolve("/nope"), Route::NotFound);
        assert_eq!(Route::NotFound.name(), "NotFound");
    }

    #[test]
    fn test_path_round_trip_for_server() {
        let route = Route::Server {
            id: "77".to_string(),
        };
        assert_eq!(Route::resolve(&route.path()), route);
        assert_eq!(route.to_string(), "Server (/servers/77)");
    }

    #[test]
    fn test_router_base() {
        let router = Router::new("/dashboard/");
        assert_eq!(router.resolve("/dashboard"), Route::Home);
        assert_eq!(router.resolve("/dashboard/levels"), Route::Levels);
        assert_eq!(router.resolve("/dashboardx/levels"), Route::NotFound);
        assert_eq!(router.resolve("/levels"), Route::NotFound);
        assert_eq!(router.href(&Route::Members), "/dashboard/members");

        let root = Router::default();
        assert_eq!(root.base(), "");
        assert_eq!(root.resolve("/servers"), Route::Servers);
        assert_eq!(root.href(&Route::Home), "/");
    }
}
