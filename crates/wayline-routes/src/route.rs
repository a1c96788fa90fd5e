//! The route table: every screen the application can navigate to.
//!
//! Routes are a closed set — there are no dynamic segments, so the whole
//! table fits in one enum. This is deliberate: an enum makes "unknown
//! route" unrepresentable past the parsing boundary, and the compiler
//! checks that every match over routes is exhaustive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RouteError;

/// A symbolic path identifying one screen of the application.
///
/// The variants mirror the fixed route table:
///
/// | Route             | Path               | Page module       |
/// |-------------------|--------------------|-------------------|
/// | `Root`            | `/`                | `home`            |
/// | `Home`            | `/home`            | `home`            |
/// | `Landing`         | `/landing`         | `landing`         |
/// | `Login`           | `/login`           | `login`           |
/// | `Register`        | `/register`        | `register`        |
/// | `Dashboard`       | `/dashboard`       | `dashboard`       |
/// | `Statistics`      | `/statistics`      | `statistics`      |
/// | `ProductsUpload`  | `/products/upload` | `products_upload` |
///
/// On the wire (persisted session records) a route is just its path
/// string, so `Route::Dashboard` serializes to `"/dashboard"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum Route {
    Root,
    Home,
    Landing,
    Login,
    Register,
    Dashboard,
    Statistics,
    ProductsUpload,
}

impl Route {
    /// Every route, in table order. Handy for registries and tests.
    pub const ALL: [Route; 8] = [
        Route::Root,
        Route::Home,
        Route::Landing,
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Statistics,
        Route::ProductsUpload,
    ];

    /// The symbolic path for this route.
    pub fn as_path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Home => "/home",
            Route::Landing => "/landing",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Statistics => "/statistics",
            Route::ProductsUpload => "/products/upload",
        }
    }

    /// The page module this route mounts.
    ///
    /// `/` and `/home` share the home page — the bare path is just the
    /// canonical entry point.
    pub fn page_name(self) -> &'static str {
        match self {
            Route::Root | Route::Home => "home",
            Route::Landing => "landing",
            Route::Login => "login",
            Route::Register => "register",
            Route::Dashboard => "dashboard",
            Route::Statistics => "statistics",
            Route::ProductsUpload => "products_upload",
        }
    }

    /// Resolves an exact path to a route. `None` for anything outside
    /// the table.
    pub fn parse(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.as_path() == path)
    }

    /// Resolves a URL hash fragment to a route.
    ///
    /// Accepts `"#/dashboard"`, `"/dashboard"`, or `""`. An empty hash
    /// resolves to `/` (startup default); an unknown path falls back to
    /// the landing page rather than failing — raw hashes are user input
    /// and must always resolve to *some* screen.
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.strip_prefix('#').unwrap_or(hash);
        if path.is_empty() {
            return Route::Root;
        }
        Route::parse(path).unwrap_or(Route::Landing)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

// Serde bridges: a route travels as its path string.

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.as_path().to_string()
    }
}

impl TryFrom<String> for Route {
    type Error = RouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Route::parse(&value).ok_or(RouteError::Unknown(value))
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // parse()
    // =====================================================================

    #[test]
    fn test_parse_every_table_path_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.as_path()), Some(route));
        }
    }

    #[test]
    fn test_parse_unknown_path_returns_none() {
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::parse("dashboard"), None); // missing slash
        assert_eq!(Route::parse(""), None);
    }

    // =====================================================================
    // from_hash()
    // =====================================================================

    #[test]
    fn test_from_hash_known_route_resolves() {
        assert_eq!(Route::from_hash("#/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_hash("/products/upload"), Route::ProductsUpload);
    }

    #[test]
    fn test_from_hash_empty_falls_back_to_root() {
        assert_eq!(Route::from_hash(""), Route::Root);
        assert_eq!(Route::from_hash("#"), Route::Root);
    }

    #[test]
    fn test_from_hash_unknown_falls_back_to_landing() {
        assert_eq!(Route::from_hash("#/does-not-exist"), Route::Landing);
        assert_eq!(Route::from_hash("#garbage"), Route::Landing);
    }

    // =====================================================================
    // Serde wire form
    // =====================================================================

    #[test]
    fn test_route_serializes_as_path_string() {
        let json = serde_json::to_string(&Route::ProductsUpload).unwrap();
        assert_eq!(json, "\"/products/upload\"");
    }

    #[test]
    fn test_route_deserializes_from_path_string() {
        let route: Route = serde_json::from_str("\"/login\"").unwrap();
        assert_eq!(route, Route::Login);
    }

    #[test]
    fn test_route_deserialize_unknown_path_fails() {
        let result: Result<Route, _> = serde_json::from_str("\"/nope\"");
        assert!(result.is_err());
    }

    // =====================================================================
    // page_name() / Display
    // =====================================================================

    #[test]
    fn test_root_and_home_share_page() {
        assert_eq!(Route::Root.page_name(), "home");
        assert_eq!(Route::Home.page_name(), "home");
    }

    #[test]
    fn test_display_is_path() {
        assert_eq!(Route::Statistics.to_string(), "/statistics");
        assert_eq!(Route::Root.to_string(), "/");
    }
}
