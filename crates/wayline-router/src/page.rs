//! Pages: what gets mounted when a navigation lands.
//!
//! The router doesn't know what a page draws — it knows how to obtain
//! one ([`PageRegistry`]) and where to mount it ([`Container`]). The
//! registry is a static map from route to constructor, built once at
//! startup: routes are a closed set, so there is nothing to gain from
//! stringly-keyed dynamic loading, while lazy construction is kept — a
//! page value exists only while its route is current.

use std::collections::HashMap;

use wayline_routes::Route;

use crate::RouterError;

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// The mount point a page renders into — the root document container.
///
/// Holds the rendered markup of the current page. Cleared before every
/// mount so a page never sees its predecessor's output.
#[derive(Debug, Default)]
pub struct Container {
    html: String,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the container's content.
    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    /// The current content.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Empties the container.
    pub fn clear(&mut self) {
        self.html.clear();
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One screen of the application.
///
/// Constructed fresh on every navigation to its route, then asked to
/// render into the container. A page's own asynchronous work (data
/// fetches and the like) is its own business — the router does not wait
/// for it, and a page abandoned by a later navigation simply drops.
pub trait Page {
    /// Renders this page into the given container.
    fn render(&mut self, container: &mut Container);
}

/// Constructs a boxed page. Plain function pointers keep the registry
/// `'static` and buildable in a `const`-friendly style at startup.
pub type PageConstructor = fn() -> Box<dyn Page>;

// ---------------------------------------------------------------------------
// PageRegistry
// ---------------------------------------------------------------------------

/// The static map from route to page constructor.
///
/// Built once at startup, immutable thereafter. A route without an
/// entry is the "page bundle failed to load" case: [`load`] returns an
/// error and the router falls back to its configured default route.
///
/// [`load`]: PageRegistry::load
#[derive(Debug, Default)]
pub struct PageRegistry {
    pages: HashMap<Route, PageConstructor>,
}

impl PageRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for a route, replacing any previous one.
    pub fn register(mut self, route: Route, ctor: PageConstructor) -> Self {
        self.pages.insert(route, ctor);
        self
    }

    /// Whether a constructor is registered for the route.
    pub fn contains(&self, route: Route) -> bool {
        self.pages.contains_key(&route)
    }

    /// Constructs the page for a route.
    ///
    /// # Errors
    /// Returns [`RouterError::PageNotRegistered`] if the route has no
    /// constructor.
    pub fn load(&self, route: Route) -> Result<Box<dyn Page>, RouterError> {
        let ctor = self
            .pages
            .get(&route)
            .ok_or(RouterError::PageNotRegistered(route))?;
        Ok(ctor())
    }
}

// =========================================================================
// Tests
// =========================================================================
