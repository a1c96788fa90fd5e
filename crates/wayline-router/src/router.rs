//! The router: the navigation state machine.
//!
//! States are routes; transitions are `navigate` calls. Every
//! transition runs through the guard table, and a denied transition
//! follows the policy's redirect through the *same* check:
//!
//! ```text
//!   navigate(r) ──→ decide(r, auth) ──Allow──→ mount(r), persist
//!                        │
//!                      Deny
//!                        ▼
//!                  decide(redirect, auth) ──→ ... (hop cap applies)
//! ```
//!
//! The router owns its state exclusively. It is handed to a single
//! task (see [`run`](crate::run)) and mutated only through its own
//! methods, so no transition can race another.

use std::time::Duration;

use tracing::{debug, error, info, warn};
use wayline_routes::{Decision, GuardTable, Route};
use wayline_session::{SessionStore, StorageBackend};

use crate::{Container, PageRegistry};

// ---------------------------------------------------------------------------
// NavSource
// ---------------------------------------------------------------------------

/// What triggered a navigation. Diagnostic only — every source takes
/// the same path through the guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSource {
    /// Initial resolution at startup (URL hash, session restore).
    Startup,
    /// A click on an element carrying a route attribute.
    LinkClick,
    /// A URL hash change.
    HashChange,
    /// Browser history traversal (back/forward).
    PopState,
    /// A programmatic call from another component.
    Programmatic,
    /// A reaction to an authentication-state change.
    AuthChange,
    /// The periodic consistency re-check.
    Revalidate,
}

// ---------------------------------------------------------------------------
// RouterConfig
// ---------------------------------------------------------------------------

/// Configuration for router behavior.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Where to land when the resolved route has no registered page.
    /// Default: `/home`. No retry is attempted.
    pub load_failure_fallback: Route,

    /// Hard cap on guard-redirect hops in a single navigation. A
    /// misconfigured table whose redirect targets deny each other would
    /// otherwise loop forever. Default: 8.
    pub max_redirect_hops: usize,

    /// How often the current route is re-checked against the
    /// authentication flag. Default: 2 seconds. Zero disables the
    /// periodic check.
    pub revalidate_interval: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            load_failure_fallback: Route::Home,
            max_redirect_hops: 8,
            revalidate_interval: Duration::from_secs(2),
        }
    }
}

impl RouterConfig {
    /// Clamps out-of-range values so the config is safe to use.
    ///
    /// Called by [`Router::new`]. A zero hop cap would deny every
    /// navigation, so it is raised to 1.
    pub fn validated(mut self) -> Self {
        if self.max_redirect_hops == 0 {
            warn!("max_redirect_hops of 0 is unusable — raising to 1");
            self.max_redirect_hops = 1;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// RouterState
// ---------------------------------------------------------------------------

/// The single mutable navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterState {
    /// The route currently mounted.
    pub current_route: Route,

    /// Whether the user is authenticated, as last reported by the auth
    /// component through [`Router::set_authenticated`].
    pub is_authenticated: bool,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// The navigation state machine.
///
/// Invariant (eventual): whenever `current_route` requires
/// authentication, `is_authenticated` is true. Enforced by the guard at
/// navigation time and re-asserted by [`revalidate`](Self::revalidate)
/// between navigations.
pub struct Router<B: StorageBackend> {
    state: RouterState,
    guards: GuardTable,
    registry: PageRegistry,
    session: SessionStore<B>,
    config: RouterConfig,
    container: Container,
    /// Routes landed on, in order — the history stack the shell mirrors
    /// into the browser (one pushed entry per completed navigation).
    history: Vec<Route>,
}

impl<B: StorageBackend> Router<B> {
    /// Creates a router parked on `/` and unauthenticated. Call
    /// [`start`](Self::start) to restore the session and resolve the
    /// initial route.
    pub fn new(
        guards: GuardTable,
        registry: PageRegistry,
        session: SessionStore<B>,
        config: RouterConfig,
    ) -> Self {
        Self {
            state: RouterState {
                current_route: Route::Root,
                is_authenticated: false,
            },
            guards,
            registry,
            session,
            config: config.validated(),
            container: Container::new(),
            history: Vec::new(),
        }
    }

    /// The route currently mounted.
    pub fn current_route(&self) -> Route {
        self.state.current_route
    }

    /// The current authentication flag.
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// The rendered content of the current page.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The routes landed on so far, oldest first.
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// The configured re-validation interval.
    pub fn revalidate_interval(&self) -> Duration {
        self.config.revalidate_interval
    }

    /// Resolves startup state: restore the persisted session, then
    /// navigate to the route named by the URL hash (empty hash → `/`).
    ///
    /// Returns the route actually landed on — a protected hash with no
    /// live session resolves to the login page, not the hash target.
    pub fn start(&mut self, initial_hash: &str) -> Route {
        if let Some(record) = self.session.restore() {
            self.state.is_authenticated = record.is_authenticated;
        }
        let target = Route::from_hash(initial_hash);
        info!(
            %target,
            is_authenticated = self.state.is_authenticated,
            "router starting"
        );
        self.navigate(target, NavSource::Startup)
    }

    /// Navigates to a route, enforcing guards.
    ///
    /// Never fails: a denied target follows its policy's redirect, a
    /// pathological redirect cycle settles on the landing page, and a
    /// missing page falls back to the configured default. Returns the
    /// route actually landed on.
    pub fn navigate(&mut self, target: Route, source: NavSource) -> Route {
        let mut resolved = self.resolve(target, source);

        // A route whose page is missing behaves like a failed bundle
        // load: land on the fallback instead, itself guard-checked.
        if !self.registry.contains(resolved)
            && resolved != self.config.load_failure_fallback
        {
            warn!(
                route = %resolved,
                fallback = %self.config.load_failure_fallback,
                "page load failed, falling back"
            );
            resolved = self.resolve(self.config.load_failure_fallback, source);
        }

        debug!(%target, %resolved, ?source, "navigating");
        self.state.current_route = resolved;
        self.history.push(resolved);
        self.persist();
        self.mount(resolved);
        resolved
    }

    /// Updates the authentication flag from the auth component.
    ///
    /// If the current route is no longer permitted under the new flag
    /// (a protected route after logout, a public-only route after
    /// login), the router immediately re-navigates through the guards;
    /// either way the session record is re-persisted or cleared.
    pub fn set_authenticated(&mut self, value: bool) {
        if self.state.is_authenticated == value {
            return;
        }
        self.state.is_authenticated = value;
        info!(is_authenticated = value, "authentication state changed");

        match self.guards.decide(self.state.current_route, value) {
            Decision::Allow => self.persist(),
            Decision::Deny { .. } => {
                // Re-resolving the current route applies the policy's
                // redirect: /login → /dashboard on login, /dashboard →
                // /login on logout. navigate() persists.
                self.navigate(self.state.current_route, NavSource::AuthChange);
            }
        }
    }

    /// Re-asserts the navigation invariant between navigations.
    ///
    /// Compensates for state drift (e.g. token expiry detected
    /// elsewhere): if the current route requires authentication and the
    /// flag is false, force-navigate away. A no-op when consistent.
    pub fn revalidate(&mut self) {
        if self.guards.requires_auth(self.state.current_route)
            && !self.state.is_authenticated
        {
            warn!(
                route = %self.state.current_route,
                "unauthenticated on a protected route, redirecting"
            );
            self.navigate(self.state.current_route, NavSource::Revalidate);
        }
    }

    /// Persists or clears the session record to match the current
    /// state. Called on every transition and on unload; safe to call
    /// any time.
    pub fn persist(&mut self) {
        let result = if self.state.is_authenticated {
            self.session
                .save(true, self.state.current_route)
        } else {
            // No session worth resuming — an unauthenticated record
            // only re-lands the user on a public page they would reach
            // anyway.
            self.session.clear()
        };
        if let Err(e) = result {
            warn!(error = %e, "session persistence failed");
        }
    }

    /// Runs the guard loop: follow `Deny` redirects until a route is
    /// allowed or the hop cap is exhausted.
    fn resolve(&self, target: Route, source: NavSource) -> Route {
        let mut route = target;
        for _ in 0..self.config.max_redirect_hops {
            match self.guards.decide(route, self.state.is_authenticated) {
                Decision::Allow => return route,
                Decision::Deny { redirect_to } => {
                    debug!(
                        denied = %route,
                        redirect = %redirect_to,
                        ?source,
                        "navigation denied by guard"
                    );
                    route = redirect_to;
                }
            }
        }
        // Redirect targets deny each other — a table misconfiguration.
        // The landing page is the designated unconditionally-safe route.
        error!(
            %target,
            hops = self.config.max_redirect_hops,
            "redirect limit exceeded, settling on landing page"
        );
        Route::Landing
    }

    /// Mounts the page for a route into the container.
    fn mount(&mut self, route: Route) {
        match self.registry.load(route) {
            Ok(mut page) => {
                self.container.clear();
                page.render(&mut self.container);
            }
            Err(e) => {
                // Reachable only when the fallback route itself is
                // unregistered; the previous content stays put.
                warn!(error = %e, %route, "mount failed, container unchanged");
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
