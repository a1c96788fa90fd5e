//! The application context: explicit wiring instead of globals.
//!
//! Every component that needs navigation or auth access receives a
//! handle from the context built here, once, at startup. There is no
//! module-level singleton and no ambient state — if something can
//! navigate, you can see where it got the ability from.

use tokio::task::JoinHandle;
use tracing::info;
use wayline_router::{
    channel, run, PageRegistry, RevalidateTimer, Router, RouterConfig,
    RouterHandle,
};
use wayline_routes::GuardTable;
use wayline_session::{
    MemoryBackend, SessionConfig, SessionStore, StorageBackend,
};

/// Builder for an [`AppContext`].
///
/// Defaults: the standard guard table, an empty page registry (register
/// your pages!), an in-memory session, and stock router behavior
/// (2-second re-validation, `/home` load fallback).
pub struct AppContextBuilder<B: StorageBackend> {
    guards: GuardTable,
    registry: PageRegistry,
    backend: B,
    session_config: SessionConfig,
    router_config: RouterConfig,
}

impl AppContextBuilder<MemoryBackend> {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            guards: GuardTable::default(),
            registry: PageRegistry::new(),
            backend: MemoryBackend::new(),
            session_config: SessionConfig::default(),
            router_config: RouterConfig::default(),
        }
    }
}

impl Default for AppContextBuilder<MemoryBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: StorageBackend> AppContextBuilder<B> {
    /// Sets the guard table.
    pub fn guards(mut self, guards: GuardTable) -> Self {
        self.guards = guards;
        self
    }

    /// Sets the page registry.
    pub fn registry(mut self, registry: PageRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the session storage backend.
    pub fn backend<B2: StorageBackend>(self, backend: B2) -> AppContextBuilder<B2> {
        AppContextBuilder {
            guards: self.guards,
            registry: self.registry,
            backend,
            session_config: self.session_config,
            router_config: self.router_config,
        }
    }

    /// Sets the session configuration (expiry).
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Sets the router configuration (fallback, hop cap, re-validation
    /// interval).
    pub fn router_config(mut self, config: RouterConfig) -> Self {
        self.router_config = config;
        self
    }

    /// Assembles the context.
    pub fn build(self) -> AppContext<B> {
        let session = SessionStore::new(self.backend, self.session_config);
        let router =
            Router::new(self.guards, self.registry, session, self.router_config);
        AppContext { router }
    }
}

/// The assembled application: the router and everything wired into it.
///
/// Constructed once at startup and then either driven directly (tests,
/// synchronous shells) via [`router_mut`](Self::router_mut) or spawned
/// as an event loop via [`spawn`](Self::spawn).
pub struct AppContext<B: StorageBackend> {
    router: Router<B>,
}

impl AppContext<MemoryBackend> {
    /// Creates a builder with default settings.
    pub fn builder() -> AppContextBuilder<MemoryBackend> {
        AppContextBuilder::new()
    }
}

impl<B: StorageBackend> AppContext<B> {
    /// Direct access to the router, for shells that drive it without
    /// the event loop.
    pub fn router_mut(&mut self) -> &mut Router<B> {
        &mut self.router
    }
}

impl<B: StorageBackend + Send + 'static> AppContext<B> {
    /// Resolves startup state from `initial_hash`, then moves the
    /// router into its event loop task.
    ///
    /// Returns the handle components use to navigate, and the join
    /// handle yielding the router back after shutdown.
    pub fn spawn(
        mut self,
        initial_hash: &str,
    ) -> (RouterHandle, JoinHandle<Router<B>>) {
        let landed = self.router.start(initial_hash);
        info!(%landed, "application context started");

        let timer = RevalidateTimer::new(self.router.revalidate_interval());
        let (handle, events) = channel();
        let task = tokio::spawn(run(self.router, events, timer));
        (handle, task)
    }
}

// =========================================================================
// Tests
// =========================================================================
