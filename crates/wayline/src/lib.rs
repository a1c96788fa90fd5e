//! # Wayline
//!
//! Guarded client-side navigation with durable sessions.
//!
//! Wayline is the navigation core of a single-page application: a
//! route table with per-route access guards, a router state machine
//! that never leaves the user on a screen they may not see, and a
//! session record that survives a reload for up to 24 hours.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use wayline::prelude::*;
//!
//! # struct HomePage;
//! # impl Page for HomePage {
//! #     fn render(&mut self, c: &mut Container) { c.set_html("home"); }
//! # }
//! # async fn demo() -> Result<(), WaylineError> {
//! let registry = PageRegistry::new()
//!     .register(Route::Home, || Box::new(HomePage));
//!
//! let ctx = AppContext::builder()
//!     .registry(registry)
//!     .backend(MemoryBackend::new())
//!     .build();
//!
//! let (handle, loop_task) = ctx.spawn("#/home");
//! handle.set_authenticated(true)?;
//! handle.unload()?;
//! loop_task.await.ok();
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub use context::{AppContext, AppContextBuilder};
pub use error::WaylineError;

pub mod prelude {
    //! The commonly-used surface, importable in one line.
    pub use crate::{AppContext, AppContextBuilder, WaylineError};
    pub use wayline_router::{
        Container, NavEvent, NavSource, Page, PageConstructor, PageRegistry,
        RevalidateTimer, Router, RouterConfig, RouterHandle,
    };
    pub use wayline_routes::{
        Access, Decision, GuardPolicy, GuardTable, Route,
    };
    pub use wayline_session::{
        FileBackend, MemoryBackend, SessionConfig, SessionStore,
        StorageBackend,
    };
}
