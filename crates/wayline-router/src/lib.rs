//! The Wayline router: guarded navigation with durable sessions.
//!
//! This crate owns the only mutable navigation state in the process:
//!
//! 1. **Router** ([`Router`]) — the `{current_route, is_authenticated}`
//!    state machine. Every transition goes through the guard table, and
//!    every transition persists (or clears) the session record.
//! 2. **Pages** ([`Page`] trait, [`PageRegistry`]) — a static registry
//!    mapping each route to a lazily-constructed page, mounted into a
//!    [`Container`] on arrival.
//! 3. **Event loop** ([`run`], [`RouterHandle`], [`NavEvent`]) — a
//!    single Tokio task that owns the router and serves navigation
//!    events plus the periodic re-validation timer.
//!
//! # Concurrency model
//!
//! Single-threaded and event-driven: the router is moved into one task
//! and accessed only through an mpsc channel, so there is no lock
//! anywhere in this crate. The re-validation timer is the one recurring
//! background concern, and it lives inside the same `select!` loop.

mod error;
mod events;
mod page;
mod revalidate;
mod router;

pub use error::RouterError;
pub use events::{channel, run, NavEvent, RouterHandle};
pub use page::{Container, Page, PageConstructor, PageRegistry};
pub use revalidate::RevalidateTimer;
pub use router::{NavSource, Router, RouterConfig, RouterState};
