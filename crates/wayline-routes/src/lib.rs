//! Route table and navigation guards for Wayline.
//!
//! This crate defines the "vocabulary" of navigation:
//!
//! - **Routes** ([`Route`]) — the finite set of screens the application
//!   can show, each identified by a symbolic path.
//! - **Guards** ([`GuardTable`], [`GuardPolicy`]) — per-route access
//!   policies and the pure decision function that evaluates them.
//! - **Errors** ([`RouteError`]) — what can go wrong when turning raw
//!   strings into routes.
//!
//! # Architecture
//!
//! The routes layer sits below everything else. It has no state and no
//! side effects — guard evaluation returns a [`Decision`] and the caller
//! (the router) performs any redirect.
//!
//! ```text
//! Router (stateful) → Guards (pure decisions) → Routes (identifiers)
//! ```

mod error;
mod guard;
mod route;

pub use error::RouteError;
pub use guard::{Access, Decision, GuardPolicy, GuardTable, GuardTableBuilder};
pub use route::Route;
