//! Durable session persistence for Wayline.
//!
//! This crate makes the router's authentication state survive a reload:
//!
//! 1. **Record** — the persisted `{isAuthenticated, timestamp,
//!    currentRoute}` JSON value ([`SessionRecord`]).
//! 2. **Backend** — where the record lives ([`StorageBackend`] trait,
//!    with in-memory and file implementations).
//! 3. **Store** — save/restore/clear with time-based expiry
//!    ([`SessionStore`]).
//!
//! # How it fits in the stack
//!
//! ```text
//! Router (above)   ← saves on auth changes, restores once at startup
//!     ↕
//! Session (this crate)   ← record shape, expiry, corruption recovery
//!     ↕
//! Backend (below)  ← a durable string key-value store
//! ```
//!
//! A stored record is a cache of convenience, never a source of truth:
//! anything wrong with it (missing, expired, malformed) degrades to
//! "no session" without surfacing an error to the user.

mod backend;
mod error;
mod record;
mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::SessionError;
pub use record::{SessionRecord, SESSION_KEY};
pub use store::{SessionConfig, SessionStore};
