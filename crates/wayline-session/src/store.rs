//! The session store: save/restore/clear with time-based expiry.
//!
//! The store is the only code that touches the backing record. Its
//! contract with the router:
//!
//! - `save` writes the current state with a fresh timestamp.
//! - `restore` reads the record once at startup; a record that is
//!   missing, expired, or malformed is treated identically — `None` —
//!   and anything unusable is cleared so it isn't re-read next time.
//! - `clear` removes the record.
//!
//! Corruption is recovered locally, never propagated: the user sees a
//! logged-out app, not an error.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};
use wayline_routes::Route;

use crate::{SessionError, SessionRecord, StorageBackend, SESSION_KEY};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for session persistence.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How old a stored record may be before it is treated as absent.
    ///
    /// Default: 24 hours. A zero max age expires every record
    /// immediately (useful in tests).
    pub max_age: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::from_secs(24 * 60 * 60),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// Persists the session record to a [`StorageBackend`].
///
/// ## Lifecycle
///
/// ```text
/// startup ──→ restore() ──→ Some(record) │ None
///                                │
/// auth change / unload ──→ save()        │
/// logout / expiry / corruption ──→ clear()
/// ```
#[derive(Debug)]
pub struct SessionStore<B: StorageBackend> {
    backend: B,
    config: SessionConfig,
}

impl<B: StorageBackend> SessionStore<B> {
    /// Creates a store over the given backend.
    pub fn new(backend: B, config: SessionConfig) -> Self {
        Self { backend, config }
    }

    /// Writes the current state with a fresh timestamp.
    ///
    /// # Errors
    /// Returns [`SessionError`] if the backend rejects the write. The
    /// caller logs and carries on — a failed save only costs session
    /// resumption after the next reload.
    pub fn save(
        &mut self,
        is_authenticated: bool,
        current_route: Route,
    ) -> Result<(), SessionError> {
        let record = SessionRecord {
            is_authenticated,
            timestamp: now_ms(),
            current_route,
        };
        let value = serde_json::to_string(&record)?;
        self.backend.write(SESSION_KEY, &value)?;
        debug!(%current_route, is_authenticated, "session saved");
        Ok(())
    }

    /// Reads the stored record.
    ///
    /// Returns `None` — never an error — when the record is absent,
    /// older than the configured max age, or malformed. Expired and
    /// malformed records are cleared on the way out.
    pub fn restore(&mut self) -> Option<SessionRecord> {
        let value = match self.backend.read(SESSION_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "session read failed, treating as absent");
                return None;
            }
        };

        let record: SessionRecord = match serde_json::from_str(&value) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "corrupt session record, clearing");
                let _ = self.clear();
                return None;
            }
        };

        let age_ms = now_ms().saturating_sub(record.timestamp);
        if age_ms > self.config.max_age.as_millis() as u64 {
            debug!(age_ms, "session record expired, clearing");
            let _ = self.clear();
            return None;
        }

        debug!(
            route = %record.current_route,
            is_authenticated = record.is_authenticated,
            "session restored"
        );
        Some(record)
    }

    /// Removes the stored record.
    ///
    /// # Errors
    /// Returns [`SessionError`] if the backend rejects the removal.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.backend.remove(SESSION_KEY)?;
        Ok(())
    }
}

/// Milliseconds since the Unix epoch.
///
/// A system clock before 1970 would make `duration_since` fail; zero is
/// as good an answer as any in that case.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `SessionStore`.
    //!
    //! # Testing time-dependent behavior
    //!
    //! Expiry depends on wall-clock age. Instead of sleeping, the tests
    //! use two configs:
    //!   - `max_age: 0` → every record expires immediately
    //!   - `max_age: 1h` → nothing expires during a test run
    //! plus hand-written records with doctored timestamps.

    use super::*;
    use crate::MemoryBackend;

    // -- Helpers ----------------------------------------------------------

    fn store_with_long_age() -> SessionStore<MemoryBackend> {
        SessionStore::new(
            MemoryBackend::new(),
            SessionConfig {
                max_age: Duration::from_secs(3600),
            },
        )
    }

    fn store_with_instant_expiry() -> SessionStore<MemoryBackend> {
        SessionStore::new(
            MemoryBackend::new(),
            SessionConfig {
                max_age: Duration::ZERO,
            },
        )
    }

    /// Plants a raw value under the session key, bypassing `save`.
    fn plant(store: &mut SessionStore<MemoryBackend>, value: &str) {
        store.backend.write(SESSION_KEY, value).unwrap();
    }

    // =====================================================================
    // save() / restore() round-trip
    // =====================================================================

    #[test]
    fn test_restore_empty_store_returns_none() {
        let mut store = store_with_long_age();
        assert_eq!(store.restore(), None);
    }

    #[test]
    fn test_save_then_restore_round_trips_authenticated() {
        let mut store = store_with_long_age();
        store.save(true, Route::Dashboard).unwrap();

        let record = store.restore().expect("record should be present");
        assert!(record.is_authenticated);
        assert_eq!(record.current_route, Route::Dashboard);
    }

    #[test]
    fn test_save_then_restore_round_trips_unauthenticated() {
        let mut store = store_with_long_age();
        store.save(false, Route::Landing).unwrap();

        let record = store.restore().expect("record should be present");
        assert!(!record.is_authenticated);
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let mut store = store_with_long_age();
        store.save(true, Route::Dashboard).unwrap();
        store.save(true, Route::Statistics).unwrap();

        let record = store.restore().unwrap();
        assert_eq!(record.current_route, Route::Statistics);
    }

    // =====================================================================
    // Expiry
    // =====================================================================

    #[test]
    fn test_restore_expired_record_returns_none_and_clears() {
        // With zero max age, even a freshly planted old record expires.
        let mut store = store_with_instant_expiry();
        plant(
            &mut store,
            r#"{"isAuthenticated":true,"timestamp":1,"currentRoute":"/dashboard"}"#,
        );

        assert_eq!(store.restore(), None);
        // The expired record was cleared, not left behind.
        assert_eq!(store.backend.read(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_restore_stale_timestamp_with_default_age_returns_none() {
        // A record stamped > 24h ago against the default config.
        let mut store =
            SessionStore::new(MemoryBackend::new(), SessionConfig::default());
        let old = now_ms() - 25 * 60 * 60 * 1000;
        plant(
            &mut store,
            &format!(
                r#"{{"isAuthenticated":true,"timestamp":{old},"currentRoute":"/dashboard"}}"#
            ),
        );

        assert_eq!(store.restore(), None);
    }

    #[test]
    fn test_restore_fresh_record_within_default_age_survives() {
        let mut store =
            SessionStore::new(MemoryBackend::new(), SessionConfig::default());
        store.save(true, Route::ProductsUpload).unwrap();

        assert!(store.restore().is_some());
    }

    #[test]
    fn test_restore_future_timestamp_is_not_expired() {
        // Clock skew: a timestamp slightly in the future has a saturated
        // age of zero and must not be thrown away.
        let mut store = store_with_long_age();
        let future = now_ms() + 5_000;
        plant(
            &mut store,
            &format!(
                r#"{{"isAuthenticated":true,"timestamp":{future},"currentRoute":"/home"}}"#
            ),
        );

        assert!(store.restore().is_some());
    }

    // =====================================================================
    // Corruption recovery
    // =====================================================================

    #[test]
    fn test_restore_malformed_json_returns_none_and_clears() {
        let mut store = store_with_long_age();
        plant(&mut store, "not json at all{{");

        assert_eq!(store.restore(), None);
        assert_eq!(store.backend.read(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_restore_unknown_route_returns_none_and_clears() {
        let mut store = store_with_long_age();
        plant(
            &mut store,
            r#"{"isAuthenticated":true,"timestamp":1,"currentRoute":"/admin"}"#,
        );

        assert_eq!(store.restore(), None);
        assert_eq!(store.backend.read(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_restore_missing_fields_returns_none_and_clears() {
        let mut store = store_with_long_age();
        plant(&mut store, r#"{"isAuthenticated":true}"#);

        assert_eq!(store.restore(), None);
        assert_eq!(store.backend.read(SESSION_KEY).unwrap(), None);
    }

    // =====================================================================
    // clear()
    // =====================================================================

    #[test]
    fn test_clear_removes_record() {
        let mut store = store_with_long_age();
        store.save(true, Route::Dashboard).unwrap();
        store.clear().unwrap();

        assert_eq!(store.restore(), None);
    }

    #[test]
    fn test_clear_empty_store_is_ok() {
        let mut store = store_with_long_age();
        assert!(store.clear().is_ok());
    }
}
