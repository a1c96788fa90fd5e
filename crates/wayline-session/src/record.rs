//! The persisted session record and its wire shape.

use serde::{Deserialize, Serialize};
use wayline_routes::Route;

/// The key the session record is stored under in the backing store.
///
/// Fixed by the storage contract — changing it would orphan every
/// existing session.
pub const SESSION_KEY: &str = "router_auth_session";

/// The durable snapshot of navigation state.
///
/// Created or overwritten on every authentication-state change and on
/// unload; read once at startup. On the wire it is camelCase JSON:
///
/// ```json
/// {"isAuthenticated": true, "timestamp": 1724572800000, "currentRoute": "/dashboard"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Whether the user was authenticated when the record was written.
    pub is_authenticated: bool,

    /// When the record was written, in milliseconds since the Unix
    /// epoch. Drives expiry: a record older than the configured max age
    /// is treated as absent.
    pub timestamp: u64,

    /// The route the user was parked on.
    pub current_route: Route,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The stored JSON shape is a compatibility contract: records
    //! written by earlier builds must keep parsing. These tests pin the
    //! exact field names and value forms.

    use super::*;

    #[test]
    fn test_record_serializes_with_camel_case_fields() {
        let record = SessionRecord {
            is_authenticated: true,
            timestamp: 1_000,
            current_route: Route::Dashboard,
        };
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();

        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["timestamp"], 1_000);
        assert_eq!(json["currentRoute"], "/dashboard");
    }

    #[test]
    fn test_record_deserializes_from_stored_shape() {
        let json = r#"{"isAuthenticated":false,"timestamp":42,"currentRoute":"/login"}"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();

        assert!(!record.is_authenticated);
        assert_eq!(record.timestamp, 42);
        assert_eq!(record.current_route, Route::Login);
    }

    #[test]
    fn test_record_unknown_route_fails_to_parse() {
        // An unknown route in a stored record is corruption, handled by
        // the store's restore path.
        let json = r#"{"isAuthenticated":true,"timestamp":1,"currentRoute":"/gone"}"#;
        let result: Result<SessionRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_missing_field_fails_to_parse() {
        let json = r#"{"isAuthenticated":true}"#;
        let result: Result<SessionRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
