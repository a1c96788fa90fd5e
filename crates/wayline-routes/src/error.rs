//! Error types for the routes layer.

/// Errors that can occur when resolving routes from raw input.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The path does not name any route in the table.
    ///
    /// Raw user input (hash fragments, link attributes) is resolved with
    /// a fallback instead, so this error only surfaces where an exact
    /// match is required — e.g. deserializing a persisted session record.
    #[error("unknown route: {0}")]
    Unknown(String),
}
