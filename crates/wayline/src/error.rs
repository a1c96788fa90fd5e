//! Unified error type for the Wayline facade.

use wayline_router::RouterError;
use wayline_routes::RouteError;
use wayline_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `wayline` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attributes auto-generate the `From` impls, so `?` converts sub-crate
/// errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum WaylineError {
    /// A route-resolution error (unknown path).
    #[error(transparent)]
    Route(#[from] RouteError),

    /// A session-persistence error (storage, encode).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A router-level error (missing page, closed event loop).
    #[error(transparent)]
    Router(#[from] RouterError),
}
