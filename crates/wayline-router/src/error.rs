//! Error types for the router layer.

use wayline_routes::Route;

/// Errors that can occur during routing.
///
/// Navigation itself never returns an error — every failure path inside
/// [`Router`](crate::Router) degrades to a safe route. These variants
/// cover the edges around it: registry lookups and the event channel.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// No page constructor is registered for the route. The navigation
    /// equivalent of a failed dynamic module load.
    #[error("no page registered for route {0}")]
    PageNotRegistered(Route),

    /// The event loop has shut down, so the handle has nowhere to send.
    #[error("router event loop is closed")]
    EventLoopClosed,
}
