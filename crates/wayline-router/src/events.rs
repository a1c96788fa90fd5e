//! The navigation event loop: a single task that owns the router.
//!
//! Everything that can trigger a navigation — link clicks, hash
//! changes, history traversal, auth changes, the unload hook — becomes
//! a [`NavEvent`] sent through a [`RouterHandle`]. One task receives
//! them in order and applies them to the router, so the router's state
//! is never shared and never locked.

use tokio::sync::mpsc;
use tracing::{debug, info};
use wayline_routes::Route;
use wayline_session::StorageBackend;

use crate::{NavSource, RevalidateTimer, Router, RouterError};

// ---------------------------------------------------------------------------
// NavEvent
// ---------------------------------------------------------------------------

/// A discrete navigation trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// A click on an element carrying a route attribute. The raw
    /// attribute value is resolved with the usual fallbacks.
    LinkClick(String),

    /// The URL hash changed.
    HashChange(String),

    /// Browser history traversal to an already-resolved route.
    PopState(Route),

    /// A programmatic navigation from another component.
    Navigate(Route),

    /// The auth component reports a login/logout/token-validation
    /// result.
    SetAuthenticated(bool),

    /// The page is unloading: persist and stop.
    Unload,
}

// ---------------------------------------------------------------------------
// RouterHandle
// ---------------------------------------------------------------------------

/// Cheap-clone sender half of the event loop. Components hold one of
/// these instead of a reference to the router itself.
#[derive(Debug, Clone)]
pub struct RouterHandle {
    tx: mpsc::UnboundedSender<NavEvent>,
}

impl RouterHandle {
    fn send(&self, event: NavEvent) -> Result<(), RouterError> {
        self.tx.send(event).map_err(|_| RouterError::EventLoopClosed)
    }

    /// Reports a click on a route-carrying element.
    pub fn link_click(&self, target: impl Into<String>) -> Result<(), RouterError> {
        self.send(NavEvent::LinkClick(target.into()))
    }

    /// Reports a URL hash change.
    pub fn hash_change(&self, hash: impl Into<String>) -> Result<(), RouterError> {
        self.send(NavEvent::HashChange(hash.into()))
    }

    /// Reports a history back/forward traversal.
    pub fn pop_state(&self, route: Route) -> Result<(), RouterError> {
        self.send(NavEvent::PopState(route))
    }

    /// Requests a programmatic navigation.
    pub fn navigate(&self, route: Route) -> Result<(), RouterError> {
        self.send(NavEvent::Navigate(route))
    }

    /// Reports an authentication-state change.
    pub fn set_authenticated(&self, value: bool) -> Result<(), RouterError> {
        self.send(NavEvent::SetAuthenticated(value))
    }

    /// Signals page unload: persist the session and stop the loop.
    pub fn unload(&self) -> Result<(), RouterError> {
        self.send(NavEvent::Unload)
    }
}

/// Creates the handle/receiver pair for an event loop.
///
/// Unbounded is deliberate: events are tiny, produced by discrete user
/// actions, and the loop must never make an event source await.
pub fn channel() -> (RouterHandle, mpsc::UnboundedReceiver<NavEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RouterHandle { tx }, rx)
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the event loop until [`NavEvent::Unload`] or every handle is
/// dropped. Returns the router so callers can inspect final state.
///
/// The timer branch re-asserts the navigation invariant between
/// events; the event branch applies one trigger at a time, in arrival
/// order.
pub async fn run<B: StorageBackend>(
    mut router: Router<B>,
    mut events: mpsc::UnboundedReceiver<NavEvent>,
    mut timer: RevalidateTimer,
) -> Router<B> {
    info!("navigation event loop running");

    loop {
        tokio::select! {
            maybe_event = events.recv() => {
                match maybe_event {
                    Some(event) => {
                        if dispatch(&mut router, event) {
                            break;
                        }
                    }
                    None => {
                        debug!("all handles dropped, stopping event loop");
                        router.persist();
                        break;
                    }
                }
            }
            _ = timer.wait() => {
                router.revalidate();
            }
        }
    }

    router
}

/// Applies one event. Returns `true` when the loop should stop.
fn dispatch<B: StorageBackend>(router: &mut Router<B>, event: NavEvent) -> bool {
    match event {
        NavEvent::LinkClick(target) => {
            router.navigate(Route::from_hash(&target), NavSource::LinkClick);
        }
        NavEvent::HashChange(hash) => {
            router.navigate(Route::from_hash(&hash), NavSource::HashChange);
        }
        NavEvent::PopState(route) => {
            router.navigate(route, NavSource::PopState);
        }
        NavEvent::Navigate(route) => {
            router.navigate(route, NavSource::Programmatic);
        }
        NavEvent::SetAuthenticated(value) => {
            router.set_authenticated(value);
        }
        NavEvent::Unload => {
            info!("unload received, persisting session");
            router.persist();
            return true;
        }
    }
    false
}
