//! Navigation guards: per-route access policies and the decision function.
//!
//! A guard answers one question: "may navigation to this route proceed,
//! given the current authentication state?" The answer is a value — the
//! guard never performs the redirect itself. Separating the decision
//! from the effect keeps this layer pure and trivially testable; the
//! router owns all side effects.

use std::collections::HashMap;

use crate::Route;

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

/// Who may visit a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// Anyone, authenticated or not.
    #[default]
    Public,

    /// Only authenticated users. Unauthenticated navigation is denied
    /// and redirected (to `/login` by default).
    RequiresAuth,

    /// Only unauthenticated users — login and register screens. An
    /// already-authenticated user is bounced to the dashboard instead
    /// of being shown a login form.
    PublicOnly,
}

// ---------------------------------------------------------------------------
// GuardPolicy
// ---------------------------------------------------------------------------

/// The policy attached to a single route.
///
/// Defined once at startup, immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardPolicy {
    /// Who may visit.
    pub access: Access,

    /// Where a denied navigation is redirected.
    pub on_fail_redirect: Route,
}

impl GuardPolicy {
    /// A policy anyone may pass.
    pub fn public() -> Self {
        Self {
            access: Access::Public,
            on_fail_redirect: Route::Login,
        }
    }

    /// A policy requiring authentication, redirecting to `/login` on
    /// failure.
    pub fn requires_auth() -> Self {
        Self {
            access: Access::RequiresAuth,
            on_fail_redirect: Route::Login,
        }
    }

    /// A policy for unauthenticated users only, redirecting the
    /// already-authenticated to `/dashboard`.
    pub fn public_only() -> Self {
        Self {
            access: Access::PublicOnly,
            on_fail_redirect: Route::Dashboard,
        }
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// The outcome of a guard check. A pure value — the caller performs any
/// redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Navigation may proceed.
    Allow,

    /// Navigation is denied; the caller should navigate to
    /// `redirect_to` instead (re-checking it through the same guard).
    Deny { redirect_to: Route },
}

impl Decision {
    /// Returns `true` for [`Decision::Allow`].
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

// ---------------------------------------------------------------------------
// GuardTable
// ---------------------------------------------------------------------------

/// The static map from route to guard policy.
///
/// Routes without an explicit entry are public. The `Default` table
/// encodes the application's standard policies:
///
/// | Route                                  | Policy       | On fail      |
/// |----------------------------------------|--------------|--------------|
/// | `/dashboard`, `/statistics`,           | RequiresAuth | `/login`     |
/// | `/products/upload`                     |              |              |
/// | `/login`, `/register`                  | PublicOnly   | `/dashboard` |
/// | everything else                        | Public       | —            |
#[derive(Debug, Clone)]
pub struct GuardTable {
    policies: HashMap<Route, GuardPolicy>,
}

impl GuardTable {
    /// Starts building a custom table.
    pub fn builder() -> GuardTableBuilder {
        GuardTableBuilder {
            policies: HashMap::new(),
        }
    }

    /// The policy for a route (public if no entry exists).
    pub fn policy(&self, route: Route) -> GuardPolicy {
        self.policies
            .get(&route)
            .copied()
            .unwrap_or_else(GuardPolicy::public)
    }

    /// Whether a route requires authentication.
    pub fn requires_auth(&self, route: Route) -> bool {
        self.policy(route).access == Access::RequiresAuth
    }

    /// Evaluates the guard for a route against the current
    /// authentication state.
    ///
    /// Pure: no logging, no redirecting, no state. The router wraps
    /// this with diagnostics and the actual redirect.
    pub fn decide(&self, route: Route, is_authenticated: bool) -> Decision {
        let policy = self.policy(route);
        let allowed = match policy.access {
            Access::Public => true,
            Access::RequiresAuth => is_authenticated,
            Access::PublicOnly => !is_authenticated,
        };
        if allowed {
            Decision::Allow
        } else {
            Decision::Deny {
                redirect_to: policy.on_fail_redirect,
            }
        }
    }
}

impl Default for GuardTable {
    fn default() -> Self {
        GuardTable::builder()
            .policy(Route::Dashboard, GuardPolicy::requires_auth())
            .policy(Route::Statistics, GuardPolicy::requires_auth())
            .policy(Route::ProductsUpload, GuardPolicy::requires_auth())
            .policy(Route::Login, GuardPolicy::public_only())
            .policy(Route::Register, GuardPolicy::public_only())
            .build()
    }
}

/// Builder for a [`GuardTable`]. The table is immutable once built.
#[derive(Debug)]
pub struct GuardTableBuilder {
    policies: HashMap<Route, GuardPolicy>,
}

impl GuardTableBuilder {
    /// Attaches a policy to a route, replacing any previous one.
    pub fn policy(mut self, route: Route, policy: GuardPolicy) -> Self {
        self.policies.insert(route, policy);
        self
    }

    /// Finalizes the table.
    pub fn build(self) -> GuardTable {
        GuardTable {
            policies: self.policies,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
