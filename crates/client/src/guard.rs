//! Route guard
//!
//! Two routes, two session states, evaluated fresh on every navigation
//! attempt. The guard never caches a decision; the session status it
//! consumes comes from [`SessionGate::current_session`] at navigation
//! time.
//!
//! [`SessionGate::current_session`]: crate::gate::SessionGate::current_session

use crate::gate::{SessionGate, SessionStatus};
use crate::store::SessionStore;

/// The application's route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` - public login form. Authenticated users are bounced away.
    Login,
    /// `/welcome` - protected greeting. Requires an active session.
    Welcome,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Welcome => "/welcome",
        }
    }

    /// Map a request path onto the route table.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Login),
            "/welcome" => Some(Route::Welcome),
            _ => None,
        }
    }
}

/// Guard decision for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Requested route is admissible; render it.
    Proceed(Route),
    /// Requested route is not admissible; go here instead.
    Redirect(Route),
}

impl Navigation {
    /// The route the client ends up on either way.
    pub fn destination(&self) -> Route {
        match self {
            Navigation::Proceed(route) | Navigation::Redirect(route) => *route,
        }
    }
}

/// Decide whether `requested` is admissible under `session`.
///
/// The protected route requires authentication; the login route bounces
/// already-authenticated users to the protected view. Everything else
/// proceeds unchanged.
pub fn resolve(requested: Route, session: &SessionStatus) -> Navigation {
    match (requested, session.is_authenticated()) {
        (Route::Welcome, false) => Navigation::Redirect(Route::Login),
        (Route::Login, true) => Navigation::Redirect(Route::Welcome),
        _ => Navigation::Proceed(requested),
    }
}

/// Convenience wrapper: derive the session from the gate, then resolve.
pub fn navigate<S: SessionStore>(gate: &SessionGate<S>, requested: Route) -> Navigation {
    resolve(requested, &gate.current_session())
}
