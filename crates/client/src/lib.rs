//! Loginwall client
//!
//! Everything the browser side of the original demo does, expressed as
//! a library: a pluggable session store (the localStorage analogue),
//! the [`SessionGate`] that owns the logged-in flag and user record,
//! the [`guard`] that partitions the two routes, and a [`LoginClient`]
//! that submits credentials to the server and normalizes failures.

pub mod gate;
pub mod guard;
pub mod http;
pub mod store;

pub use gate::{SessionGate, SessionStatus};
pub use guard::{Navigation, Route};
pub use http::{LoginClient, LoginOutcome};
pub use store::{FileStore, MemoryStore, SessionStore};
