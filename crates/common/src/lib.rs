//! Loginwall Common Library
//!
//! Shared data contract for the loginwall demo application: the user
//! roster, the login wire types, session storage key names, and the
//! canonical user-facing messages. Both the web server and the client
//! session gate depend on this crate so the two sides cannot drift.

pub mod error;
pub mod roster;
pub mod types;

pub use error::{Error, Result};
pub use roster::{Roster, Verdict};
pub use types::*;

/// Loginwall version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
