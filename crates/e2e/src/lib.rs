//! Loginwall E2E harness
//!
//! Spawns the `loginwall-web` binary as a subprocess, waits for its
//! health endpoint, and tears it down on drop. The integration tests
//! under `tests/` drive the real HTTP surface with `reqwest` and the
//! `loginwall-client` session gate; no browser is involved, the SPA is
//! exercised at its data-contract boundary.

pub mod error;
pub mod server;

pub use error::{E2eError, E2eResult};
pub use server::{ServerConfig, ServerHandle};
