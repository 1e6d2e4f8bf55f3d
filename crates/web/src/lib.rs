//! Loginwall Web Server
//!
//! Serves the demo single-page app and the `/api/login` endpoint it
//! talks to. All session state lives on the client; this server is a
//! stateless credential validator plus static file delivery.

pub mod server;
pub mod static_files;

pub use server::{serve, WebServer, WebServerConfig};
