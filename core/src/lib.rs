// Donate API - Core Library
//
// Record shapes returned by the donate API, query parameters, and the
// client configuration. No network I/O lives here.

pub mod config;
pub mod models;

pub use config::*;
pub use models::*;
