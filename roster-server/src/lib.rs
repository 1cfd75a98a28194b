//! HTTP front for the roster: axum router, config, tracing, runtime.

pub mod api;
pub mod app;
mod assets;
pub mod config;
mod error;
mod runtime;

pub use app::{build_router, AppState};
pub use config::{LogFormat, ServerConfig};
pub use error::ServerError;
pub use runtime::{init_tracing, run, serve, start_blocking};
