//! # Repolens Web
//!
//! The relay server: two thin endpoints that forward a constructed prompt
//! to the configured chat-completion provider and pass back its answer,
//! plus health checks. The provider credential is server-held and never
//! reaches the client.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod routes;
pub mod server;

mod error;
mod state;

pub use error::{Result, WebError};
pub use server::{app, start_server};
pub use state::AppState;
