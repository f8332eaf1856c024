//! HTTP front end for the progressive income tax calculator.
//!
//! One route: `POST /tax/calculations`. See [`wire`] for the JSON shapes.

pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod server;
pub mod wire;

pub use config::{AppConfig, Cli};
pub use error::ApiError;
pub use handler::{CALCULATIONS_PATH, MAX_BODY_BYTES, TaxService};
pub use server::Server;
