//! Laudo Core — shared error type and configuration.

pub mod config;
pub mod error;

pub use config::LaudoConfig;
pub use error::{Error, Result};
