//! siteship Core Library
//!
//! Core types, configuration, and error handling for the siteship
//! static-site deployment tool.

pub mod config;
pub mod connection;
pub mod error;

pub use config::{Config, DeployConfig};
pub use connection::ConnectionString;
pub use error::{CoreError, Result};
