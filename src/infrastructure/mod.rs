//! Infrastructure layer: configuration and logging.

pub mod config;
