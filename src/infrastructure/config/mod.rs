//! Configuration loading and tracing setup.

pub mod logging;
pub mod odds;
pub mod settings;
