//! Adapters around the domain.

pub mod inbound;
