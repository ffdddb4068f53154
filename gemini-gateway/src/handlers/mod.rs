//! HTTP handlers for the gateway.

pub mod ask;
pub mod frontend;
pub mod health;
pub mod metrics;
