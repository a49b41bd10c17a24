//! Application layer: port contracts, the streaming type, per-environment
//! locks, and the domain services that orchestrate builders with the
//! remote executor.

pub mod locks;
pub mod ports;
pub mod services;
pub mod stream;
