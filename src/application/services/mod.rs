//! Domain services: orchestration over the remote executor.
//!
//! Services validate inputs, pick the builder, run or stream the command,
//! and normalize the output. They depend only on the port traits, never on
//! a concrete transport.

pub mod backup;
pub mod console;
pub mod containers;
pub mod deploy;
pub mod env_file;
