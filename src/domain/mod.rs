//! Pure domain types, naming rules, validators and parsers.
//!
//! Nothing in this module performs I/O or imports from `crate::infra`,
//! `crate::commands`, or `crate::application`.

pub mod config;
pub mod containers;
pub mod env_file;
pub mod environment;
pub mod error;
pub mod validate;
