//! Per-domain shell command builders. Pure functions, no I/O.
//!
//! Each function maps (environment, parameters) to exact command text.
//! Caller-supplied values are interpolated only after they have passed
//! `crate::domain::validate`; everything else is fixed template text and
//! names derived from the rules in `crate::domain::environment`.

pub mod artisan;
pub mod backup;
pub mod deploy;
pub mod docker;
pub mod env_file;
