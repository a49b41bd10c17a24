//! Saturn operations console core.
//!
//! A command-construction-and-execution layer for one multi-tenant host that
//! runs the dev/staging/production deployments of the saturn application.
//! Every action is expressed as a shell command executed over a remote
//! session; the core itself holds no cross-call state.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod application;
pub mod commands;
pub mod domain;
pub mod infra;
