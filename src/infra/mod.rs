//! Infrastructure adapters: the SSH transport and on-disk settings store.

pub mod config;
pub mod ssh;
