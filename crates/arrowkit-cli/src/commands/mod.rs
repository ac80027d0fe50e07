//! CLI command implementations.

pub mod config;
pub mod demo;
pub mod eval;
pub mod version;
