//! CLI command implementations.

pub mod capture;
pub mod common;
pub mod config;
pub mod run;
pub mod stats;
