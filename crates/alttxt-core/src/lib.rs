//! # alttxt-core
//!
//! Core types shared by the UpSet alt-text engine: the parsed plot models,
//! closed enums, per-subsystem error enums, layered TOML configuration,
//! tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod types;
