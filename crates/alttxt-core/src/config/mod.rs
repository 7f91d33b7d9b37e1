//! Configuration system for the alt-text engine.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod alttxt_config;
pub mod expansion_config;
pub mod generation_config;

pub use alttxt_config::{AltTxtConfig, CliOverrides};
pub use expansion_config::ExpansionConfig;
pub use generation_config::{GenerationConfig, GenerationOptions};
