//! Structured logging via `tracing`, filtered per crate by `ALTTXT_LOG`.

pub mod setup;

pub use setup::{init_tracing, DEFAULT_DIRECTIVES};
