//! Configuration module
//!
//! Compile-time limits live in `constants`, environment-driven preferences in
//! `runtime`, and the TOML-backed run configuration in `settings`.

pub mod constants;
pub mod runtime;
pub mod settings;

pub use constants::compile_time;
pub use settings::{RunConfig, SettingsError};
