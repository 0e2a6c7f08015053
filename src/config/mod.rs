//! Configuration module — TOML file settings merged with CLI overrides.

pub mod settings;

pub use settings::Settings;
