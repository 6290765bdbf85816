//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Cache section (backend selection, TTL, prefix).
pub mod cache_config;

/// Root configuration structure.
pub mod configuration;
