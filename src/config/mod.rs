//! Configuration management module.
//!
//! Loads, saves and validates `config.toml`.
//!
//! # Configuration Structure
//!
//! - **log_level**: off, trace, debug, info, warn or error
//! - **cache**: primary backend, connection URL, disk path, TTL and key prefix
//!
//! # Example
//!
//! ```rust,ignore
//! use page_cache::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
