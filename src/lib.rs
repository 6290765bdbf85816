//! # Page Cache
//!
//! A time-bounded cache for expensive-to-produce artifacts such as rendered
//! pages keyed by request path.
//!
//! ## Overview
//!
//! Entries are stored as a `{path, content, created}` JSON envelope under a
//! key derived from a prefix, a SHA-1 of the identifier and an optional
//! suffix. Reads reject entries older than the configured duration and
//! remove them from the store. When Redis is the primary backend and reports
//! a failure, the cache switches to a disk backend for the rest of the
//! process lifetime.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use page_cache::cache::structs::cache::Cache;
//! use page_cache::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let cache = Cache::new(Arc::new(config.cache))?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Controller, envelope, key derivation and backends
//! - [`config`] - Configuration management and TOML parsing
//! - [`logging`] - Console logger setup
//! - [`structs`] - CLI argument parsing

/// Cache controller, envelope codec, key derivation and backend adapters.
pub mod cache;

/// Configuration management module.
pub mod config;

/// Logger setup.
pub mod logging;

/// CLI argument parsing.
pub mod structs;
