//! Cache backend trait definitions.

/// The uniform get/set/del contract every store adapter satisfies.
pub mod cache_backend;
