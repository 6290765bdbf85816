//! Implementation blocks for the cache controller and its adapters.

pub mod cache;

pub mod cache_client;

pub mod cache_entry;

pub mod key_deriver;

pub mod cache_connector_redis;

pub mod cache_connector_disk;

pub mod cache_connector_memory;
