pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod rest;

/// Identifier of a store view in the host platform.
pub type StoreId = u32;
