pub mod encryptor;
pub mod http;
pub mod scope_config;
