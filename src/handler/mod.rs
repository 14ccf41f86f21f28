pub mod api;
pub mod cmd;
