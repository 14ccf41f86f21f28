pub mod error;
pub mod laybuy;
pub mod response;
