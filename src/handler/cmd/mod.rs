pub mod command;
pub mod laybuy;
