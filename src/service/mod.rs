pub mod laybuy;
