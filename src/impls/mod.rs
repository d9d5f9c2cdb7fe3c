pub mod helper;
pub mod iter;
