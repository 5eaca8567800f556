mod command_result;
pub mod extract;
pub mod init;
pub mod resolve;

pub use command_result::*;
