pub mod error_please;
pub mod success_yeah;

pub use error_please::error_please_handler;
pub use success_yeah::success_yeah_handler;
