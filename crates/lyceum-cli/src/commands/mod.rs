//! Command implementations.

pub mod analyze;
pub mod assemble;
pub mod cite;
pub mod classify;
pub mod config;
pub mod validate;

pub use self::analyze::execute_analyze;
pub use self::assemble::execute_assemble;
pub use self::cite::execute_cite;
pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::validate::execute_validate;
