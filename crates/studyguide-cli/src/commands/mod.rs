//! Command implementations.

pub mod config;
pub mod generate;
pub mod prompts;

pub use self::config::execute_config;
pub use self::generate::execute_generate;
pub use self::prompts::execute_prompts;
