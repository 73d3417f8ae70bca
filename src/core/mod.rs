pub mod batch_store;
pub mod commands;
pub mod engine;
pub mod inoculation_log;
pub mod messages;
pub mod reporter;
pub mod system;
pub mod tokenizer;

pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
