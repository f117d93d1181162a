pub mod config;
pub mod error;

pub use config::AiuiConfig;
pub use error::{AiuiError, Result};
