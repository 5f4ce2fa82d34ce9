//! Core logger types

pub mod error;
pub mod flags;
pub mod level;
pub mod logger;

pub use error::{LogError, Result};
pub use flags::HeaderFlags;
pub use level::Level;
pub use logger::{Logger, TerminalMode, DEFAULT_CALL_DEPTH, MAX_CONTENT_LEN};
