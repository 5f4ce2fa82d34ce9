//! # logkit
//!
//! A leveled, concurrency-safe text logger, plus an MD5 hashing helper.
//!
//! The [`Logger`] type generates lines of output to an exclusively owned
//! sink. Each logging operation makes a single call to the sink's write
//! method, and an internal mutex serializes those calls, so one instance may
//! be shared freely between threads without interleaving partial lines.
//!
//! Every log message is output on a separate line: if the message being
//! printed does not end in a newline, the logger adds one. The `fatal*`
//! methods call `process::exit(1)` after writing the log message; the
//! `panic*` methods call `panic!` after writing.
//!
//! ## Example
//!
//! ```
//! use logkit::prelude::*;
//!
//! let logger = Logger::new(
//!     std::io::stderr(),
//!     "",
//!     "",
//!     HeaderFlags::STD | HeaderFlags::LEVEL,
//!     Level::Info,
//!     TerminalMode::Terminal,
//! );
//!
//! logger.infof(format_args!("listening on port {}", 8080)).ok();
//! logger.warn("disk space low").ok();
//! ```

pub mod core;
pub mod hash;
pub mod macros;

pub mod prelude {
    pub use crate::core::{HeaderFlags, Level, LogError, Logger, Result, TerminalMode};
    pub use crate::hash::{md5_hex, md5_hex_str};
}

pub use crate::core::{
    HeaderFlags, Level, LogError, Logger, Result, TerminalMode, DEFAULT_CALL_DEPTH,
    MAX_CONTENT_LEN,
};
pub use crate::hash::{md5_hex, md5_hex_str};
