//! Logging macros for ergonomic log message formatting.
//!
//! These macros gate on the logger's configured level *before* rendering
//! their format arguments, so suppressed levels cost neither formatting nor
//! allocation. Write failures are discarded by the macros; call the `*f`
//! methods directly when the write result matters.
//!
//! # Examples
//!
//! ```
//! use logkit::prelude::*;
//! use logkit::info;
//!
//! let logger = Logger::new(
//!     std::io::sink(),
//!     "",
//!     "",
//!     HeaderFlags::STD,
//!     Level::Info,
//!     TerminalMode::NotTerminal,
//! );
//!
//! info!(logger, "server listening on port {}", 8080);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// Expands to a call to [`Logger::logf`](crate::Logger::logf), so the source
/// location reported under the file flags is the macro invocation site.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let logger = Logger::new(std::io::sink(), "", "", HeaderFlags::empty(), Level::Info, TerminalMode::NotTerminal);
/// use logkit::log;
/// log!(logger, Level::Info, "simple message");
/// log!(logger, Level::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let _ = $logger.logf($level, ::std::format_args!($($arg)+));
    }};
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let logger = Logger::new(std::io::sink(), "", "", HeaderFlags::empty(), Level::Info, TerminalMode::NotTerminal);
/// use logkit::error;
/// error!(logger, "failed to connect: {}", "refused");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a warn-level message.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let logger = Logger::new(std::io::sink(), "", "", HeaderFlags::empty(), Level::Info, TerminalMode::NotTerminal);
/// use logkit::warn;
/// warn!(logger, "retry {} of {}", 1, 3);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let logger = Logger::new(std::io::sink(), "", "", HeaderFlags::empty(), Level::Info, TerminalMode::NotTerminal);
/// use logkit::info;
/// info!(logger, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let logger = Logger::new(std::io::sink(), "", "", HeaderFlags::empty(), Level::Debug, TerminalMode::NotTerminal);
/// use logkit::debug;
/// debug!(logger, "counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log a verbose-level message.
///
/// # Examples
///
/// ```
/// # use logkit::prelude::*;
/// # let logger = Logger::new(std::io::sink(), "", "", HeaderFlags::empty(), Level::Verbose, TerminalMode::NotTerminal);
/// use logkit::verbose;
/// verbose!(logger, "entering state {:?}", "idle");
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Verbose, $($arg)+)
    };
}
