//! Log level definitions

use colored::Color;
use std::fmt;
use std::str::FromStr;

/// Ordered severity levels, most severe first.
///
/// A message at level `L` is emitted when `L <= minimum`: `Panic` always
/// passes, `Verbose` passes only when the minimum is set to `Verbose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Panic = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    #[default]
    Info = 4,
    Debug = 5,
    Verbose = 6,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Verbose => "VERBOSE",
        }
    }

    /// ANSI color for the level tag. `None` leaves the tag in the terminal's
    /// default color.
    pub fn color(&self) -> Option<Color> {
        match self {
            Level::Panic | Level::Fatal => None,
            Level::Error => Some(Color::Red),
            Level::Warn => Some(Color::Yellow),
            Level::Info => Some(Color::Green),
            Level::Debug => Some(Color::Cyan),
            Level::Verbose => Some(Color::White),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PANIC" => Ok(Level::Panic),
            "FATAL" => Ok(Level::Fatal),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "VERBOSE" => Ok(Level::Verbose),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Level::Panic < Level::Fatal);
        assert!(Level::Error < Level::Warn);
        assert!(Level::Info < Level::Verbose);
        // Emission predicate: level passes a configured minimum when <= it.
        assert!(Level::Error <= Level::Warn);
        assert!(Level::Debug > Level::Warn);
        assert!(Level::Panic <= Level::Panic);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::Verbose.as_str(), "VERBOSE");
    }

    #[test]
    fn test_colors() {
        assert_eq!(Level::Error.color(), Some(Color::Red));
        assert_eq!(Level::Warn.color(), Some(Color::Yellow));
        assert_eq!(Level::Info.color(), Some(Color::Green));
        assert_eq!(Level::Debug.color(), Some(Color::Cyan));
        assert_eq!(Level::Verbose.color(), Some(Color::White));
        assert_eq!(Level::Panic.color(), None);
        assert_eq!(Level::Fatal.color(), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warn);
        assert!("chatty".parse::<Level>().is_err());
    }
}
