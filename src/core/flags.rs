//! Header field selection flags

use bitflags::bitflags;

bitflags! {
    /// Selects which fields the line header carries. Bits are or'ed together;
    /// there is no control over the order the fields appear.
    ///
    /// `DATE | TIME` produces
    ///
    /// ```text
    /// 2009/01/23 01:23:23 message
    /// ```
    ///
    /// while `DATE | TIME | MICROSECONDS | LONG_FILE` produces
    ///
    /// ```text
    /// 2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message
    /// ```
    ///
    /// Any mask value is accepted as-is; unusual combinations simply produce
    /// a differently-shaped header.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HeaderFlags: u32 {
        /// Date in `YYYY/MM/DD` form.
        const DATE = 1 << 0;
        /// Time in `HH:MM:SS` form.
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123`. Assumes `TIME`.
        const MICROSECONDS = 1 << 2;
        /// Full file path and line number: `/a/b/c/d.rs:23`.
        const LONG_FILE = 1 << 3;
        /// Final path element and line number: `d.rs:23`. Overrides `LONG_FILE`.
        const SHORT_FILE = 1 << 4;
        /// If `DATE` or `TIME` is set, use UTC rather than the local time zone.
        const UTC = 1 << 5;
        /// Level tag, colorable in terminal mode: `ERROR`.
        const LEVEL = 1 << 6;
        /// Initial flags for a typical logger.
        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl HeaderFlags {
    /// Whether the header needs a resolved caller location.
    pub fn wants_location(&self) -> bool {
        self.intersects(Self::SHORT_FILE | Self::LONG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_flags() {
        assert_eq!(HeaderFlags::STD, HeaderFlags::DATE | HeaderFlags::TIME);
    }

    #[test]
    fn test_wants_location() {
        assert!(HeaderFlags::SHORT_FILE.wants_location());
        assert!(HeaderFlags::LONG_FILE.wants_location());
        assert!((HeaderFlags::STD | HeaderFlags::SHORT_FILE).wants_location());
        assert!(!HeaderFlags::STD.wants_location());
        assert!(!HeaderFlags::empty().wants_location());
    }
}
