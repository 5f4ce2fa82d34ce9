//! Main logger implementation

use super::error::Result;
use super::flags::HeaderFlags;
use super::level::Level;
use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike};
use parking_lot::Mutex;
use std::fmt::{self, Display, Write as _};
use std::io::Write;

/// Column the suffix is right-aligned to. When a suffix is configured and the
/// message body is shorter than this, the body is padded with spaces up to
/// this column before the suffix is appended.
pub const MAX_CONTENT_LEN: usize = 66;

/// Default number of frames skipped above [`Logger::output`] when resolving
/// the caller: depth 1 is `output`'s caller, so 2 steps over one convenience
/// method and lands on its call site.
pub const DEFAULT_CALL_DEPTH: usize = 2;

/// Whether the sink is an interactive terminal. Level tags are wrapped in
/// ANSI color escapes only in `Terminal` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    Terminal,
    #[default]
    NotTerminal,
}

/// A `Logger` generates lines of output to an exclusively owned sink. Each
/// logging operation makes a single call to the sink's write method, and an
/// internal mutex serializes those calls, so a single instance can be shared
/// by many threads.
///
/// Every message is output on a separate line: if the message being printed
/// does not end in a newline, the logger adds one. The `fatal*` methods call
/// `process::exit(1)` after writing the log line; the `panic*` methods call
/// `panic!` with the formatted message.
pub struct Logger {
    inner: Mutex<Inner>,
}

/// All state lives behind the one mutex so that an in-flight emit sees a
/// consistent snapshot of the configuration.
struct Inner {
    sink: Box<dyn Write + Send>,
    level: Level,
    flags: HeaderFlags,
    line_prefix: String,
    content_prefix: String,
    suffix: String,
    terminal: TerminalMode,
    call_depth: usize,
    // Scratch for header+body assembly, reused between calls.
    buf: String,
}

impl Inner {
    /// Renders the line header into the scratch buffer:
    /// the line prefix, then the level tag, date and/or time, and file and
    /// line number, each gated on the corresponding flag bit.
    fn format_header(&mut self, now: DateTime<Local>, file: &str, line: u32, level: Level) {
        self.buf.push_str(&self.line_prefix);

        if self.flags.contains(HeaderFlags::LEVEL) {
            match (self.terminal, level.color()) {
                (TerminalMode::Terminal, Some(color)) => {
                    let _ = write!(
                        self.buf,
                        "\x1b[{}m{}\x1b[0m",
                        color.to_fg_str(),
                        level.as_str()
                    );
                }
                _ => self.buf.push_str(level.as_str()),
            }
            self.buf.push(' ');
        }

        if self
            .flags
            .intersects(HeaderFlags::DATE | HeaderFlags::TIME | HeaderFlags::MICROSECONDS)
        {
            let t: NaiveDateTime = if self.flags.contains(HeaderFlags::UTC) {
                now.naive_utc()
            } else {
                now.naive_local()
            };
            if self.flags.contains(HeaderFlags::DATE) {
                let _ = write!(self.buf, "{:04}/{:02}/{:02} ", t.year(), t.month(), t.day());
            }
            if self
                .flags
                .intersects(HeaderFlags::TIME | HeaderFlags::MICROSECONDS)
            {
                let _ = write!(self.buf, "{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second());
                if self.flags.contains(HeaderFlags::MICROSECONDS) {
                    // Leap seconds carry nanoseconds past 1e9; keep the field
                    // at six digits.
                    let _ = write!(self.buf, ".{:06}", t.nanosecond() / 1_000 % 1_000_000);
                }
                self.buf.push(' ');
            }
        }

        if self.flags.wants_location() {
            let file = if self.flags.contains(HeaderFlags::SHORT_FILE) {
                file.rsplit('/').next().unwrap_or(file)
            } else {
                file
            };
            let _ = write!(self.buf, "{}:{}: ", file, line);
        }
    }

    /// Assembles header, content prefix, body, padding and suffix in the
    /// scratch buffer and writes it to the sink in a single call.
    fn emit(
        &mut self,
        now: DateTime<Local>,
        file: &str,
        line: u32,
        msg: &str,
        level: Level,
    ) -> Result<()> {
        self.buf.clear();
        self.format_header(now, file, line, level);

        if !self.content_prefix.is_empty() {
            self.buf.push_str(&self.content_prefix);
        }

        // One trailing newline is stripped; the logical body length used for
        // padding excludes it.
        let body = msg.strip_suffix('\n').unwrap_or(msg);
        self.buf.push_str(body);

        if !self.suffix.is_empty() {
            for _ in body.len()..MAX_CONTENT_LEN {
                self.buf.push(' ');
            }
            self.buf.push_str(&self.suffix);
        }

        if !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }

        self.sink.write_all(self.buf.as_bytes())?;
        Ok(())
    }
}

/// Walks the stack and returns the source location `call_depth` frames above
/// [`Logger::output`], or `None` when it cannot be resolved (stripped
/// binaries, a depth past the top of the stack).
///
/// The resolver's own frames and everything below `output` are not counted:
/// depth 0 is `output` itself and depth 1 is its caller, so the same
/// configured depth works no matter how deep in the stack the logger is
/// invoked.
#[inline(never)]
fn resolve_caller(call_depth: usize) -> Option<(String, u32)> {
    let mut depth_above_output: Option<usize> = None;
    let mut resolved = None;
    backtrace::trace(|frame| {
        let mut is_output = false;
        let mut location = None;
        backtrace::resolve_frame(frame, |symbol| {
            if let Some(name) = symbol.name() {
                let name = name.to_string();
                if name.contains("Logger") && name.contains("output") {
                    is_output = true;
                }
            }
            if location.is_none() {
                if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
                    location = Some((file.display().to_string(), line));
                }
            }
        });
        let depth = match depth_above_output {
            None => {
                if is_output {
                    depth_above_output = Some(0);
                    0
                } else {
                    return true; // still inside the resolver's own frames
                }
            }
            Some(d) => {
                depth_above_output = Some(d + 1);
                d + 1
            }
        };
        if depth == call_depth {
            resolved = location;
            return false;
        }
        true
    });
    resolved
}

impl Logger {
    /// Creates a new `Logger`. `sink` sets the destination to which log data
    /// will be written. `line_prefix` appears at the beginning of each
    /// generated line; `suffix` at the end, right-aligned to column
    /// [`MAX_CONTENT_LEN`]. `flags` select the header fields.
    pub fn new(
        sink: impl Write + Send + 'static,
        line_prefix: impl Into<String>,
        suffix: impl Into<String>,
        flags: HeaderFlags,
        level: Level,
        terminal: TerminalMode,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                sink: Box::new(sink),
                level,
                flags,
                line_prefix: line_prefix.into(),
                content_prefix: String::new(),
                suffix: suffix.into(),
                terminal,
                call_depth: DEFAULT_CALL_DEPTH,
                buf: String::new(),
            }),
        }
    }

    /// Whether a message at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.inner.lock().level
    }

    /// Writes the output for a logging event. `msg` is the text to print
    /// after the header; `call_depth` is the number of frames above this
    /// method to skip when resolving the caller's source location and is
    /// provided for generality, although on all pre-defined paths it is the
    /// configured depth.
    #[inline(never)]
    pub fn output(&self, call_depth: usize, msg: &str, level: Level) -> Result<()> {
        let now = Local::now(); // capture early, before taking the lock
        let mut file = String::new();
        let mut line = 0u32;
        let mut inner = self.inner.lock();
        if inner.flags.wants_location() {
            // Resolving the caller is expensive; release the lock around it.
            drop(inner);
            match resolve_caller(call_depth) {
                Some((f, l)) => {
                    file = f;
                    line = l;
                }
                None => file.push_str("???"),
            }
            inner = self.inner.lock();
        }
        inner.emit(now, &file, line, msg, level)
    }

    /// Snapshot of the configured call depth when `level` passes the gate,
    /// `None` when the message is suppressed. Returns before the caller
    /// forwards to [`Logger::output`], so gating adds no stack frame between
    /// a convenience method and `output`.
    fn gate(&self, level: Level) -> Option<usize> {
        let inner = self.inner.lock();
        if level > inner.level {
            None
        } else {
            Some(inner.call_depth)
        }
    }

    /// Logs at an explicit `level` with lazily rendered format arguments,
    /// gated on the configured level like the per-level methods. The logging
    /// macros route through this, which keeps them at the same frame depth
    /// above [`Logger::output`] as the per-level methods.
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        match self.gate(level) {
            Some(depth) => self.output(depth, &args.to_string(), level),
            None => Ok(()),
        }
    }

    /// Logs at `Error` level in the manner of `print!`.
    pub fn error(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Error) {
            Some(depth) => self.output(depth, &msg.to_string(), Level::Error),
            None => Ok(()),
        }
    }

    /// Logs at `Error` level in the manner of `print!` with lazily rendered
    /// format arguments; build them with `format_args!` or the [`crate::error!`]
    /// macro.
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        match self.gate(Level::Error) {
            Some(depth) => self.output(depth, &args.to_string(), Level::Error),
            None => Ok(()),
        }
    }

    /// Logs at `Error` level in the manner of `println!`.
    pub fn errorln(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Error) {
            Some(depth) => self.output(depth, &format!("{msg}\n"), Level::Error),
            None => Ok(()),
        }
    }

    /// Logs at `Warn` level in the manner of `print!`.
    pub fn warn(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Warn) {
            Some(depth) => self.output(depth, &msg.to_string(), Level::Warn),
            None => Ok(()),
        }
    }

    /// Logs at `Warn` level with lazily rendered format arguments.
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        match self.gate(Level::Warn) {
            Some(depth) => self.output(depth, &args.to_string(), Level::Warn),
            None => Ok(()),
        }
    }

    /// Logs at `Warn` level in the manner of `println!`.
    pub fn warnln(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Warn) {
            Some(depth) => self.output(depth, &format!("{msg}\n"), Level::Warn),
            None => Ok(()),
        }
    }

    /// Logs at `Info` level in the manner of `print!`.
    pub fn info(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Info) {
            Some(depth) => self.output(depth, &msg.to_string(), Level::Info),
            None => Ok(()),
        }
    }

    /// Logs at `Info` level with lazily rendered format arguments.
    pub fn infof(&self, args: fmt::Arguments<'_>) -> Result<()> {
        match self.gate(Level::Info) {
            Some(depth) => self.output(depth, &args.to_string(), Level::Info),
            None => Ok(()),
        }
    }

    /// Logs at `Info` level in the manner of `println!`.
    pub fn infoln(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Info) {
            Some(depth) => self.output(depth, &format!("{msg}\n"), Level::Info),
            None => Ok(()),
        }
    }

    /// Logs at `Debug` level in the manner of `print!`.
    pub fn debug(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Debug) {
            Some(depth) => self.output(depth, &msg.to_string(), Level::Debug),
            None => Ok(()),
        }
    }

    /// Logs at `Debug` level with lazily rendered format arguments.
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        match self.gate(Level::Debug) {
            Some(depth) => self.output(depth, &args.to_string(), Level::Debug),
            None => Ok(()),
        }
    }

    /// Logs at `Debug` level in the manner of `println!`.
    pub fn debugln(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Debug) {
            Some(depth) => self.output(depth, &format!("{msg}\n"), Level::Debug),
            None => Ok(()),
        }
    }

    /// Logs at `Verbose` level in the manner of `print!`.
    pub fn verbose(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Verbose) {
            Some(depth) => self.output(depth, &msg.to_string(), Level::Verbose),
            None => Ok(()),
        }
    }

    /// Logs at `Verbose` level with lazily rendered format arguments.
    pub fn verbosef(&self, args: fmt::Arguments<'_>) -> Result<()> {
        match self.gate(Level::Verbose) {
            Some(depth) => self.output(depth, &args.to_string(), Level::Verbose),
            None => Ok(()),
        }
    }

    /// Logs at `Verbose` level in the manner of `println!`.
    pub fn verboseln(&self, msg: impl Display) -> Result<()> {
        match self.gate(Level::Verbose) {
            Some(depth) => self.output(depth, &format!("{msg}\n"), Level::Verbose),
            None => Ok(()),
        }
    }

    /// Equivalent to [`Logger::print`] at `Panic` level followed by `panic!`.
    /// Not gated by the configured level; the line is written before control
    /// flow unwinds, and the write result is deliberately discarded.
    pub fn panic(&self, msg: impl Display) -> ! {
        let s = msg.to_string();
        let _ = self.output(self.call_depth(), &s, Level::Panic);
        panic!("{}", s)
    }

    /// Equivalent to [`Logger::printf`] at `Panic` level followed by `panic!`.
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let s = args.to_string();
        let _ = self.output(self.call_depth(), &s, Level::Panic);
        panic!("{}", s)
    }

    /// Equivalent to [`Logger::println`] at `Panic` level followed by `panic!`.
    pub fn panicln(&self, msg: impl Display) -> ! {
        let s = format!("{msg}\n");
        let _ = self.output(self.call_depth(), &s, Level::Panic);
        panic!("{}", s)
    }

    /// Equivalent to [`Logger::print`] at `Fatal` level followed by
    /// `process::exit(1)`. Not gated by the configured level; the process
    /// terminates after the write has been attempted.
    pub fn fatal(&self, msg: impl Display) -> ! {
        let _ = self.output(self.call_depth(), &msg.to_string(), Level::Fatal);
        std::process::exit(1)
    }

    /// Equivalent to [`Logger::printf`] at `Fatal` level followed by
    /// `process::exit(1)`.
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.output(self.call_depth(), &args.to_string(), Level::Fatal);
        std::process::exit(1)
    }

    /// Equivalent to [`Logger::println`] at `Fatal` level followed by
    /// `process::exit(1)`.
    pub fn fatalln(&self, msg: impl Display) -> ! {
        let _ = self.output(self.call_depth(), &format!("{msg}\n"), Level::Fatal);
        std::process::exit(1)
    }

    /// Logs at the currently configured level in the manner of `print!`,
    /// without level gating.
    pub fn print(&self, msg: impl Display) -> Result<()> {
        let (call_depth, level) = self.depth_and_level();
        self.output(call_depth, &msg.to_string(), level)
    }

    /// Logs at the currently configured level with pre-built format
    /// arguments, without level gating.
    pub fn printf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        let (call_depth, level) = self.depth_and_level();
        self.output(call_depth, &args.to_string(), level)
    }

    /// Logs at the currently configured level in the manner of `println!`,
    /// without level gating.
    pub fn println(&self, msg: impl Display) -> Result<()> {
        let (call_depth, level) = self.depth_and_level();
        self.output(call_depth, &format!("{msg}\n"), level)
    }

    // One lock acquisition so both fields come from the same snapshot.
    fn depth_and_level(&self) -> (usize, Level) {
        let inner = self.inner.lock();
        (inner.call_depth, inner.level)
    }

    /// Returns the minimum emission level.
    pub fn level(&self) -> Level {
        self.inner.lock().level
    }

    /// Sets the minimum emission level; takes effect on the next write.
    pub fn set_level(&self, level: Level) {
        self.inner.lock().level = level;
    }

    /// Returns the header flags.
    pub fn flags(&self) -> HeaderFlags {
        self.inner.lock().flags
    }

    /// Sets the header flags; takes effect on the next write.
    pub fn set_flags(&self, flags: HeaderFlags) {
        self.inner.lock().flags = flags;
    }

    /// Returns the line prefix.
    pub fn prefix(&self) -> String {
        self.inner.lock().line_prefix.clone()
    }

    /// Sets the prefix written at the beginning of each line.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.lock().line_prefix = prefix.into();
    }

    /// Returns the content prefix.
    pub fn content_prefix(&self) -> String {
        self.inner.lock().content_prefix.clone()
    }

    /// Sets the prefix written between the header and the message body.
    pub fn set_content_prefix(&self, prefix: impl Into<String>) {
        self.inner.lock().content_prefix = prefix.into();
    }

    /// Returns the line suffix.
    pub fn suffix(&self) -> String {
        self.inner.lock().suffix.clone()
    }

    /// Sets the suffix written at the end of each line.
    pub fn set_suffix(&self, suffix: impl Into<String>) {
        self.inner.lock().suffix = suffix.into();
    }

    /// Returns the caller-resolution call depth.
    pub fn call_depth(&self) -> usize {
        self.inner.lock().call_depth
    }

    /// Sets the caller-resolution call depth.
    pub fn set_call_depth(&self, call_depth: usize) {
        self.inner.lock().call_depth = call_depth;
    }

    /// Adds one to the call depth, for wrappers that introduce one extra
    /// frame of indirection between the call site and [`Logger::output`].
    pub fn incr_call_depth(&self) {
        self.inner.lock().call_depth += 1;
    }

    /// Returns the terminal mode.
    pub fn terminal_mode(&self) -> TerminalMode {
        self.inner.lock().terminal
    }

    /// Sets whether log output goes to a terminal.
    pub fn set_terminal_mode(&self, terminal: TerminalMode) {
        self.inner.lock().terminal = terminal;
    }

    /// Replaces the output destination. The previous sink is dropped; its
    /// lifecycle beyond that remains its owner's concern.
    pub fn set_sink(&self, sink: impl Write + Send + 'static) {
        self.inner.lock().sink = Box::new(sink);
    }
}
