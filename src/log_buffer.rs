//! Diagnostic log ring for the control loop.
//!
//! The loop has no console of its own. It records what it read and decided
//! into a fixed-size circular buffer; whoever owns the loop drains it (the
//! simulator prints it, firmware can ship it over UART). On ARM targets every
//! entry is also forwarded to `defmt`.
//!
//! # Log Levels
//!
//! - `Trace`: verbose debugging
//! - `Debug`: per-iteration readings
//! - `Info`: start-up and configuration
//! - `Warn`: channel over its alarm limit
//! - `Error`: sensor failures
//!
//! # Usage
//!
//! ```ignore
//! log_info!(self.log, "PWM {} Hz", PWM_FREQ_HZ);
//! log_error!(self.log, "ext sensor: {}", err);
//! ```

use heapless::String;

pub use crate::config::{LOG_ENTRIES, LOG_MSG_LEN};

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging
    Trace = 0,
    /// Debug information
    Debug = 1,
    /// Normal operation
    #[default]
    Info = 2,
    /// Warnings
    Warn = 3,
    /// Errors
    Error = 4,
}

impl LogLevel {
    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and loop tick.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// Log severity level.
    pub level: LogLevel,
    /// Log message (truncated to LOG_MSG_LEN - 1 chars).
    pub message: String<LOG_MSG_LEN>,
    /// Control loop iteration the entry was recorded in.
    pub tick: u32,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new(
        level: LogLevel,
        message: &str,
        tick: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for (i, c) in message.chars().enumerate() {
            if i >= LOG_MSG_LEN - 1 {
                break;
            }
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            tick,
        }
    }
}

impl Default for LogEntry {
    fn default() -> Self { Self::new(LogLevel::Info, "", 0) }
}

/// Circular buffer of log entries.
#[derive(Debug)]
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
    tick: u32,
    min_level: LogLevel,
}

impl LogBuffer {
    /// Create a new empty log buffer keeping `Debug` and above.
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    tick: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
            tick: 0,
            min_level: LogLevel::Debug,
        }
    }

    /// Drop entries below `level` from now on.
    pub fn set_min_level(
        &mut self,
        level: LogLevel,
    ) {
        self.min_level = level;
    }

    /// Whether an entry at `level` would be kept.
    #[inline]
    pub fn enabled(
        &self,
        level: LogLevel,
    ) -> bool {
        level >= self.min_level
    }

    /// Set the tick stamped on subsequent entries.
    #[inline]
    pub fn set_tick(
        &mut self,
        tick: u32,
    ) {
        self.tick = tick;
    }

    /// Record a message at the current tick.
    pub fn log(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        if !self.enabled(level) {
            return;
        }
        forward(level, message);
        self.push(LogEntry::new(level, message, self.tick));
    }

    /// Push a new log entry. Oldest entry is dropped if buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        self.entries[self.head] = entry;
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Forget all entries.
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }

    /// Hand every entry (oldest first) to `f`, then empty the buffer.
    pub fn drain(
        &mut self,
        mut f: impl FnMut(&LogEntry),
    ) {
        for entry in self.iter() {
            f(entry);
        }
        self.clear();
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Mirror an entry to the debug probe.
#[cfg(target_arch = "arm")]
fn forward(
    level: LogLevel,
    message: &str,
) {
    match level {
        LogLevel::Trace => defmt::trace!("{=str}", message),
        LogLevel::Debug => defmt::debug!("{=str}", message),
        LogLevel::Info => defmt::info!("{=str}", message),
        LogLevel::Warn => defmt::warn!("{=str}", message),
        LogLevel::Error => defmt::error!("{=str}", message),
    }
}

#[cfg(not(target_arch = "arm"))]
fn forward(
    _level: LogLevel,
    _message: &str,
) {
}

/// Iterator over log buffer entries (oldest to newest).
#[derive(Debug)]
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

/// Format into a log buffer at the given level.
macro_rules! log_at {
    ($buffer:expr, $level:expr, $($arg:tt)*) => {{
        let level = $level;
        if $buffer.enabled(level) {
            use core::fmt::Write;
            let mut buf: heapless::String<{ $crate::log_buffer::LOG_MSG_LEN }> = heapless::String::new();
            // Overlong messages are cut at capacity
            let _ = write!(buf, $($arg)*);
            $buffer.log(level, buf.as_str());
        }
    }};
}

/// Log a message at Info level.
macro_rules! log_info {
    ($buffer:expr, $($arg:tt)*) => {
        log_at!($buffer, $crate::log_buffer::LogLevel::Info, $($arg)*)
    };
}

/// Log a message at Warn level.
macro_rules! log_warn {
    ($buffer:expr, $($arg:tt)*) => {
        log_at!($buffer, $crate::log_buffer::LogLevel::Warn, $($arg)*)
    };
}

/// Log a message at Error level.
macro_rules! log_error {
    ($buffer:expr, $($arg:tt)*) => {
        log_at!($buffer, $crate::log_buffer::LogLevel::Error, $($arg)*)
    };
}

/// Log a message at Debug level.
macro_rules! log_debug {
    ($buffer:expr, $($arg:tt)*) => {
        log_at!($buffer, $crate::log_buffer::LogLevel::Debug, $($arg)*)
    };
}

// =============================================================================
// Unit Tests
// =============================================================================
