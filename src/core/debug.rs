//! Opt-in diagnostic channel for solutions.
//!
//! Lines are prefixed with `DEBUG:` and go to a separate sink (stderr in the
//! binary) so they never mix with judged output.

use std::io::Write;

pub const DEBUG_ENV: &str = "CPKIT_DEBUG";

pub struct DebugLog<W: Write> {
    enabled: bool,
    sink: W,
}

impl<W: Write> DebugLog<W> {
    pub fn new(enabled: bool, sink: W) -> Self {
        Self { enabled, sink }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Write one `DEBUG:` line. Sink failures are ignored: diagnostics must not
    /// abort a run.
    pub fn log(&mut self, msg: impl std::fmt::Display) {
        if !self.enabled {
            return;
        }
        let _ = writeln!(self.sink, "DEBUG: {}", msg);
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Interpret `CPKIT_DEBUG`. Unset, empty, `0` and `false` mean off.
pub fn env_flag(value: Option<&str>) -> Option<bool> {
    let v = value?.trim();
    if v.is_empty() {
        return None;
    }
    Some(!(v == "0" || v.eq_ignore_ascii_case("false")))
}
