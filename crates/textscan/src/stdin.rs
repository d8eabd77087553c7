//! Scanning from the process's standard input.
//!
//! A single wrapper decodes stdin one UTF‑8 character at a time and keeps
//! the characters the engine handed back (peeks, putbacks, rollbacks) so the
//! next call sees them first. Bytes are pulled from `std::io::stdin()` only
//! as they are decoded, so nothing is read ahead of what the engine looked
//! at.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::string::String;
use std::sync::{Mutex, PoisonError};

use tracing::trace;

use crate::cursor::{BufferedCursor, CharSource};
use crate::reader::decode_char;
use crate::vscan::vscan;
use crate::{Arg, DEFAULT_LOCALE, ScanError};

/// Decoder state over the process's standard input.
#[derive(Debug, Default)]
pub struct StdinSource {
    pending: VecDeque<char>,
}

impl StdinSource {
    /// Characters handed back by the engine and not yet re-read.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the characters held back by the wrapper, for
    /// callers that go on reading stdin directly.
    pub fn take_pending(&mut self) -> String {
        self.pending.drain(..).collect()
    }

    /// Brings the process's other output in line after a scan: flushes
    /// stdout so interleaved prompts are visible before the next read.
    ///
    /// # Errors
    /// A failing flush.
    pub fn sync(&mut self) -> Result<(), ScanError> {
        trace!(pending = self.pending.len(), "stdin sync");
        io::stdout().flush()?;
        Ok(())
    }
}

impl CharSource for StdinSource {
    fn next_char(&mut self) -> Result<char, ScanError> {
        if let Some(ch) = self.pending.pop_front() {
            return Ok(ch);
        }
        decode_char(&mut io::stdin().lock())
    }

    fn unread(&mut self, ch: char) {
        self.pending.push_front(ch);
    }
}

static STDIN: Mutex<Option<StdinSource>> = Mutex::new(None);

/// Sets up the process-wide stdin wrapper. Calling it again is harmless;
/// [`input`] calls it on first use.
pub fn init_stdin() {
    let mut slot = STDIN.lock().unwrap_or_else(PoisonError::into_inner);
    slot.get_or_insert_with(StdinSource::default);
}

/// Tears the wrapper down, returning the characters it still held.
pub fn shutdown_stdin() -> String {
    let mut slot = STDIN.lock().unwrap_or_else(PoisonError::into_inner);
    slot.take().map(|mut s| s.take_pending()).unwrap_or_default()
}

/// Runs `f` with exclusive access to the process-wide wrapper.
pub fn with_stdin<R>(f: impl FnOnce(&mut StdinSource) -> R) -> R {
    let mut slot = STDIN.lock().unwrap_or_else(PoisonError::into_inner);
    f(slot.get_or_insert_with(StdinSource::default))
}

/// Scans standard input according to `format`.
///
/// Characters the scan looked at but did not consume stay with the wrapper
/// and are seen by the next call.
///
/// # Errors
/// As for [`scan`](crate::scan), with [`ScanError::EndOfStream`] at
/// end-of-file.
pub fn input(format: &str, args: &mut [Arg<'_>]) -> Result<(), ScanError> {
    with_stdin(|source| {
        let outcome = {
            let mut cursor = BufferedCursor::new(&mut *source);
            vscan(&mut cursor, &DEFAULT_LOCALE, format, args)
        };
        source.sync()?;
        outcome
    })
}

/// Writes `prompt` to stdout, flushes it, then behaves like [`input`].
///
/// # Errors
/// As for [`input`], plus a failing write.
pub fn prompt(prompt: &str, format: &str, args: &mut [Arg<'_>]) -> Result<(), ScanError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;
    drop(stdout);
    input(format, args)
}
