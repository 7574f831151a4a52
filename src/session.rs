//! One run of the game-start flow: create a board, render it, emit the text.

use crate::board::BoardState;
use crate::common::{SessionError, SinkError};
use crate::config::{INITIALIZING_MESSAGE, SETUP_MESSAGE, WELCOME_MESSAGE};
use crate::render::BoardRenderer;

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

/// Line-oriented destination for session output.
pub trait OutputSink {
    /// Emit one line, without its terminator.
    fn emit(&mut self, line: &str) -> Result<(), SinkError>;
}

/// Collects lines in memory.
impl OutputSink for Vec<String> {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).emit(line)
    }
}

/// Writes each line to standard output.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

#[cfg(feature = "std")]
impl OutputSink for StdoutSink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        use std::io::Write;
        writeln!(std::io::stdout().lock(), "{}", line)?;
        Ok(())
    }
}

/// Lifecycle of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Started,
    Complete,
}

/// A single game session. Owns its board for the session's lifetime.
pub struct Session<S: OutputSink> {
    sink: S,
    board: Option<BoardState>,
    phase: SessionPhase,
}

impl<S: OutputSink> Session<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            board: None,
            phase: SessionPhase::Uninitialized,
        }
    }

    /// Emit the welcome narrative, build an empty board and emit its rendering.
    ///
    /// A session runs once; a second call returns
    /// [`SessionError::AlreadyStarted`] and emits nothing. The board is
    /// rendered before anything is emitted, so a rendering error leaves the
    /// sink untouched. A sink failure stops output at the failing line.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Uninitialized {
            log::warn!("start called on a session in phase {:?}", self.phase);
            return Err(SessionError::AlreadyStarted);
        }
        let board = BoardState::create();
        let lines = BoardRenderer::render(&board)?;

        self.phase = SessionPhase::Started;
        self.board = Some(board);
        log::info!("session started");

        for line in [WELCOME_MESSAGE, INITIALIZING_MESSAGE, "", SETUP_MESSAGE, ""] {
            self.sink.emit(line)?;
        }
        log::debug!("rendering {} board lines", lines.len());
        for line in lines {
            self.sink.emit(&line)?;
        }

        self.phase = SessionPhase::Complete;
        log::info!("session complete");
        Ok(())
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Board created by [`start`](Self::start), if it has run.
    pub fn board(&self) -> Option<&BoardState> {
        self.board.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Run one session against standard output.
///
/// This is the entry point a presentation layer calls when the user asks to
/// start a game.
#[cfg(feature = "std")]
pub fn start_session() -> Result<(), SessionError> {
    Session::new(StdoutSink).start()
}
