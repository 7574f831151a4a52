//! Common error types for the board, renderer and session.

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Errors returned by board access and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Rank or file index is outside [0, 8).
    IndexOutOfBounds { rank: usize, file: usize },
    /// Board handed to the renderer is not 8×8. `files` is the length of the
    /// first offending rank, or 8 when only the rank count is wrong.
    InvalidBoardShape { ranks: usize, files: usize },
    /// Cell glyph is a control or whitespace character and cannot be drawn
    /// inside a single line.
    InvalidGlyph { rank: usize, file: usize, glyph: char },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::IndexOutOfBounds { rank, file } => {
                write!(f, "IndexOutOfBounds: rank={}, file={}", rank, file)
            }
            BoardError::InvalidBoardShape { ranks, files } => {
                write!(
                    f,
                    "InvalidBoardShape: expected 8x8 board, got {} ranks with {} files",
                    ranks, files
                )
            }
            BoardError::InvalidGlyph { rank, file, glyph } => {
                write!(
                    f,
                    "InvalidGlyph: {:?} at rank={}, file={}",
                    glyph, rank, file
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Failure to write a line to an [`OutputSink`](crate::OutputSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    pub message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for SinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Output failed: {}", self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SinkError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::new(std::format!("{}", err))
    }
}

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Underlying board or rendering error.
    Board(BoardError),
    /// The output sink rejected a line.
    Output(SinkError),
    /// `start` was called on a session that already ran.
    AlreadyStarted,
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl From<SinkError> for SessionError {
    fn from(err: SinkError) -> Self {
        SessionError::Output(err)
    }
}

impl core::fmt::Display for SessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SessionError::Board(e) => write!(f, "Board error: {}", e),
            SessionError::Output(e) => write!(f, "{}", e),
            SessionError::AlreadyStarted => write!(f, "Session has already been started"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Board(e) => Some(e),
            SessionError::Output(e) => Some(e),
            SessionError::AlreadyStarted => None,
        }
    }
}
