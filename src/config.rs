/// Number of ranks and files on the board.
pub const BOARD_SIZE: usize = 8;
/// Total number of squares.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Glyph drawn for an empty square.
pub const EMPTY_GLYPH: char = '.';

/// Column labels, indexed by file.
pub const FILE_LABELS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Narrative emitted by a session before the board is drawn.
pub const WELCOME_MESSAGE: &str = "=== Welcome to Chess ===";
pub const INITIALIZING_MESSAGE: &str = "Initializing the chess game...";
pub const SETUP_MESSAGE: &str = "Setting up the chess board...";

/// Environment variable holding the log level.
pub const LOG_ENV_VAR: &str = "CHESSGAME_LOG";
