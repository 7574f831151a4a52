use chessgame::{BoardError, BoardRenderer, BoardState, Cell, RENDERED_LINE_COUNT};

const EMPTY_BOARD: [&str; 12] = [
    "   a b c d e f g h",
    "  +----------------+",
    "8 | . . . . . . . .| 8",
    "7 | . . . . . . . .| 7",
    "6 | . . . . . . . .| 6",
    "5 | . . . . . . . .| 5",
    "4 | . . . . . . . .| 4",
    "3 | . . . . . . . .| 3",
    "2 | . . . . . . . .| 2",
    "1 | . . . . . . . .| 1",
    "  +----------------+",
    "   a b c d e f g h",
];

#[test]
fn test_render_empty_board_exactly() {
    let board = BoardState::create();
    let lines: Vec<String> = BoardRenderer::render(&board).unwrap().collect();
    assert_eq!(lines, EMPTY_BOARD);
}

#[test]
fn test_render_marker_in_top_left() {
    let mut board = BoardState::create();
    board.set(0, 0, Cell::Marker('X')).unwrap();
    let lines: Vec<String> = BoardRenderer::render(&board).unwrap().collect();

    assert_eq!(lines[2], "8 | X . . . . . . .| 8");
    for (i, line) in lines.iter().enumerate() {
        if i != 2 {
            assert_eq!(line, EMPTY_BOARD[i]);
        }
    }
}

#[test]
fn test_render_marker_in_bottom_right() {
    let mut board = BoardState::create();
    board.set(7, 7, Cell::Marker('o')).unwrap();
    let lines: Vec<String> = BoardRenderer::render(&board).unwrap().collect();
    assert_eq!(lines[9], "1 | . . . . . . . o| 1");
}

#[test]
fn test_lines_are_restartable_and_sized() {
    let board = BoardState::create();
    let lines = BoardRenderer::render(&board).unwrap();
    assert_eq!(lines.len(), RENDERED_LINE_COUNT);

    let replay = lines.clone();
    let mut partial = lines.clone();
    partial.next();
    partial.next();
    assert_eq!(partial.len(), RENDERED_LINE_COUNT - 2);

    let first: Vec<String> = lines.collect();
    let second: Vec<String> = replay.collect();
    assert_eq!(first, second);

    let mut done = BoardRenderer::render(&board).unwrap();
    for _ in 0..RENDERED_LINE_COUNT {
        assert!(done.next().is_some());
    }
    assert!(done.next().is_none());
    assert!(done.next().is_none());
}

#[test]
fn test_render_to_string_and_display() {
    let board = BoardState::create();
    let text = BoardRenderer::render_to_string(&board).unwrap();
    assert_eq!(text, EMPTY_BOARD.join("\n"));
    assert_eq!(board.to_string(), format!("{}\n", EMPTY_BOARD.join("\n")));
}

#[test]
fn test_render_accepts_conforming_vec_board() {
    let mut grid = vec![vec![Cell::Empty; 8]; 8];
    grid[3][2] = Cell::Marker('*');
    let lines: Vec<String> = BoardRenderer::render(&grid).unwrap().collect();
    assert_eq!(lines[5], "5 | . . * . . . . .| 5");
}

#[test]
fn test_render_rejects_wrong_rank_count() {
    let grid = vec![vec![Cell::Empty; 8]; 7];
    assert_eq!(
        BoardRenderer::render(&grid).unwrap_err(),
        BoardError::InvalidBoardShape { ranks: 7, files: 8 }
    );
    let empty: Vec<Vec<Cell>> = Vec::new();
    assert_eq!(
        BoardRenderer::render(&empty).unwrap_err(),
        BoardError::InvalidBoardShape { ranks: 0, files: 8 }
    );
}

#[test]
fn test_render_rejects_ragged_rank() {
    let mut grid = vec![vec![Cell::Empty; 8]; 8];
    grid[5].push(Cell::Empty);
    assert_eq!(
        BoardRenderer::render(&grid).unwrap_err(),
        BoardError::InvalidBoardShape { ranks: 8, files: 9 }
    );
    assert!(BoardRenderer::render_to_string(grid.as_slice()).is_err());
}

#[test]
fn test_render_rejects_line_breaking_glyph() {
    let mut board = BoardState::create();
    board.set(0, 0, Cell::Marker('\n')).unwrap();
    assert_eq!(
        BoardRenderer::render(&board).unwrap_err(),
        BoardError::InvalidGlyph { rank: 0, file: 0, glyph: '\n' }
    );
    assert!(BoardRenderer::render_to_string(&board).is_err());

    let mut grid = vec![vec![Cell::Empty; 8]; 8];
    grid[6][3] = Cell::Marker('\t');
    assert_eq!(
        BoardRenderer::render(&grid).unwrap_err(),
        BoardError::InvalidGlyph { rank: 6, file: 3, glyph: '\t' }
    );
}

#[test]
fn test_display_reports_undrawable_board() {
    let mut board = BoardState::create();
    board.set(2, 5, Cell::Marker('\r')).unwrap();
    assert_eq!(
        board.to_string(),
        "InvalidGlyph: '\\r' at rank=2, file=5\n"
    );
}

#[test]
fn test_checked_marker_constructor() {
    assert_eq!(Cell::marker('K'), Some(Cell::Marker('K')));
    assert_eq!(Cell::marker('♔'), Some(Cell::Marker('♔')));
    assert_eq!(Cell::marker('\n'), None);
    assert_eq!(Cell::marker(' '), None);
    assert_eq!(Cell::marker('\u{7f}'), None);
    assert!(Cell::Empty.is_drawable());

    let mut board = BoardState::create();
    board.set(0, 0, Cell::marker('X').unwrap()).unwrap();
    for line in BoardRenderer::render(&board).unwrap() {
        assert!(!line.contains('\n'));
    }
}
