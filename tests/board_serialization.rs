use chessgame::{BoardState, Cell, Square};
use proptest::prelude::*;

#[test]
fn test_empty_board_json_roundtrip() {
    let board = BoardState::create();
    let json = serde_json::to_string(&board).unwrap();
    let decoded: BoardState = serde_json::from_str(&json).unwrap();
    assert_eq!(board, decoded);
}

proptest! {
    #[test]
    fn board_state_json_roundtrip(
        writes in proptest::collection::vec((0usize..8, 0usize..8, any::<char>()), 0..16)
    ) {
        let mut board = BoardState::create();
        for (r, f, c) in writes {
            board.set_square(Square::new(r, f).unwrap(), Cell::Marker(c));
        }
        let json = serde_json::to_string(&board).unwrap();
        let decoded: BoardState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(board, decoded);
    }
}
