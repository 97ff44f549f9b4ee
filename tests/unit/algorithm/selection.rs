//! Tests for per-item and whole-board selection operations

#[cfg(test)]
mod tests {
    use tileboard::algorithm::selection::{
        deselect, deselect_all, end_of_step, is_selected, select, select_all, selected_tiles,
        switch, toggle_select,
    };
    use tileboard::spatial::token::Token;
    use tileboard::{Board, BoardError, BoardState, Selectable, TileIndex};

    use crate::{generated_board, tile_ref};

    fn selected_indices(board: &Board) -> Vec<TileIndex> {
        selected_tiles(board)
            .map(|refs| refs.iter().map(|r| r.index()).collect())
            .unwrap_or_default()
    }

    // Tests select all then deselect all over every tile
    #[test]
    fn test_select_all_and_deselect_all() {
        let mut board = generated_board(4);

        assert!(select_all(&mut board).is_ok());
        assert_eq!(selected_indices(&board).len(), 16);

        assert!(deselect_all(&mut board).is_ok());
        assert!(selected_indices(&board).is_empty());
    }

    // Tests the board's own delegating methods
    #[test]
    fn test_board_delegation() {
        let mut board = generated_board(3);

        assert!(board.select_all_tiles().is_ok());
        assert_eq!(board.selected_tiles().map(|s| s.len()).ok(), Some(9));
        assert!(board.deselect_all_tiles().is_ok());
        assert_eq!(board.selected_tiles().map(|s| s.len()).ok(), Some(0));
    }

    // Tests selected tiles come back in scan order
    #[test]
    fn test_selected_tiles_in_scan_order() {
        let mut board = generated_board(3);
        for (x, z) in [(2, 0), (0, 2), (1, 1), (0, 0)] {
            let reference = tile_ref(&board, x, z);
            assert!(board.select(reference).is_ok());
        }

        assert_eq!(
            selected_indices(&board),
            vec![
                TileIndex::new(0, 0),
                TileIndex::new(0, 2),
                TileIndex::new(1, 1),
                TileIndex::new(2, 0),
            ]
        );
    }

    // Tests the returned sequence is a snapshot
    // Verified by returning a lazily filtered view
    #[test]
    fn test_selected_tiles_is_a_snapshot() {
        let mut board = generated_board(2);
        assert!(board.select_all_tiles().is_ok());

        let snapshot = selected_tiles(&board).unwrap_or_default();
        assert!(board.deselect_all_tiles().is_ok());

        assert_eq!(snapshot.len(), 4);
        assert!(selected_indices(&board).is_empty());
    }

    // Tests bulk operations refuse an ungenerated board
    #[test]
    fn test_bulk_operations_require_generated_board() {
        let mut board = Board::new();

        for result in [
            select_all(&mut board),
            deselect_all(&mut board),
            end_of_step(&mut board),
        ] {
            assert!(matches!(
                result,
                Err(BoardError::InvalidState {
                    state: BoardState::Empty,
                    ..
                })
            ));
        }
        assert!(selected_tiles(&board).is_err());
    }

    // Tests the step flag is true during step K and false in K + 1
    // Verified by skipping end_of_step for selected tiles
    #[test]
    fn test_end_of_step_clears_step_flags() {
        let mut board = generated_board(3);
        let reference = tile_ref(&board, 1, 2);

        assert!(board.select(reference).is_ok());
        assert!(
            board
                .resolve(reference)
                .is_ok_and(Selectable::selected_this_step)
        );

        assert!(board.end_of_step().is_ok());
        let Ok(tile) = board.resolve(reference) else {
            unreachable!("reference must resolve");
        };
        assert!(tile.is_selected());
        assert!(!tile.selected_this_step());
        assert!(
            board
                .tiles()
                .is_ok_and(|mut tiles| tiles.all(|t| !t.selected_this_step()))
        );
    }

    // Tests a reselect in a later step raises the flag again
    #[test]
    fn test_reselect_in_next_step_raises_flag() {
        let mut board = generated_board(2);
        let reference = tile_ref(&board, 0, 1);

        assert!(board.select(reference).is_ok());
        assert!(end_of_step(&mut board).is_ok());
        assert!(board.select(reference).is_ok());

        assert!(
            board
                .resolve(reference)
                .is_ok_and(Selectable::selected_this_step)
        );
    }

    // Tests the generic helpers on a non-tile selectable
    #[test]
    fn test_generic_helpers_accept_any_selectable() {
        let mut token = Token::new("passenger");

        select(&mut token);
        select(&mut token);
        assert!(is_selected(&token));
        assert!(token.menu().is_visible());

        deselect(&mut token);
        assert!(!is_selected(&token));

        assert!(toggle_select(&mut token));
        assert!(!toggle_select(&mut token));

        switch(&mut token, true);
        assert!(token.menu().is_visible());
        switch(&mut token, false);
        assert!(!is_selected(&token));
    }
}
