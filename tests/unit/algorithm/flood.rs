//! Tests for exhaustive and breadth-first flood selection

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tileboard::algorithm::flood::{FloodStrategy, select_area, select_within};
    use tileboard::io::configuration::numbered_archetypes;
    use tileboard::spatial::grid::GridBuilder;
    use tileboard::{Board, BoardError, TileIndex};

    use crate::{generated_board, tile_ref};

    fn indices(pairs: &[(usize, usize)]) -> BTreeSet<TileIndex> {
        pairs.iter().map(|&(x, z)| TileIndex::new(x, z)).collect()
    }

    fn selected_on_board(board: &Board) -> BTreeSet<TileIndex> {
        board
            .selected_tiles()
            .map(|refs| refs.iter().map(|r| r.index()).collect())
            .unwrap_or_default()
    }

    // Tests radius 1 selects only the centre
    #[test]
    fn test_radius_one_selects_centre_only() {
        let mut board = generated_board(3);
        let centre = tile_ref(&board, 1, 1);

        let Ok(report) = select_area(&mut board, Some(centre), 1) else {
            unreachable!("flood-select must succeed");
        };

        assert_eq!(report.selected(), &indices(&[(1, 1)]));
        assert_eq!(report.visits(), 1);
        assert_eq!(selected_on_board(&board), indices(&[(1, 1)]));
    }

    // Tests radius 2 selects the cross and never a corner
    // Verified by recursing with the same radius instead of radius - 1
    #[test]
    fn test_radius_two_selects_cross_without_corners() {
        let mut board = generated_board(3);
        let centre = tile_ref(&board, 1, 1);

        let Ok(report) = select_area(&mut board, Some(centre), 2) else {
            unreachable!("flood-select must succeed");
        };

        let cross = indices(&[(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]);
        assert!(report.selected().is_superset(&cross));
        for corner in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert!(!report.contains(TileIndex::new(corner.0, corner.1)));
        }
        assert_eq!(selected_on_board(&board), cross);
        assert_eq!(report.visits(), 5);
    }

    // Tests the walk revisits tiles along every path
    // Verified by adding a visited set to the exhaustive walk
    #[test]
    fn test_exhaustive_walk_counts_every_path() {
        let mut board = generated_board(3);
        let centre = tile_ref(&board, 1, 1);
        let Ok(report) = select_area(&mut board, Some(centre), 3) else {
            unreachable!("flood-select must succeed");
        };
        // 1 + 4 edge tiles * (1 + 3 neighbours each)
        assert_eq!(report.visits(), 17);
        assert_eq!(report.len(), 9);

        let mut wide = generated_board(5);
        let middle = tile_ref(&wide, 2, 2);
        let Ok(wide_report) = select_area(&mut wide, Some(middle), 3) else {
            unreachable!("flood-select must succeed");
        };
        // 1 + 4 interior neighbours * (1 + 4)
        assert_eq!(wide_report.visits(), 21);
        assert_eq!(wide_report.len(), 13);
    }

    // Tests a corner centre only reaches its two neighbours at radius 2
    #[test]
    fn test_corner_centre() {
        let mut board = generated_board(3);
        let corner = tile_ref(&board, 0, 0);

        let Ok(report) = select_area(&mut board, Some(corner), 2) else {
            unreachable!("flood-select must succeed");
        };
        assert_eq!(report.selected(), &indices(&[(0, 0), (1, 0), (0, 1)]));
        assert_eq!(report.visits(), 3);
    }

    // Tests radius 0 and a missing centre are no-ops, even on an empty board
    #[test]
    fn test_zero_radius_and_missing_centre_are_noops() {
        let mut board = generated_board(3);
        let centre = tile_ref(&board, 1, 1);

        for result in [
            select_area(&mut board, Some(centre), 0),
            select_area(&mut board, None, 4),
            select_within(&mut board, Some(centre), 0),
            select_within(&mut board, None, 4),
        ] {
            let Ok(report) = result else {
                unreachable!("no-op flood-select must succeed");
            };
            assert!(report.is_empty());
            assert_eq!(report.visits(), 0);
        }
        assert!(selected_on_board(&board).is_empty());

        let mut empty = Board::new();
        assert!(select_area(&mut empty, None, 3).is_ok());
        assert!(select_within(&mut empty, None, 3).is_ok());
    }

    // Tests centres from a torn-down or other generation are reported before anything is selected
    #[test]
    fn test_centre_from_other_generation_is_rejected() {
        let mut board = generated_board(3);
        let centre = tile_ref(&board, 1, 1);
        board.refresh();

        assert!(matches!(
            select_area(&mut board, Some(centre), 2),
            Err(BoardError::InvalidState { .. })
        ));

        let mut other = generated_board(3);
        other.refresh();
        let archetypes = numbered_archetypes(1);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(
            other
                .generate(&GridBuilder::new(&archetypes, 3), &mut rng)
                .is_ok()
        );
        let mut fresh = generated_board(3);
        let foreign = tile_ref(&other, 1, 1);

        assert!(matches!(
            select_within(&mut fresh, Some(foreign), 2),
            Err(BoardError::StaleReference { .. })
        ));
        assert!(selected_on_board(&fresh).is_empty());
    }

    // Tests breadth-first selects the same tiles with one visit per tile
    // Verified by marking tiles visited only when dequeued
    #[test]
    fn test_breadth_matches_exhaustive_selection() {
        for radius in 1..=5 {
            for (x, z) in [(0, 0), (2, 2), (4, 1)] {
                let mut exhaustive = generated_board(5);
                let mut breadth = generated_board(5);
                let a = tile_ref(&exhaustive, x, z);
                let b = tile_ref(&breadth, x, z);

                let (Ok(full), Ok(bfs)) = (
                    select_area(&mut exhaustive, Some(a), radius),
                    select_within(&mut breadth, Some(b), radius),
                ) else {
                    unreachable!("flood-select must succeed");
                };

                assert_eq!(
                    full.selected(),
                    bfs.selected(),
                    "radius {radius} at [{x},{z}]"
                );
                assert_eq!(bfs.visits(), bfs.len());
                assert!(full.visits() >= bfs.visits());

                let centre = TileIndex::new(x, z);
                assert!(
                    bfs.selected()
                        .iter()
                        .all(|&index| index.manhattan_distance(centre) < radius)
                );
            }
        }
    }

    // Tests the strategy enum dispatches to the matching walk
    #[test]
    fn test_strategy_dispatch() {
        let mut board = generated_board(3);
        let centre = tile_ref(&board, 1, 1);

        let exhaustive = FloodStrategy::Exhaustive.run(&mut board, Some(centre), 3);
        assert_eq!(exhaustive.map(|r| r.visits()).ok(), Some(17));

        let breadth = FloodStrategy::Breadth.run(&mut board, Some(centre), 3);
        assert_eq!(breadth.map(|r| r.visits()).ok(), Some(9));

        assert_eq!(FloodStrategy::default(), FloodStrategy::Exhaustive);
    }

    // Tests the board's delegating methods
    #[test]
    fn test_board_flood_delegation() {
        let mut board = generated_board(4);
        let centre = tile_ref(&board, 0, 3);

        let area = board.select_area(Some(centre), 2);
        assert_eq!(area.map(|r| r.len()).ok(), Some(3));
        assert!(board.deselect_all_tiles().is_ok());
        let within = board.select_within(Some(centre), 2);
        assert_eq!(within.map(|r| r.len()).ok(), Some(3));
    }
}
