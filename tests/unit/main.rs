//! Unit tests mirroring the `src/` tree, one file per source file

mod algorithm;
mod io;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tileboard::io::configuration::numbered_archetypes;
use tileboard::spatial::grid::GridBuilder;
use tileboard::{Board, TileRef};

/// Seed shared by the fixtures so generated variants are stable
pub const FIXTURE_SEED: u64 = 7;

/// Board of `size x size` tiles drawn from a three-archetype pool
pub fn generated_board(size: usize) -> Board {
    let archetypes = numbered_archetypes(3);
    let mut rng = StdRng::seed_from_u64(FIXTURE_SEED);
    let mut board = Board::new();
    let result = board.generate(&GridBuilder::new(&archetypes, size), &mut rng);
    assert!(result.is_ok(), "fixture generation failed: {result:?}");
    board
}

/// Handle to `(x, z)` on a generated board
pub fn tile_ref(board: &Board, x: usize, z: usize) -> TileRef {
    match board.tile_ref(x, z) {
        Ok(reference) => reference,
        Err(error) => unreachable!("fixture tile [{x},{z}] missing: {error}"),
    }
}
