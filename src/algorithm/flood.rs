//! Bounded flood selection around a centre tile
//!
//! Two walks are offered under separate names:
//!
//! - [`select_area`] follows every path: select the centre, then recurse
//!   into each neighbour with `radius - 1`, with no visited set. Tiles
//!   reachable along several paths are selected once per path, so the
//!   number of visits grows exponentially with the radius. Termination
//!   rests solely on the strictly decreasing radius.
//! - [`select_within`] is breadth-first with a visited set and touches each
//!   tile at most once, selecting tiles whose hop distance is below the
//!   radius.
//!
//! On a square grid both select the same tiles; only the visit counts
//! differ. In both, a radius of 1 selects the centre alone.

use std::collections::{BTreeSet, VecDeque};

use bitvec::prelude::*;
use tracing::{debug, instrument};

use crate::algorithm::selectable::Selectable;
use crate::io::error::{Result, invalid_state};
use crate::spatial::board::{Board, BoardState};
use crate::spatial::tiles::{TileIndex, TileRef};

/// Outcome of a flood selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloodReport {
    visits: usize,
    selected: BTreeSet<TileIndex>,
}

impl FloodReport {
    /// Number of select calls performed, counting repeats
    pub const fn visits(&self) -> usize {
        self.visits
    }

    /// Distinct tiles selected, in scan order
    pub const fn selected(&self) -> &BTreeSet<TileIndex> {
        &self.selected
    }

    /// Number of distinct tiles selected
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when nothing was selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the walk selected the tile at `index`
    pub fn contains(&self, index: TileIndex) -> bool {
        self.selected.contains(&index)
    }

    fn record(&mut self, index: TileIndex) {
        self.visits += 1;
        self.selected.insert(index);
    }
}

/// Which walk a caller wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloodStrategy {
    /// [`select_area`]
    #[default]
    Exhaustive,
    /// [`select_within`]
    Breadth,
}

impl FloodStrategy {
    /// Run the chosen walk
    ///
    /// # Errors
    ///
    /// Same conditions as the underlying walk
    pub fn run(
        self,
        board: &mut Board,
        center: Option<TileRef>,
        radius: usize,
    ) -> Result<FloodReport> {
        match self {
            Self::Exhaustive => select_area(board, center, radius),
            Self::Breadth => select_within(board, center, radius),
        }
    }
}

/// Select every tile reachable from `center` along any path shorter than `radius`
///
/// `radius == 0` or a missing centre is a no-op returning an empty report.
/// Otherwise the centre is selected and the walk recurses into each of its
/// neighbours with `radius - 1`, revisiting shared tiles once per path.
///
/// # Errors
///
/// Returns [`crate::BoardError::InvalidState`] on an empty board and
/// [`crate::BoardError::StaleReference`] when `center` belongs to another
/// generation. The centre is checked before anything is selected.
#[instrument(skip(board, center), fields(center = ?center.map(|c| c.index())))]
pub fn select_area(
    board: &mut Board,
    center: Option<TileRef>,
    radius: usize,
) -> Result<FloodReport> {
    let mut report = FloodReport::default();
    let Some(center) = center else {
        debug!("no centre; nothing selected");
        return Ok(report);
    };
    if radius == 0 {
        return Ok(report);
    }

    board.resolve(center)?;
    walk(board, center, radius, &mut report)?;

    debug!(
        visits = report.visits(),
        selected = report.len(),
        "area selected"
    );
    Ok(report)
}

fn walk(board: &mut Board, center: TileRef, radius: usize, report: &mut FloodReport) -> Result<()> {
    if radius == 0 {
        return Ok(());
    }

    let tile = board.resolve_mut(center)?;
    tile.select();
    report.record(tile.index());

    let neighbors = tile.adjacent().to_vec();
    for neighbor in neighbors {
        walk(board, neighbor, radius - 1, report)?;
    }
    Ok(())
}

/// Select every tile fewer than `radius` hops from `center`, visiting each once
///
/// # Errors
///
/// Same conditions as [`select_area`]
#[instrument(skip(board, center), fields(center = ?center.map(|c| c.index())))]
pub fn select_within(
    board: &mut Board,
    center: Option<TileRef>,
    radius: usize,
) -> Result<FloodReport> {
    let mut report = FloodReport::default();
    let Some(center) = center else {
        debug!("no centre; nothing selected");
        return Ok(report);
    };
    if radius == 0 {
        return Ok(report);
    }

    board.resolve(center)?;
    let size = board
        .size()
        .ok_or_else(|| invalid_state("flood-select", BoardState::Empty))?;
    let slot = |index: TileIndex| index.x * size + index.z;

    let mut visited = bitvec![0; size * size];
    if let Some(mut seen) = visited.get_mut(slot(center.index())) {
        *seen = true;
    }

    let mut queue = VecDeque::from([(center, 0_usize)]);
    while let Some((current, depth)) = queue.pop_front() {
        let tile = board.resolve_mut(current)?;
        tile.select();
        report.record(tile.index());

        if depth + 1 >= radius {
            continue;
        }
        for &neighbor in tile.adjacent() {
            if let Some(mut seen) = visited.get_mut(slot(neighbor.index()))
                && !*seen
            {
                *seen = true;
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    debug!(
        visits = report.visits(),
        selected = report.len(),
        "area selected"
    );
    Ok(report)
}
