//! Tile data structures and non-owning tile references
//!
//! A [`Tile`] is one cell of the square board. Tiles never hold pointers to
//! each other: adjacency is recorded as [`TileRef`] handles that carry the
//! board generation they were issued for, so a handle kept across a board
//! refresh is rejected rather than silently resolving to a new tile.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::selectable::{Selectable, SelectionState};
use crate::io::error::{BoardError, invalid_parameter};

/// Grid identity of a tile, `0 <= x, z < size`
///
/// Ordering is `x` first, then `z`, which is the board's scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex {
    /// Column along the world X axis
    pub x: usize,
    /// Row along the world Z axis
    pub z: usize,
}

impl TileIndex {
    /// Create an index from its two coordinates
    pub const fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }

    /// Number of orthogonal steps between two indices
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.z.abs_diff(other.z)
    }

    /// True when the indices differ by exactly one unit on exactly one axis
    pub const fn is_orthogonal_neighbor(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.z)
    }
}

impl FromStr for TileIndex {
    type Err = BoardError;

    /// Parse `"x,z"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, z) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("index", &s, &"expected the form X,Z"))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| invalid_parameter("index", &s, &e))
        };

        Ok(Self::new(parse(x)?, parse(z)?))
    }
}

/// Non-owning handle to a tile of one particular board generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRef {
    generation: u64,
    index: TileIndex,
}

impl TileRef {
    pub(crate) const fn new(generation: u64, index: TileIndex) -> Self {
        Self { generation, index }
    }

    /// Board generation this handle was issued for
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Grid index the handle points at
    pub const fn index(&self) -> TileIndex {
        self.index
    }
}

impl fmt::Display for TileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.index, self.generation)
    }
}

/// Terrain condition carried by a tile variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerrainState {
    /// Plain ground
    #[default]
    None,
    /// Submerged tile
    Underwater,
    /// Bottomless tile
    Abyss,
}

/// Prototype a tile is instantiated from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileArchetype {
    /// Variant name, kept for display and reports
    pub name: String,
    /// Terrain copied onto every tile built from this archetype
    pub terrain: TerrainState,
}

impl TileArchetype {
    /// Create a plain archetype
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terrain: TerrainState::None,
        }
    }

    /// Set the terrain copied onto instantiated tiles
    #[must_use]
    pub const fn with_terrain(mut self, terrain: TerrainState) -> Self {
        self.terrain = terrain;
        self
    }
}

/// A single board cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    index: TileIndex,
    variant: usize,
    name: String,
    kind: String,
    terrain: TerrainState,
    position: [f32; 3],
    owner: Option<String>,
    adjacent: Vec<TileRef>,
    selection: SelectionState,
}

impl Tile {
    /// Instantiate a tile from an archetype at a grid index and world position
    ///
    /// The tile starts unselected and without neighbours; the grid builder
    /// wires adjacency when the tile is placed on a board.
    pub fn from_archetype(
        archetype: &TileArchetype,
        variant: usize,
        index: TileIndex,
        position: [f32; 3],
    ) -> Self {
        Self {
            index,
            variant,
            name: format!("Space[{},{}]", index.x, index.z),
            kind: archetype.name.clone(),
            terrain: archetype.terrain,
            position,
            owner: None,
            adjacent: Vec::with_capacity(4),
            selection: SelectionState::default(),
        }
    }

    /// Grid index of this tile
    pub const fn index(&self) -> TileIndex {
        self.index
    }

    /// Position of the archetype this tile was built from within the pool
    pub const fn variant(&self) -> usize {
        self.variant
    }

    /// Display name, `Space[x,z]`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the archetype this tile was built from
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Current terrain condition
    pub const fn terrain(&self) -> TerrainState {
        self.terrain
    }

    /// Change the terrain condition
    pub const fn set_terrain(&mut self, terrain: TerrainState) {
        self.terrain = terrain;
    }

    /// World position, `origin + (x * offset, 0, z * offset)`
    pub const fn position(&self) -> [f32; 3] {
        self.position
    }

    /// Label of the owner context the board was generated under
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Orthogonal neighbours, in the order they were wired
    pub fn adjacent(&self) -> &[TileRef] {
        &self.adjacent
    }

    /// True if the tile at `index` is a neighbour of this one
    pub fn is_adjacent_to(&self, index: TileIndex) -> bool {
        self.adjacent.iter().any(|tile| tile.index() == index)
    }

    pub(crate) fn set_owner(&mut self, owner: Option<String>) {
        self.owner = owner;
    }

    pub(crate) fn link(&mut self, neighbor: TileRef) {
        if !self.adjacent.contains(&neighbor) {
            self.adjacent.push(neighbor);
        }
    }

    /// Take over the board-managed placement of `previous`
    pub(crate) fn adopt_placement(&mut self, previous: &Self) {
        self.index = previous.index;
        self.name.clone_from(&previous.name);
        self.position = previous.position;
        self.owner.clone_from(&previous.owner);
        self.adjacent.clone_from(&previous.adjacent);
    }
}

impl Selectable for Tile {
    fn selection(&self) -> &SelectionState {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }
}
