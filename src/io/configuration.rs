//! Board constants and generation configuration

use crate::io::error::Result;
use crate::spatial::grid::{GridBuilder, VariantPolicy};
use crate::spatial::tiles::{TerrainState, TileArchetype};

/// Default edge length of a generated board
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Default spacing between neighbouring tile centres
pub const DEFAULT_TILE_OFFSET: f32 = 1.0;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of tile archetypes in the generated pool
pub const DEFAULT_VARIANT_COUNT: usize = 3;

/// Hop budget used when selecting a token's movement area
pub const DEFAULT_SELECT_RADIUS: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board edge length
pub const MAX_BOARD_SIZE: usize = 4_096;

// The exhaustive walk makes up to 4^(radius - 1) visits
/// Largest radius the command line will run the exhaustive walk with
pub const MAX_EXHAUSTIVE_RADIUS: usize = 12;

/// Parameters for generating a board
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Pool of tile variants to draw from
    pub archetypes: Vec<TileArchetype>,
    /// Edge length of the square grid
    pub size: usize,
    /// Spacing between neighbouring tile centres
    pub offset: f32,
    /// World position of tile `[0,0]`
    pub origin: [f32; 3],
    /// Label of the parent context the tiles are generated under
    pub owner: Option<String>,
    /// Variant draw policy
    pub policy: VariantPolicy,
}

impl BoardConfig {
    /// Configuration with default spacing at the world origin
    pub const fn new(archetypes: Vec<TileArchetype>, size: usize) -> Self {
        Self {
            archetypes,
            size,
            offset: DEFAULT_TILE_OFFSET,
            origin: [0.0; 3],
            owner: None,
            policy: VariantPolicy::Uniform,
        }
    }

    /// Grid builder borrowing this configuration
    pub fn builder(&self) -> GridBuilder<'_> {
        GridBuilder::new(&self.archetypes, self.size)
            .with_offset(self.offset)
            .with_origin(self.origin)
            .with_owner(self.owner.as_deref())
            .with_policy(self.policy)
    }

    /// Check the configuration without generating anything
    ///
    /// # Errors
    ///
    /// Returns [`crate::BoardError::Configuration`] for an empty pool, a zero
    /// or oversized grid, or non-finite spacing or origin
    pub fn validate(&self) -> Result<()> {
        self.builder().validate()
    }
}

/// Pool of `count` archetypes named `variant-0..`, cycling through terrains
pub fn numbered_archetypes(count: usize) -> Vec<TileArchetype> {
    const TERRAINS: [TerrainState; 3] = [
        TerrainState::None,
        TerrainState::Underwater,
        TerrainState::Abyss,
    ];

    (0..count)
        .map(|i| {
            let terrain = TERRAINS
                .get(i % TERRAINS.len())
                .copied()
                .unwrap_or_default();
            TileArchetype::new(format!("variant-{i}")).with_terrain(terrain)
        })
        .collect()
}
