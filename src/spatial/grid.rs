//! Square grid construction with orthogonal adjacency wiring
//!
//! Tiles are created column by column within each row (`z` outer, `x`
//! inner). At the moment a tile is visited only its west `(x-1, z)` and
//! south `(x, z-1)` neighbours exist, so those are the only two edges wired
//! from the new tile; its east and north edges are added when the later
//! tiles visit it as *their* west or south neighbour. The finished grid has
//! `2 * n * (n - 1)` undirected edges and no diagonals.

use ndarray::Array2;
use rand::Rng;
use tracing::{debug, instrument};

use crate::io::configuration::{DEFAULT_TILE_OFFSET, MAX_BOARD_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::{Tile, TileArchetype, TileIndex, TileRef};

/// How a tile variant is drawn from the archetype pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariantPolicy {
    /// Uniform over the whole pool
    #[default]
    Uniform,
    /// Uniform over every archetype but the last
    ///
    /// Reproduces the legacy draw range `[0, len - 1)`, under which the final
    /// archetype is never chosen once the pool holds more than one entry. A
    /// single-entry pool still yields index 0.
    ExcludeLast,
}

impl VariantPolicy {
    /// Exclusive upper bound of the draw range for a pool of `pool_len`
    pub const fn range_end(self, pool_len: usize) -> usize {
        match self {
            Self::ExcludeLast if pool_len > 1 => pool_len - 1,
            Self::Uniform | Self::ExcludeLast => pool_len,
        }
    }

    /// Draw a variant index; `pool_len` must be non-zero
    pub fn pick<R: Rng + ?Sized>(self, pool_len: usize, rng: &mut R) -> usize {
        rng.random_range(0..self.range_end(pool_len))
    }
}

/// Placement of the grid in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Edge length of the square grid
    pub size: usize,
    /// Spacing between neighbouring tile centres
    pub offset: f32,
    /// World position of tile `[0,0]`
    pub origin: [f32; 3],
}

impl GridLayout {
    /// World position of a tile: `origin + (x * offset, 0, z * offset)`
    pub fn world_position(&self, index: TileIndex) -> [f32; 3] {
        [
            (index.x as f32).mul_add(self.offset, self.origin[0]),
            self.origin[1],
            (index.z as f32).mul_add(self.offset, self.origin[2]),
        ]
    }
}

/// Builds an `n x n` grid of wired tiles from an archetype pool
#[derive(Debug, Clone)]
pub struct GridBuilder<'a> {
    archetypes: &'a [TileArchetype],
    layout: GridLayout,
    owner: Option<&'a str>,
    policy: VariantPolicy,
}

impl<'a> GridBuilder<'a> {
    /// Create a builder with unit spacing at the world origin
    pub const fn new(archetypes: &'a [TileArchetype], size: usize) -> Self {
        Self {
            archetypes,
            layout: GridLayout {
                size,
                offset: DEFAULT_TILE_OFFSET,
                origin: [0.0; 3],
            },
            owner: None,
            policy: VariantPolicy::Uniform,
        }
    }

    /// Spacing between neighbouring tiles
    #[must_use]
    pub const fn with_offset(mut self, offset: f32) -> Self {
        self.layout.offset = offset;
        self
    }

    /// World position of tile `[0,0]`
    #[must_use]
    pub const fn with_origin(mut self, origin: [f32; 3]) -> Self {
        self.layout.origin = origin;
        self
    }

    /// Owner context recorded on every tile
    #[must_use]
    pub const fn with_owner(mut self, owner: Option<&'a str>) -> Self {
        self.owner = owner;
        self
    }

    /// Variant draw policy
    #[must_use]
    pub const fn with_policy(mut self, policy: VariantPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Layout the grid will be placed with
    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Variant draw policy in use
    pub const fn policy(&self) -> VariantPolicy {
        self.policy
    }

    /// Check every parameter without building anything
    ///
    /// # Errors
    ///
    /// Returns [`crate::BoardError::Configuration`] if the archetype pool is
    /// empty, the size is zero or above [`MAX_BOARD_SIZE`], or the spacing or
    /// origin are not finite
    pub fn validate(&self) -> Result<()> {
        if self.archetypes.is_empty() {
            return Err(invalid_parameter(
                "archetypes",
                &0,
                &"at least one tile archetype is required",
            ));
        }
        if self.layout.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.layout.size,
                &"grid size must be at least 1",
            ));
        }
        if self.layout.size > MAX_BOARD_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.layout.size,
                &format!("grid size must not exceed {MAX_BOARD_SIZE}"),
            ));
        }
        if !self.layout.offset.is_finite() {
            return Err(invalid_parameter(
                "offset",
                &self.layout.offset,
                &"tile spacing must be finite",
            ));
        }
        if self.layout.origin.iter().any(|c| !c.is_finite()) {
            return Err(invalid_parameter(
                "origin",
                &format!("{:?}", self.layout.origin),
                &"origin coordinates must be finite",
            ));
        }
        Ok(())
    }

    /// Build the grid for the given board generation
    ///
    /// The returned array is indexed `[x, z]`. Validation runs before the
    /// first tile is created, so an error never yields a partial grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BoardError::Configuration`] if [`Self::validate`]
    /// fails
    #[instrument(skip(self, rng), fields(size = self.layout.size, pool = self.archetypes.len()))]
    pub fn build<R: Rng + ?Sized>(&self, generation: u64, rng: &mut R) -> Result<Array2<Tile>> {
        self.validate()?;

        let n = self.layout.size;
        let mut cells: Array2<Option<Tile>> = Array2::from_shape_simple_fn((n, n), || None);

        for z in 0..n {
            for x in 0..n {
                let index = TileIndex::new(x, z);
                let here = TileRef::new(generation, index);

                let variant = self.policy.pick(self.archetypes.len(), rng);
                let Some(archetype) = self.archetypes.get(variant) else {
                    return Err(invalid_parameter(
                        "variant",
                        &variant,
                        &"drawn outside the archetype pool",
                    ));
                };

                let position = self.layout.world_position(index);
                let mut tile = Tile::from_archetype(archetype, variant, index, position);
                tile.set_owner(self.owner.map(str::to_owned));

                if x > 0
                    && let Some(Some(west)) = cells.get_mut([x - 1, z])
                {
                    west.link(here);
                    tile.link(TileRef::new(generation, west.index()));
                }
                if z > 0
                    && let Some(Some(south)) = cells.get_mut([x, z - 1])
                {
                    south.link(here);
                    tile.link(TileRef::new(generation, south.index()));
                }

                if let Some(slot) = cells.get_mut([x, z]) {
                    *slot = Some(tile);
                }
            }
        }

        let tiles: Vec<Tile> = cells.iter_mut().filter_map(Option::take).collect();
        let grid = match Array2::from_shape_vec((n, n), tiles) {
            Ok(grid) => grid,
            Err(e) => return Err(invalid_parameter("size", &n, &e.to_string())),
        };

        debug!(tiles = grid.len(), generation, "grid built");
        Ok(grid)
    }
}
