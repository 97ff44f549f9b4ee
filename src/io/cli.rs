//! Command-line interface for generating a board and flood-selecting on it

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::algorithm::flood::{FloodReport, FloodStrategy};
use crate::io::configuration::{
    BoardConfig, DEFAULT_BOARD_SIZE, DEFAULT_SEED, DEFAULT_SELECT_RADIUS, DEFAULT_TILE_OFFSET,
    DEFAULT_VARIANT_COUNT, MAX_EXHAUSTIVE_RADIUS, numbered_archetypes,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::report::{render_map, write_selected_listing};
use crate::spatial::board::Board;
use crate::spatial::grid::VariantPolicy;
use crate::spatial::tiles::TileIndex;

/// Flood walk selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Follow every path (exponential in the radius)
    Exhaustive,
    /// Breadth-first, each tile once
    Breadth,
}

impl From<StrategyArg> for FloodStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exhaustive => Self::Exhaustive,
            StrategyArg::Breadth => Self::Breadth,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tileboard")]
#[command(
    author,
    version,
    about = "Generate a square tile board and flood-select around a tile"
)]
/// Command-line arguments for the board tool
pub struct Cli {
    /// Edge length of the board
    #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of tile archetypes in the pool
    #[arg(short = 'k', long, default_value_t = DEFAULT_VARIANT_COUNT)]
    pub variants: usize,

    /// Spacing between neighbouring tiles
    #[arg(long, default_value_t = DEFAULT_TILE_OFFSET)]
    pub offset: f32,

    /// Centre tile as X,Z (defaults to the middle of the board)
    #[arg(short, long)]
    pub center: Option<TileIndex>,

    /// Hop budget; 1 selects the centre only
    #[arg(short, long, default_value_t = DEFAULT_SELECT_RADIUS)]
    pub radius: usize,

    /// Flood walk to use
    #[arg(long, value_enum, default_value_t = StrategyArg::Exhaustive)]
    pub strategy: StrategyArg,

    /// Never draw the last archetype (legacy variant range)
    #[arg(long)]
    pub legacy_variants: bool,

    /// Write the selected tiles to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Board configuration described by the arguments
    pub fn board_config(&self) -> BoardConfig {
        let mut config = BoardConfig::new(numbered_archetypes(self.variants), self.size);
        config.offset = self.offset;
        config.owner = Some("tileboard".to_owned());
        config.policy = if self.legacy_variants {
            VariantPolicy::ExcludeLast
        } else {
            VariantPolicy::Uniform
        };
        config
    }

    /// Centre tile, falling back to the middle of the board
    pub const fn center_index(&self) -> TileIndex {
        match self.center {
            Some(index) => index,
            None => TileIndex::new(self.size / 2, self.size / 2),
        }
    }
}

/// Totals from one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Tiles generated
    pub tiles: usize,
    /// Undirected adjacency edges
    pub edges: usize,
    /// Select calls made by the flood walk
    pub visits: usize,
    /// Distinct tiles selected
    pub selected: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tiles: {}  edges: {}  visits: {}  selected: {}",
            self.tiles, self.edges, self.visits, self.selected
        )
    }
}

/// Result of one run: the rendered map and its totals
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Board map after the flood walk, before the step was closed
    pub map: String,
    /// Totals
    pub summary: Summary,
}

/// Drives one generate / flood-select / end-of-step cycle
pub struct Session {
    cli: Cli,
    rng: StdRng,
    board: Board,
}

impl Session {
    /// Create a session from parsed arguments
    pub fn new(cli: Cli) -> Self {
        let rng = StdRng::seed_from_u64(cli.seed);
        Self {
            cli,
            rng,
            board: Board::new(),
        }
    }

    /// The session's board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Generate a fresh board and flood-select around the centre
    ///
    /// Any previous board is refreshed first.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the centre lies
    /// outside the board, the exhaustive walk is asked for a radius above
    /// [`MAX_EXHAUSTIVE_RADIUS`], or the listing cannot be written
    pub fn run(&mut self) -> Result<Outcome> {
        let strategy = FloodStrategy::from(self.cli.strategy);
        if strategy == FloodStrategy::Exhaustive && self.cli.radius > MAX_EXHAUSTIVE_RADIUS {
            return Err(invalid_parameter(
                "radius",
                &self.cli.radius,
                &format!(
                    "exhaustive walk is limited to radius {MAX_EXHAUSTIVE_RADIUS}; use --strategy breadth"
                ),
            ));
        }

        let config = self.cli.board_config();
        self.board.refresh();
        self.board.generate(&config.builder(), &mut self.rng)?;

        let index = self.cli.center_index();
        let center = self.board.tile_ref(index.x, index.z)?;
        let report = strategy.run(&mut self.board, Some(center), self.cli.radius)?;
        if report.is_empty() {
            warn!(radius = self.cli.radius, "flood walk selected nothing");
        }

        let map = render_map(&self.board)?;
        if let Some(path) = &self.cli.output {
            write_selected_listing(&self.board, path)?;
            info!(path = %path.display(), "selected tiles written");
        }

        let summary = self.summarize(&report);
        self.board.end_of_step()?;
        Ok(Outcome { map, summary })
    }

    fn summarize(&self, report: &FloodReport) -> Summary {
        Summary {
            tiles: self.board.tile_count(),
            edges: self.board.edge_count(),
            visits: report.visits(),
            selected: report.len(),
        }
    }
}
