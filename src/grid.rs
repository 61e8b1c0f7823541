//! Layered terrain grid: per-cell, per-layer f32 storage and batch mutation.
//!
//! Conventions:
//! - Storage is layer-major, row-major: `layer * height * width + y * width + x`.
//! - `Bedrock..=Humus` are stacked layers whose thicknesses sum to elevation;
//!   `Moisture`/`Vegetation`/`DeadVegetation` are auxiliary scalar fields.
//! - Bounds are the caller's responsibility; callers clamp coordinates at
//!   grid edges (replicate boundary) rather than wrapping.

/// One material layer of the terrain stack, in stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainLayer {
    /// Solid base rock; the bottom of the stack.
    Bedrock,
    /// Loose rock produced by bedrock erosion.
    Rock,
    /// Sand produced by rock weathering.
    Sand,
    /// Organic topsoil; the top stacked layer.
    Humus,
    /// Water content; auxiliary, does not contribute to elevation.
    Moisture,
    /// Living vegetation density; auxiliary.
    Vegetation,
    /// Dead vegetation density; auxiliary.
    DeadVegetation,
}

/// Number of stacked (height-contributing) layers.
pub const NUM_STACKED_LAYERS: usize = 4;
/// Total number of layers, stacked and auxiliary.
pub const NUM_LAYERS: usize = 7;

impl TerrainLayer {
    /// All layers in stacking order.
    pub const ALL: [TerrainLayer; NUM_LAYERS] = [
        TerrainLayer::Bedrock,
        TerrainLayer::Rock,
        TerrainLayer::Sand,
        TerrainLayer::Humus,
        TerrainLayer::Moisture,
        TerrainLayer::Vegetation,
        TerrainLayer::DeadVegetation,
    ];

    /// The stacked layers, bottom to top.
    pub const STACKED: [TerrainLayer; NUM_STACKED_LAYERS] = [
        TerrainLayer::Bedrock,
        TerrainLayer::Rock,
        TerrainLayer::Sand,
        TerrainLayer::Humus,
    ];

    /// Zero-based position in the stack order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            TerrainLayer::Bedrock => 0,
            TerrainLayer::Rock => 1,
            TerrainLayer::Sand => 2,
            TerrainLayer::Humus => 3,
            TerrainLayer::Moisture => 4,
            TerrainLayer::Vegetation => 5,
            TerrainLayer::DeadVegetation => 6,
        }
    }

    /// True for layers that contribute to elevation.
    #[inline]
    pub fn is_stacked(self) -> bool {
        self.index() < NUM_STACKED_LAYERS
    }

    /// External field name used by ingest/export.
    pub fn name(self) -> &'static str {
        match self {
            TerrainLayer::Bedrock => "bedrock",
            TerrainLayer::Rock => "rock",
            TerrainLayer::Sand => "sand",
            TerrainLayer::Humus => "humus",
            TerrainLayer::Moisture => "moisture",
            TerrainLayer::Vegetation => "vegetation",
            TerrainLayer::DeadVegetation => "dead_vegetation",
        }
    }
}

/// A cell coordinate pair `[x, y]`.
pub type CellPos = [i32; 2];

/// One pending additive mutation, deferred so reads during an event's walk
/// observe a consistent pre-event state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerChange {
    /// Target cell.
    pub pos: CellPos,
    /// Target layer.
    pub layer: TerrainLayer,
    /// Thickness delta to add.
    pub delta: f32,
}

impl LayerChange {
    /// Convenience constructor.
    pub fn new(pos: CellPos, layer: TerrainLayer, delta: f32) -> Self {
        Self { pos, layer, delta }
    }
}

/// Errors from grid construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GridError {
    /// Width or height is not strictly positive.
    #[error("grid size must be positive, got {0}x{1}")]
    BadSize(i32, i32),
    /// Cell size is not strictly positive and finite.
    #[error("cell size must be positive and finite, got {0}")]
    BadCellSize(f32),
}

/// The mutable terrain state for one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainGrid {
    /// Grid width in cells.
    pub width: i32,
    /// Grid height in cells.
    pub height: i32,
    /// Physical width of one (square) cell.
    pub cell_size: f32,
    layers: Vec<f32>,
}

impl TerrainGrid {
    /// Allocate a zeroed grid. Fails fast on non-positive sizing; never
    /// clamps to a default size.
    pub fn new(width: i32, height: i32, cell_size: f32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::BadSize(width, height));
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::BadCellSize(cell_size));
        }
        let cells = width as usize * height as usize;
        Ok(Self { width, height, cell_size, layers: vec![0.0; NUM_LAYERS * cells] })
    }

    /// Number of cells per layer.
    #[inline]
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when `pos` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, pos: CellPos) -> bool {
        pos[0] >= 0 && pos[0] < self.width && pos[1] >= 0 && pos[1] < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32, layer: TerrainLayer) -> usize {
        debug_assert!(self.in_bounds([x, y]));
        layer.index() * self.cells() + y as usize * self.width as usize + x as usize
    }

    /// Read one layer value. In-bounds is the caller's contract.
    #[inline]
    pub fn get(&self, x: i32, y: i32, layer: TerrainLayer) -> f32 {
        self.layers[self.index(x, y, layer)]
    }

    /// Overwrite one layer value. In-bounds is the caller's contract.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, layer: TerrainLayer, value: f32) {
        let i = self.index(x, y, layer);
        self.layers[i] = value;
    }

    /// Add a delta to one layer value. In-bounds is the caller's contract.
    #[inline]
    pub fn add(&mut self, x: i32, y: i32, layer: TerrainLayer, delta: f32) {
        let i = self.index(x, y, layer);
        self.layers[i] += delta;
    }

    /// Apply a batch of deferred changes with plain addition. Application
    /// order does not matter, including when two changes target the same
    /// (cell, layer) pair.
    pub fn apply_changes(&mut self, changes: &[LayerChange]) {
        for c in changes {
            let i = self.index(c.pos[0], c.pos[1], c.layer);
            self.layers[i] += c.delta;
            debug_assert!(self.layers[i].is_finite());
        }
    }

    /// Borrow one layer's full 2D field, row-major.
    pub fn layer(&self, layer: TerrainLayer) -> &[f32] {
        let cells = self.cells();
        let start = layer.index() * cells;
        &self.layers[start..start + cells]
    }

    /// Mutably borrow one layer's full 2D field, row-major.
    pub fn layer_mut(&mut self, layer: TerrainLayer) -> &mut [f32] {
        let cells = self.cells();
        let start = layer.index() * cells;
        &mut self.layers[start..start + cells]
    }

    /// Borrow the whole layer-major storage.
    pub fn raw(&self) -> &[f32] {
        &self.layers
    }
}
