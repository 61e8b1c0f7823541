//! Host exchange model: named per-cell fields.
//!
//! The engine has no wire or file format of its own; the host hands initial
//! layers in and takes results out as named 2D fields over the same raster.
//! Names iterate in deterministic (lexicographic) order.

use std::collections::BTreeMap;

/// Name of the combined-elevation output field.
pub const HEIGHT_FIELD: &str = "height";
/// Name of the 3-channel surface-color output field.
pub const COLOR_FIELD: &str = "color";

/// A set of named scalar and 3-channel fields sharing one raster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    /// Raster width in cells.
    pub width: i32,
    /// Raster height in cells.
    pub height: i32,
    /// Physical width of one (square) cell.
    pub cell_size: f32,
    scalars: BTreeMap<String, Vec<f32>>,
    vectors: BTreeMap<String, Vec<[f32; 3]>>,
}

impl FieldSet {
    /// An empty field set over the given raster.
    pub fn new(width: i32, height: i32, cell_size: f32) -> Self {
        Self { width, height, cell_size, scalars: BTreeMap::new(), vectors: BTreeMap::new() }
    }

    /// Number of cells per field.
    pub fn cells(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// Borrow a scalar field by name.
    pub fn scalar(&self, name: &str) -> Option<&[f32]> {
        self.scalars.get(name).map(Vec::as_slice)
    }

    /// Mutably borrow a scalar field, creating it zeroed if absent.
    pub fn scalar_mut(&mut self, name: &str) -> &mut Vec<f32> {
        let cells = self.cells();
        self.scalars.entry(name.to_string()).or_insert_with(|| vec![0.0; cells])
    }

    /// Insert or replace a scalar field.
    pub fn insert_scalar(&mut self, name: &str, data: Vec<f32>) {
        self.scalars.insert(name.to_string(), data);
    }

    /// Borrow a 3-channel field by name.
    pub fn vector(&self, name: &str) -> Option<&[[f32; 3]]> {
        self.vectors.get(name).map(Vec::as_slice)
    }

    /// Mutably borrow a 3-channel field, creating it zeroed if absent.
    pub fn vector_mut(&mut self, name: &str) -> &mut Vec<[f32; 3]> {
        let cells = self.cells();
        self.vectors.entry(name.to_string()).or_insert_with(|| vec![[0.0; 3]; cells])
    }

    /// Names of all scalar fields, in lexicographic order.
    pub fn scalar_names(&self) -> impl Iterator<Item = &str> {
        self.scalars.keys().map(String::as_str)
    }
}
