//! Ingest: populate a terrain grid from host fields.
//!
//! Two sources are accepted: a full (possibly partial) per-layer stack, or a
//! single `height` field used to seed bedrock. Absent individual layers in a
//! partial stack read as zero. Failure produces no partial state.

use crate::fields::{FieldSet, HEIGHT_FIELD};
use crate::grid::{GridError, TerrainGrid, TerrainLayer};
use crate::metrics;

/// Errors from reading host fields into a terrain grid.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum IngestError {
    /// Neither a layer stack nor a `height` field is present.
    #[error("input has neither terrain layers nor a height field")]
    MissingInput,
    /// The raster sizing is unusable.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// A present field does not match the raster cell count.
    #[error("field `{name}` has {got} cells, expected {want}")]
    BadFieldLength {
        /// Offending field name.
        name: String,
        /// Cells actually present.
        got: usize,
        /// Cells implied by the raster sizing.
        want: usize,
    },
}

/// Build a populated terrain grid from host fields.
///
/// If any per-layer field is present, all present layers are copied and the
/// rest stay zero. Otherwise a `height` field seeds Bedrock, with
/// `Humus = exp(7 * -(slope^2))` measured over bedrock alone and every other
/// layer zero. With neither source, ingest fails and the grid is not built.
pub fn ingest(fields: &FieldSet) -> Result<TerrainGrid, IngestError> {
    let mut grid = TerrainGrid::new(fields.width, fields.height, fields.cell_size)?;
    let want = grid.cells();

    let any_layer = TerrainLayer::ALL.iter().any(|l| fields.scalar(l.name()).is_some());
    if any_layer {
        for layer in TerrainLayer::ALL {
            if let Some(data) = fields.scalar(layer.name()) {
                if data.len() != want {
                    return Err(IngestError::BadFieldLength {
                        name: layer.name().to_string(),
                        got: data.len(),
                        want,
                    });
                }
                grid.layer_mut(layer).copy_from_slice(data);
            }
        }
        return Ok(grid);
    }

    let height = fields.scalar(HEIGHT_FIELD).ok_or(IngestError::MissingInput)?;
    if height.len() != want {
        return Err(IngestError::BadFieldLength {
            name: HEIGHT_FIELD.to_string(),
            got: height.len(),
            want,
        });
    }
    grid.layer_mut(TerrainLayer::Bedrock).copy_from_slice(height);

    // Seed topsoil where the fresh bedrock is flat enough to hold it.
    for y in 0..grid.height {
        for x in 0..grid.width {
            let s = metrics::slope(&grid, x, y, TerrainLayer::Bedrock);
            let humus = (7.0 * -(s * s)).exp();
            grid.set(x, y, TerrainLayer::Humus, humus);
        }
    }
    Ok(grid)
}
