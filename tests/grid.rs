//! Tests for layer storage and batch mutation.

use regolith::grid::{GridError, LayerChange, TerrainGrid, TerrainLayer};

#[test]
fn rejects_nonpositive_sizing() {
    assert_eq!(TerrainGrid::new(0, 4, 1.0).unwrap_err(), GridError::BadSize(0, 4));
    assert_eq!(TerrainGrid::new(4, -1, 1.0).unwrap_err(), GridError::BadSize(4, -1));
    assert_eq!(TerrainGrid::new(4, 4, 0.0).unwrap_err(), GridError::BadCellSize(0.0));
    assert_eq!(TerrainGrid::new(4, 4, -2.0).unwrap_err(), GridError::BadCellSize(-2.0));
}

#[test]
fn storage_is_layer_major_row_major() {
    let mut g = TerrainGrid::new(3, 2, 1.0).unwrap();
    g.set(2, 1, TerrainLayer::Rock, 5.0);
    // layer 1, y=1, x=2 → 1*6 + 1*3 + 2 = 11
    assert_eq!(g.raw()[11], 5.0);
    assert_eq!(g.get(2, 1, TerrainLayer::Rock), 5.0);
    assert_eq!(g.get(2, 1, TerrainLayer::Bedrock), 0.0);
}

#[test]
fn apply_changes_is_additive_and_order_independent() {
    let changes = [
        LayerChange::new([1, 1], TerrainLayer::Sand, 0.25),
        LayerChange::new([0, 0], TerrainLayer::Bedrock, -0.5),
        LayerChange::new([1, 1], TerrainLayer::Sand, 0.125),
    ];
    let mut fwd = TerrainGrid::new(3, 3, 1.0).unwrap();
    fwd.set(0, 0, TerrainLayer::Bedrock, 2.0);
    let mut rev = fwd.clone();

    fwd.apply_changes(&changes);
    let mut reversed = changes;
    reversed.reverse();
    rev.apply_changes(&reversed);

    assert_eq!(fwd.raw(), rev.raw());
    assert_eq!(fwd.get(1, 1, TerrainLayer::Sand), 0.375);
    assert_eq!(fwd.get(0, 0, TerrainLayer::Bedrock), 1.5);
}

#[test]
fn layer_slices_have_one_value_per_cell() {
    let g = TerrainGrid::new(5, 3, 2.0).unwrap();
    assert_eq!(g.cells(), 15);
    for layer in TerrainLayer::ALL {
        assert_eq!(g.layer(layer).len(), 15);
    }
    assert_eq!(g.raw().len(), 15 * TerrainLayer::ALL.len());
}

#[test]
fn stacked_layers_are_the_height_contributors() {
    assert_eq!(TerrainLayer::STACKED.len(), 4);
    assert!(TerrainLayer::Humus.is_stacked());
    assert!(!TerrainLayer::Moisture.is_stacked());
    assert_eq!(TerrainLayer::Bedrock.name(), "bedrock");
    assert_eq!(TerrainLayer::DeadVegetation.name(), "dead_vegetation");
}
