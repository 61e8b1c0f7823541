//! Tests for the host field boundary: ingest fallbacks and export outputs.

use regolith::export::{export, layer_color, VISIBILITY_THRESHOLD};
use regolith::fields::{FieldSet, COLOR_FIELD, HEIGHT_FIELD};
use regolith::grid::{GridError, TerrainGrid, TerrainLayer};
use regolith::ingest::{ingest, IngestError};

#[test]
fn empty_input_is_rejected_without_partial_state() {
    let fields = FieldSet::new(4, 4, 1.0);
    assert_eq!(ingest(&fields).unwrap_err(), IngestError::MissingInput);
}

#[test]
fn bad_sizing_fails_fast() {
    let mut fields = FieldSet::new(0, 4, 1.0);
    fields.insert_scalar(HEIGHT_FIELD, vec![]);
    assert_eq!(ingest(&fields).unwrap_err(), IngestError::Grid(GridError::BadSize(0, 4)));
}

#[test]
fn wrong_field_length_is_rejected() {
    let mut fields = FieldSet::new(4, 4, 1.0);
    fields.insert_scalar("bedrock", vec![1.0; 7]);
    match ingest(&fields).unwrap_err() {
        IngestError::BadFieldLength { name, got, want } => {
            assert_eq!(name, "bedrock");
            assert_eq!(got, 7);
            assert_eq!(want, 16);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn partial_stack_defaults_missing_layers_to_zero() {
    let mut fields = FieldSet::new(3, 3, 1.0);
    fields.insert_scalar("bedrock", vec![2.0; 9]);
    fields.insert_scalar("rock", vec![0.5; 9]);
    let g = ingest(&fields).unwrap();
    assert_eq!(g.get(1, 1, TerrainLayer::Bedrock), 2.0);
    assert_eq!(g.get(1, 1, TerrainLayer::Rock), 0.5);
    assert_eq!(g.get(1, 1, TerrainLayer::Sand), 0.0);
    assert_eq!(g.get(1, 1, TerrainLayer::Humus), 0.0);
    assert_eq!(g.get(1, 1, TerrainLayer::Moisture), 0.0);
}

#[test]
fn heightfield_seeds_bedrock_with_full_humus_on_flat_ground() {
    let mut fields = FieldSet::new(4, 4, 1.0);
    fields.insert_scalar(HEIGHT_FIELD, vec![5.0; 16]);
    let g = ingest(&fields).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(g.get(x, y, TerrainLayer::Bedrock), 5.0);
            // exp(7 * -(0^2)) = 1 on perfectly flat ground
            assert!((g.get(x, y, TerrainLayer::Humus) - 1.0).abs() < 1e-6);
            assert_eq!(g.get(x, y, TerrainLayer::Rock), 0.0);
            assert_eq!(g.get(x, y, TerrainLayer::Sand), 0.0);
            assert_eq!(g.get(x, y, TerrainLayer::Moisture), 0.0);
        }
    }
}

#[test]
fn heightfield_humus_thins_on_steep_bedrock() {
    let mut fields = FieldSet::new(6, 1, 1.0);
    fields.insert_scalar(HEIGHT_FIELD, vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
    let g = ingest(&fields).unwrap();
    // edge cells see half the gradient through clamping, so keep more humus
    assert!(g.get(0, 0, TerrainLayer::Humus) > g.get(2, 0, TerrainLayer::Humus));
    // interior slope 1 → exp(-7)
    assert!((g.get(2, 0, TerrainLayer::Humus) - (-7.0f32).exp()).abs() < 1e-6);
}

#[test]
fn export_writes_layers_height_and_thresholded_color() {
    let mut g = TerrainGrid::new(3, 1, 1.0).unwrap();
    for x in 0..3 {
        g.set(x, 0, TerrainLayer::Bedrock, 4.0);
    }
    g.set(0, 0, TerrainLayer::Humus, VISIBILITY_THRESHOLD + 0.01);
    g.set(1, 0, TerrainLayer::Sand, 0.2);
    g.set(1, 0, TerrainLayer::Humus, 0.04); // below threshold, sand shows through

    let mut fields = FieldSet::new(3, 1, 1.0);
    export(&g, &mut fields);

    for layer in TerrainLayer::ALL {
        assert!(fields.scalar(layer.name()).is_some(), "missing {}", layer.name());
    }
    let height = fields.scalar(HEIGHT_FIELD).unwrap();
    assert!((height[0] - 4.06).abs() < 1e-5);
    assert!((height[1] - 4.24).abs() < 1e-5);
    assert_eq!(height[2], 4.0);

    let color = fields.vector(COLOR_FIELD).unwrap();
    assert_eq!(color[0], layer_color(TerrainLayer::Humus));
    assert_eq!(color[1], layer_color(TerrainLayer::Sand));
    assert_eq!(color[2], layer_color(TerrainLayer::Bedrock));
}

#[test]
fn export_then_ingest_round_trips_the_stack() {
    let mut g = TerrainGrid::new(4, 3, 2.0).unwrap();
    for y in 0..3 {
        for x in 0..4 {
            g.set(x, y, TerrainLayer::Bedrock, (x + y) as f32);
            g.set(x, y, TerrainLayer::Sand, 0.25);
            g.set(x, y, TerrainLayer::Moisture, 0.5);
        }
    }
    let mut fields = FieldSet::new(4, 3, 2.0);
    export(&g, &mut fields);
    let back = ingest(&fields).unwrap();
    assert_eq!(back.raw(), g.raw());
    assert_eq!(back.cell_size, g.cell_size);
}
