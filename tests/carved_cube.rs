//! End-to-end build of the classic demo solid: a unit cube with a
//! sphere carved out of its (1, 1, 1) corner.

#![allow(clippy::expect_used)]

use nalgebra::Vector3;
use solidify::{build_model, MeshParams, ModelBuilder, Solid};

fn carved_cube() -> std::sync::Arc<Solid> {
    Solid::difference(
        Solid::cube(1.0),
        Solid::translate(Vector3::new(1.0, 1.0, 1.0), Solid::sphere(1.0)),
    )
}

#[test]
fn carved_cube_produces_a_bounded_surface() {
    let _ = env_logger::builder().is_test(true).try_init();

    let solid = carved_cube();
    let model = ModelBuilder::new(&solid)
        .with_params(MeshParams {
            tolerance: 0.1,
            max_depth: None,
        })
        .build()
        .expect("build should succeed");

    assert!(model.triangle_count() > 0);
    assert_eq!(model.positions.len() % 3, 0);

    // The difference keeps the cube's bounding box, so every vertex
    // stays inside [-1, 1]^3.
    for p in &model.positions {
        for i in 0..3 {
            assert!(
                p[i].abs() <= 1.0 + 1e-6,
                "vertex {p:?} escapes the bounding box"
            );
        }
    }

    // The carved corner is hollow: the sphere removes everything within
    // distance 1 of (1, 1, 1), so no triangle comes near that corner.
    // Cells accepted at the tolerance may overhang the true surface by
    // a cell width, nothing more.
    for p in &model.positions {
        let d = (f64::from(p.x) - 1.0).hypot((f64::from(p.y) - 1.0).hypot(f64::from(p.z) - 1.0));
        assert!(d > 0.5, "vertex {p:?} sits inside the carved corner");
    }

    // The carve leaves the opposite corner untouched: faces still reach
    // the cube boundary there.
    assert!(model
        .positions
        .iter()
        .any(|p| p.x < -0.99 && p.y < -0.99 && p.z < -0.99));
}

#[test]
fn default_parameters_mesh_a_plain_cube() {
    let cube = Solid::cube(1.0);
    let model = build_model(&cube).expect("build should succeed");
    assert_eq!(model.triangle_count(), 12);
}
