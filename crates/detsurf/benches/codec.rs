use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::{Rotation3, Vector3};

use detsurf::{
    from_json, to_json, to_json_compact, AnnulusBounds, CylinderBounds, GeometryContext,
    GeometryIdentifier, Material, MaterialSlab, ProtoSurface, RectangleBounds, Surface,
    SurfaceJsonOptions, SurfaceMaterial, Transform3,
};

fn placement(i: usize) -> Transform3 {
    let phi = i as f64 * 0.05;
    let rot = Rotation3::from_euler_angles(0.0, 0.0, phi);
    detsurf::transform_from_parts(
        Vector3::new(100.0 * phi.cos(), 100.0 * phi.sin(), i as f64),
        *rot.matrix(),
    )
}

fn build_surfaces(n: usize) -> Vec<Surface> {
    let material = std::sync::Arc::new(SurfaceMaterial::homogeneous(MaterialSlab::new(
        Material {
            x0: 93.7,
            l0: 465.2,
            ar: 28.0855,
            z: 14.0,
            mass_density: 2.329e-3,
        },
        0.32,
    )));
    (0..n)
        .map(|i| {
            let id = GeometryIdentifier::default()
                .with_volume(1)
                .with_sensitive(i as u64 + 1);
            let mut s = match i % 3 {
                0 => ProtoSurface::plane(placement(i), RectangleBounds::new(10.0, 20.0)),
                1 => ProtoSurface::disc(
                    placement(i),
                    AnnulusBounds {
                        min_r: 380.0,
                        max_r: 560.0,
                        min_phi_rel: -0.1,
                        max_phi_rel: 0.1,
                        average_phi: 0.0,
                        origin_x: 2.0,
                        origin_y: -2.0,
                    },
                ),
                _ => ProtoSurface::cylinder(placement(i), CylinderBounds::new(30.0, 400.0)),
            }
            .finalize(id);
            s.assign_material(material.clone());
            s
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let gctx = GeometryContext::default();
    let options = SurfaceJsonOptions::default();
    let surfaces = build_surfaces(300);
    let docs: Vec<_> = surfaces
        .iter()
        .map(|s| to_json(&gctx, s, &options))
        .collect();

    c.bench_function("to_json_300", |b| {
        b.iter(|| {
            for s in &surfaces {
                black_box(to_json(&gctx, black_box(s), &options));
            }
        })
    });

    c.bench_function("to_json_compact_300", |b| {
        b.iter(|| {
            for s in &surfaces {
                black_box(to_json_compact(&gctx, black_box(s), &options));
            }
        })
    });

    c.bench_function("from_json_300", |b| {
        b.iter(|| {
            for d in &docs {
                black_box(from_json(black_box(d)).ok());
            }
        })
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
