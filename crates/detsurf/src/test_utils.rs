//! Shared fixtures for unit tests.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::bounds::{
    AnnulusBounds, ConeBounds, CylinderBounds, DiscTrapezoidBounds, EllipseBounds, LineBounds,
    RadialBounds, RectangleBounds, TrapezoidBounds,
};
use crate::context::{DetectorElement, GeometryContext};
use crate::identifier::GeometryIdentifier;
use crate::material::{Material, MaterialSlab, SurfaceMaterial};
use crate::surface::{ProtoSurface, Surface};
use crate::transform::{transform_from_parts, Transform3};

/// Element at a fixed offset, shifted further by a `Vector3<f64>` context payload.
pub(crate) struct ShiftedElement {
    nominal: Vector3<f64>,
}

impl ShiftedElement {
    pub(crate) fn new(nominal: Vector3<f64>) -> Self {
        Self { nominal }
    }
}

impl DetectorElement for ShiftedElement {
    fn transform(&self, gctx: &GeometryContext) -> Transform3 {
        let delta = gctx.payload::<Vector3<f64>>().copied().unwrap_or_else(Vector3::zeros);
        transform_from_parts(self.nominal + delta, Matrix3::identity())
    }
}

/// Non-trivial rotation and translation.
pub(crate) fn general_transform() -> Transform3 {
    let rot = Rotation3::from_euler_angles(0.3, -0.2, 2.1);
    transform_from_parts(Vector3::new(12.5, -3.0, 250.0), *rot.matrix())
}

/// Plane with 10 x 20 half-length rectangle at the origin.
pub(crate) fn plane_rectangle(geo_id: u64) -> Surface {
    ProtoSurface::plane(Transform3::identity(), RectangleBounds::new(10.0, 20.0))
        .finalize(GeometryIdentifier::new(geo_id))
}

pub(crate) fn silicon_material() -> SurfaceMaterial {
    let silicon = Material {
        x0: 93.7,
        l0: 465.2,
        ar: 28.0855,
        z: 14.0,
        mass_density: 2.329e-3,
    };
    SurfaceMaterial::homogeneous(MaterialSlab::new(silicon, 0.32))
}

/// One surface per supported (shape, bounds) pair, plus a perigee.
pub(crate) fn all_supported_surfaces() -> Vec<Surface> {
    let t = general_transform();
    let id = |sensitive: u64| {
        GeometryIdentifier::default()
            .with_volume(7)
            .with_layer(4)
            .with_sensitive(sensitive)
    };
    vec![
        ProtoSurface::plane(t, EllipseBounds::new(0.0, 0.0, 5.0, 8.0)).finalize(id(1)),
        ProtoSurface::plane(t, RectangleBounds::new(10.0, 20.0)).finalize(id(2)),
        ProtoSurface::plane(t, TrapezoidBounds::new(3.0, 6.0, 12.0)).finalize(id(3)),
        ProtoSurface::disc(
            t,
            AnnulusBounds {
                min_r: 380.0,
                max_r: 560.0,
                min_phi_rel: -0.1,
                max_phi_rel: 0.1,
                average_phi: 0.4,
                origin_x: 2.5,
                origin_y: -2.5,
            },
        )
        .finalize(id(4)),
        ProtoSurface::disc(t, RadialBounds::new(30.0, 300.0)).finalize(id(0)),
        ProtoSurface::disc(
            t,
            DiscTrapezoidBounds {
                half_x_min_r: 8.0,
                half_x_max_r: 16.0,
                min_r: 100.0,
                max_r: 200.0,
                average_phi: 1.2,
                stereo: 0.02,
            },
        )
        .finalize(id(5)),
        ProtoSurface::cylinder(t, CylinderBounds::new(33.0, 400.0)).finalize(id(0)),
        ProtoSurface::cone(t, ConeBounds::new(0.25, 10.0, 90.0)).finalize(id(0)),
        ProtoSurface::straw(t, LineBounds::new(2.0, 700.0)).finalize(id(6)),
        ProtoSurface::perigee(t).finalize(id(0)),
    ]
}
