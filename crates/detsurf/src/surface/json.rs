//! Surface <-> JSON document conversion.
//!
//! Verbose documents keep every detail needed to rebuild the surface:
//!
//! ```json
//! { "type": "PlaneSurface",
//!   "transform": { "translation": null, "rotation": null },
//!   "bounds": { "type": "RectangleBounds", "values": [-10.0, -20.0, 10.0, 20.0] },
//!   "geo_id": 42 }
//! ```
//!
//! Compact documents target an external geometry consumer and are write-only:
//! `transform`, `mask`, `source` (the identifier value), `barcode` (always 0,
//! assigned by a later numbering pass) and `type` (0 portal, 1 sensitive,
//! 2 passive).

use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};

use super::{ProtoSurface, ShapeKind, Surface};
use crate::bounds::{
    bounds_from_json, bounds_kind_from_json, bounds_to_json, bounds_to_mask, AnnulusBounds,
    BoundsKind, ConcreteBounds, ConeBounds, CylinderBounds, DiscTrapezoidBounds, EllipseBounds,
    LineBounds, RadialBounds, RectangleBounds, TrapezoidBounds,
};
use crate::context::GeometryContext;
use crate::error::Result;
use crate::identifier::GeometryIdentifier;
use crate::json::{as_u64, field, is_empty, typed};
use crate::material::{material_from_json, material_to_json, SurfaceMaterial};
use crate::transform::{transform_from_json, transform_to_json, TransformOptions};

/// Options for both output dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceJsonOptions {
    /// Forwarded to the placement codec.
    pub transform: TransformOptions,
    /// Write attached material (verbose dialect).
    pub write_material: bool,
    /// Encode the surface as a portal (compact dialect).
    pub portal: bool,
}

impl Default for SurfaceJsonOptions {
    fn default() -> Self {
        Self {
            transform: TransformOptions::default(),
            write_material: true,
            portal: false,
        }
    }
}

/// Compact-dialect surface category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CompactSurfaceType {
    Portal = 0,
    Sensitive = 1,
    Passive = 2,
}

impl CompactSurfaceType {
    /// Portal wins; otherwise a non-zero sensitive field marks a sensor.
    pub fn classify(portal: bool, geometry_id: GeometryIdentifier) -> Self {
        if portal {
            Self::Portal
        } else if geometry_id.sensitive() > 0 {
            Self::Sensitive
        } else {
            Self::Passive
        }
    }
}

/// Verbose document of `surface` with its placement evaluated in `gctx`.
pub fn to_json(gctx: &GeometryContext, surface: &Surface, options: &SurfaceJsonOptions) -> Value {
    let bounds = match surface.bounds() {
        Some(b) => bounds_to_json(&b),
        None => json!({ "type": BoundsKind::Boundless }),
    };

    let mut j = json!({
        "type": surface.shape_kind(),
        "transform": transform_to_json(&surface.transform(gctx), &options.transform),
        "bounds": bounds,
        "geo_id": surface.geometry_id().value(),
    });
    if options.write_material {
        if let Some(material) = surface.material() {
            j["material"] = material_to_json(material);
        }
    }
    j
}

/// Verbose document with an explicitly supplied material in place of the
/// surface's own.
pub fn to_json_with_material(
    gctx: &GeometryContext,
    surface: &Surface,
    material: Option<&SurfaceMaterial>,
    options: &SurfaceJsonOptions,
) -> Value {
    let mut j = to_json(
        gctx,
        surface,
        &SurfaceJsonOptions {
            write_material: false,
            ..*options
        },
    );
    if let Some(material) = material {
        j["material"] = material_to_json(material);
    }
    j
}

/// Compact document for the external geometry consumer.
pub fn to_json_compact(
    gctx: &GeometryContext,
    surface: &Surface,
    options: &SurfaceJsonOptions,
) -> Value {
    let geometry_id = surface.geometry_id();
    let surface_type = CompactSurfaceType::classify(options.portal, geometry_id);
    json!({
        "transform": transform_to_json(&surface.transform(gctx), &options.transform),
        "mask": bounds_to_mask(surface.bounds().as_ref(), options.portal),
        "source": geometry_id.value(),
        "barcode": 0,
        "type": surface_type as u32,
    })
}

type BuildFn = fn(&Value) -> Result<ProtoSurface>;

/// Every supported (shape, bounds) pair. Perigee is handled before lookup.
const DISPATCH: &[(ShapeKind, BoundsKind, BuildFn)] = &[
    (ShapeKind::Plane, BoundsKind::Ellipse, plane::<EllipseBounds>),
    (ShapeKind::Plane, BoundsKind::Rectangle, plane::<RectangleBounds>),
    (ShapeKind::Plane, BoundsKind::Trapezoid, plane::<TrapezoidBounds>),
    (ShapeKind::Disc, BoundsKind::Annulus, disc::<AnnulusBounds>),
    (ShapeKind::Disc, BoundsKind::Disc, disc::<RadialBounds>),
    (ShapeKind::Disc, BoundsKind::DiscTrapezoid, disc::<DiscTrapezoidBounds>),
    (ShapeKind::Cylinder, BoundsKind::Cylinder, cylinder),
    (ShapeKind::Cone, BoundsKind::Cone, cone),
    (ShapeKind::Straw, BoundsKind::Line, straw),
];

fn lookup(shape: ShapeKind, bounds: BoundsKind) -> Option<BuildFn> {
    DISPATCH
        .iter()
        .find(|(s, b, _)| *s == shape && *b == bounds)
        .map(|&(_, _, build)| build)
}

fn plane<B: ConcreteBounds + Into<super::PlaneBounds>>(j: &Value) -> Result<ProtoSurface> {
    let (transform, bounds) = placed_bounds::<B>(j)?;
    Ok(ProtoSurface::plane(transform, bounds))
}

fn disc<B: ConcreteBounds + Into<super::DiscBounds>>(j: &Value) -> Result<ProtoSurface> {
    let (transform, bounds) = placed_bounds::<B>(j)?;
    Ok(ProtoSurface::disc(transform, bounds))
}

fn cylinder(j: &Value) -> Result<ProtoSurface> {
    let (transform, bounds) = placed_bounds::<CylinderBounds>(j)?;
    Ok(ProtoSurface::cylinder(transform, bounds))
}

fn cone(j: &Value) -> Result<ProtoSurface> {
    let (transform, bounds) = placed_bounds::<ConeBounds>(j)?;
    Ok(ProtoSurface::cone(transform, bounds))
}

fn straw(j: &Value) -> Result<ProtoSurface> {
    let (transform, bounds) = placed_bounds::<LineBounds>(j)?;
    Ok(ProtoSurface::straw(transform, bounds))
}

fn placed_bounds<B: ConcreteBounds>(j: &Value) -> Result<(crate::Transform3, B)> {
    let transform = transform_from_json(field(j, "transform")?)?;
    let bounds = bounds_from_json::<B>(field(j, "bounds")?)?;
    Ok((transform, bounds))
}

/// Rebuild a surface from a verbose document.
///
/// Returns `Ok(None)` when the (shape, bounds) pair is not supported, leaving
/// the caller to report it. Missing or mistyped required fields are errors.
pub fn from_json(j: &Value) -> Result<Option<Surface>> {
    let shape: ShapeKind = typed(field(j, "type")?, "type")?;

    let proto = if shape == ShapeKind::Perigee {
        ProtoSurface::perigee(transform_from_json(field(j, "transform")?)?)
    } else {
        let bounds_kind = bounds_kind_from_json(field(j, "bounds")?)?;
        match lookup(shape, bounds_kind) {
            Some(build) => build(j)?,
            None => {
                tracing::debug!("no surface for {} with {}", shape, bounds_kind);
                return Ok(None);
            }
        }
    };

    let geometry_id = GeometryIdentifier::new(as_u64(field(j, "geo_id")?, "geo_id")?);
    let mut surface = proto.finalize(geometry_id);

    if let Some(material) = j.get("material").filter(|m| !is_empty(m)) {
        surface.assign_material(Arc::new(material_from_json(material)?));
    }

    tracing::trace!(
        "decoded {} [{}], material: {}",
        shape,
        geometry_id,
        surface.material().is_some()
    );
    Ok(Some(surface))
}

impl Serialize for Surface {
    /// Verbose document in the nominal context with default options.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        to_json(&GeometryContext::default(), self, &SurfaceJsonOptions::default())
            .serialize(serializer)
    }
}
