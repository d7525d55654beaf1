//! detsurf — type-preserving JSON serialization of detector surfaces.
//!
//! A detector surface is a shape (plane, disc, cylinder, cone, straw,
//! perigee line) with bounds valid for that shape, a placement, a geometry
//! identifier and optional shared material. This crate converts surfaces to
//! and from `serde_json::Value` documents:
//!
//! - [`to_json`] writes the verbose dialect, which [`from_json`] reads back
//!   into a surface of the identical concrete kind.
//! - [`to_json_compact`] writes the compact dialect consumed by an external
//!   geometry format (mask, source, barcode, surface category).
//!
//! Decoding distinguishes three outcomes: a surface, `Ok(None)` for a
//! (shape, bounds) combination without a concrete type, and an error for a
//! malformed document.
//!
//! # Example
//!
//! ```
//! use detsurf::{
//!     from_json, to_json, GeometryContext, GeometryIdentifier, ProtoSurface, RectangleBounds,
//!     ShapeKind, SurfaceJsonOptions, Transform3,
//! };
//!
//! let surface = ProtoSurface::plane(Transform3::identity(), RectangleBounds::new(10.0, 20.0))
//!     .finalize(GeometryIdentifier::new(42));
//! let doc = to_json(&GeometryContext::default(), &surface, &SurfaceJsonOptions::default());
//! assert_eq!(doc["geo_id"], 42);
//!
//! let back = from_json(&doc).unwrap().unwrap();
//! assert_eq!(back.shape_kind(), ShapeKind::Plane);
//! ```

mod bounds;
mod context;
mod error;
mod identifier;
mod json;
mod material;
mod surface;
mod transform;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bounds::{
    bounds_from_json, bounds_kind_from_json, bounds_to_json, bounds_to_mask, AnnulusBounds,
    BoundsKind, ConcreteBounds, ConeBounds, CylinderBounds, DiscTrapezoidBounds, EllipseBounds,
    LineBounds, MaskShape, RadialBounds, RectangleBounds, SurfaceBounds, TrapezoidBounds,
};
pub use context::{DetectorElement, GeometryContext};
pub use error::SurfaceJsonError;
pub use identifier::GeometryIdentifier;
pub use material::{material_from_json, material_to_json, Material, MaterialSlab, SurfaceMaterial};
pub use surface::json::{
    from_json, to_json, to_json_compact, to_json_with_material, CompactSurfaceType,
    SurfaceJsonOptions,
};
pub use surface::{DiscBounds, PlaneBounds, ProtoSurface, ShapeKind, Surface, SurfaceShape};
pub use transform::{
    transform_from_json, transform_from_parts, transform_to_json, Transform3, TransformOptions,
};
