//! Surface model.
//!
//! A surface is a shape kind paired with bounds valid for that shape. The
//! pairing is encoded in [`SurfaceShape`], so a plane with annulus bounds (or
//! any other invalid pair) cannot be built.
//!
//! Construction is two-phase: a [`ProtoSurface`] holds placement and shape,
//! and [`ProtoSurface::finalize`] consumes it together with the geometry
//! identifier. A [`Surface`] has no identifier setter, so the identifier is
//! assigned exactly once.

pub mod json;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bounds::{
    AnnulusBounds, ConeBounds, CylinderBounds, DiscTrapezoidBounds, EllipseBounds, LineBounds,
    RadialBounds, RectangleBounds, SurfaceBounds, TrapezoidBounds,
};
use crate::context::{DetectorElement, GeometryContext};
use crate::identifier::GeometryIdentifier;
use crate::material::SurfaceMaterial;
use crate::transform::Transform3;

/// Surface discriminant as written in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    #[serde(rename = "ConeSurface")]
    Cone,
    #[serde(rename = "CylinderSurface")]
    Cylinder,
    #[serde(rename = "DiscSurface")]
    Disc,
    #[serde(rename = "PerigeeSurface")]
    Perigee,
    #[serde(rename = "PlaneSurface")]
    Plane,
    #[serde(rename = "StrawSurface")]
    Straw,
    /// Any tag not listed above. Never reported by a [`Surface`].
    #[serde(rename = "OtherSurface", other)]
    Other,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cone => "ConeSurface",
            Self::Cylinder => "CylinderSurface",
            Self::Disc => "DiscSurface",
            Self::Perigee => "PerigeeSurface",
            Self::Plane => "PlaneSurface",
            Self::Straw => "StrawSurface",
            Self::Other => "OtherSurface",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounds a plane may carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneBounds {
    Ellipse(EllipseBounds),
    Rectangle(RectangleBounds),
    Trapezoid(TrapezoidBounds),
}

/// Bounds a disc may carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscBounds {
    Annulus(AnnulusBounds),
    Radial(RadialBounds),
    DiscTrapezoid(DiscTrapezoidBounds),
}

impl From<EllipseBounds> for PlaneBounds {
    fn from(b: EllipseBounds) -> Self {
        Self::Ellipse(b)
    }
}

impl From<RectangleBounds> for PlaneBounds {
    fn from(b: RectangleBounds) -> Self {
        Self::Rectangle(b)
    }
}

impl From<TrapezoidBounds> for PlaneBounds {
    fn from(b: TrapezoidBounds) -> Self {
        Self::Trapezoid(b)
    }
}

impl From<AnnulusBounds> for DiscBounds {
    fn from(b: AnnulusBounds) -> Self {
        Self::Annulus(b)
    }
}

impl From<RadialBounds> for DiscBounds {
    fn from(b: RadialBounds) -> Self {
        Self::Radial(b)
    }
}

impl From<DiscTrapezoidBounds> for DiscBounds {
    fn from(b: DiscTrapezoidBounds) -> Self {
        Self::DiscTrapezoid(b)
    }
}

impl From<PlaneBounds> for SurfaceBounds {
    fn from(b: PlaneBounds) -> Self {
        match b {
            PlaneBounds::Ellipse(e) => e.into(),
            PlaneBounds::Rectangle(r) => r.into(),
            PlaneBounds::Trapezoid(t) => t.into(),
        }
    }
}

impl From<DiscBounds> for SurfaceBounds {
    fn from(b: DiscBounds) -> Self {
        match b {
            DiscBounds::Annulus(a) => a.into(),
            DiscBounds::Radial(r) => r.into(),
            DiscBounds::DiscTrapezoid(t) => t.into(),
        }
    }
}

/// Shape kind together with its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceShape {
    Plane(PlaneBounds),
    Disc(DiscBounds),
    Cylinder(CylinderBounds),
    Cone(ConeBounds),
    Straw(LineBounds),
    /// Line without transverse extent; carries no bounds.
    Perigee,
}

impl SurfaceShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Plane(_) => ShapeKind::Plane,
            Self::Disc(_) => ShapeKind::Disc,
            Self::Cylinder(_) => ShapeKind::Cylinder,
            Self::Cone(_) => ShapeKind::Cone,
            Self::Straw(_) => ShapeKind::Straw,
            Self::Perigee => ShapeKind::Perigee,
        }
    }

    /// Bounds of the shape; `None` only for perigee.
    pub fn bounds(&self) -> Option<SurfaceBounds> {
        match *self {
            Self::Plane(b) => Some(b.into()),
            Self::Disc(b) => Some(b.into()),
            Self::Cylinder(b) => Some(b.into()),
            Self::Cone(b) => Some(b.into()),
            Self::Straw(b) => Some(b.into()),
            Self::Perigee => None,
        }
    }
}

#[derive(Clone)]
enum Placement {
    Nominal(Transform3),
    Element(Arc<dyn DetectorElement>),
}

/// Surface under construction, before its identifier is known.
#[derive(Clone)]
pub struct ProtoSurface {
    placement: Placement,
    shape: SurfaceShape,
}

impl ProtoSurface {
    pub fn new(transform: Transform3, shape: SurfaceShape) -> Self {
        Self {
            placement: Placement::Nominal(transform),
            shape,
        }
    }

    /// Surface whose placement is owned by a detector element.
    pub fn on_element(element: Arc<dyn DetectorElement>, shape: SurfaceShape) -> Self {
        Self {
            placement: Placement::Element(element),
            shape,
        }
    }

    pub fn plane(transform: Transform3, bounds: impl Into<PlaneBounds>) -> Self {
        Self::new(transform, SurfaceShape::Plane(bounds.into()))
    }

    pub fn disc(transform: Transform3, bounds: impl Into<DiscBounds>) -> Self {
        Self::new(transform, SurfaceShape::Disc(bounds.into()))
    }

    pub fn cylinder(transform: Transform3, bounds: CylinderBounds) -> Self {
        Self::new(transform, SurfaceShape::Cylinder(bounds))
    }

    pub fn cone(transform: Transform3, bounds: ConeBounds) -> Self {
        Self::new(transform, SurfaceShape::Cone(bounds))
    }

    pub fn straw(transform: Transform3, bounds: LineBounds) -> Self {
        Self::new(transform, SurfaceShape::Straw(bounds))
    }

    pub fn perigee(transform: Transform3) -> Self {
        Self::new(transform, SurfaceShape::Perigee)
    }

    pub fn shape(&self) -> &SurfaceShape {
        &self.shape
    }

    /// Assign the identifier and finish construction.
    pub fn finalize(self, geometry_id: GeometryIdentifier) -> Surface {
        Surface {
            placement: self.placement,
            shape: self.shape,
            geometry_id,
            material: None,
        }
    }
}

/// A fully constructed detector surface.
#[derive(Clone)]
pub struct Surface {
    placement: Placement,
    shape: SurfaceShape,
    geometry_id: GeometryIdentifier,
    material: Option<Arc<SurfaceMaterial>>,
}

impl Surface {
    pub fn shape_kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &SurfaceShape {
        &self.shape
    }

    pub fn bounds(&self) -> Option<SurfaceBounds> {
        self.shape.bounds()
    }

    /// Placement evaluated in `gctx`.
    pub fn transform(&self, gctx: &GeometryContext) -> Transform3 {
        match &self.placement {
            Placement::Nominal(t) => *t,
            Placement::Element(element) => element.transform(gctx),
        }
    }

    pub fn geometry_id(&self) -> GeometryIdentifier {
        self.geometry_id
    }

    pub fn material(&self) -> Option<&Arc<SurfaceMaterial>> {
        self.material.as_ref()
    }

    /// Attach shared material, replacing any previous one.
    pub fn assign_material(&mut self, material: Arc<SurfaceMaterial>) {
        self.material = Some(material);
    }

    pub fn has_detector_element(&self) -> bool {
        matches!(self.placement, Placement::Element(_))
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("shape", &self.shape)
            .field("geometry_id", &self.geometry_id)
            .field("detector_element", &self.has_detector_element())
            .field("material", &self.material)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundsKind;
    use crate::test_utils::ShiftedElement;
    use nalgebra::Vector3;

    #[test]
    fn shape_reports_kind_and_bounds() {
        let s = ProtoSurface::plane(Transform3::identity(), RectangleBounds::new(1.0, 2.0))
            .finalize(GeometryIdentifier::new(5));
        assert_eq!(s.shape_kind(), ShapeKind::Plane);
        assert_eq!(s.bounds().map(|b| b.kind()), Some(BoundsKind::Rectangle));
        assert_eq!(s.geometry_id().value(), 5);
        assert!(s.material().is_none());
    }

    #[test]
    fn perigee_has_no_bounds() {
        let s = ProtoSurface::perigee(Transform3::identity()).finalize(Default::default());
        assert_eq!(s.shape_kind(), ShapeKind::Perigee);
        assert!(s.bounds().is_none());
    }

    #[test]
    fn disc_bounds_flatten_to_surface_bounds() {
        let s = ProtoSurface::disc(Transform3::identity(), RadialBounds::new(1.0, 4.0))
            .finalize(Default::default());
        assert_eq!(s.bounds().map(|b| b.kind()), Some(BoundsKind::Disc));
    }

    #[test]
    fn element_placement_follows_context() {
        let element = Arc::new(ShiftedElement::new(Vector3::new(0.0, 0.0, 10.0)));
        let s = ProtoSurface::on_element(element, SurfaceShape::Perigee).finalize(Default::default());
        let nominal = s.transform(&GeometryContext::default());
        assert_eq!(nominal.translation.vector, Vector3::new(0.0, 0.0, 10.0));
        let aligned = s.transform(&GeometryContext::new(Vector3::new(1.0, 0.0, 0.0)));
        assert_eq!(aligned.translation.vector, Vector3::new(1.0, 0.0, 10.0));
    }

    #[test]
    fn material_is_shared_not_copied() {
        let material = Arc::new(SurfaceMaterial::Proto { bins: [1, 1] });
        let mut a = ProtoSurface::perigee(Transform3::identity()).finalize(Default::default());
        let mut b = a.clone();
        a.assign_material(Arc::clone(&material));
        b.assign_material(Arc::clone(&material));
        let (ma, mb) = (a.material().expect("a"), b.material().expect("b"));
        assert!(Arc::ptr_eq(ma, mb));
        assert_eq!(Arc::strong_count(&material), 3);
    }

    #[test]
    fn shape_tags_use_document_names() {
        assert_eq!(
            serde_json::to_value(ShapeKind::Plane).expect("serialize"),
            serde_json::json!("PlaneSurface")
        );
        let other: ShapeKind = serde_json::from_str("\"CurvilinearSurface\"").expect("tag");
        assert_eq!(other, ShapeKind::Other);
    }

    #[test]
    fn unknown_shape_tag_matches_its_display_name() {
        assert_eq!(
            serde_json::to_value(ShapeKind::Other).expect("serialize"),
            serde_json::json!(ShapeKind::Other.as_str())
        );
        assert_eq!(ShapeKind::Other.to_string(), "OtherSurface");
    }
}
