//! Surface bounds: kind tags, concrete parameter sets and their codecs.

mod cylindrical;
mod json;
mod planar;
mod radial;

use serde::{Deserialize, Serialize};

pub use cylindrical::{ConeBounds, CylinderBounds, LineBounds};
pub use json::{
    bounds_from_json, bounds_kind_from_json, bounds_to_json, bounds_to_mask, MaskShape,
};
pub use planar::{EllipseBounds, RectangleBounds, TrapezoidBounds};
pub use radial::{AnnulusBounds, DiscTrapezoidBounds, RadialBounds};

/// Bounds discriminant as written in documents.
///
/// Only nine kinds have a concrete type in this crate; the remaining tags are
/// recognized so that documents using them decode as unsupported
/// combinations instead of failing as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundsKind {
    #[serde(rename = "ConeBounds")]
    Cone,
    #[serde(rename = "CylinderBounds")]
    Cylinder,
    #[serde(rename = "DiamondBounds")]
    Diamond,
    /// Radial (full or sector) disc bounds.
    #[serde(rename = "DiscBounds")]
    Disc,
    #[serde(rename = "EllipseBounds")]
    Ellipse,
    #[serde(rename = "LineBounds")]
    Line,
    #[serde(rename = "RectangleBounds")]
    Rectangle,
    #[serde(rename = "TrapezoidBounds")]
    Trapezoid,
    #[serde(rename = "TriangleBounds")]
    Triangle,
    #[serde(rename = "DiscTrapezoidBounds")]
    DiscTrapezoid,
    #[serde(rename = "ConvexPolygonBounds")]
    ConvexPolygon,
    #[serde(rename = "AnnulusBounds")]
    Annulus,
    #[serde(rename = "Boundless")]
    Boundless,
    /// Any tag not listed above.
    #[serde(rename = "OtherBounds", other)]
    Other,
}

impl BoundsKind {
    /// Document tag string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cone => "ConeBounds",
            Self::Cylinder => "CylinderBounds",
            Self::Diamond => "DiamondBounds",
            Self::Disc => "DiscBounds",
            Self::Ellipse => "EllipseBounds",
            Self::Line => "LineBounds",
            Self::Rectangle => "RectangleBounds",
            Self::Trapezoid => "TrapezoidBounds",
            Self::Triangle => "TriangleBounds",
            Self::DiscTrapezoid => "DiscTrapezoidBounds",
            Self::ConvexPolygon => "ConvexPolygonBounds",
            Self::Annulus => "AnnulusBounds",
            Self::Boundless => "Boundless",
            Self::Other => "OtherBounds",
        }
    }
}

impl std::fmt::Display for BoundsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bounds type with a fixed-size parameter vector.
pub trait ConcreteBounds: Copy + Into<SurfaceBounds> {
    const KIND: BoundsKind;
    /// Length of the parameter vector.
    const SIZE: usize;

    /// Parameters in canonical order.
    fn values(&self) -> Vec<f64>;

    /// Rebuild from parameters; `None` if `values.len() != SIZE`.
    fn from_values(values: &[f64]) -> Option<Self>;
}

/// Any concrete bounds, owned by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceBounds {
    Rectangle(RectangleBounds),
    Trapezoid(TrapezoidBounds),
    Ellipse(EllipseBounds),
    Radial(RadialBounds),
    DiscTrapezoid(DiscTrapezoidBounds),
    Annulus(AnnulusBounds),
    Cylinder(CylinderBounds),
    Cone(ConeBounds),
    Line(LineBounds),
}

impl SurfaceBounds {
    pub fn kind(&self) -> BoundsKind {
        match self {
            Self::Rectangle(_) => RectangleBounds::KIND,
            Self::Trapezoid(_) => TrapezoidBounds::KIND,
            Self::Ellipse(_) => EllipseBounds::KIND,
            Self::Radial(_) => RadialBounds::KIND,
            Self::DiscTrapezoid(_) => DiscTrapezoidBounds::KIND,
            Self::Annulus(_) => AnnulusBounds::KIND,
            Self::Cylinder(_) => CylinderBounds::KIND,
            Self::Cone(_) => ConeBounds::KIND,
            Self::Line(_) => LineBounds::KIND,
        }
    }

    pub fn values(&self) -> Vec<f64> {
        match self {
            Self::Rectangle(b) => b.values(),
            Self::Trapezoid(b) => b.values(),
            Self::Ellipse(b) => b.values(),
            Self::Radial(b) => b.values(),
            Self::DiscTrapezoid(b) => b.values(),
            Self::Annulus(b) => b.values(),
            Self::Cylinder(b) => b.values(),
            Self::Cone(b) => b.values(),
            Self::Line(b) => b.values(),
        }
    }
}

macro_rules! impl_into_surface_bounds {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for SurfaceBounds {
                fn from(b: $ty) -> Self {
                    Self::$variant(b)
                }
            }
        )*
    };
}

impl_into_surface_bounds!(
    RectangleBounds => Rectangle,
    TrapezoidBounds => Trapezoid,
    EllipseBounds => Ellipse,
    RadialBounds => Radial,
    DiscTrapezoidBounds => DiscTrapezoid,
    AnnulusBounds => Annulus,
    CylinderBounds => Cylinder,
    ConeBounds => Cone,
    LineBounds => Line,
);
