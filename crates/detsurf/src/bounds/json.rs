//! Bounds codecs: verbose `{"type", "values"}` and the compact mask form.
//!
//! Non-finite parameters are written as `null` and read back as NaN.

use serde_json::{json, Value};

use super::{BoundsKind, ConcreteBounds, SurfaceBounds};
use crate::error::{Result, SurfaceJsonError};
use crate::json::{as_f64_vec, field, typed};

/// Mask shape ids understood by the compact geometry consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MaskShape {
    Annulus2 = 0,
    Cuboid3 = 1,
    Cylinder2 = 2,
    Cylinder3 = 3,
    PortalCylinder2 = 4,
    Rectangle2 = 5,
    Ring2 = 6,
    Trapezoid2 = 7,
    CellWire = 8,
    StrawWire = 9,
    Single1 = 10,
    Single2 = 11,
    Single3 = 12,
    Unknown = 13,
}

impl MaskShape {
    pub fn id(self) -> u32 {
        self as u32
    }
}

/// Verbose bounds document.
pub fn bounds_to_json(bounds: &SurfaceBounds) -> Value {
    json!({
        "type": bounds.kind(),
        "values": bounds.values(),
    })
}

/// Read the `type` tag of a bounds document.
pub fn bounds_kind_from_json(doc: &Value) -> Result<BoundsKind> {
    typed(field(doc, "type")?, "bounds.type")
}

/// Read the parameters of a bounds document as concrete kind `B`.
pub fn bounds_from_json<B: ConcreteBounds>(doc: &Value) -> Result<B> {
    let values = as_f64_vec(field(doc, "values")?, "bounds.values")?;
    B::from_values(&values).ok_or(SurfaceJsonError::ValueCount {
        kind: B::KIND.as_str(),
        expected: B::SIZE,
        got: values.len(),
    })
}

/// Compact mask document, `{"shape": id, "boundaries": [...]}`.
///
/// `None` (a surface without bounds) yields an unknown shape with no
/// boundaries. Cylinders are written as portal cylinders when `portal` is set.
/// A degenerate trapezoid (`half_y == 0`) gets `0` as its inverse height.
pub fn bounds_to_mask(bounds: Option<&SurfaceBounds>, portal: bool) -> Value {
    let (shape, boundaries) = match bounds {
        Some(b) => mask_from_bounds(b, portal),
        None => (MaskShape::Unknown, Vec::new()),
    };
    json!({
        "shape": shape.id(),
        "boundaries": boundaries,
    })
}

fn mask_from_bounds(bounds: &SurfaceBounds, portal: bool) -> (MaskShape, Vec<f64>) {
    match bounds {
        SurfaceBounds::Cylinder(c) => {
            let shape = if portal {
                MaskShape::PortalCylinder2
            } else {
                MaskShape::Cylinder2
            };
            (shape, vec![c.r, -c.half_z, c.half_z])
        }
        SurfaceBounds::Annulus(a) => (MaskShape::Annulus2, a.values()),
        SurfaceBounds::Rectangle(r) => (
            MaskShape::Rectangle2,
            vec![r.half_length_x(), r.half_length_y()],
        ),
        SurfaceBounds::Trapezoid(t) => (
            MaskShape::Trapezoid2,
            vec![
                t.half_x_neg_y,
                t.half_x_pos_y,
                t.half_y,
                inverse_height(t.half_y),
            ],
        ),
        SurfaceBounds::Radial(r) => (MaskShape::Ring2, vec![r.min_r, r.max_r]),
        SurfaceBounds::Line(l) => (MaskShape::StrawWire, vec![l.r, l.half_z]),
        other => (MaskShape::Unknown, other.values()),
    }
}

fn inverse_height(half_y: f64) -> f64 {
    if half_y == 0.0 {
        0.0
    } else {
        1.0 / (2.0 * half_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{
        AnnulusBounds, ConeBounds, CylinderBounds, LineBounds, RadialBounds, RectangleBounds,
        TrapezoidBounds,
    };

    #[test]
    fn verbose_document_carries_tag_and_values() {
        let j = bounds_to_json(&RectangleBounds::new(10.0, 20.0).into());
        assert_eq!(j["type"], json!("RectangleBounds"));
        assert_eq!(j["values"], json!([-10.0, -20.0, 10.0, 20.0]));
    }

    #[test]
    fn decode_checks_value_count() {
        let j = json!({"type": "LineBounds", "values": [1.0, 2.0, 3.0]});
        match bounds_from_json::<LineBounds>(&j) {
            Err(SurfaceJsonError::ValueCount { expected, got, .. }) => {
                assert_eq!((expected, got), (2, 3));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn decode_requires_values_field() {
        let j = json!({"type": "ConeBounds"});
        assert!(matches!(
            bounds_from_json::<ConeBounds>(&j),
            Err(SurfaceJsonError::MissingField { .. })
        ));
    }

    #[test]
    fn kind_of_numeric_tag_is_malformed() {
        assert!(matches!(
            bounds_kind_from_json(&json!({"type": 3})),
            Err(SurfaceJsonError::Json { .. })
        ));
    }

    #[test]
    fn cylinder_mask_depends_on_portal_flag() {
        let c: SurfaceBounds = CylinderBounds::new(30.0, 100.0).into();
        let m = bounds_to_mask(Some(&c), false);
        assert_eq!(m["shape"], json!(MaskShape::Cylinder2.id()));
        assert_eq!(m["boundaries"], json!([30.0, -100.0, 100.0]));
        let p = bounds_to_mask(Some(&c), true);
        assert_eq!(p["shape"], json!(MaskShape::PortalCylinder2.id()));
    }

    #[test]
    fn planar_masks_use_half_lengths() {
        let r: SurfaceBounds = RectangleBounds::new(10.0, 20.0).into();
        assert_eq!(bounds_to_mask(Some(&r), false)["boundaries"], json!([10.0, 20.0]));
        let t: SurfaceBounds = TrapezoidBounds::new(3.0, 5.0, 2.0).into();
        let m = bounds_to_mask(Some(&t), false);
        assert_eq!(m["shape"], json!(7));
        assert_eq!(m["boundaries"], json!([3.0, 5.0, 2.0, 0.25]));
    }

    #[test]
    fn flat_trapezoid_mask_stays_numeric() {
        let t: SurfaceBounds = TrapezoidBounds::new(3.0, 5.0, 0.0).into();
        let m = bounds_to_mask(Some(&t), false);
        assert_eq!(m["boundaries"], json!([3.0, 5.0, 0.0, 0.0]));
    }

    #[test]
    fn nan_parameters_survive_the_document() {
        let l: SurfaceBounds = LineBounds::new(f64::NAN, 700.0).into();
        let j = bounds_to_json(&l);
        assert!(j["values"][0].is_null());
        let back = bounds_from_json::<LineBounds>(&j).expect("decode");
        assert!(back.r.is_nan());
        assert_eq!(back.half_z, 700.0);
    }

    #[test]
    fn disc_masks() {
        let r: SurfaceBounds = RadialBounds::new(5.0, 50.0).into();
        assert_eq!(
            bounds_to_mask(Some(&r), false),
            json!({"shape": 6, "boundaries": [5.0, 50.0]})
        );
        let a = AnnulusBounds {
            min_r: 1.0,
            max_r: 2.0,
            min_phi_rel: -0.1,
            max_phi_rel: 0.1,
            average_phi: 0.0,
            origin_x: 0.5,
            origin_y: -0.5,
        };
        let m = bounds_to_mask(Some(&a.into()), false);
        assert_eq!(m["shape"], json!(0));
        assert_eq!(m["boundaries"].as_array().map(Vec::len), Some(7));
    }

    #[test]
    fn missing_bounds_mask_is_unknown() {
        assert_eq!(
            bounds_to_mask(None, false),
            json!({"shape": 13, "boundaries": []})
        );
    }
}
