//! Rigid placement type and its JSON codec.
//!
//! Document layout:
//! `{"translation": [x, y, z] | null, "rotation": [r00, r10, r20, r01, ...] | null}`
//! with the rotation stored column-major. `null` components are identity.

use nalgebra::{IsometryMatrix3, Matrix3, Rotation3, Translation3, Vector3};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Result, SurfaceJsonError};
use crate::json::{as_f64_array, optional_field};

/// Rigid 3D placement (rotation matrix + translation).
pub type Transform3 = IsometryMatrix3<f64>;

const IDENTITY_EPS: f64 = 1e-12;

/// Output options for the placement codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Write identity translation/rotation explicitly instead of `null`.
    pub write_identity: bool,
    /// Write the transposed (inverse) rotation matrix.
    ///
    /// Intended for consumers expecting row-major storage; the decoder in this
    /// crate always reads column-major.
    pub transpose: bool,
}

/// Build a placement from a translation and a column-major rotation matrix.
pub fn transform_from_parts(translation: Vector3<f64>, rotation: Matrix3<f64>) -> Transform3 {
    Transform3::from_parts(
        Translation3::from(translation),
        Rotation3::from_matrix_unchecked(rotation),
    )
}

/// Encode a placement.
pub fn transform_to_json(transform: &Transform3, options: &TransformOptions) -> Value {
    let translation = transform.translation.vector;
    let rotation = if options.transpose {
        transform.rotation.matrix().transpose()
    } else {
        *transform.rotation.matrix()
    };

    let j_translation = if options.write_identity || !is_zero(&translation) {
        json!(translation.as_slice())
    } else {
        Value::Null
    };
    let j_rotation = if options.write_identity || !is_identity(&rotation) {
        json!(rotation.as_slice())
    } else {
        Value::Null
    };

    json!({
        "translation": j_translation,
        "rotation": j_rotation,
    })
}

/// Decode a placement. Missing or `null` components default to identity.
pub fn transform_from_json(doc: &Value) -> Result<Transform3> {
    if !doc.is_object() {
        return Err(SurfaceJsonError::wrong_kind("transform", "an object"));
    }
    let translation = match optional_field(doc, "translation") {
        Some(v) => Vector3::from(as_f64_array::<3>(v, "transform.translation")?),
        None => Vector3::zeros(),
    };
    let rotation = match optional_field(doc, "rotation") {
        Some(v) => Matrix3::from_column_slice(&as_f64_array::<9>(v, "transform.rotation")?),
        None => Matrix3::identity(),
    };
    Ok(transform_from_parts(translation, rotation))
}

fn is_zero(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.abs() < IDENTITY_EPS)
}

fn is_identity(m: &Matrix3<f64>) -> bool {
    (m - Matrix3::identity()).amax() < IDENTITY_EPS
}
