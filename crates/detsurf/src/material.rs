//! Surface material description and its JSON codec.
//!
//! Material is shared between surfaces via `Arc` and is never mutated after
//! attachment. JSON has no non-finite numbers: they are written as `null` and
//! read back as infinity (`x0`, `l0`) or NaN (everything else).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SurfaceJsonError};
use crate::json::typed;

/// Bulk material properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Radiation length; infinite for vacuum, written as `null`.
    #[serde(with = "infinite_as_null")]
    pub x0: f64,
    /// Nuclear interaction length.
    #[serde(with = "infinite_as_null")]
    pub l0: f64,
    /// Relative atomic mass.
    #[serde(with = "nan_as_null")]
    pub ar: f64,
    /// Atomic number.
    #[serde(with = "nan_as_null")]
    pub z: f64,
    #[serde(with = "nan_as_null")]
    pub mass_density: f64,
}

impl Material {
    pub fn vacuum() -> Self {
        Self {
            x0: f64::INFINITY,
            l0: f64::INFINITY,
            ar: 0.0,
            z: 0.0,
            mass_density: 0.0,
        }
    }

    pub fn is_vacuum(&self) -> bool {
        !self.x0.is_finite()
    }
}

/// Material of a given thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSlab {
    pub material: Material,
    #[serde(with = "nan_as_null")]
    pub thickness: f64,
}

impl MaterialSlab {
    pub fn new(material: Material, thickness: f64) -> Self {
        Self {
            material,
            thickness,
        }
    }

    pub fn thickness_in_x0(&self) -> f64 {
        if self.material.is_vacuum() {
            0.0
        } else {
            self.thickness / self.material.x0
        }
    }

    pub fn thickness_in_l0(&self) -> f64 {
        if self.material.is_vacuum() {
            0.0
        } else {
            self.thickness / self.material.l0
        }
    }
}

/// Material attached to a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceMaterial {
    /// Same slab everywhere on the surface.
    Homogeneous { slab: MaterialSlab },
    /// Slabs on a local 2D grid, row-major with `bins[0]` columns.
    Binned {
        bins: [usize; 2],
        slabs: Vec<MaterialSlab>,
    },
    /// Binning placeholder awaiting material mapping.
    Proto { bins: [usize; 2] },
}

impl SurfaceMaterial {
    pub fn homogeneous(slab: MaterialSlab) -> Self {
        Self::Homogeneous { slab }
    }

    /// Slab at local bin `(b0, b1)`. `None` for proto material or out-of-range bins.
    pub fn slab(&self, b0: usize, b1: usize) -> Option<&MaterialSlab> {
        match self {
            Self::Homogeneous { slab } => Some(slab),
            Self::Binned { bins, slabs } => {
                if b0 >= bins[0] || b1 >= bins[1] {
                    return None;
                }
                slabs.get(b1.checked_mul(bins[0])?.checked_add(b0)?)
            }
            Self::Proto { .. } => None,
        }
    }

    pub fn is_proto(&self) -> bool {
        matches!(self, Self::Proto { .. })
    }
}

fn serialize_finite<S: serde::Serializer>(
    value: f64,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    if value.is_finite() {
        s.serialize_f64(value)
    } else {
        s.serialize_none()
    }
}

mod infinite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        super::serialize_finite(*value, s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::INFINITY))
    }
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        super::serialize_finite(*value, s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
    }
}

pub fn material_to_json(material: &SurfaceMaterial) -> Value {
    // Plain data with string tags; serialization cannot fail.
    serde_json::to_value(material).unwrap_or(Value::Null)
}

/// Decode material. Binned material must hold exactly one slab per bin.
pub fn material_from_json(doc: &Value) -> Result<SurfaceMaterial> {
    let material: SurfaceMaterial = typed(doc, "material")?;
    if let SurfaceMaterial::Binned { bins, slabs } = &material {
        if bins[0].checked_mul(bins[1]) != Some(slabs.len()) {
            return Err(SurfaceJsonError::wrong_kind("material.slabs", "one slab per bin"));
        }
    }
    Ok(material)
}
