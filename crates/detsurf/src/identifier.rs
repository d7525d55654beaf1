//! Packed 64-bit geometry identifier.

use serde::{Deserialize, Serialize};

const VOLUME_MASK: u64 = 0xff00_0000_0000_0000;
const BOUNDARY_MASK: u64 = 0x00ff_0000_0000_0000;
const LAYER_MASK: u64 = 0x0000_fff0_0000_0000;
const APPROACH_MASK: u64 = 0x0000_000f_f000_0000;
const SENSITIVE_MASK: u64 = 0x0000_0000_0fff_ff00;
const EXTRA_MASK: u64 = 0x0000_0000_0000_00ff;

/// Stable handle to a surface within the detector geometry.
///
/// The value is split into hierarchical fields. A non-zero `sensitive` field
/// marks a sensor surface; zero means passive material or a portal.
/// Serialized as the plain integral value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GeometryIdentifier(u64);

impl GeometryIdentifier {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Full encoded value.
    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn volume(self) -> u64 {
        get_field(self.0, VOLUME_MASK)
    }

    pub const fn boundary(self) -> u64 {
        get_field(self.0, BOUNDARY_MASK)
    }

    pub const fn layer(self) -> u64 {
        get_field(self.0, LAYER_MASK)
    }

    pub const fn approach(self) -> u64 {
        get_field(self.0, APPROACH_MASK)
    }

    pub const fn sensitive(self) -> u64 {
        get_field(self.0, SENSITIVE_MASK)
    }

    pub const fn extra(self) -> u64 {
        get_field(self.0, EXTRA_MASK)
    }

    pub const fn with_volume(self, volume: u64) -> Self {
        Self(set_field(self.0, VOLUME_MASK, volume))
    }

    pub const fn with_boundary(self, boundary: u64) -> Self {
        Self(set_field(self.0, BOUNDARY_MASK, boundary))
    }

    pub const fn with_layer(self, layer: u64) -> Self {
        Self(set_field(self.0, LAYER_MASK, layer))
    }

    pub const fn with_approach(self, approach: u64) -> Self {
        Self(set_field(self.0, APPROACH_MASK, approach))
    }

    pub const fn with_sensitive(self, sensitive: u64) -> Self {
        Self(set_field(self.0, SENSITIVE_MASK, sensitive))
    }

    pub const fn with_extra(self, extra: u64) -> Self {
        Self(set_field(self.0, EXTRA_MASK, extra))
    }
}

impl From<u64> for GeometryIdentifier {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<GeometryIdentifier> for u64 {
    fn from(id: GeometryIdentifier) -> Self {
        id.0
    }
}

impl std::fmt::Display for GeometryIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = [
            ("vol", self.volume()),
            ("bnd", self.boundary()),
            ("lay", self.layer()),
            ("apr", self.approach()),
            ("sen", self.sensitive()),
            ("ext", self.extra()),
        ];
        let mut first = true;
        for (name, value) in fields.into_iter().filter(|(_, v)| *v != 0) {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", name, value)?;
            first = false;
        }
        if first {
            write!(f, "undefined")?;
        }
        Ok(())
    }
}

const fn get_field(value: u64, mask: u64) -> u64 {
    (value & mask) >> mask.trailing_zeros()
}

const fn set_field(value: u64, mask: u64, field: u64) -> u64 {
    (value & !mask) | ((field << mask.trailing_zeros()) & mask)
}
