//! Bounds of cylinder, cone and straw surfaces.

use std::f64::consts::PI;

use super::{BoundsKind, ConcreteBounds};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderBounds {
    pub r: f64,
    pub half_z: f64,
    pub half_phi_sector: f64,
    pub average_phi: f64,
    pub bevel_min_z: f64,
    pub bevel_max_z: f64,
}

impl CylinderBounds {
    /// Closed cylinder without bevels.
    pub fn new(r: f64, half_z: f64) -> Self {
        Self {
            r,
            half_z,
            half_phi_sector: PI,
            average_phi: 0.0,
            bevel_min_z: 0.0,
            bevel_max_z: 0.0,
        }
    }
}

impl ConcreteBounds for CylinderBounds {
    const KIND: BoundsKind = BoundsKind::Cylinder;
    const SIZE: usize = 6;

    fn values(&self) -> Vec<f64> {
        vec![
            self.r,
            self.half_z,
            self.half_phi_sector,
            self.average_phi,
            self.bevel_min_z,
            self.bevel_max_z,
        ]
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let [r, half_z, half_phi_sector, average_phi, bevel_min_z, bevel_max_z] =
            <[f64; 6]>::try_from(values).ok()?;
        Some(Self {
            r,
            half_z,
            half_phi_sector,
            average_phi,
            bevel_min_z,
            bevel_max_z,
        })
    }
}

/// Cone section between `min_z` and `max_z` with opening half angle `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeBounds {
    pub alpha: f64,
    pub min_z: f64,
    pub max_z: f64,
    pub half_phi_sector: f64,
    pub average_phi: f64,
}

impl ConeBounds {
    pub fn new(alpha: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            alpha,
            min_z,
            max_z,
            half_phi_sector: PI,
            average_phi: 0.0,
        }
    }
}

impl ConcreteBounds for ConeBounds {
    const KIND: BoundsKind = BoundsKind::Cone;
    const SIZE: usize = 5;

    fn values(&self) -> Vec<f64> {
        vec![
            self.alpha,
            self.min_z,
            self.max_z,
            self.half_phi_sector,
            self.average_phi,
        ]
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let [alpha, min_z, max_z, half_phi_sector, average_phi] =
            <[f64; 5]>::try_from(values).ok()?;
        Some(Self {
            alpha,
            min_z,
            max_z,
            half_phi_sector,
            average_phi,
        })
    }
}

/// Straw tube: radius and half length along the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBounds {
    pub r: f64,
    pub half_z: f64,
}

impl LineBounds {
    pub fn new(r: f64, half_z: f64) -> Self {
        Self { r, half_z }
    }
}

impl ConcreteBounds for LineBounds {
    const KIND: BoundsKind = BoundsKind::Line;
    const SIZE: usize = 2;

    fn values(&self) -> Vec<f64> {
        vec![self.r, self.half_z]
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let [r, half_z] = <[f64; 2]>::try_from(values).ok()?;
        Some(Self { r, half_z })
    }
}
