//! Bounds of disc surfaces.

use std::f64::consts::PI;

use super::{BoundsKind, ConcreteBounds};

/// Ring or ring sector in polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialBounds {
    pub min_r: f64,
    pub max_r: f64,
    pub half_phi_sector: f64,
    pub average_phi: f64,
}

impl RadialBounds {
    /// Full ring.
    pub fn new(min_r: f64, max_r: f64) -> Self {
        Self {
            min_r,
            max_r,
            half_phi_sector: PI,
            average_phi: 0.0,
        }
    }
}

impl ConcreteBounds for RadialBounds {
    const KIND: BoundsKind = BoundsKind::Disc;
    const SIZE: usize = 4;

    fn values(&self) -> Vec<f64> {
        vec![self.min_r, self.max_r, self.half_phi_sector, self.average_phi]
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let [min_r, max_r, half_phi_sector, average_phi] = <[f64; 4]>::try_from(values).ok()?;
        Some(Self {
            min_r,
            max_r,
            half_phi_sector,
            average_phi,
        })
    }
}

/// Trapezoid placed on a disc, bounded radially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscTrapezoidBounds {
    pub half_x_min_r: f64,
    pub half_x_max_r: f64,
    pub min_r: f64,
    pub max_r: f64,
    pub average_phi: f64,
    pub stereo: f64,
}

impl ConcreteBounds for DiscTrapezoidBounds {
    const KIND: BoundsKind = BoundsKind::DiscTrapezoid;
    const SIZE: usize = 6;

    fn values(&self) -> Vec<f64> {
        vec![
            self.half_x_min_r,
            self.half_x_max_r,
            self.min_r,
            self.max_r,
            self.average_phi,
            self.stereo,
        ]
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let [half_x_min_r, half_x_max_r, min_r, max_r, average_phi, stereo] =
            <[f64; 6]>::try_from(values).ok()?;
        Some(Self {
            half_x_min_r,
            half_x_max_r,
            min_r,
            max_r,
            average_phi,
            stereo,
        })
    }
}

/// Annulus sector whose phi edges converge on a shifted origin (strip modules).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnulusBounds {
    pub min_r: f64,
    pub max_r: f64,
    pub min_phi_rel: f64,
    pub max_phi_rel: f64,
    pub average_phi: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl ConcreteBounds for AnnulusBounds {
    const KIND: BoundsKind = BoundsKind::Annulus;
    const SIZE: usize = 7;

    fn values(&self) -> Vec<f64> {
        vec![
            self.min_r,
            self.max_r,
            self.min_phi_rel,
            self.max_phi_rel,
            self.average_phi,
            self.origin_x,
            self.origin_y,
        ]
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let [min_r, max_r, min_phi_rel, max_phi_rel, average_phi, origin_x, origin_y] =
            <[f64; 7]>::try_from(values).ok()?;
        Some(Self {
            min_r,
            max_r,
            min_phi_rel,
            max_phi_rel,
            average_phi,
            origin_x,
            origin_y,
        })
    }
}
