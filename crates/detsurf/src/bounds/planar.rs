//! Bounds of planar surfaces.

use std::f64::consts::PI;

use super::{BoundsKind, ConcreteBounds};

/// Axis-aligned rectangle in local (x, y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl RectangleBounds {
    /// Centered rectangle from half lengths.
    pub fn new(half_x: f64, half_y: f64) -> Self {
        Self {
            min_x: -half_x,
            min_y: -half_y,
            max_x: half_x,
            max_y: half_y,
        }
    }

    pub fn half_length_x(&self) -> f64 {
        0.5 * (self.max_x - self.min_x)
    }

    pub fn half_length_y(&self) -> f64 {
        0.5 * (self.max_y - self.min_y)
    }
}

impl ConcreteBounds for RectangleBounds {
    const KIND: BoundsKind = BoundsKind::Rectangle;
    const SIZE: usize = 4;

    fn values(&self) -> Vec<f64> {
        vec![self.min_x, self.min_y, self.max_x, self.max_y]
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let [min_x, min_y, max_x, max_y] = <[f64; 4]>::try_from(values).ok()?;
        Some(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }
}

/// Symmetric trapezoid, parallel sides along local x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidBounds {
    /// Half length in x at negative y.
    pub half_x_neg_y: f64,
    /// Half length in x at positive y.
    pub half_x_pos_y: f64,
    pub half_y: f64,
    pub rotation_angle: f64,
}

impl TrapezoidBounds {
    pub fn new(half_x_neg_y: f64, half_x_pos_y: f64, half_y: f64) -> Self {
        Self {
            half_x_neg_y,
            half_x_pos_y,
            half_y,
            rotation_angle: 0.0,
        }
    }
}

impl ConcreteBounds for TrapezoidBounds {
    const KIND: BoundsKind = BoundsKind::Trapezoid;
    const SIZE: usize = 4;

    fn values(&self) -> Vec<f64> {
        vec![
            self.half_x_neg_y,
            self.half_x_pos_y,
            self.half_y,
            self.rotation_angle,
        ]
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let [half_x_neg_y, half_x_pos_y, half_y, rotation_angle] =
            <[f64; 4]>::try_from(values).ok()?;
        Some(Self {
            half_x_neg_y,
            half_x_pos_y,
            half_y,
            rotation_angle,
        })
    }
}

/// Elliptical ring (or sector of it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseBounds {
    pub inner_rx: f64,
    pub inner_ry: f64,
    pub outer_rx: f64,
    pub outer_ry: f64,
    pub half_phi_sector: f64,
    pub average_phi: f64,
}

impl EllipseBounds {
    /// Full ellipse ring without phi restriction.
    pub fn new(inner_rx: f64, inner_ry: f64, outer_rx: f64, outer_ry: f64) -> Self {
        Self {
            inner_rx,
            inner_ry,
            outer_rx,
            outer_ry,
            half_phi_sector: PI,
            average_phi: 0.0,
        }
    }
}

impl ConcreteBounds for EllipseBounds {
    const KIND: BoundsKind = BoundsKind::Ellipse;
    const SIZE: usize = 6;

    fn values(&self) -> Vec<f64> {
        vec![
            self.inner_rx,
            self.inner_ry,
            self.outer_rx,
            self.outer_ry,
            self.half_phi_sector,
            self.average_phi,
        ]
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let [inner_rx, inner_ry, outer_rx, outer_ry, half_phi_sector, average_phi] =
            <[f64; 6]>::try_from(values).ok()?;
        Some(Self {
            inner_rx,
            inner_ry,
            outer_rx,
            outer_ry,
            half_phi_sector,
            average_phi,
        })
    }
}
