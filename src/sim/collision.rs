//! Collision detection for falling objects against the basket
//!
//! Plain axis-aligned boxes in screen space (y grows downward). The hit-box is
//! widened by a per-tier tolerance so coarse touch input on small screens still
//! catches things.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }

    /// Rectangle from its top-left corner and size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Viewport width bucket controlling object size and hit tolerances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceTier {
    /// Phones (< 480px)
    Small,
    /// Tablets / narrow windows (< 768px)
    Medium,
    Large,
}

impl DeviceTier {
    pub fn from_viewport_width(width: f32) -> Self {
        if width < 480.0 {
            DeviceTier::Small
        } else if width < 768.0 {
            DeviceTier::Medium
        } else {
            DeviceTier::Large
        }
    }

    /// Horizontal hit-box widening (px)
    pub fn horizontal_tolerance(&self) -> f32 {
        match self {
            DeviceTier::Small => 25.0,
            DeviceTier::Medium => 20.0,
            DeviceTier::Large => 10.0,
        }
    }

    /// Vertical hit-box widening (px)
    pub fn vertical_tolerance(&self) -> f32 {
        match self {
            DeviceTier::Small => 35.0,
            DeviceTier::Medium => 25.0,
            DeviceTier::Large => 15.0,
        }
    }

    /// Falling object edge length (px)
    pub fn object_size(&self) -> f32 {
        match self {
            DeviceTier::Small => 35.0,
            DeviceTier::Medium => 40.0,
            DeviceTier::Large => 50.0,
        }
    }

    /// Distance above the basket's bottom edge past which an object counts as missed.
    /// Narrow screens already get a taller vertical tolerance, so the buffer shrinks.
    pub fn miss_buffer(&self) -> f32 {
        match self {
            DeviceTier::Small | DeviceTier::Medium => 10.0,
            DeviceTier::Large => 100.0,
        }
    }
}

/// Check whether two rectangles overlap once widened by the tier tolerance.
///
/// Touching edges count as overlap.
pub fn is_colliding(a: &Rect, b: &Rect, tier: DeviceTier) -> bool {
    let h = tier.horizontal_tolerance();
    let v = tier.vertical_tolerance();

    !(a.right() < b.left() - h
        || a.left() > b.right() + h
        || a.bottom() < b.top() - v
        || a.top() > b.bottom() + v)
}
