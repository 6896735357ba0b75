use raylib::prelude::*;

use crate::constants::*;

/// The visual panel the active step's renderer draws into. Created once at
/// startup and kept for the life of the session; only its contents change.
/// Positions inside it are normalized to 0..1 on both axes.
pub struct Surface {
    bounds: Rectangle,
}

impl Surface {
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            self.bounds.x + self.bounds.width * 0.5,
            self.bounds.y + self.bounds.height * 0.5,
        )
    }

    /// Normalized point to absolute screen coordinates.
    pub fn point(&self, norm: Vector2) -> Vector2 {
        Vector2::new(
            self.bounds.x + norm.x * self.bounds.width,
            self.bounds.y + norm.y * self.bounds.height,
        )
    }

    pub fn is_compact(&self) -> bool {
        self.bounds.width < COMPACT_WIDTH
    }

    /// Keep-out margin for scattered layouts, tighter on small panels.
    pub fn scatter_margin(&self) -> f32 {
        if self.is_compact() { 0.10 } else { 0.16 }
    }
}
