use crate::color::Rgb;
use crate::config::Palette;
use crate::constants::{ACCENT_RADIUS, CORE_RADIUS};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// Canvas dimensions in pixels. Always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    /// `None` for zero, negative or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        (ok(width) && ok(height)).then_some(Self { width, height })
    }

    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// A single drifting dot.
///
/// Fields:
/// - `base_color`: palette color assigned at spawn
/// - `display_color`: what is drawn; follows the unify phase toward neutral
/// - `is_core`: the first particle, pinned to the neutral color for its lifetime
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub base_color: Rgb,
    pub display_color: Rgb,
    pub is_core: bool,
}

impl Particle {
    pub fn spawn<R: Rng>(
        rng: &mut R,
        size: CanvasSize,
        palette: &Palette,
        speed: f32,
        is_core: bool,
    ) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * size.width,
            rng.gen::<f32>() * size.height,
        );
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * speed,
            (rng.gen::<f32>() - 0.5) * speed,
        );
        let (radius, base_color) = if is_core {
            (CORE_RADIUS, palette.neutral())
        } else {
            (ACCENT_RADIUS, palette.accent(rng))
        };
        Self {
            position,
            velocity,
            radius,
            base_color,
            display_color: base_color,
            is_core,
        }
    }

    /// Move one frame, then flip each velocity component whose axis left `[0, bound]`.
    ///
    /// No positional correction: an overshoot lasts at most one frame.
    #[inline]
    pub fn advance(&mut self, size: CanvasSize) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > size.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > size.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill_color(self.display_color);
        surface.fill_circle(self.position, self.radius);
    }
}
