//! Drawing and frame-scheduling seams implemented by the host.
//!
//! The engine never talks to a platform API directly. The web front-end
//! implements [`Surface`] over a 2D canvas context and [`FrameHost`] over
//! `requestAnimationFrame`; tests implement both with recorders.

use crate::color::Rgb;
use glam::Vec2;

/// Minimal immediate-mode 2D drawing target.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn set_fill_color(&mut self, color: Rgb);
    fn set_stroke_color(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f32);
    fn set_global_alpha(&mut self, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}

/// Source of per-paint-frame callbacks.
///
/// `request_frame` asks for exactly one future callback into
/// [`crate::Scheduler::on_frame`]; `cancel_frame` drops a pending request.
pub trait FrameHost {
    fn request_frame(&mut self);
    fn cancel_frame(&mut self);
}
