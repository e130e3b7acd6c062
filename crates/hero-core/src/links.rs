//! Proximity lines between particles.
//!
//! Particle counts stay small, so this is a plain all-pairs distance pass
//! with no spatial index.

use crate::constants::LINK_LINE_WIDTH;
use crate::particle::Particle;
use crate::phase::LinkParams;
use crate::surface::Surface;

/// Which pairs are candidates for a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkStrategy {
    /// Every unordered pair.
    #[default]
    Proximity,
    /// Only consecutive particles, forming an open path.
    Path,
}

/// One line to draw, from `a` to `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Undampened line opacity `1 - distance / threshold`, or `None` when the
/// pair is out of range. A non-positive threshold never links.
#[inline]
pub fn link_opacity(distance: f32, threshold: f32) -> Option<f32> {
    if !(threshold > 0.0) || !(distance < threshold) {
        return None;
    }
    Some(1.0 - distance.max(0.0) / threshold)
}

/// Fill `out` with the links for this frame. `out` is cleared first.
pub fn collect_links(
    particles: &[Particle],
    params: LinkParams,
    strategy: LinkStrategy,
    out: &mut Vec<Link>,
) {
    out.clear();
    if !params.is_active() {
        return;
    }
    let mut consider = |a: usize, b: usize| {
        let d = particles[a].position.distance(particles[b].position);
        if let Some(opacity) = link_opacity(d, params.threshold) {
            out.push(Link {
                a,
                b,
                alpha: opacity * params.alpha_scale,
            });
        }
    };
    match strategy {
        LinkStrategy::Proximity => {
            for a in 0..particles.len() {
                for b in (a + 1)..particles.len() {
                    consider(a, b);
                }
            }
        }
        LinkStrategy::Path => {
            for a in 1..particles.len() {
                consider(a - 1, a);
            }
        }
    }
}

/// Stroke each link in the color of its lower-index particle.
pub fn draw_links(surface: &mut dyn Surface, particles: &[Particle], links: &[Link]) {
    if links.is_empty() {
        return;
    }
    surface.set_line_width(LINK_LINE_WIDTH);
    for link in links {
        let (from, to) = (&particles[link.a], &particles[link.b]);
        surface.set_stroke_color(from.display_color);
        surface.set_global_alpha(link.alpha);
        surface.stroke_line(from.position, to.position);
    }
    surface.set_global_alpha(1.0);
}
