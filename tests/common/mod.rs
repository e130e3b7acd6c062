// Test doubles for the engine's host seams.

#![allow(dead_code)]
use glam::Vec2;
use hero_core::{FrameHost, HeroConfig, Rgb, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(f32, f32),
    Fill(Rgb),
    Stroke(Rgb),
    LineWidth(f32),
    Alpha(f32),
    Circle(Vec2, f32),
    Line(Vec2, Vec2),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn lines(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line(..)))
            .count()
    }

    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle(..)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(DrawOp::Clear(width, height));
    }
    fn set_fill_color(&mut self, color: Rgb) {
        self.ops.push(DrawOp::Fill(color));
    }
    fn set_stroke_color(&mut self, color: Rgb) {
        self.ops.push(DrawOp::Stroke(color));
    }
    fn set_line_width(&mut self, width: f32) {
        self.ops.push(DrawOp::LineWidth(width));
    }
    fn set_global_alpha(&mut self, alpha: f32) {
        self.ops.push(DrawOp::Alpha(alpha));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ops.push(DrawOp::Circle(center, radius));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.ops.push(DrawOp::Line(from, to));
    }
}

/// Counts frame requests and cancellations instead of scheduling anything.
#[derive(Default, Debug)]
pub struct CountingHost {
    pub requested: usize,
    pub cancelled: usize,
}

impl FrameHost for CountingHost {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
    fn cancel_frame(&mut self) {
        self.cancelled += 1;
    }
}

/// 20 particles with the default 120/300/180 phase layout.
pub fn scenario_config() -> HeroConfig {
    HeroConfig {
        particle_count: 20,
        ..HeroConfig::default()
    }
}
