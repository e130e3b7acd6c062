use crate::color::interpolate;
use crate::config::{HeroConfig, ValidConfig};
use crate::error::EngineError;
use crate::links::{collect_links, draw_links, Link};
use crate::particle::{CanvasSize, Particle};
use crate::phase::{LinkPolicy, Phase, PhaseSequencer};
use crate::surface::Surface;
use rand::prelude::*;

/// Simulation state: the particle set, canvas bounds and phase sequencer.
///
/// Owned by a single [`crate::Scheduler`]. Resizing rebuilds the particle
/// list in one call, so a tick never sees a half-built population.
pub struct HeroEngine {
    config: ValidConfig,
    size: CanvasSize,
    particles: Vec<Particle>,
    sequencer: PhaseSequencer,
    links: Vec<Link>,
    rng: StdRng,
    frames: u64,
}

impl HeroEngine {
    pub fn new(config: &HeroConfig, width: f32, height: f32, seed: u64) -> Result<Self, EngineError> {
        let config = config.validate()?;
        let size = CanvasSize::new(width, height)
            .ok_or(EngineError::DegenerateSurface { width, height })?;
        let sequencer = PhaseSequencer::new(
            config.durations,
            LinkPolicy {
                thresholds: config.thresholds,
                ramp_frames: config.ramp_frames,
                base_alpha: config.link_base_alpha,
                idle_alpha: config.link_idle_alpha,
            },
        );
        let mut engine = Self {
            particles: Vec::with_capacity(config.particle_count),
            links: Vec::new(),
            config,
            size,
            sequencer,
            rng: StdRng::seed_from_u64(seed),
            frames: 0,
        };
        engine.spawn_particles();
        log::info!(
            "[engine] particles={} canvas={}x{}",
            engine.particles.len(),
            width,
            height
        );
        Ok(engine)
    }

    pub fn config(&self) -> &ValidConfig {
        &self.config
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    pub fn phase_timer(&self) -> u32 {
        self.sequencer.timer()
    }

    pub fn sequencer(&self) -> &PhaseSequencer {
        &self.sequencer
    }

    /// Links gathered by the most recent [`HeroEngine::step`].
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Frames simulated since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Adopt new canvas bounds and respawn every particle inside them.
    ///
    /// Zero, negative or non-finite sizes are ignored and the previous bounds
    /// kept. Phase and phase timer are untouched.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let Some(size) = CanvasSize::new(width, height) else {
            log::warn!("[engine] ignoring degenerate resize {}x{}", width, height);
            return false;
        };
        self.size = size;
        self.spawn_particles();
        log::info!(
            "[engine] resized to {}x{} during {:?}",
            width,
            height,
            self.phase()
        );
        true
    }

    /// Advance one frame without drawing. Returns the phase entered, if any.
    pub fn step(&mut self) -> Option<Phase> {
        self.frames += 1;
        for p in &mut self.particles {
            p.advance(self.size);
        }
        let entered = self.sequencer.advance();
        // colors and links both follow the phase the sequencer just settled on
        self.recolor();
        collect_links(
            &self.particles,
            self.sequencer.link_params(),
            self.config.link_strategy,
            &mut self.links,
        );
        entered
    }

    /// Clear the surface and draw particles then links.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.size.width, self.size.height);
        for p in &self.particles {
            p.draw(surface);
        }
        draw_links(surface, &self.particles, &self.links);
    }

    /// One full frame: simulate, then draw.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> Option<Phase> {
        let entered = self.step();
        self.render(surface);
        entered
    }

    /// Recompute display colors from unify progress. The core particle is skipped.
    pub fn recolor(&mut self) {
        let progress = self.sequencer.unify_progress();
        let neutral = self.config.palette.neutral();
        let snap = progress > self.config.unify_snap_progress;
        for p in self.particles.iter_mut().filter(|p| !p.is_core) {
            p.display_color = if snap {
                neutral
            } else {
                interpolate(p.base_color, neutral, progress)
            };
        }
    }

    fn spawn_particles(&mut self) {
        let Self {
            particles,
            rng,
            config,
            size,
            links,
            ..
        } = self;
        particles.clear();
        links.clear();
        for i in 0..config.particle_count {
            particles.push(Particle::spawn(
                rng,
                *size,
                &config.palette,
                config.speed,
                i == 0,
            ));
        }
        self.recolor();
    }
}
