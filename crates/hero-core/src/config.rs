use crate::color::Rgb;
use crate::constants::*;
use crate::error::ConfigError;
use crate::links::LinkStrategy;
use crate::phase::PhaseDurations;
use rand::Rng;

/// Ordered colors with one designated neutral entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    neutral_index: usize,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>, neutral_index: usize) -> Result<Self, ConfigError> {
        if neutral_index >= colors.len() {
            return Err(ConfigError::NeutralIndexOutOfRange {
                index: neutral_index,
                len: colors.len(),
            });
        }
        if colors.len() < 2 {
            return Err(ConfigError::NoAccentColors);
        }
        let neutral = colors[neutral_index];
        if let Some((index, _)) = colors
            .iter()
            .enumerate()
            .find(|(i, c)| *i != neutral_index && **c == neutral)
        {
            return Err(ConfigError::AccentMatchesNeutral { index });
        }
        Ok(Self {
            colors,
            neutral_index,
        })
    }

    pub fn neutral(&self) -> Rgb {
        self.colors[self.neutral_index]
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Uniform pick among the non-neutral entries.
    pub fn accent<R: Rng>(&self, rng: &mut R) -> Rgb {
        let pick = rng.gen_range(0..self.colors.len() - 1);
        let index = if pick >= self.neutral_index {
            pick + 1
        } else {
            pick
        };
        self.colors[index]
    }
}

/// Connection distance per phase. Float has no threshold: nothing links while floating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub connect: f32,
    pub unify: f32,
    pub idle: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            connect: CONNECT_THRESHOLD,
            unify: UNIFY_THRESHOLD,
            idle: IDLE_THRESHOLD,
        }
    }
}

/// How reveal notifications are triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPolicy {
    /// Reveal every target when the sequencer enters Idle.
    Phase,
    /// Reveal each target after a fixed delay from engine start.
    Timer { primary_ms: u32, secondary_ms: u32 },
}

impl Default for RevealPolicy {
    fn default() -> Self {
        RevealPolicy::Timer {
            primary_ms: PRIMARY_REVEAL_DELAY_MS,
            secondary_ms: SECONDARY_REVEAL_DELAY_MS,
        }
    }
}

/// Startup configuration. Fixed once the engine starts.
#[derive(Clone, Debug)]
pub struct HeroConfig {
    pub particle_count: usize,
    pub speed: f32,
    pub palette_hex: Vec<String>,
    pub neutral_index: usize,
    pub durations: PhaseDurations,
    pub thresholds: Thresholds,
    pub ramp_frames: u32,
    pub link_base_alpha: f32,
    pub link_idle_alpha: f32,
    pub unify_snap_progress: f32,
    pub link_strategy: LinkStrategy,
    pub reveal: RevealPolicy,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            speed: PARTICLE_SPEED,
            palette_hex: PALETTE_HEX.iter().map(|s| s.to_string()).collect(),
            neutral_index: NEUTRAL_INDEX,
            durations: PhaseDurations::default(),
            thresholds: Thresholds::default(),
            ramp_frames: LINK_RAMP_FRAMES,
            link_base_alpha: LINK_BASE_ALPHA,
            link_idle_alpha: LINK_IDLE_ALPHA,
            unify_snap_progress: UNIFY_SNAP_PROGRESS,
            link_strategy: LinkStrategy::default(),
            reveal: RevealPolicy::default(),
        }
    }
}

/// A configuration that passed [`HeroConfig::validate`], with its palette parsed.
#[derive(Clone, Debug)]
pub struct ValidConfig {
    pub particle_count: usize,
    pub speed: f32,
    pub palette: Palette,
    pub durations: PhaseDurations,
    pub thresholds: Thresholds,
    pub ramp_frames: u32,
    pub link_base_alpha: f32,
    pub link_idle_alpha: f32,
    pub unify_snap_progress: f32,
    pub link_strategy: LinkStrategy,
    pub reveal: RevealPolicy,
}

impl HeroConfig {
    pub fn validate(&self) -> Result<ValidConfig, ConfigError> {
        let colors = self
            .palette_hex
            .iter()
            .map(|hex| Rgb::from_hex(hex))
            .collect::<Result<Vec<_>, _>>()?;
        let palette = Palette::new(colors, self.neutral_index)?;

        if self.particle_count == 0 || self.particle_count > MAX_PARTICLES {
            return Err(ConfigError::ParticleCount {
                count: self.particle_count,
                max: MAX_PARTICLES,
            });
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        for (phase, value) in [
            ("connect", self.thresholds.connect),
            ("unify", self.thresholds.unify),
            ("idle", self.thresholds.idle),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { phase, value });
            }
        }
        for alpha in [self.link_base_alpha, self.link_idle_alpha] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ConfigError::InvalidLinkAlpha(alpha));
            }
        }
        if !(15..=20).contains(&self.particle_count) {
            log::debug!(
                "[config] particle count {} is outside the tuned 15..=20 range",
                self.particle_count
            );
        }

        Ok(ValidConfig {
            particle_count: self.particle_count,
            speed: self.speed,
            palette,
            durations: self.durations,
            thresholds: self.thresholds,
            ramp_frames: self.ramp_frames,
            link_base_alpha: self.link_base_alpha,
            link_idle_alpha: self.link_idle_alpha,
            unify_snap_progress: self.unify_snap_progress.clamp(0.0, 1.0),
            link_strategy: self.link_strategy,
            reveal: self.reveal,
        })
    }
}
