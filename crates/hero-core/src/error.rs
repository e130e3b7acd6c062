use thiserror::Error;

/// Problems detected while validating a [`crate::HeroConfig`].
///
/// These are programmer errors in the startup configuration. They are
/// reported once, before any frame runs, and never mid-animation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid color format: {value:?} (expected #rrggbb with 8-bit channels)")]
    InvalidColorFormat { value: String },
    #[error("neutral index {index} is outside a palette of {len} colors")]
    NeutralIndexOutOfRange { index: usize, len: usize },
    #[error("palette needs at least one color besides the neutral entry")]
    NoAccentColors,
    #[error("palette entry {index} repeats the neutral color")]
    AccentMatchesNeutral { index: usize },
    #[error("particle count {count} is outside 1..={max}")]
    ParticleCount { count: usize, max: usize },
    #[error("particle speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
    #[error("connection threshold for {phase} must be finite and non-negative, got {value}")]
    InvalidThreshold { phase: &'static str, value: f32 },
    #[error("link alpha {0} is outside [0, 1]")]
    InvalidLinkAlpha(f32),
}

/// Reasons the engine declines to start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("drawing surface has degenerate size {width}x{height}")]
    DegenerateSurface { width: f32, height: f32 },
}
