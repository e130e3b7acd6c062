pub mod color;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod links;
pub mod particle;
pub mod phase;
pub mod reveal;
pub mod scheduler;
pub mod surface;

pub use color::{interpolate, Rgb};
pub use config::{HeroConfig, Palette, RevealPolicy, Thresholds, ValidConfig};
pub use engine::HeroEngine;
pub use error::{ConfigError, EngineError};
pub use links::{collect_links, draw_links, link_opacity, Link, LinkStrategy};
pub use particle::{CanvasSize, Particle};
pub use phase::{next_phase, LinkParams, LinkPolicy, Phase, PhaseDurations, PhaseSequencer};
pub use reveal::{RevealEmitter, RevealTarget};
pub use scheduler::{LoopState, Scheduler};
pub use surface::{FrameHost, Surface};
