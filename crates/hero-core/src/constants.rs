// Default tuning for the hero animation. `HeroConfig::default()` is built
// from these values; hosts may override any field before validation.

// Population and motion
pub const PARTICLE_COUNT: usize = 15;
pub const MAX_PARTICLES: usize = 64; // keeps the all-pairs pass cheap
pub const PARTICLE_SPEED: f32 = 0.3; // per-axis velocity spans [-speed/2, speed/2]

// Sizes (canvas pixels)
pub const CORE_RADIUS: f32 = 3.0;
pub const ACCENT_RADIUS: f32 = 2.0;
pub const LINK_LINE_WIDTH: f32 = 0.5;

// Palette: first entry is the neutral color the scene unifies into
pub const PALETTE_HEX: &[&str] = &[
    "#ffffff", // neutral (core particle)
    "#ff69b4", // pink
    "#3b82f6", // blue
    "#06b6d4", // cyan
    "#8b5cf6", // violet
];
pub const NEUTRAL_INDEX: usize = 0;

// Phase durations (frames, ~60fps host)
pub const FLOAT_FRAMES: u32 = 120;
pub const CONNECT_FRAMES: u32 = 300;
pub const UNIFY_FRAMES: u32 = 180;

// Connection thresholds (canvas pixels)
pub const CONNECT_THRESHOLD: f32 = 150.0;
pub const UNIFY_THRESHOLD: f32 = 110.0;
pub const IDLE_THRESHOLD: f32 = 90.0;

// Link opacity shaping
pub const LINK_RAMP_FRAMES: u32 = 60; // fade-in at the start of Connect
pub const LINK_BASE_ALPHA: f32 = 0.5;
pub const LINK_IDLE_ALPHA: f32 = 0.15;

// Unify progress above which colors snap to neutral
pub const UNIFY_SNAP_PROGRESS: f32 = 0.9;

// Timer-triggered reveal delays measured from engine start
pub const PRIMARY_REVEAL_DELAY_MS: u32 = 500;
pub const SECONDARY_REVEAL_DELAY_MS: u32 = 1500;
