// DOM contract between the page markup and the hero front-end.

// Element lookup
pub const CONTAINER_ID: &str = "hero-container";
pub const CANVAS_ID: &str = "hero-canvas";
pub const PRIMARY_LABEL_SELECTOR: &str = ".hero-brand-name";
pub const SECONDARY_LABEL_SELECTOR: &str = ".hero-tagline";

// Class added to a label once it is revealed
pub const VISIBLE_CLASS: &str = "visible";

// Container data attributes selecting the trigger variant
pub const REVEAL_ATTR: &str = "data-hero-reveal"; // "phase" | "timer" (default)
pub const GATED_ATTR: &str = "data-hero-gated"; // present (not "false") = pause while off-screen

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Fraction of the container that must be on screen to count as visible
pub const VISIBILITY_THRESHOLD: f64 = 0.0;
