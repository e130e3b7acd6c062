// Host-side tests for tuning constants and their relationships.
// The front-end crate is wasm-only, so its pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use hero_core::constants::*;
use hero_core::Rgb;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_tuning_is_within_bounds() {
    assert!((15..=20).contains(&PARTICLE_COUNT));
    assert!(PARTICLE_COUNT <= MAX_PARTICLES);
    assert!(PARTICLE_SPEED > 0.0);
    assert!((2.0..=3.0).contains(&CORE_RADIUS));
    assert!((2.0..=3.0).contains(&ACCENT_RADIUS));
    assert!(LINK_LINE_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_narrow_after_connect() {
    assert!(CONNECT_THRESHOLD > UNIFY_THRESHOLD);
    assert!(UNIFY_THRESHOLD > IDLE_THRESHOLD);
    assert!(IDLE_THRESHOLD > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn link_alphas_fade_in_idle() {
    assert!(LINK_BASE_ALPHA > 0.0 && LINK_BASE_ALPHA <= 1.0);
    assert!(LINK_IDLE_ALPHA > 0.0 && LINK_IDLE_ALPHA < LINK_BASE_ALPHA);
    assert!(LINK_RAMP_FRAMES < CONNECT_FRAMES);
    assert!(UNIFY_SNAP_PROGRESS > 0.5 && UNIFY_SNAP_PROGRESS < 1.0);
}

#[test]
fn palette_parses_and_neutral_is_white() {
    let colors: Vec<Rgb> = PALETTE_HEX
        .iter()
        .map(|hex| Rgb::from_hex(hex).unwrap())
        .collect();
    assert_eq!(colors[NEUTRAL_INDEX], Rgb::WHITE);
    assert!(colors.len() > 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_delays_are_ordered() {
    assert!(PRIMARY_REVEAL_DELAY_MS < SECONDARY_REVEAL_DELAY_MS);
}

#[test]
fn dom_contract_uses_selectors_and_ids() {
    assert!(!CONTAINER_ID.starts_with('#'));
    assert!(!CANVAS_ID.starts_with('#'));
    assert!(PRIMARY_LABEL_SELECTOR.starts_with('.'));
    assert!(SECONDARY_LABEL_SELECTOR.starts_with('.'));
    assert!(REVEAL_ATTR.starts_with("data-"));
    assert!(GATED_ATTR.starts_with("data-"));
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
}
