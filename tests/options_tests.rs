// Host-side tests for trigger-variant parsing.
// The front-end crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod options {
    include!("../src/options.rs");
}

use hero_core::{RevealPolicy, RevealTarget};
use options::{immediate_reveals, HostOptions};

#[test]
fn missing_attributes_mean_immediate_timer_reveals() {
    let opts = HostOptions::from_attributes(None, None, false);
    assert!(!opts.visibility_gated);
    assert!(!opts.phase_reveal);
    assert!(opts.animates());
    assert_eq!(opts.hero_config().reveal, RevealPolicy::default());
}

#[test]
fn phase_reveal_is_case_insensitive() {
    for raw in ["phase", "Phase", " PHASE "] {
        let opts = HostOptions::from_attributes(Some(raw), None, false);
        assert!(opts.phase_reveal, "{raw:?}");
        assert_eq!(opts.hero_config().reveal, RevealPolicy::Phase);
    }
    assert!(!HostOptions::from_attributes(Some("sometimes"), None, false).phase_reveal);
}

#[test]
fn gating_attribute_presence_enables_gating() {
    assert!(HostOptions::from_attributes(None, Some(""), false).visibility_gated);
    assert!(HostOptions::from_attributes(None, Some("true"), false).visibility_gated);
    assert!(!HostOptions::from_attributes(None, Some("false"), false).visibility_gated);
}

#[test]
fn reduced_motion_skips_the_engine_and_reveals_everything() {
    let opts = HostOptions::from_attributes(Some("phase"), Some(""), true);
    assert!(!opts.animates());
    assert_eq!(immediate_reveals(), RevealTarget::ALL.to_vec());
}
