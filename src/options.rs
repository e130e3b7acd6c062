use hero_core::{HeroConfig, RevealEmitter, RevealPolicy, RevealTarget};

/// Trigger variant chosen by the page through container data attributes,
/// plus the reduced-motion preference read once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostOptions {
    pub visibility_gated: bool,
    pub phase_reveal: bool,
    pub reduced_motion: bool,
}

impl HostOptions {
    /// Interpret the raw attribute values. Unknown reveal modes fall back to timers.
    pub fn from_attributes(reveal: Option<&str>, gated: Option<&str>, reduced_motion: bool) -> Self {
        let phase_reveal = matches!(reveal.map(str::trim), Some(m) if m.eq_ignore_ascii_case("phase"));
        let visibility_gated = match gated.map(str::trim) {
            None => false,
            Some(v) => !v.eq_ignore_ascii_case("false"),
        };
        Self {
            visibility_gated,
            phase_reveal,
            reduced_motion,
        }
    }

    /// Whether an engine should be built at all.
    pub fn animates(&self) -> bool {
        !self.reduced_motion
    }

    pub fn hero_config(&self) -> HeroConfig {
        let mut config = HeroConfig::default();
        if self.phase_reveal {
            config.reveal = RevealPolicy::Phase;
        }
        config
    }
}

/// Every target, in reveal order, for when no animation will run.
pub fn immediate_reveals() -> Vec<RevealTarget> {
    let mut out = Vec::new();
    RevealEmitter::new().fire_all(&mut out);
    out
}
