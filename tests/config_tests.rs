// Host-side tests for startup configuration validation.

use hero_core::{ConfigError, HeroConfig, Palette, Rgb, RevealPolicy, Thresholds};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn default_config_is_valid() {
    let valid = HeroConfig::default().validate().unwrap();
    assert_eq!(valid.palette.neutral(), Rgb::WHITE);
    assert_eq!(valid.palette.colors().len(), 5);
    assert_eq!(valid.particle_count, 15);
    assert_eq!(
        valid.reveal,
        RevealPolicy::Timer {
            primary_ms: 500,
            secondary_ms: 1500
        }
    );
}

#[test]
fn malformed_palette_entry_is_invalid_color_format() {
    let config = HeroConfig {
        palette_hex: vec!["#ffffff".into(), "#3b82f".into()],
        ..HeroConfig::default()
    };
    assert_eq!(
        config.validate().unwrap_err(),
        ConfigError::InvalidColorFormat {
            value: "#3b82f".into()
        }
    );
}

#[test]
fn neutral_index_must_exist() {
    let config = HeroConfig {
        neutral_index: 9,
        ..HeroConfig::default()
    };
    assert_eq!(
        config.validate().unwrap_err(),
        ConfigError::NeutralIndexOutOfRange { index: 9, len: 5 }
    );
}

#[test]
fn palette_needs_an_accent() {
    let config = HeroConfig {
        palette_hex: vec!["#ffffff".into()],
        ..HeroConfig::default()
    };
    assert_eq!(config.validate().unwrap_err(), ConfigError::NoAccentColors);
}

#[test]
fn neutral_color_cannot_double_as_accent() {
    let config = HeroConfig {
        palette_hex: vec!["#ffffff".into(), "#ff69b4".into(), "#FFFFFF".into()],
        ..HeroConfig::default()
    };
    assert_eq!(
        config.validate().unwrap_err(),
        ConfigError::AccentMatchesNeutral { index: 2 }
    );
    assert_eq!(
        Palette::new(vec![Rgb::new(9, 9, 9), Rgb::WHITE, Rgb::new(9, 9, 9)], 2).unwrap_err(),
        ConfigError::AccentMatchesNeutral { index: 0 }
    );
}

#[test]
fn numeric_fields_are_range_checked() {
    let zero = HeroConfig {
        particle_count: 0,
        ..HeroConfig::default()
    };
    assert!(matches!(zero.validate(), Err(ConfigError::ParticleCount { .. })));

    let crowd = HeroConfig {
        particle_count: 10_000,
        ..HeroConfig::default()
    };
    assert!(matches!(crowd.validate(), Err(ConfigError::ParticleCount { .. })));

    let reverse = HeroConfig {
        speed: -1.0,
        ..HeroConfig::default()
    };
    assert_eq!(reverse.validate().unwrap_err(), ConfigError::InvalidSpeed(-1.0));

    let negative_threshold = HeroConfig {
        thresholds: Thresholds {
            idle: -5.0,
            ..Thresholds::default()
        },
        ..HeroConfig::default()
    };
    assert!(matches!(
        negative_threshold.validate(),
        Err(ConfigError::InvalidThreshold { phase: "idle", .. })
    ));

    let bright = HeroConfig {
        link_base_alpha: 1.5,
        ..HeroConfig::default()
    };
    assert_eq!(bright.validate().unwrap_err(), ConfigError::InvalidLinkAlpha(1.5));
}

#[test]
fn zero_threshold_is_allowed() {
    let config = HeroConfig {
        thresholds: Thresholds {
            connect: 0.0,
            unify: 0.0,
            idle: 0.0,
        },
        ..HeroConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn accent_never_picks_neutral() {
    let colors = vec![
        Rgb::new(1, 0, 0),
        Rgb::new(2, 0, 0),
        Rgb::WHITE,
        Rgb::new(3, 0, 0),
    ];
    let palette = Palette::new(colors, 2).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1_000 {
        let c = palette.accent(&mut rng);
        assert_ne!(c, Rgb::WHITE);
        seen.insert(c);
    }
    assert_eq!(seen.len(), 3, "every accent is reachable");
}

#[test]
fn config_errors_render_readable_messages() {
    let err = ConfigError::InvalidColorFormat {
        value: "#zzz".into(),
    };
    assert!(err.to_string().contains("#zzz"));
}
