// Host-side tests for presets, attribute parsing and validation.

use banner_core::{
    AmbientConfig, BoundsMode, ConfigError, FxConfig, GlowColor, Layout, Preset, Rect, Scene,
    TooltipCopy, TouchMode, Viewport,
};
use glam::Vec2;

#[test]
fn presets_parse_case_insensitively() {
    assert_eq!("vanilla".parse::<Preset>(), Ok(Preset::Vanilla));
    assert_eq!(" Classic ".parse::<Preset>(), Ok(Preset::Classic));
    assert_eq!("HEROBANNER".parse::<Preset>(), Ok(Preset::Herobanner));
    assert_eq!("".parse::<Preset>(), Ok(Preset::Vanilla));
    assert_eq!(
        "neon".parse::<Preset>(),
        Err(ConfigError::UnknownPreset("neon".into()))
    );
}

#[test]
fn bounds_modes_parse() {
    assert_eq!("vertical".parse::<BoundsMode>(), Ok(BoundsMode::Vertical));
    assert_eq!("both".parse::<BoundsMode>(), Ok(BoundsMode::Both));
    assert_eq!("XY".parse::<BoundsMode>(), Ok(BoundsMode::Both));
    assert!("diagonal".parse::<BoundsMode>().is_err());
    assert_eq!(BoundsMode::default(), BoundsMode::Vertical);
}

#[test]
fn every_preset_validates() {
    for preset in [Preset::Vanilla, Preset::Classic, Preset::Herobanner] {
        assert_eq!(FxConfig::preset(preset).validate(), Ok(()), "{preset:?}");
    }
}

#[test]
fn vanilla_is_the_default() {
    assert_eq!(FxConfig::preset(Preset::Vanilla), FxConfig::default());
    let cfg = FxConfig::default();
    assert_eq!(cfg.drag.smoothing, 0.15);
    assert_eq!(cfg.bounce.damping, 0.6);
    assert_eq!(cfg.ambient, AmbientConfig::default());
    assert!(!cfg.palette.contains(&GlowColor::Yellow));
}

#[test]
fn classic_has_no_sky_and_no_kick() {
    let cfg = FxConfig::preset(Preset::Classic);
    assert_eq!(cfg.ambient.glow_count, 0);
    assert_eq!(cfg.ambient.star_count, 0);
    assert!(cfg.ambient.shooting_star_interval.is_none());
    assert_eq!(cfg.bounce.rebound_kick, 0.0);
    assert_eq!(cfg.bounce.drop_kick, 0.0);
    assert!(cfg.palette.contains(&GlowColor::Yellow));
    assert_eq!(cfg.trail, cfg.idle);
}

#[test]
fn herobanner_uses_both_bounds() {
    let cfg = FxConfig::preset(Preset::Herobanner);
    assert_eq!(cfg.drag.bounds, BoundsMode::Both);
    assert!(cfg.drag.double_tap_window_ms > FxConfig::default().drag.double_tap_window_ms);
    assert_eq!(cfg.drag.double_tap_window_ms, 400.0);
    assert_eq!(cfg.drag.touch, TouchMode::DoubleTapOnly);
}

#[test]
fn herobanner_has_no_sky_and_emits_every_frame() {
    let cfg = FxConfig::preset(Preset::Herobanner);
    assert_eq!(cfg.ambient.glow_count, 0);
    assert_eq!(cfg.ambient.star_count, 0);
    assert!(cfg.ambient.shooting_star_interval.is_none());

    assert_eq!(cfg.trail.decay, 0.02);
    assert_eq!(cfg.trail.speed, 2.0);
    assert_eq!(cfg.trail.radius_min, 1.0);
    assert_eq!(cfg.trail.radius_span, 4.0);
    assert_eq!(cfg.idle, cfg.trail);
    assert_eq!(cfg.drag.idle_emit_chance, 1.0);

    assert_eq!(cfg.burst.radius_min, 1.0);
    assert_eq!(cfg.burst.radius_span, 10.0);
    assert_eq!(cfg.burst.decay, cfg.trail.decay);
}

#[test]
fn tooltip_copy_follows_the_preset() {
    assert_eq!(
        FxConfig::preset(Preset::Herobanner).tooltip,
        Some(TooltipCopy {
            touch: "Double tap anywhere",
            pointer: "Hover me",
        })
    );
    assert_eq!(FxConfig::default().tooltip, Some(TooltipCopy::default()));
    assert_eq!(FxConfig::preset(Preset::Classic).tooltip, None);
    assert_eq!(FxConfig::default().drag.touch, TouchMode::Drag);
}

#[test]
fn tooltip_copy_picks_text_by_device() {
    let copy = TooltipCopy::default();
    assert_eq!(copy.for_device(true), "Hi! Drag me around. I'm a web-fragment");
    assert_eq!(copy.for_device(false), "Hi! Hover me! I'm a web-fragment");
}

#[test]
fn empty_palette_is_rejected() {
    let mut cfg = FxConfig::default();
    cfg.palette.clear();
    assert_eq!(cfg.validate(), Err(ConfigError::EmptyPalette));
}

#[test]
fn out_of_range_values_name_the_field() {
    let mut cfg = FxConfig::default();
    cfg.bounce.damping = 1.5;
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { name: "bounce.damping", .. }));
    assert!(err.to_string().contains("bounce.damping"));

    let mut cfg = FxConfig::default();
    cfg.trail.decay = 0.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::OutOfRange { name: "trail.decay", .. })
    ));

    let mut cfg = FxConfig::default();
    cfg.drag.smoothing = f32::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn inverted_star_range_is_rejected() {
    let mut cfg = FxConfig::default();
    cfg.ambient.star_alpha_min = 0.6;
    cfg.ambient.star_alpha_max = 0.4;
    assert!(cfg.validate().is_err());
}

#[test]
fn bad_twinkle_speed_is_rejected_before_the_sky_is_built() {
    let layout = Layout {
        area: Rect::new(0.0, 100.0, 1000.0, 500.0),
        emblem_size: Vec2::new(80.0, 80.0),
    };
    for value in [-0.01, f32::NAN, 2.0] {
        let mut cfg = FxConfig::default();
        cfg.ambient.star_twinkle_max = value;
        assert!(
            matches!(
                cfg.validate(),
                Err(ConfigError::OutOfRange { name: "ambient.star_twinkle_max", .. })
            ),
            "{value}"
        );
        assert!(Scene::new(cfg, Viewport::new(1000.0, 800.0), &layout, 1).is_err());
    }
}

#[test]
fn negative_emission_values_are_rejected() {
    let mut cfg = FxConfig::default();
    cfg.trail.speed = -1.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::OutOfRange { name: "trail.speed", .. })
    ));

    let mut cfg = FxConfig::default();
    cfg.burst.area = -200.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::OutOfRange { name: "burst.area", .. })
    ));

    let mut cfg = FxConfig::default();
    cfg.idle.radius_span = -0.5;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::OutOfRange { name: "idle.radius_span", .. })
    ));

    let mut cfg = FxConfig::default();
    cfg.trail.area = f32::INFINITY;
    assert!(cfg.validate().is_err());
}
