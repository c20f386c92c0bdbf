// Host-side tests for the fall/rebound physics, both standalone and driven
// through a scene the way the frame loop does it.

use banner_core::{
    Approach, AxisBounce, Bounce, BounceConfig, BounceStep, BoundsMode, FallKind, FxConfig,
    Layout, Rect, Scene, Viewport,
};
use glam::Vec2;
use std::time::Duration;

const DT: Duration = Duration::from_millis(16);

fn layout(area: Rect) -> Layout {
    Layout {
        area,
        emblem_size: Vec2::new(80.0, 80.0),
    }
}

fn make_scene(bounds: BoundsMode, area: Rect) -> (Scene, Layout) {
    let mut config = FxConfig::default();
    config.drag.bounds = bounds;
    let layout = layout(area);
    let scene = Scene::new(config, Viewport::new(1000.0, 800.0), &layout, 42).unwrap();
    (scene, layout)
}

/// Grab the emblem with the pointer at `grab` and follow it for a few frames.
fn drag_from(scene: &mut Scene, layout: &Layout, grab: Vec2) {
    scene.pointer_move(grab, layout);
    scene.pointer_enter_emblem();
    for _ in 0..3 {
        scene.tick(DT);
    }
    assert!(scene.emblem().is_dragging());
}

fn run_until_landed(scene: &mut Scene) -> u32 {
    let mut frames = 0;
    while scene.emblem().is_falling() {
        scene.tick(DT);
        frames += 1;
        assert!(frames < 5_000, "fall never ended");
    }
    frames
}

#[test]
fn release_below_area_rebounds_to_top_clearance() {
    // Area spans y 100..600, emblem is 80 high
    let (mut scene, layout) = make_scene(BoundsMode::Vertical, Rect::new(0.0, 100.0, 1000.0, 500.0));
    drag_from(&mut scene, &layout, Vec2::new(500.0, 300.0));
    let x_before = scene.emblem().pos.x;

    scene.pointer_move(Vec2::new(500.0, 900.0), &layout);
    let bounce = scene.emblem().bounce().expect("falling after leaving the area");
    assert_eq!(bounce.kind(), FallKind::Rebound);
    assert_eq!(bounce.vertical().target, 190.0);
    assert_eq!(bounce.vertical().velocity, -18.0);
    assert_eq!(bounce.vertical().approach(), Approach::Decreasing);
    assert!(bounce.horizontal().is_none());

    run_until_landed(&mut scene);
    assert_eq!(scene.emblem().pos.y, 190.0);
    assert_eq!(scene.emblem().pos.x, x_before);
    assert!(!scene.emblem().is_dragging());
    assert!(scene.tooltip_visible());
}

#[test]
fn rebound_emits_one_burst_on_first_frame() {
    let (mut scene, layout) = make_scene(BoundsMode::Vertical, Rect::new(0.0, 100.0, 1000.0, 500.0));
    drag_from(&mut scene, &layout, Vec2::new(500.0, 300.0));
    scene.pointer_move(Vec2::new(500.0, 900.0), &layout);

    // Trail particles from the drag are far from fading out
    let before = scene.particles().len();
    scene.tick(DT);
    assert_eq!(scene.particles().len(), before + 15);
    scene.tick(DT);
    assert_eq!(scene.particles().len(), before + 15);
}

#[test]
fn release_above_area_drops_to_bottom_clearance() {
    let (mut scene, layout) = make_scene(BoundsMode::Vertical, Rect::new(0.0, 100.0, 1000.0, 500.0));
    drag_from(&mut scene, &layout, Vec2::new(500.0, 300.0));

    scene.pointer_move(Vec2::new(500.0, 50.0), &layout);
    let bounce = scene.emblem().bounce().unwrap();
    assert_eq!(bounce.kind(), FallKind::Drop);
    assert_eq!(bounce.vertical().target, 600.0 - 80.0 - 10.0);
    assert_eq!(bounce.vertical().velocity, 0.0);

    let before = scene.particles().len();
    scene.tick(DT);
    assert!(scene.particles().len() <= before, "drops never burst");

    run_until_landed(&mut scene);
    assert_eq!(scene.emblem().pos.y, 510.0);
}

#[test]
fn drop_kicks_exactly_once() {
    let cfg = BounceConfig::default();
    let mut axis = AxisBounce::new(150.0, 510.0, 0.0, cfg.drop_gravity, cfg.drop_kick, Approach::Increasing, &cfg);
    let mut kicks = 0;
    let mut was_kicked = false;
    for _ in 0..10_000 {
        let done = axis.step();
        if axis.has_kicked() && !was_kicked {
            kicks += 1;
            assert_eq!(axis.velocity, -cfg.drop_kick);
        }
        was_kicked = axis.has_kicked();
        if done {
            break;
        }
    }
    assert!(axis.is_settled());
    assert_eq!(kicks, 1);
    assert_eq!(axis.pos, 510.0);
    assert_eq!(axis.velocity, 0.0);
}

#[test]
fn zero_kick_settles_without_kicking() {
    let cfg = BounceConfig {
        drop_kick: 0.0,
        ..BounceConfig::default()
    };
    let mut axis = AxisBounce::new(150.0, 510.0, 0.0, cfg.drop_gravity, cfg.drop_kick, Approach::Increasing, &cfg);
    let mut steps = 0;
    while !axis.step() {
        steps += 1;
        assert!(steps < 10_000);
    }
    assert!(!axis.has_kicked());
    assert_eq!(axis.pos, 510.0);
}

#[test]
fn every_launch_speed_settles_on_target() {
    let cfg = BounceConfig::default();
    for speed in [0.0_f32, 0.5, 1.0, 5.0, 18.0, 60.0, 500.0] {
        for (start, target, approach, velocity) in [
            (500.0, 190.0, Approach::Decreasing, -speed),
            (120.0, 510.0, Approach::Increasing, speed),
        ] {
            let mut axis = AxisBounce::new(start, target, velocity, cfg.rebound_gravity, cfg.rebound_kick, approach, &cfg);
            let mut steps = 0u32;
            while !axis.step() {
                steps += 1;
                assert!(steps < 200_000, "speed {speed} {approach:?} never settled");
            }
            assert_eq!(axis.pos, target, "speed {speed} {approach:?}");
        }
    }
}

#[test]
fn already_past_target_snaps_on_first_step() {
    let cfg = BounceConfig::default();
    let mut axis = AxisBounce::new(520.0, 510.0, 0.0, cfg.drop_gravity, 0.0, Approach::Increasing, &cfg);
    assert!(axis.step());
    assert_eq!(axis.pos, 510.0);
}

#[test]
fn frame_cap_snaps_to_target() {
    let cfg = BounceConfig {
        max_frames: 5,
        ..BounceConfig::default()
    };
    let layout = layout(Rect::new(0.0, 100.0, 1000.0, 500.0));
    let mut bounce = Bounce::plan(
        Vec2::new(300.0, 400.0),
        Vec2::new(340.0, 900.0),
        &layout,
        BoundsMode::Vertical,
        &cfg,
    );
    for _ in 0..4 {
        assert_eq!(bounce.step(), BounceStep::Moving);
    }
    assert_eq!(bounce.step(), BounceStep::Settled);
    assert_eq!(bounce.position(), bounce.target());
    assert_eq!(bounce.frames(), 5);
}

#[test]
fn burst_is_taken_once_and_only_for_rebounds() {
    let cfg = BounceConfig::default();
    let layout = layout(Rect::new(0.0, 100.0, 1000.0, 500.0));
    let mut rebound = Bounce::plan(Vec2::new(0.0, 500.0), Vec2::new(40.0, 590.0), &layout, BoundsMode::Vertical, &cfg);
    assert!(rebound.take_burst());
    assert!(!rebound.take_burst());

    let mut drop = Bounce::plan(Vec2::new(0.0, 200.0), Vec2::new(40.0, 240.0), &layout, BoundsMode::Vertical, &cfg);
    assert!(!drop.take_burst());
}

#[test]
fn leaving_sideways_bounces_on_both_axes() {
    let area = Rect::new(100.0, 100.0, 800.0, 500.0);
    let (mut scene, layout) = make_scene(BoundsMode::Both, area);
    drag_from(&mut scene, &layout, Vec2::new(500.0, 300.0));

    scene.pointer_move(Vec2::new(950.0, 300.0), &layout);
    let bounce = scene.emblem().bounce().expect("right edge ends the drag");
    assert_eq!(bounce.kind(), FallKind::Drop);
    let x = bounce.horizontal().expect("horizontal axis");
    assert_eq!(x.approach(), Approach::Decreasing);
    assert_eq!(x.target, 190.0);
    assert_eq!(x.velocity, -18.0);

    run_until_landed(&mut scene);
    assert_eq!(scene.emblem().pos, Vec2::new(190.0, 510.0));
}

#[test]
fn leaving_left_bounces_towards_right_clearance() {
    let area = Rect::new(100.0, 100.0, 800.0, 500.0);
    let (mut scene, layout) = make_scene(BoundsMode::Both, area);
    drag_from(&mut scene, &layout, Vec2::new(500.0, 300.0));

    scene.pointer_move(Vec2::new(50.0, 300.0), &layout);
    let x = scene.emblem().bounce().unwrap().horizontal().unwrap().clone();
    assert_eq!(x.approach(), Approach::Increasing);
    assert_eq!(x.target, 900.0 - 80.0 - 90.0);

    run_until_landed(&mut scene);
    assert_eq!(scene.emblem().pos.x, 730.0);
}

#[test]
fn vertical_bounds_ignore_sideways_exit() {
    let area = Rect::new(100.0, 100.0, 800.0, 500.0);
    let (mut scene, layout) = make_scene(BoundsMode::Vertical, area);
    drag_from(&mut scene, &layout, Vec2::new(500.0, 300.0));

    scene.pointer_move(Vec2::new(950.0, 300.0), &layout);
    assert!(scene.emblem().is_dragging());
    assert!(scene.in_active_area());
}
