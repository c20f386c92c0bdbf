// Host-side tests for particle emission and the fade/cull lifecycle.

use banner_core::{EmissionConfig, FxConfig, GlowColor, Particle, ParticleSystem};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn palette() -> Vec<GlowColor> {
    FxConfig::default().palette.to_vec()
}

#[test]
fn particle_fades_by_decay_and_is_removed_at_zero() {
    let mut system = ParticleSystem::new();
    system.push(Particle {
        pos: Vec2::ZERO,
        vel: Vec2::new(1.0, -2.0),
        radius: 2.0,
        color: GlowColor::Fuchsia,
        alpha: 1.0,
        decay: 0.25,
    });

    for expected in [0.75_f32, 0.5, 0.25] {
        system.step();
        assert_eq!(system.len(), 1);
        assert_eq!(system.as_slice()[0].alpha, expected);
    }
    let p = &system.as_slice()[0];
    assert_eq!(p.pos, Vec2::new(3.0, -6.0));

    // Reaches exactly zero: gone in the same step, never drawn at 0
    system.step();
    assert!(system.is_empty());
}

#[test]
fn no_particle_survives_a_step_at_non_positive_opacity() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut system = ParticleSystem::new();
    let cfg = EmissionConfig::trail();
    let colors = palette();
    for frame in 0..300 {
        if frame < 100 {
            system.emit(Vec2::new(200.0, 200.0), &cfg, &colors, &mut rng);
        }
        let before: Vec<f32> = system.iter().map(|p| p.alpha).collect();
        system.step();
        assert!(system.len() <= before.len());
        for p in system.iter() {
            assert!(p.alpha > 0.0, "frame {frame}: alpha {}", p.alpha);
        }
    }
    // Every particle fades within 1 / decay frames
    assert!(system.is_empty());
}

#[test]
fn opacity_strictly_decreases_each_step() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut system = ParticleSystem::new();
    system.emit(Vec2::ZERO, &EmissionConfig::burst(), &palette(), &mut rng);
    let mut prev: Vec<f32> = system.iter().map(|p| p.alpha).collect();
    for _ in 0..10 {
        system.step();
        let now: Vec<f32> = system.iter().map(|p| p.alpha).collect();
        assert_eq!(now.len(), prev.len(), "burst particles live longer than 10 frames");
        for (a, b) in prev.iter().zip(&now) {
            assert!(b < a);
            assert!((a - b - EmissionConfig::burst().decay).abs() < 1e-6);
        }
        prev = now;
    }
}

#[test]
fn trail_batch_respects_emission_shape() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut system = ParticleSystem::new();
    let cfg = EmissionConfig::trail();
    let colors = palette();
    let center = Vec2::new(400.0, 300.0);
    let n = system.emit(center, &cfg, &colors, &mut rng);

    assert_eq!(n, cfg.count);
    assert_eq!(system.len(), cfg.count);
    for p in system.iter() {
        assert!(p.pos.distance(center) <= cfg.area * 0.5 + 1e-3);
        assert!(p.radius >= cfg.radius_min && p.radius <= cfg.radius_min + cfg.radius_span);
        assert!(p.vel.x.abs() <= cfg.speed * 0.5 && p.vel.y.abs() <= cfg.speed * 0.5);
        assert_eq!(p.alpha, 1.0);
        assert_eq!(p.decay, cfg.decay);
        assert!(colors.contains(&p.color));
    }
}

#[test]
fn burst_alpha_varies_within_range() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut system = ParticleSystem::new();
    let cfg = EmissionConfig::burst();
    system.emit(Vec2::ZERO, &cfg, &palette(), &mut rng);
    assert_eq!(system.len(), 15);
    for p in system.iter() {
        assert!(p.alpha >= cfg.alpha_min && p.alpha <= 1.0);
    }
    let first = system.as_slice()[0].alpha;
    assert!(system.iter().any(|p| p.alpha != first));
}

#[test]
fn empty_palette_emits_nothing() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut system = ParticleSystem::new();
    let n = system.emit(Vec2::ZERO, &EmissionConfig::trail(), &[], &mut rng);
    assert_eq!(n, 0);
    assert!(system.is_empty());
}

#[test]
fn same_seed_gives_same_particles() {
    let make = || {
        let mut rng = StdRng::seed_from_u64(99);
        let mut system = ParticleSystem::new();
        system.emit(Vec2::new(10.0, 20.0), &EmissionConfig::idle(), &palette(), &mut rng);
        system.as_slice().to_vec()
    };
    assert_eq!(make(), make());
}

#[test]
fn steady_state_count_is_emission_over_decay() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut system = ParticleSystem::new();
    let cfg = EmissionConfig::trail(); // 5 per frame, decay 0.012
    for _ in 0..200 {
        system.emit(Vec2::ZERO, &cfg, &palette(), &mut rng);
        system.step();
    }
    // Each batch survives 83 steps, so 83 batches are alive at once
    let expected = cfg.count * 83;
    assert!(
        system.len().abs_diff(expected) <= cfg.count,
        "expected about {expected}, got {}",
        system.len()
    );
}

#[test]
fn nearly_transparent_particles_are_culled() {
    let mut system = ParticleSystem::new();
    system.push(Particle {
        pos: Vec2::ZERO,
        vel: Vec2::ZERO,
        radius: 2.0,
        color: GlowColor::Violet,
        alpha: 0.00015,
        decay: 0.0001,
    });

    // Still positive after the step, but below what a canvas can show
    let mut single = system.as_slice()[0].clone();
    assert!(!single.step());
    assert!(single.alpha > 0.0);
    assert!(single.alpha <= banner_core::constants::ALPHA_EPSILON);

    system.step();
    assert!(system.is_empty());
}
