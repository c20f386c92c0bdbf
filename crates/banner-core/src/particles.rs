use crate::config::{EmissionConfig, GlowColor};
use crate::constants::ALPHA_EPSILON;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

/// A single decaying glow point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: GlowColor,
    pub alpha: f32,
    pub decay: f32,
}

impl Particle {
    /// Advance one frame. Returns false once the particle is fully transparent.
    #[inline]
    pub fn step(&mut self) -> bool {
        self.pos += self.vel;
        self.alpha -= self.decay;
        self.is_visible()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.alpha > ALPHA_EPSILON
    }
}

/// Owns every live particle. Unbounded: the population is limited only by
/// emission rate over decay rate.
#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scatter one batch over a disc centred on `center`. Returns the number
    /// of particles added.
    pub fn emit<R: Rng + ?Sized>(
        &mut self,
        center: Vec2,
        cfg: &EmissionConfig,
        palette: &[GlowColor],
        rng: &mut R,
    ) -> usize {
        if palette.is_empty() {
            return 0;
        }
        self.particles.reserve(cfg.count);
        for _ in 0..cfg.count {
            let angle = rng.gen::<f32>() * TAU;
            let distance = rng.gen::<f32>() * cfg.area * 0.5;
            let offset = Vec2::new(angle.cos(), angle.sin()) * distance;
            let vel = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * cfg.speed;
            let radius = cfg.radius_min + rng.gen::<f32>() * cfg.radius_span;
            let alpha = if cfg.alpha_min >= 1.0 {
                1.0
            } else {
                cfg.alpha_min + rng.gen::<f32>() * (1.0 - cfg.alpha_min)
            };
            let color = *palette.choose(rng).unwrap_or(&palette[0]);
            self.particles.push(Particle {
                pos: center + offset,
                vel,
                radius,
                color,
                alpha: alpha.clamp(0.0, 1.0),
                decay: cfg.decay,
            });
        }
        cfg.count
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Integrate and fade every particle, dropping the ones that faded out.
    pub fn step(&mut self) {
        self.particles.retain_mut(Particle::step);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
