// Particle network simulation.
//
// Owns a fixed-size set of drifting points inside a `width x height` surface.
// The set is rebuilt wholesale by [`ParticleField::reinitialize`] (on load and
// on every viewport resize); [`ParticleField::step`] advances it by one frame.
// Nothing here touches the DOM, so the same code runs under host tests.

use crate::constants::{CONNECTION_DISTANCE, PARTICLE_COUNT, PARTICLE_MAX_SPEED, PARTICLE_RADIUS};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct ParticleConfig {
    pub count: usize,
    pub connection_distance: f32,
    pub radius: f32,
    pub max_speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            radius: PARTICLE_RADIUS,
            max_speed: PARTICLE_MAX_SPEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Move by one frame of velocity, then flip any velocity component whose
    /// axis ended up outside `[0, extent]`.
    ///
    /// The position is deliberately left unclamped: a particle may sit just
    /// past the edge for one frame before the flipped velocity brings it back.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// A line between two particles that are closer than the connection distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// `1 - distance / connection_distance`, always in `(0, 1]`.
    pub opacity: f32,
}

/// Linear opacity falloff; `None` once the pair is at or beyond `max_distance`.
#[inline]
pub fn connection_opacity(distance: f32, max_distance: f32) -> Option<f32> {
    if distance < max_distance {
        Some(1.0 - distance / max_distance)
    } else {
        None
    }
}

pub struct ParticleField {
    pub config: ParticleConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field sized `width x height` and populate it.
    pub fn new(config: ParticleConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::with_capacity(config.count),
            rng: StdRng::seed_from_u64(seed),
        };
        field.reinitialize(width, height);
        field
    }

    /// Adopt new surface dimensions and replace every particle.
    ///
    /// Positions are uniform in `[0, width] x [0, height]`, velocities uniform
    /// in `[-max_speed, max_speed)` per axis. No state survives the call.
    pub fn reinitialize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let (w, h) = (self.width, self.height);
        let cfg = self.config;
        let rng = &mut self.rng;
        self.particles.clear();
        self.particles.extend((0..cfg.count).map(|_| Particle {
            position: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * cfg.max_speed,
                (rng.gen::<f32>() - 0.5) * 2.0 * cfg.max_speed,
            ),
            radius: cfg.radius,
        }));
        log::debug!(
            "[particles] reinitialized {} particles on {:.0}x{:.0}",
            self.particles.len(),
            w,
            h
        );
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    /// All unordered pairs closer than the connection distance.
    ///
    /// Plain O(N^2) scan; N is small and fixed.
    pub fn connections(&self) -> Vec<Connection> {
        let max = self.config.connection_distance;
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = a.position.distance(b.position);
                if let Some(opacity) = connection_opacity(distance, max) {
                    out.push(Connection {
                        a: i,
                        b: j,
                        distance,
                        opacity,
                    });
                }
            }
        }
        out
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replace the particle set, keeping the current surface size. The set
    /// is discarded again on the next [`ParticleField::reinitialize`].
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
