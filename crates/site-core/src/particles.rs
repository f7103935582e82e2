//! Falling-leaf particle pool.
//!
//! Pure simulation state with no drawing: the web frontend steps the field
//! once per display frame and paints the particles onto a 2D canvas. The pool
//! has a fixed capacity; off-screen particles are respawned in place rather
//! than reallocated.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub angle: f32,
    pub rotation_speed: f32,
    /// CSS fill color, formatted once at spawn time.
    pub fill_style: String,
}

impl Particle {
    fn spawn(rng: &mut StdRng, width: f32, height: f32, initial: bool) -> Self {
        let hue = if rng.gen_bool(0.5) {
            LEAF_HUES[0]
        } else {
            LEAF_HUES[1]
        };
        let alpha = rng.gen_range(ALPHA_MIN..ALPHA_MAX);
        // Initial spawns fill the whole viewport so the field looks populated
        // immediately; respawns enter from just above the top edge.
        let y = if initial {
            rng.gen_range(0.0..height.max(1.0))
        } else {
            RESPAWN_Y
        };
        Self {
            pos: Vec2::new(rng.gen_range(0.0..width.max(1.0)), y),
            size: rng.gen_range(SIZE_MIN..SIZE_MAX),
            speed: rng.gen_range(SPEED_MIN..SPEED_MAX),
            angle: rng.gen_range(0.0..std::f32::consts::TAU),
            rotation_speed: rng.gen_range(-ROTATION_SPEED_LIMIT..ROTATION_SPEED_LIMIT),
            fill_style: format!("rgba({hue}, {alpha:.2})"),
        }
    }
}

/// Pool size for a given viewport width.
pub fn pool_size_for_width(width: f32) -> usize {
    if width < NARROW_VIEWPORT_PX {
        SMALL_POOL
    } else {
        LARGE_POOL
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    /// Allocate the pool sized for `width`, seeded so runs are reproducible.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..pool_size_for_width(width))
            .map(|_| Particle::spawn(&mut rng, width, height, true))
            .collect();
        Self {
            particles,
            width,
            height,
            rng,
        }
    }

    /// Update the stored viewport dimensions. Existing particles keep their
    /// positions; the pool size is fixed at construction.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by one frame. A particle that falls past the
    /// bottom margin is respawned in its slot with fresh random fields.
    pub fn step(&mut self) {
        let Self {
            particles,
            width,
            height,
            rng,
        } = self;
        for p in particles.iter_mut() {
            p.pos.y += p.speed;
            p.pos.x += p.angle.sin() * DRIFT_AMPLITUDE;
            p.angle += p.rotation_speed;
            if p.pos.y > *height + OFFSCREEN_MARGIN {
                *p = Particle::spawn(rng, *width, *height, false);
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
