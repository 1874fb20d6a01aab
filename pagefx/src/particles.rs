//! Particle field motion model.
//!
//! The field owns a batch of point-sprites drifting across the viewport with
//! toroidal wraparound. It is generic over the visual handle `H` so the web
//! layer can attach a DOM element per particle while tests use `()`.
//! Randomness is injected as a closure yielding uniform samples in `[0, 1)`;
//! the browser passes `Math.random`, tests pass a fixed sequence.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use crate::consts::{
    PARTICLE_MAX_COUNT, PARTICLE_SIZE_MIN, PARTICLE_SIZE_SPAN, PARTICLE_SPACING_PX,
    PARTICLE_SPEED_SPAN,
};

/// One drifting point-sprite.
#[derive(Debug)]
pub struct Particle<H> {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Rendered diameter in pixels; also the wraparound margin.
    pub size: f64,
    /// Opaque renderable handle owned by the embedder.
    pub handle: H,
}

/// The whole field: particles plus the viewport bounds they wrap within.
#[derive(Debug, Default)]
pub struct ParticleField<H> {
    width: f64,
    height: f64,
    particles: Vec<Particle<H>>,
}

/// Number of particles for a given viewport width.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn particle_count(viewport_width: f64) -> usize {
    let by_width = (viewport_width / PARTICLE_SPACING_PX).floor().max(0.0) as usize;
    by_width.min(PARTICLE_MAX_COUNT)
}

impl<H> ParticleField<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { width: 0.0, height: 0.0, particles: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle<H>] {
        &self.particles
    }

    /// Discard all particles and sample a fresh batch for the given viewport.
    ///
    /// `spawn(size, x, y)` creates the visual handle for each particle; the
    /// embedder is expected to have cleared the old visuals first (dropping
    /// the previous handles here does not remove DOM nodes).
    pub fn regenerate(
        &mut self,
        width: f64,
        height: f64,
        rng: &mut dyn FnMut() -> f64,
        mut spawn: impl FnMut(f64, f64, f64) -> H,
    ) {
        self.width = width;
        self.height = height;
        self.particles.clear();

        for _ in 0..particle_count(width) {
            let size = rng() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN;
            let x = rng() * width;
            let y = rng() * height;
            let vx = (rng() - 0.5) * PARTICLE_SPEED_SPAN;
            let vy = (rng() - 0.5) * PARTICLE_SPEED_SPAN;
            let handle = spawn(size, x, y);
            self.particles.push(Particle { x, y, vx, vy, size, handle });
        }
    }

    /// Advance every particle one frame and report its new position.
    ///
    /// Coordinates wrap toroidally: leaving one edge re-enters at the
    /// opposite edge with velocity preserved. After a step every coordinate
    /// lies in `[-size, bound]`.
    pub fn step(&mut self, mut place: impl FnMut(&H, f64, f64)) {
        for p in &mut self.particles {
            p.x = wrap(p.x + p.vx, self.width, p.size);
            p.y = wrap(p.y + p.vy, self.height, p.size);
            place(&p.handle, p.x, p.y);
        }
    }
}

fn wrap(coord: f64, bound: f64, size: f64) -> f64 {
    if coord > bound {
        -size
    } else if coord < -size {
        bound
    } else {
        coord
    }
}
