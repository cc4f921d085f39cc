//! Ball field state
//!
//! The simulation owns every ball. The count is fixed at construction and
//! the order never changes; downstream packing relies on both.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// A simulated moving sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Position inside the unit cube (may overshoot by one step of travel)
    pub pos: Vec3,
    /// Field radius; never changes after construction
    pub radius: f32,
    /// Units per second, per axis
    pub vel: Vec3,
}

impl Ball {
    pub fn new(pos: Vec3, radius: f32, vel: Vec3) -> Self {
        Self { pos, radius, vel }
    }
}

/// The metaball field: a fixed set of balls inside the unit cube
#[derive(Debug, Clone)]
pub struct Simulation {
    pub balls: Vec<Ball>,
}

impl Simulation {
    /// Generate `count` balls with seeded uniform-random state
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = (0..count)
            .map(|_| Ball {
                pos: Vec3::new(rng.random(), rng.random(), rng.random()),
                radius: RADIUS_BASE + rng.random::<f32>() * RADIUS_SPREAD,
                vel: Vec3::new(
                    rng.random_range(-VELOCITY_HALF_RANGE..VELOCITY_HALF_RANGE),
                    rng.random_range(-VELOCITY_HALF_RANGE..VELOCITY_HALF_RANGE),
                    rng.random_range(-VELOCITY_HALF_RANGE..VELOCITY_HALF_RANGE),
                ),
            })
            .collect();
        Self { balls }
    }

    /// Build a field from an explicit ball list (fixed-layout variants, tests)
    pub fn from_balls(balls: Vec<Ball>) -> Self {
        Self { balls }
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = Simulation::generate(7, 10);
        let b = Simulation::generate(7, 10);
        assert_eq!(a.balls, b.balls);
    }

    #[test]
    fn test_generate_ranges() {
        let sim = Simulation::generate(99, 200);
        assert_eq!(sim.ball_count(), 200);
        for ball in &sim.balls {
            for axis in [ball.pos.x, ball.pos.y, ball.pos.z] {
                assert!((0.0..=1.0).contains(&axis));
            }
            assert!(ball.radius >= RADIUS_BASE);
            assert!(ball.radius < RADIUS_BASE + RADIUS_SPREAD);
            for axis in [ball.vel.x, ball.vel.y, ball.vel.z] {
                assert!(axis.abs() <= VELOCITY_HALF_RANGE);
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Simulation::generate(1, 10);
        let b = Simulation::generate(2, 10);
        assert_ne!(a.balls, b.balls);
    }
}
