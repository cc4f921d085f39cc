//! Field integration
//!
//! One step integrates every ball by the full elapsed time, then reflects:
//! any axis whose position left [0,1] gets its velocity negated. Positions
//! are never clamped and never re-simulated within a step, so a ball can
//! overshoot the wall by one step of travel before it turns around.

use super::state::Simulation;

/// Advance every ball by `dt` seconds
pub fn step(sim: &mut Simulation, dt: f32) {
    for ball in &mut sim.balls {
        ball.pos += ball.vel * dt;

        if ball.pos.x < 0.0 || ball.pos.x > 1.0 {
            ball.vel.x = -ball.vel.x;
        }
        if ball.pos.y < 0.0 || ball.pos.y > 1.0 {
            ball.vel.y = -ball.vel.y;
        }
        if ball.pos.z < 0.0 || ball.pos.z > 1.0 {
            ball.vel.z = -ball.vel.z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Ball;
    use glam::Vec3;
    use proptest::prelude::*;

    fn single(pos: Vec3, vel: Vec3) -> Simulation {
        Simulation::from_balls(vec![Ball::new(pos, 0.1, vel)])
    }

    #[test]
    fn test_overshoot_then_reflect() {
        let mut sim = single(Vec3::new(0.95, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        step(&mut sim, 0.1);

        let ball = &sim.balls[0];
        assert_eq!(ball.pos, Vec3::new(1.05, 0.5, 0.5));
        assert_eq!(ball.vel, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_in_bounds_keeps_velocity() {
        let vel = Vec3::new(0.1, -0.05, 0.02);
        let mut sim = single(Vec3::new(0.5, 0.5, 0.5), vel);
        step(&mut sim, 0.1);

        assert_eq!(sim.balls[0].vel, vel);
    }

    #[test]
    fn test_axes_reflect_independently() {
        // Leaves on x and z, stays in on y
        let mut sim = single(Vec3::new(0.99, 0.5, 0.01), Vec3::new(0.5, 0.1, -0.5));
        step(&mut sim, 0.1);

        let ball = &sim.balls[0];
        assert_eq!(ball.vel.x, -0.5);
        assert_eq!(ball.vel.y, 0.1);
        assert_eq!(ball.vel.z, 0.5);
    }

    #[test]
    fn test_lower_bound_reflects() {
        let mut sim = single(Vec3::new(0.02, 0.5, 0.5), Vec3::new(-1.0, 0.0, 0.0));
        step(&mut sim, 0.1);

        let ball = &sim.balls[0];
        assert!(ball.pos.x < 0.0);
        assert_eq!(ball.vel.x, 1.0);
    }

    #[test]
    fn test_radius_invariant() {
        let mut sim = Simulation::generate(5, 20);
        let radii: Vec<f32> = sim.balls.iter().map(|b| b.radius).collect();

        for _ in 0..1000 {
            step(&mut sim, 0.016);
        }

        let after: Vec<f32> = sim.balls.iter().map(|b| b.radius).collect();
        assert_eq!(radii, after);
    }

    #[test]
    fn test_zero_dt_is_a_fixed_point_inside() {
        let mut sim = single(Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.3, 0.3, 0.3));
        let before = sim.balls[0];
        step(&mut sim, 0.0);
        assert_eq!(sim.balls[0], before);
    }

    proptest! {
        /// Per axis: velocity is untouched when the integrated position stays
        /// in [0,1], exactly negated otherwise.
        #[test]
        fn prop_reflection_per_axis(
            px in 0.0f32..1.0, py in 0.0f32..1.0, pz in 0.0f32..1.0,
            vx in -2.0f32..2.0, vy in -2.0f32..2.0, vz in -2.0f32..2.0,
            dt in 0.0f32..1.0,
        ) {
            let pos = Vec3::new(px, py, pz);
            let vel = Vec3::new(vx, vy, vz);
            let mut sim = single(pos, vel);
            step(&mut sim, dt);

            let ball = &sim.balls[0];
            for axis in 0..3 {
                let integrated = pos[axis] + vel[axis] * dt;
                prop_assert_eq!(ball.pos[axis], integrated);
                if (0.0..=1.0).contains(&integrated) {
                    prop_assert_eq!(ball.vel[axis], vel[axis]);
                } else {
                    prop_assert_eq!(ball.vel[axis], -vel[axis]);
                }
            }
        }
    }
}
