//! Kinematics integrator.
//!
//! Moves every projectile a fixed distance per tick straight toward its aim
//! point. The step is per tick, not scaled by elapsed time, so game speed
//! follows the driver's frame rate.

use glam::DVec2;
use hecs::{Entity, World};

use skyguard_core::components::{Adversarial, Projectile};
use skyguard_core::enums::ProjectileKind;
use skyguard_core::types::Position;

/// Result of advancing one projectile by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Reached the target this tick; the position is exactly the target.
    Arrived(Position),
    /// Still in flight at the new position.
    Moving(Position),
}

/// A projectile that reached its aim point during this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrival {
    pub kind: ProjectileKind,
    pub target: Position,
    /// Site index for adversarial projectiles.
    pub site: Option<usize>,
}

/// Advance `pos` toward `target` by `speed`.
///
/// Arrives when the remaining distance is below `speed`, without overshoot.
/// A zero-length direction also counts as arrival, so nothing is normalised.
pub fn step(pos: Position, target: Position, speed: f64) -> Step {
    let delta = DVec2::from(target) - DVec2::from(pos);
    let dist = delta.length();

    if dist == 0.0 || dist < speed {
        return Step::Arrived(target);
    }

    Step::Moving((DVec2::from(pos) + delta / dist * speed).into())
}

/// Move all projectiles. Arrived projectiles are despawned and reported in
/// `arrivals`; the caller turns them into blasts.
pub fn run(world: &mut World, arrivals: &mut Vec<Arrival>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, projectile, adversarial)) in
        world.query_mut::<(&mut Position, &Projectile, Option<&Adversarial>)>()
    {
        match step(*pos, projectile.target, projectile.speed) {
            Step::Moving(next) => *pos = next,
            Step::Arrived(at) => {
                *pos = at;
                let (kind, site) = match adversarial {
                    Some(a) => (ProjectileKind::Adversarial, Some(a.site)),
                    None => (ProjectileKind::Interceptor, None),
                };
                arrivals.push(Arrival {
                    kind,
                    target: at,
                    site,
                });
                despawn_buffer.push(entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
