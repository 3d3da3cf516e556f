//! Entity spawn factories for the simulation world.
//!
//! Creates interceptor, adversarial and blast entities with
//! appropriate component bundles.

use hecs::World;

use skyguard_core::components::*;
use skyguard_core::rules::GameRules;
use skyguard_core::types::Position;

/// Launch an interceptor from the battery toward `target`.
pub fn spawn_interceptor(world: &mut World, rules: &GameRules, target: Position) -> hecs::Entity {
    world.spawn((
        Interceptor,
        rules.battery,
        Projectile {
            target,
            speed: rules.interceptor_speed,
        },
    ))
}

/// Spawn an adversarial projectile aimed at the ground line below `site`.
pub fn spawn_adversarial(
    world: &mut World,
    rules: &GameRules,
    origin: Position,
    site: usize,
    speed: f64,
) -> hecs::Entity {
    let target = Position::new(rules.site_positions[site], rules.ground_y);
    world.spawn((origin, Projectile { target, speed }, Adversarial { site }))
}

/// Spawn a fresh blast centred on `center`.
pub fn spawn_blast(world: &mut World, rules: &GameRules, center: Position) -> hecs::Entity {
    world.spawn((
        center,
        Blast {
            radius: rules.blast_initial_radius,
            max_radius: rules.blast_max_radius,
            life: 1.0,
        },
    ))
}
