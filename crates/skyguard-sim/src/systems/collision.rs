//! Collision engine: grows blasts and destroys adversarial projectiles
//! caught inside them.

use hecs::{Entity, World};

use skyguard_core::components::{Adversarial, Blast};
use skyguard_core::events::GameEvent;
use skyguard_core::rules::GameRules;
use skyguard_core::types::Position;

use crate::game_state::GameState;

/// Grow every blast, drop expired ones, then destroy each adversarial
/// projectile strictly inside any remaining blast. A projectile covered by
/// several blasts is destroyed and rewarded once. Returns the kill count.
pub fn run(
    world: &mut World,
    rules: &GameRules,
    state: &mut GameState,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) -> u32 {
    despawn_buffer.clear();

    // 1. Grow and age; expired blasts skip collision this tick.
    for (entity, blast) in world.query_mut::<&mut Blast>() {
        blast.radius += rules.blast_growth_per_tick;
        blast.life -= rules.blast_life_decay_per_tick;
        if blast.life <= 0.0 || blast.radius >= blast.max_radius {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // 2. Gather live blast zones: (center, radius).
    let zones: Vec<(Position, f64)> = world
        .query::<(&Position, &Blast)>()
        .iter()
        .map(|(_, (pos, blast))| (*pos, blast.radius))
        .collect();
    if zones.is_empty() {
        return 0;
    }

    // 3. Any adversarial inside any zone is destroyed.
    let mut destroyed: Vec<(Entity, Position)> = world
        .query::<(&Position, &Adversarial)>()
        .iter()
        .filter(|(_, (pos, _))| {
            zones
                .iter()
                .any(|(center, radius)| pos.range_to(center) < *radius)
        })
        .map(|(entity, (pos, _))| (entity, *pos))
        .collect();
    destroyed.sort_by_key(|(entity, _)| entity.id());

    for &(entity, at) in &destroyed {
        let _ = world.despawn(entity);
        state.award(rules.kill_reward);
        events.push(GameEvent::AdversarialDestroyed {
            at,
            score: state.score,
        });
    }

    if !destroyed.is_empty() {
        log::debug!(
            "{} adversarial destroyed, score {}",
            destroyed.len(),
            state.score
        );
    }

    destroyed.len() as u32
}
