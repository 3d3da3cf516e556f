//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skyguard_core::components::*;
use skyguard_core::enums::GamePhase;
use skyguard_core::events::GameEvent;
use skyguard_core::rules::GameRules;
use skyguard_core::state::*;
use skyguard_core::types::{Position, SimTime};

use crate::game_state::GameState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    rules: &GameRules,
    time: &SimTime,
    phase: GamePhase,
    state: &GameState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        hud: HudView {
            score: state.score,
            ammo: state.ammo,
            sites_remaining: state.sites_remaining,
            ammo_depleted: state.ammo == 0,
        },
        battery: rules.battery,
        sites: state
            .sites
            .iter()
            .map(|s| SiteView {
                id: s.id,
                x: s.x,
                alive: s.alive,
            })
            .collect(),
        interceptors: build_projectiles::<Interceptor>(world),
        adversarials: build_projectiles::<Adversarial>(world),
        blasts: build_blasts(world),
        events,
    }
}

/// Projectiles carrying marker `M`, ordered by entity id.
fn build_projectiles<M: hecs::Component>(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<(u32, ProjectileView)> = world
        .query::<(&Position, &Projectile, &M)>()
        .iter()
        .map(|(entity, (pos, projectile, _))| {
            (
                entity.id(),
                ProjectileView {
                    position: *pos,
                    target: projectile.target,
                    speed: projectile.speed,
                },
            )
        })
        .collect();

    views.sort_by_key(|(id, _)| *id);
    views.into_iter().map(|(_, v)| v).collect()
}

fn build_blasts(world: &World) -> Vec<BlastView> {
    let mut views: Vec<(u32, BlastView)> = world
        .query::<(&Position, &Blast)>()
        .iter()
        .map(|(entity, (pos, blast))| {
            (
                entity.id(),
                BlastView {
                    center: *pos,
                    radius: blast.radius,
                    life: blast.life,
                },
            )
        })
        .collect();

    views.sort_by_key(|(id, _)| *id);
    views.into_iter().map(|(_, v)| v).collect()
}
