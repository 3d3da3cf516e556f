//! Impact resolution: turns arrived projectiles into blasts and applies
//! site damage from adversarial arrivals.

use hecs::World;

use skyguard_core::enums::{GameOverCause, ProjectileKind};
use skyguard_core::events::GameEvent;
use skyguard_core::rules::GameRules;

use crate::game_state::GameState;
use crate::systems::kinematics::Arrival;
use crate::world_setup;

/// Spawn a blast for every interceptor that reached its aim point.
pub fn detonate_interceptors(
    world: &mut World,
    rules: &GameRules,
    arrivals: &[Arrival],
    events: &mut Vec<GameEvent>,
) {
    for arrival in arrivals
        .iter()
        .filter(|a| a.kind == ProjectileKind::Interceptor)
    {
        world_setup::spawn_blast(world, rules, arrival.target);
        events.push(GameEvent::Detonation {
            at: arrival.target,
            kind: ProjectileKind::Interceptor,
        });
    }
}

/// Resolve adversarial arrivals: each leaves a blast on the ground and
/// destroys its site if still standing. Returns a game-over cause when the
/// last site falls.
pub fn resolve_adversarial_arrivals(
    world: &mut World,
    rules: &GameRules,
    state: &mut GameState,
    arrivals: &[Arrival],
    events: &mut Vec<GameEvent>,
) -> Option<GameOverCause> {
    let mut cause = None;

    for arrival in arrivals
        .iter()
        .filter(|a| a.kind == ProjectileKind::Adversarial)
    {
        world_setup::spawn_blast(world, rules, arrival.target);
        events.push(GameEvent::Detonation {
            at: arrival.target,
            kind: ProjectileKind::Adversarial,
        });

        let Some(site) = arrival.site else {
            continue;
        };
        if state.destroy_site(site) {
            log::info!(
                "site {site} destroyed, {} remaining",
                state.sites_remaining
            );
            events.push(GameEvent::SiteDestroyed {
                site,
                sites_remaining: state.sites_remaining,
            });
            if state.all_sites_lost() {
                cause = Some(GameOverCause::LastSiteDestroyed);
            }
        }
    }

    cause
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::components::Blast;
    use skyguard_core::types::Position;

    fn adversarial_arrival(site: usize) -> Arrival {
        Arrival {
            kind: ProjectileKind::Adversarial,
            target: Position::new(50.0 + 100.0 * site as f64, 390.0),
            site: Some(site),
        }
    }

    #[test]
    fn test_interceptor_arrival_becomes_blast() {
        let rules = GameRules::default();
        let mut world = World::new();
        let mut events = Vec::new();
        let arrivals = [
            Arrival {
                kind: ProjectileKind::Interceptor,
                target: Position::new(200.0, 150.0),
                site: None,
            },
            adversarial_arrival(0),
        ];
        detonate_interceptors(&mut world, &rules, &arrivals, &mut events);

        let blasts: Vec<(Position, Blast)> = world
            .query::<(&Position, &Blast)>()
            .iter()
            .map(|(_, (p, b))| (*p, *b))
            .collect();
        assert_eq!(blasts.len(), 1, "adversarial arrivals are handled separately");
        assert_eq!(blasts[0].0, Position::new(200.0, 150.0));
        assert_eq!(blasts[0].1.radius, 1.0);
        assert_eq!(blasts[0].1.life, 1.0);
    }

    #[test]
    fn test_adversarial_arrival_destroys_site() {
        let rules = GameRules::default();
        let mut state = GameState::new(&rules);
        let mut world = World::new();
        let mut events = Vec::new();

        let cause = resolve_adversarial_arrivals(
            &mut world,
            &rules,
            &mut state,
            &[adversarial_arrival(4)],
            &mut events,
        );

        assert_eq!(cause, None);
        assert!(!state.sites[4].alive);
        assert_eq!(state.sites_remaining, 5);
        assert_eq!(world.len(), 1, "a blast marks the impact");
        assert!(events.contains(&GameEvent::SiteDestroyed {
            site: 4,
            sites_remaining: 5
        }));
    }

    #[test]
    fn test_hit_on_dead_site_only_blasts() {
        let rules = GameRules::default();
        let mut state = GameState::new(&rules);
        state.destroy_site(1);
        let mut world = World::new();
        let mut events = Vec::new();

        resolve_adversarial_arrivals(
            &mut world,
            &rules,
            &mut state,
            &[adversarial_arrival(1)],
            &mut events,
        );

        assert_eq!(state.sites_remaining, 5);
        assert_eq!(world.len(), 1);
        assert_eq!(events.len(), 1, "only the detonation event");
    }

    #[test]
    fn test_last_site_lost_signals_game_over() {
        let rules = GameRules::default();
        let mut state = GameState::new(&rules);
        for i in 0..5 {
            state.destroy_site(i);
        }
        let mut world = World::new();
        let cause = resolve_adversarial_arrivals(
            &mut world,
            &rules,
            &mut state,
            &[adversarial_arrival(5)],
            &mut Vec::new(),
        );
        assert_eq!(cause, Some(GameOverCause::LastSiteDestroyed));
        assert_eq!(state.sites_remaining, 0);
    }
}
