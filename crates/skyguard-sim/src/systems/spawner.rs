//! Spawner: launches adversarial projectiles at a shrinking interval.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::enums::GameOverCause;
use skyguard_core::events::GameEvent;
use skyguard_core::rules::GameRules;
use skyguard_core::types::Position;

use crate::game_state::GameState;
use crate::world_setup;

/// Spawn timing carried across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnClock {
    /// Timestamp of the last spawn. `None` until the first running tick
    /// anchors it, so the first spawn waits one full interval.
    pub last_spawn_ms: Option<f64>,
    pub interval_ms: f64,
}

impl SpawnClock {
    pub fn new(rules: &GameRules) -> Self {
        Self {
            last_spawn_ms: None,
            interval_ms: rules.spawn_interval_initial_ms,
        }
    }
}

/// What the spawner decided this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnDecision {
    /// Interval has not elapsed yet.
    NotDue,
    /// Launch from `origin` toward `site` at `speed`.
    Launch {
        origin: Position,
        site: usize,
        speed: f64,
    },
    /// Due, but no site is left to aim at.
    NoTargets,
}

/// Decide whether to spawn at `now_ms`, updating the clock.
///
/// Fires only when `now - last_spawn > interval`. A successful launch moves
/// `last_spawn` to `now` and shrinks the interval by the configured decrement,
/// never below the floor.
pub fn maybe_spawn(
    clock: &mut SpawnClock,
    now_ms: f64,
    rules: &GameRules,
    state: &GameState,
    rng: &mut ChaCha8Rng,
) -> SpawnDecision {
    let last = match clock.last_spawn_ms {
        Some(last) => last,
        None => {
            clock.last_spawn_ms = Some(now_ms);
            return SpawnDecision::NotDue;
        }
    };
    if now_ms - last <= clock.interval_ms {
        return SpawnDecision::NotDue;
    }

    let alive = state.alive_site_indices();
    if alive.is_empty() {
        return SpawnDecision::NoTargets;
    }

    let site = alive[rng.gen_range(0..alive.len())];
    let origin = Position::new(rng.gen_range(0.0..rules.field_width), 0.0);
    let speed = rules.adversarial_speed(state.score);

    clock.last_spawn_ms = Some(now_ms);
    clock.interval_ms =
        (clock.interval_ms - rules.spawn_interval_decrement_ms).max(rules.spawn_interval_floor_ms);

    SpawnDecision::Launch {
        origin,
        site,
        speed,
    }
}

/// Run the spawner. Returns a game-over cause when no site is left to target.
pub fn run(
    world: &mut World,
    clock: &mut SpawnClock,
    now_ms: f64,
    rules: &GameRules,
    state: &GameState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) -> Option<GameOverCause> {
    match maybe_spawn(clock, now_ms, rules, state, rng) {
        SpawnDecision::NotDue => None,
        SpawnDecision::Launch {
            origin,
            site,
            speed,
        } => {
            world_setup::spawn_adversarial(world, rules, origin, site, speed);
            log::trace!(
                "adversarial spawned at x={:.1} toward site {site}, next in {}ms",
                origin.x,
                clock.interval_ms
            );
            events.push(GameEvent::AdversarialSpawned {
                origin,
                site,
                speed,
            });
            None
        }
        SpawnDecision::NoTargets => Some(GameOverCause::NoTargetsLeft),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn setup() -> (GameRules, GameState, ChaCha8Rng) {
        let rules = GameRules::default();
        let state = GameState::new(&rules);
        (rules, state, ChaCha8Rng::seed_from_u64(7))
    }

    #[test]
    fn test_first_call_anchors_clock() {
        let (rules, state, mut rng) = setup();
        let mut clock = SpawnClock::new(&rules);
        let decision = maybe_spawn(&mut clock, 5000.0, &rules, &state, &mut rng);
        assert_eq!(decision, SpawnDecision::NotDue);
        assert_eq!(clock.last_spawn_ms, Some(5000.0));
    }

    #[test]
    fn test_fires_only_after_interval_strictly_elapsed() {
        let (rules, state, mut rng) = setup();
        let mut clock = SpawnClock {
            last_spawn_ms: Some(0.0),
            interval_ms: 2000.0,
        };
        assert_eq!(
            maybe_spawn(&mut clock, 2000.0, &rules, &state, &mut rng),
            SpawnDecision::NotDue
        );
        let decision = maybe_spawn(&mut clock, 2000.5, &rules, &state, &mut rng);
        match decision {
            SpawnDecision::Launch {
                origin,
                site,
                speed,
            } => {
                assert_eq!(origin.y, 0.0);
                assert!((0.0..rules.field_width).contains(&origin.x));
                assert!(site < 6);
                assert_eq!(speed, 1.0);
            }
            other => panic!("expected a launch, got {other:?}"),
        }
        assert_eq!(clock.last_spawn_ms, Some(2000.5));
        assert_eq!(clock.interval_ms, 1990.0);
    }

    #[test]
    fn test_interval_floors_at_minimum() {
        let (rules, state, mut rng) = setup();
        let mut clock = SpawnClock {
            last_spawn_ms: Some(0.0),
            interval_ms: 2000.0,
        };
        let mut now = 0.0;
        for _ in 0..400 {
            now += 2001.0;
            maybe_spawn(&mut clock, now, &rules, &state, &mut rng);
            assert!(clock.interval_ms >= rules.spawn_interval_floor_ms);
        }
        assert_eq!(clock.interval_ms, 500.0);
    }

    #[test]
    fn test_targets_only_alive_sites() {
        let (rules, mut state, mut rng) = setup();
        for i in [0, 1, 2, 4, 5] {
            state.destroy_site(i);
        }
        let mut clock = SpawnClock {
            last_spawn_ms: Some(0.0),
            interval_ms: 0.0,
        };
        let mut now = 0.0;
        for _ in 0..50 {
            now += 1000.0;
            match maybe_spawn(&mut clock, now, &rules, &state, &mut rng) {
                SpawnDecision::Launch { site, .. } => assert_eq!(site, 3),
                other => panic!("expected a launch, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_no_alive_sites_signals_game_over_without_spawning() {
        let (rules, mut state, mut rng) = setup();
        for i in 0..6 {
            state.destroy_site(i);
        }
        let mut world = World::new();
        let mut clock = SpawnClock {
            last_spawn_ms: Some(0.0),
            interval_ms: 2000.0,
        };
        let mut events = Vec::new();
        let cause = run(
            &mut world,
            &mut clock,
            2500.0,
            &rules,
            &state,
            &mut rng,
            &mut events,
        );
        assert_eq!(cause, Some(GameOverCause::NoTargetsLeft));
        assert_eq!(world.len(), 0);
        assert!(events.is_empty());
        assert_eq!(clock.interval_ms, 2000.0, "ramp only advances on a spawn");
    }

    #[test]
    fn test_speed_follows_score() {
        let (rules, mut state, mut rng) = setup();
        state.award(2500);
        let mut clock = SpawnClock {
            last_spawn_ms: Some(0.0),
            interval_ms: 10.0,
        };
        match maybe_spawn(&mut clock, 100.0, &rules, &state, &mut rng) {
            SpawnDecision::Launch { speed, .. } => assert!((speed - 1.5).abs() < 1e-12),
            other => panic!("expected a launch, got {other:?}"),
        }
    }
}
