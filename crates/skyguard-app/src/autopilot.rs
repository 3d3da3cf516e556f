//! Simple fire-control bot used by the drivers to exercise a session.
//!
//! Picks the lowest adversarial projectile that nothing is already covering
//! and leads it by the interceptor's flight time.

use skyguard_core::commands::PlayerCommand;
use skyguard_core::enums::GamePhase;
use skyguard_core::rules::GameRules;
use skyguard_core::state::{GameStateSnapshot, ProjectileView};
use skyguard_core::types::Position;

/// Ticks between launches.
const DEFAULT_COOLDOWN_TICKS: u32 = 20;

/// A threat within this distance of a live blast or a pending aim point is
/// considered covered.
const COVER_RADIUS: f64 = 30.0;

/// Lead-prediction refinement passes.
const LEAD_ITERATIONS: usize = 3;

#[derive(Debug, Clone)]
pub struct Autopilot {
    cooldown_ticks: u32,
    remaining: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_TICKS)
    }
}

impl Autopilot {
    pub fn new(cooldown_ticks: u32) -> Self {
        Self {
            cooldown_ticks,
            remaining: 0,
        }
    }

    /// Decide the next command from the latest snapshot, once per tick.
    pub fn plan(&mut self, rules: &GameRules, snap: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snap.phase != GamePhase::Running || snap.hud.ammo == 0 {
            return None;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            return None;
        }

        let threat = snap
            .adversarials
            .iter()
            .filter(|a| !is_covered(a.position, snap))
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y))?;

        let aim = lead_point(rules, threat);
        self.remaining = self.cooldown_ticks;
        Some(PlayerCommand::Fire { x: aim.x, y: aim.y })
    }
}

fn is_covered(pos: Position, snap: &GameStateSnapshot) -> bool {
    snap.blasts
        .iter()
        .any(|b| b.center.range_to(&pos) < COVER_RADIUS.max(b.radius))
        || snap
            .interceptors
            .iter()
            .any(|i| i.target.range_to(&pos) < COVER_RADIUS * 2.0)
}

/// Where `threat` will be when an interceptor launched now reaches it.
fn lead_point(rules: &GameRules, threat: &ProjectileView) -> Position {
    let to_target = (
        threat.target.x - threat.position.x,
        threat.target.y - threat.position.y,
    );
    let remaining = threat.position.range_to(&threat.target);
    if remaining == 0.0 {
        return threat.position;
    }
    let dir = (to_target.0 / remaining, to_target.1 / remaining);

    let mut aim = threat.position;
    for _ in 0..LEAD_ITERATIONS {
        let flight_ticks = (rules.battery.range_to(&aim) / rules.interceptor_speed).ceil();
        // The blast needs a couple of ticks to grow over the threat.
        let travel = ((flight_ticks + 2.0) * threat.speed).min(remaining);
        aim = Position::new(
            threat.position.x + dir.0 * travel,
            threat.position.y + dir.1 * travel,
        );
    }
    aim
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::state::{BlastView, HudView};

    fn snapshot_with(adversarials: Vec<ProjectileView>) -> GameStateSnapshot {
        GameStateSnapshot {
            phase: GamePhase::Running,
            hud: HudView {
                score: 0,
                ammo: 10,
                sites_remaining: 6,
                ammo_depleted: false,
            },
            adversarials,
            ..Default::default()
        }
    }

    fn threat(x: f64, y: f64) -> ProjectileView {
        ProjectileView {
            position: Position::new(x, y),
            target: Position::new(x, 390.0),
            speed: 1.0,
        }
    }

    #[test]
    fn test_targets_lowest_threat_with_lead() {
        let rules = GameRules::default();
        let mut bot = Autopilot::new(0);
        let snap = snapshot_with(vec![threat(100.0, 50.0), threat(400.0, 200.0)]);

        match bot.plan(&rules, &snap) {
            Some(PlayerCommand::Fire { x, y }) => {
                assert_eq!(x, 400.0);
                assert!(y > 200.0 && y <= 390.0, "aim should lead downward, got {y}");
            }
            other => panic!("expected a fire command, got {other:?}"),
        }
    }

    #[test]
    fn test_respects_cooldown() {
        let rules = GameRules::default();
        let mut bot = Autopilot::new(3);
        let snap = snapshot_with(vec![threat(100.0, 100.0)]);

        assert!(bot.plan(&rules, &snap).is_some());
        for _ in 0..3 {
            assert!(bot.plan(&rules, &snap).is_none());
        }
        assert!(bot.plan(&rules, &snap).is_some());
    }

    #[test]
    fn test_skips_covered_threats_and_idle_phases() {
        let rules = GameRules::default();
        let mut bot = Autopilot::new(0);
        let mut snap = snapshot_with(vec![threat(100.0, 100.0)]);
        snap.blasts.push(BlastView {
            center: Position::new(105.0, 100.0),
            radius: 10.0,
            life: 0.8,
        });
        assert!(bot.plan(&rules, &snap).is_none());

        let mut snap = snapshot_with(vec![threat(100.0, 100.0)]);
        snap.phase = GamePhase::GameOver;
        assert!(bot.plan(&rules, &snap).is_none());

        let mut snap = snapshot_with(vec![threat(100.0, 100.0)]);
        snap.hud.ammo = 0;
        assert!(bot.plan(&rules, &snap).is_none());
    }
}
