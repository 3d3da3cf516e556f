//! Fixed-step headless driver.
//!
//! Feeds the engine synthetic 60 Hz timestamps, so a run is fully
//! reproducible from its seed and runs as fast as the CPU allows.

use serde::Serialize;

use skyguard_core::commands::PlayerCommand;
use skyguard_core::constants::TICK_RATE;
use skyguard_core::enums::{GameOverCause, GamePhase};
use skyguard_core::events::GameEvent;
use skyguard_sim::SimulationEngine;

use crate::autopilot::Autopilot;

/// Driver timestamp step (ms).
pub const FRAME_MS: f64 = 1000.0 / TICK_RATE as f64;

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    /// Upper bound on driver ticks across all sessions.
    pub max_ticks: u64,
    /// Sessions to play; the driver restarts after each game over.
    pub sessions: u32,
    pub autopilot: bool,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            max_ticks: 60 * 60 * TICK_RATE as u64,
            sessions: 1,
            autopilot: true,
        }
    }
}

/// Outcome of one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub session: u32,
    pub score: u32,
    pub ticks: u64,
    pub ammo_left: u32,
    pub sites_remaining: u32,
    pub interceptors_fired: u32,
    pub adversarials_destroyed: u32,
    /// `None` when the tick budget ran out mid-session.
    pub cause: Option<GameOverCause>,
}

/// Everything a headless run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: u64,
    pub total_ticks: u64,
    pub sessions: Vec<SessionSummary>,
}

/// Play up to `options.sessions` sessions on `engine`.
pub fn run(engine: &mut SimulationEngine, seed: u64, options: &HeadlessOptions) -> RunReport {
    let rules = engine.rules().clone();
    let mut autopilot = Autopilot::default();
    let mut sessions = Vec::new();
    let mut current = SessionSummary::empty(1);
    let mut session_start = 0;
    let mut snap = engine.snapshot();

    engine.start();

    let mut frame = 0;
    while frame < options.max_ticks {
        if options.autopilot {
            if let Some(cmd) = autopilot.plan(&rules, &snap) {
                engine.queue_command(cmd);
            }
        }

        snap = engine.tick(frame as f64 * FRAME_MS);
        frame += 1;

        for event in &snap.events {
            match event {
                GameEvent::InterceptorLaunched { .. } => current.interceptors_fired += 1,
                GameEvent::AdversarialDestroyed { .. } => current.adversarials_destroyed += 1,
                GameEvent::GameOver { cause, .. } => current.cause = Some(*cause),
                _ => {}
            }
        }

        if snap.phase == GamePhase::GameOver {
            current.finish(&snap.hud, frame - session_start);
            log::info!(
                "session {} over after {} ticks: score {}",
                current.session,
                current.ticks,
                current.score
            );
            let next = current.session + 1;
            sessions.push(std::mem::replace(&mut current, SessionSummary::empty(next)));
            if sessions.len() as u32 >= options.sessions {
                break;
            }
            session_start = frame;
            engine.queue_command(PlayerCommand::Restart);
        }
    }

    if current.ticks == 0 && snap.phase == GamePhase::Running {
        current.finish(&snap.hud, frame - session_start);
        log::warn!(
            "tick budget exhausted during session {} (score {})",
            current.session,
            current.score
        );
        sessions.push(current);
    }

    RunReport {
        seed,
        total_ticks: frame,
        sessions,
    }
}

impl SessionSummary {
    fn empty(session: u32) -> Self {
        Self {
            session,
            score: 0,
            ticks: 0,
            ammo_left: 0,
            sites_remaining: 0,
            interceptors_fired: 0,
            adversarials_destroyed: 0,
            cause: None,
        }
    }

    fn finish(&mut self, hud: &skyguard_core::state::HudView, ticks: u64) {
        self.score = hud.score;
        self.ammo_left = hud.ammo;
        self.sites_remaining = hud.sites_remaining;
        self.ticks = ticks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_sim::SimConfig;

    fn engine(seed: u64) -> SimulationEngine {
        SimulationEngine::new(SimConfig {
            seed,
            ..Default::default()
        })
    }

    #[test]
    fn test_headless_run_reaches_game_over() {
        let mut engine = engine(42);
        let report = run(&mut engine, 42, &HeadlessOptions::default());

        assert_eq!(report.sessions.len(), 1);
        let session = &report.sessions[0];
        assert!(session.cause.is_some(), "a session ends in game over");
        assert_eq!(session.sites_remaining, 0);
        assert!(session.interceptors_fired <= 30);
        assert_eq!(session.ammo_left, 30 - session.interceptors_fired);
        assert_eq!(session.score, session.adversarials_destroyed * 100);
    }

    #[test]
    fn test_autopilot_scores_points() {
        let mut engine = engine(7);
        let report = run(&mut engine, 7, &HeadlessOptions::default());
        assert!(report.sessions[0].score > 0, "the bot should hit something");
    }

    #[test]
    fn test_without_autopilot_nothing_is_fired() {
        let mut engine = engine(7);
        let options = HeadlessOptions {
            autopilot: false,
            ..Default::default()
        };
        let report = run(&mut engine, 7, &options);
        assert_eq!(report.sessions[0].interceptors_fired, 0);
        assert_eq!(report.sessions[0].score, 0);
    }

    #[test]
    fn test_multiple_sessions_restart() {
        let mut engine = engine(3);
        let options = HeadlessOptions {
            sessions: 3,
            ..Default::default()
        };
        let report = run(&mut engine, 3, &options);
        assert_eq!(report.sessions.len(), 3);
        let numbers: Vec<u32> = report.sessions.iter().map(|s| s.session).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(report.sessions.iter().all(|s| s.cause.is_some()));
    }

    #[test]
    fn test_tick_budget_cuts_session() {
        let mut engine = engine(3);
        let options = HeadlessOptions {
            max_ticks: 120,
            ..Default::default()
        };
        let report = run(&mut engine, 3, &options);
        assert_eq!(report.total_ticks, 120);
        assert_eq!(report.sessions.len(), 1);
        assert_eq!(report.sessions[0].cause, None);
        assert_eq!(report.sessions[0].ticks, 120);
        assert_eq!(report.sessions[0].sites_remaining, 6);
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = run(&mut engine(99), 99, &HeadlessOptions::default());
        let b = run(&mut engine(99), 99, &HeadlessOptions::default());
        assert_eq!(a.sessions, b.sessions);
    }
}
