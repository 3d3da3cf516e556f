//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the game state machine and the
//! spawn clock, processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless: any driver (real-time loop,
//! fixed-step harness, test) calls `tick` with its own monotonic timestamp.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::commands::PlayerCommand;
use skyguard_core::constants::DEFAULT_SEED;
use skyguard_core::enums::{GameOverCause, GamePhase};
use skyguard_core::events::GameEvent;
use skyguard_core::rules::{GameRules, RulesError};
use skyguard_core::state::GameStateSnapshot;
use skyguard_core::types::{Position, SimTime};

use crate::game_state::GameState;
use crate::systems;
use crate::systems::kinematics::Arrival;
use crate::systems::spawner::SpawnClock;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub rules: GameRules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rules: GameRules::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    rules: GameRules,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    state: GameState,
    spawn_clock: SpawnClock,
    command_queue: VecDeque<PlayerCommand>,
    arrivals: Vec<Arrival>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// The engine starts Idle; call `start` (or queue `Start`) to play.
    /// The rules are trusted as-is; use `try_new` for rules loaded from
    /// outside the program.
    pub fn new(config: SimConfig) -> Self {
        let state = GameState::new(&config.rules);
        let spawn_clock = SpawnClock::new(&config.rules);
        Self {
            world: World::new(),
            rules: config.rules,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            state,
            spawn_clock,
            command_queue: VecDeque::new(),
            arrivals: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Like `new`, but rejects rules that cannot drive a session.
    pub fn try_new(config: SimConfig) -> Result<Self, RulesError> {
        config.rules.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick at driver time `now_ms` and return
    /// the resulting snapshot. Outside Running only queued commands are
    /// applied; nothing moves.
    pub fn tick(&mut self, now_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems(now_ms);
            self.time.advance(now_ms);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.rules,
            &self.time,
            self.phase,
            &self.state,
            events,
        )
    }

    /// Current state without advancing. Pending events stay queued.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.rules,
            &self.time,
            self.phase,
            &self.state,
            Vec::new(),
        )
    }

    /// Launch an interceptor toward `(x, y)`. Ignored unless Running with
    /// ammo left and a finite aim point; returns whether a launch happened.
    pub fn fire(&mut self, x: f64, y: f64) -> bool {
        if self.phase != GamePhase::Running || !x.is_finite() || !y.is_finite() {
            return false;
        }
        if !self.state.spend_ammo() {
            return false;
        }
        let target = Position::new(x, y);
        world_setup::spawn_interceptor(&mut self.world, &self.rules, target);
        self.events.push(GameEvent::InterceptorLaunched {
            target,
            ammo_left: self.state.ammo,
        });
        true
    }

    /// Begin a fresh run from Idle or GameOver. Ignored while Running.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Running {
            self.enter_running();
        }
    }

    /// Begin a fresh run after GameOver. Ignored in any other phase.
    pub fn restart(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.enter_running();
        }
    }

    /// Suspend the game back to Idle from Running or GameOver. Live
    /// entities are cleared; counters stay visible until the next `start`.
    pub fn stop(&mut self) {
        if self.phase != GamePhase::Idle {
            self.world.clear();
            self.phase = GamePhase::Idle;
            log::info!("session suspended at score {}", self.state.score);
        }
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Score, ammo and sites for the current run.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The spawn clock (interval ramp and last spawn time).
    pub fn spawn_clock(&self) -> SpawnClock {
        self.spawn_clock
    }

    /// Reset counters, sites and spawn ramp, and clear every live entity.
    pub(crate) fn reset(&mut self) {
        self.world.clear();
        self.state = GameState::new(&self.rules);
        self.spawn_clock = SpawnClock::new(&self.rules);
        self.time = SimTime::default();
        self.arrivals.clear();
    }

    /// Mutable world access for tests that place entities by hand.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Knock out sites without going through an impact (for tests that need
    /// the spawner to find no targets).
    #[cfg(test)]
    pub(crate) fn destroy_sites_silently(&mut self, sites: &[usize]) {
        for &site in sites {
            self.state.destroy_site(site);
        }
    }

    fn enter_running(&mut self) {
        self.reset();
        self.phase = GamePhase::Running;
        log::info!(
            "session started: {} sites, {} interceptors",
            self.state.sites_remaining,
            self.state.ammo
        );
    }

    fn enter_game_over(&mut self, cause: GameOverCause) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!("game over ({cause:?}) with score {}", self.state.score);
        self.events.push(GameEvent::GameOver {
            cause,
            score: self.state.score,
        });
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Fire { x, y } => {
                self.fire(x, y);
            }
            PlayerCommand::Start => self.start(),
            PlayerCommand::Stop => self.stop(),
            PlayerCommand::Restart => self.restart(),
        }
    }

    /// Run all systems in order. The pass always completes, even when a
    /// game-over is raised part-way through.
    fn run_systems(&mut self, now_ms: f64) {
        // 1. Spawner
        let spawn_over = systems::spawner::run(
            &mut self.world,
            &mut self.spawn_clock,
            now_ms,
            &self.rules,
            &self.state,
            &mut self.rng,
            &mut self.events,
        );
        if let Some(cause) = spawn_over {
            self.enter_game_over(cause);
        }

        // 2. Kinematics for both projectile kinds
        self.arrivals.clear();
        systems::kinematics::run(
            &mut self.world,
            &mut self.arrivals,
            &mut self.despawn_buffer,
        );

        // 3. Interceptor detonations
        systems::impact::detonate_interceptors(
            &mut self.world,
            &self.rules,
            &self.arrivals,
            &mut self.events,
        );

        // 4. Blasts vs adversarial projectiles
        systems::collision::run(
            &mut self.world,
            &self.rules,
            &mut self.state,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 5. Adversarial arrivals vs sites
        let impact_over = systems::impact::resolve_adversarial_arrivals(
            &mut self.world,
            &self.rules,
            &mut self.state,
            &self.arrivals,
            &mut self.events,
        );
        if let Some(cause) = impact_over {
            self.enter_game_over(cause);
        }
    }
}
