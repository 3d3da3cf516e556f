use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use skyguard_app::autopilot::Autopilot;
use skyguard_app::config::load_rules;
use skyguard_app::game_loop::{spawn_game_loop, TICK_DURATION};
use skyguard_app::headless::{self, HeadlessOptions};
use skyguard_app::state::{new_shared_snapshot, GameLoopCommand};
use skyguard_core::commands::PlayerCommand;
use skyguard_core::constants::DEFAULT_SEED;
use skyguard_core::enums::GamePhase;
use skyguard_sim::{SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(name = "skyguard")]
#[command(about = "Missile-defense simulation driver")]
struct Cli {
    /// RNG seed for adversarial spawns
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// JSON file overriding the default game rules
    #[arg(long, global = true)]
    rules: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run fixed-step sessions as fast as possible and print a JSON report
    Headless {
        #[arg(long, default_value_t = 36_000)]
        ticks: u64,
        #[arg(long, default_value_t = 1)]
        sessions: u32,
        /// Leave the battery idle instead of firing automatically
        #[arg(long)]
        no_autopilot: bool,
    },
    /// Run the 60Hz loop thread for a wall-clock duration
    Realtime {
        #[arg(long, default_value_t = 30)]
        seconds: u64,
        #[arg(long)]
        no_autopilot: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rules = load_rules(cli.rules.as_deref())?;
    let config = SimConfig {
        seed: cli.seed,
        rules,
    };

    match cli.command {
        Commands::Headless {
            ticks,
            sessions,
            no_autopilot,
        } => {
            let mut engine = SimulationEngine::try_new(config)?;
            let options = HeadlessOptions {
                max_ticks: ticks,
                sessions,
                autopilot: !no_autopilot,
            };
            let report = headless::run(&mut engine, cli.seed, &options);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Realtime {
            seconds,
            no_autopilot,
        } => run_realtime(config, Duration::from_secs(seconds), !no_autopilot)?,
    }

    Ok(())
}

fn run_realtime(config: SimConfig, duration: Duration, autopilot: bool) -> Result<()> {
    let rules = config.rules.clone();
    let engine = SimulationEngine::try_new(config)?;
    let shared = new_shared_snapshot();
    let (tx, handle) =
        spawn_game_loop(engine, shared.clone()).context("failed to spawn game loop thread")?;

    tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Start))
        .map_err(|_| anyhow!("game loop exited before start"))?;

    let mut pilot = Autopilot::default();
    let mut last_seen = None;
    let deadline = Instant::now() + duration;

    while Instant::now() < deadline {
        std::thread::sleep(TICK_DURATION);

        let snap = match shared.lock() {
            Ok(lock) => lock.clone(),
            Err(_) => break,
        };
        let Some(snap) = snap else { continue };
        if last_seen == Some(snap.time.tick) {
            continue;
        }
        last_seen = Some(snap.time.tick);

        let command = match snap.phase {
            GamePhase::GameOver => {
                log::info!("game over with score {}, restarting", snap.hud.score);
                Some(PlayerCommand::Restart)
            }
            GamePhase::Running if autopilot => pilot.plan(&rules, &snap),
            _ => None,
        };
        if let Some(cmd) = command {
            if tx.send(GameLoopCommand::PlayerCommand(cmd)).is_err() {
                break;
            }
        }
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
    handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    let final_snapshot = shared
        .lock()
        .map_err(|_| anyhow!("snapshot lock poisoned"))?
        .clone();
    if let Some(snap) = final_snapshot {
        println!("{}", serde_json::to_string_pretty(&snap.hud)?);
    }
    Ok(())
}
