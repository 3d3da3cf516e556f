//! Real-time loop thread: runs the simulation at 60Hz and publishes snapshots.
//!
//! The engine lives inside the thread. Commands arrive over an `mpsc`
//! channel and are queued for the next tick; the latest snapshot is stored
//! in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skyguard_core::constants::TICK_RATE;
use skyguard_sim::SimulationEngine;

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread, taking ownership of `engine`.
///
/// Build the engine with [`SimulationEngine::try_new`] so bad rules are
/// reported before the thread starts. Returns the command sender and the
/// thread handle; send [`GameLoopCommand::Shutdown`] (or drop the sender)
/// before joining.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyguard-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let epoch = Instant::now();
    let mut next_tick_time = epoch;

    log::info!("game loop started at {} Hz", TICK_RATE);

    loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shutting down at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.tick(now_ms);

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; skip ahead instead of bursting ticks.
            log::debug!("game loop fell behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }
}
