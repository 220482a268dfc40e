//! Game loop thread — runs the director at a fixed rate.
//!
//! The director is created inside the thread because it's cleaner for
//! ownership. Commands arrive via an `mpsc` channel; every frame's
//! snapshot goes out on another. A frontend renders snapshots and
//! feeds commands; the core never blocks on it.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use nightswarm_core::commands::PlayerCommand;
use nightswarm_core::constants::TICK_RATE;
use nightswarm_core::state::FrameSnapshot;
use nightswarm_core::types::FrameTime;

use crate::director::{DirectorConfig, GameDirector};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the frontend to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the director.
    Player(PlayerCommand),
    /// Shut down the game loop thread.
    Shutdown,
}

/// The frontend's ends of the loop channels.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub snapshots: mpsc::Receiver<FrameSnapshot>,
}

/// Spawn the game loop in a new thread and return its channel handle.
pub fn spawn_game_loop(config: DirectorConfig) -> GameLoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snapshot_tx, snapshot_rx) = mpsc::channel::<FrameSnapshot>();

    std::thread::Builder::new()
        .name("nightswarm-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, snapshot_tx);
        })
        .expect("Failed to spawn game loop thread");

    GameLoopHandle {
        commands: cmd_tx,
        snapshots: snapshot_rx,
    }
}

/// The loop itself. Runs until Shutdown, channel disconnect, or the
/// director stopping (Quit).
fn run_game_loop(
    config: DirectorConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<FrameSnapshot>,
) {
    let mut director = GameDirector::new(config);
    let started = Instant::now();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(command)) => director.queue_command(command),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame on the monotonic clock
        let now_ms = started.elapsed().as_millis() as u64;
        let snapshot = director.tick(FrameTime::new(now_ms, TICK_DURATION.as_secs_f32()));

        // 3. Emit the snapshot; a dropped receiver ends the loop
        if snapshot_tx.send(snapshot).is_err() {
            return;
        }
        if !director.is_running() {
            return;
        }

        // 4. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
