//! Frame loop thread: advances the engine by wall-clock deltas.
//!
//! The engine is moved into the loop thread, which owns it from then on.
//! Commands arrive via an `mpsc` channel. Each frame's report goes to the
//! console sink and the latest snapshot is stored in shared state for polling.
//! A console reader turns text lines into commands and `supervise` forwards
//! them to the loop.

use std::io::{BufRead, BufReader, Read};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use coastwatch_core::types::SimTime;
use coastwatch_sim::clock::FrameClock;
use coastwatch_sim::{EventSink, SimulationEngine};

use crate::config::DriverConfig;
use crate::console::ConsoleSink;
use crate::error::{AppError, Result};
use crate::state::{LoopCommand, SharedDisplay};

/// Upper bound on one frame's simulated delta, so a stalled host does not
/// teleport vessels through the detection ranges.
pub const MAX_FRAME_DELTA_MS: f64 = 250.0;

/// Upper bound for `SetTimeScale`.
pub const MAX_TIME_SCALE: f64 = 16.0;

/// How often `supervise` checks whether the loop has exited.
const SUPERVISE_POLL: Duration = Duration::from_millis(50);

/// Controller side of a running loop.
pub struct LoopHandle {
    commands: mpsc::Sender<LoopCommand>,
    thread: JoinHandle<()>,
}

impl LoopHandle {
    /// Queue a command. Returns false if the loop has already exited.
    pub fn send(&self, command: LoopCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the loop to end on its own (duration reached).
    pub fn join(self) -> Result<()> {
        self.thread.join().map_err(|_| AppError::Join)
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> Result<()> {
        let _ = self.commands.send(LoopCommand::Shutdown);
        self.join()
    }
}

/// Spawn the frame loop in a new thread.
pub fn spawn_sim_loop(
    engine: SimulationEngine,
    driver: DriverConfig,
    display: SharedDisplay,
) -> Result<LoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let thread = std::thread::Builder::new()
        .name("coastwatch-sim-loop".into())
        .spawn(move || run_sim_loop(engine, &driver, cmd_rx, &display))
        .map_err(AppError::Spawn)?;

    Ok(LoopHandle {
        commands: cmd_tx,
        thread,
    })
}

fn publish(engine: &SimulationEngine, display: &SharedDisplay) {
    if let Ok(mut state) = display.lock() {
        state.snapshot = Some(engine.snapshot());
    }
}

fn duration_reached(time: SimTime, driver: &DriverConfig) -> bool {
    driver
        .duration_ms()
        .is_some_and(|limit| time.elapsed_ms >= limit)
}

/// The frame loop. Runs until Shutdown, channel disconnect, or the configured duration.
fn run_sim_loop(
    mut engine: SimulationEngine,
    driver: &DriverConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    display: &SharedDisplay,
) {
    let frame = Duration::from_secs_f64(1.0 / driver.frame_rate_hz);
    let started = Instant::now();
    let mut clock = FrameClock::new();
    let mut sink = ConsoleSink::new(display.clone());
    let mut time_scale = driver.time_scale;
    let mut paused = false;
    let mut next_frame = Instant::now();

    tracing::info!(
        frame_rate_hz = driver.frame_rate_hz,
        time_scale,
        "simulation loop started"
    );

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::SetTimeScale { scale }) => {
                    time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                }
                Ok(LoopCommand::Pause) => paused = true,
                Ok(LoopCommand::Resume) => paused = false,
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Wall-clock delta; consumed even while paused so resuming does not jump
        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        let delta_ms = clock.delta(now_ms).min(MAX_FRAME_DELTA_MS);

        // 3. Advance and publish
        if !paused {
            engine.advance_into(delta_ms * time_scale, &mut sink);
            publish(&engine, display);
            if duration_reached(engine.time(), driver) {
                tracing::info!(elapsed_ms = engine.time().elapsed_ms, "duration reached");
                return;
            }
        }

        // 4. Sleep until next frame
        next_frame += frame;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else if now - next_frame > frame * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_frame = now;
        }
    }
}

/// Read console commands line by line and send them to `commands`.
///
/// Unparseable lines are reported and skipped. The reader stops at end of
/// input or once the receiving side is gone.
pub fn spawn_command_reader<R>(input: R, commands: mpsc::Sender<LoopCommand>) -> Result<JoinHandle<()>>
where
    R: Read + Send + 'static,
{
    std::thread::Builder::new()
        .name("coastwatch-console".into())
        .spawn(move || {
            for line in BufReader::new(input).lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<LoopCommand>() {
                    Ok(command) => {
                        if commands.send(command).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!("{e}"),
                }
            }
        })
        .map_err(AppError::Spawn)
}

/// Forward commands to a running loop until it reaches its duration or a
/// `Shutdown` arrives. Closing the command channel leaves the loop running
/// to its duration.
pub fn supervise(handle: LoopHandle, commands: &mpsc::Receiver<LoopCommand>) -> Result<()> {
    while !handle.is_finished() {
        match commands.recv_timeout(SUPERVISE_POLL) {
            Ok(LoopCommand::Shutdown) => {
                tracing::info!("shutdown requested");
                return handle.shutdown();
            }
            Ok(command) => {
                tracing::info!(?command, "console command");
                if !handle.send(command) {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
    handle.join()
}

/// Fast-forward without sleeping: fixed steps of one frame times the time scale
/// until the configured duration. Returns the final simulation time.
pub fn run_headless(
    engine: &mut SimulationEngine,
    driver: &DriverConfig,
    sink: &mut dyn EventSink,
) -> Result<SimTime> {
    let Some(limit) = driver.duration_ms() else {
        return Err(AppError::Driver(
            "headless mode needs a duration (--duration or driver.duration_secs)".into(),
        ));
    };
    let step = driver.frame_ms() * driver.time_scale;
    if step <= 0.0 {
        return Err(AppError::Driver("headless mode needs a positive time scale".into()));
    }

    while engine.time().elapsed_ms < limit {
        engine.advance_into(step, sink);
    }
    Ok(engine.time())
}
