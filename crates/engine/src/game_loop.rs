//! Frame-paced game loop on a dedicated thread.
//!
//! The loop repeatedly runs a [`RenderPass`], measures how long it took and
//! parks for whatever remains of the frame budget (never less than
//! [`FrameTiming::min_sleep_ms`]). Cancellation is cooperative: [`LoopHandle::stop`]
//! flips the shared lifecycle to `Stopped` and wakes the thread, which exits at
//! the next iteration boundary.
//!
//! Lifecycle: `Idle -> Running -> Stopped`. `Stopped` is terminal.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle, Thread};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::error::EngineError;
use crate::types::{FRAME_MS, MIN_SLEEP_MS};

/// One unit of work per frame.
pub trait RenderPass {
    fn render_pass(&mut self) -> Result<()>;
}

impl<F: FnMut() -> Result<()>> RenderPass for F {
    fn render_pass(&mut self) -> Result<()> {
        self()
    }
}

/// Frame budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTiming {
    pub target_frame_ms: u64,
    pub min_sleep_ms: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self {
            target_frame_ms: FRAME_MS,
            min_sleep_ms: MIN_SLEEP_MS,
        }
    }
}

impl FrameTiming {
    /// Sleep after a pass that took `elapsed_ms`: `max(min_sleep, target - elapsed)`.
    pub fn sleep_for(&self, elapsed_ms: u64) -> u64 {
        self.target_frame_ms
            .saturating_sub(elapsed_ms)
            .max(self.min_sleep_ms)
    }

    pub fn sleep_duration(&self, elapsed: Duration) -> Duration {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(self.sleep_for(elapsed_ms))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LoopState {
    Idle = 0,
    Running = 1,
    Stopped = 2,
}

impl LoopState {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => LoopState::Idle,
            1 => LoopState::Running,
            _ => LoopState::Stopped,
        }
    }
}

/// Frame statistics returned when the loop thread exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopReport {
    pub frames: u64,
    /// Sleeps that ended before their deadline while the loop was still running.
    pub interrupted_sleeps: u64,
    pub last_frame_ms: u64,
}

#[derive(Debug)]
struct LoopShared {
    state: AtomicU8,
    thread: OnceLock<Thread>,
}

impl LoopShared {
    fn state(&self) -> LoopState {
        LoopState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    fn wake(&self) {
        if let Some(t) = self.thread.get() {
            t.unpark();
        }
    }
}

/// Cheap, clonable control over a [`GameLoop`] from any thread.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    shared: Arc<LoopShared>,
}

impl LoopHandle {
    pub fn state(&self) -> LoopState {
        self.shared.state()
    }

    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    /// Request the loop to stop. Idempotent.
    pub fn stop(&self) {
        let prev = self
            .shared
            .state
            .swap(LoopState::Stopped as u8, Ordering::AcqRel);
        if LoopState::from_u8(prev) == LoopState::Running {
            log::info!("game loop stop requested");
        }
        self.shared.wake();
    }

    /// Cut the current frame sleep short without stopping the loop.
    pub fn interrupt(&self) {
        self.shared.wake();
    }
}

/// Owns the loop thread.
#[derive(Debug)]
pub struct GameLoop {
    timing: FrameTiming,
    shared: Arc<LoopShared>,
    handle: Option<JoinHandle<Result<LoopReport, EngineError>>>,
}

impl GameLoop {
    pub fn new(timing: FrameTiming) -> Self {
        Self {
            timing,
            shared: Arc::new(LoopShared {
                state: AtomicU8::new(LoopState::Idle as u8),
                thread: OnceLock::new(),
            }),
            handle: None,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    pub fn state(&self) -> LoopState {
        self.shared.state()
    }

    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    pub fn stop(&self) {
        self.handle().stop();
    }

    /// Move `pass` onto a new `game-loop` thread and start pacing it.
    pub fn start<P>(&mut self, pass: P) -> Result<(), EngineError>
    where
        P: RenderPass + Send + 'static,
    {
        if let Err(current) = self.shared.state.compare_exchange(
            LoopState::Idle as u8,
            LoopState::Running as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            return Err(match LoopState::from_u8(current) {
                LoopState::Running => EngineError::AlreadyStarted,
                _ => EngineError::Stopped,
            });
        }

        let shared = Arc::clone(&self.shared);
        let timing = self.timing;
        let spawned = thread::Builder::new()
            .name("game-loop".into())
            .spawn(move || run(&shared, timing, pass));

        match spawned {
            Ok(handle) => {
                let _ = self.shared.thread.set(handle.thread().clone());
                self.handle = Some(handle);
                log::info!(
                    "game loop started (target {}ms, min sleep {}ms)",
                    timing.target_frame_ms,
                    timing.min_sleep_ms
                );
                Ok(())
            }
            Err(e) => {
                self.shared
                    .state
                    .store(LoopState::Stopped as u8, Ordering::Release);
                Err(EngineError::Spawn(e))
            }
        }
    }

    /// Wait for the loop thread to exit.
    ///
    /// Does not stop the loop by itself; call [`GameLoop::stop`] first (or
    /// from another thread) unless the pass is expected to fail.
    pub fn join(&mut self) -> Result<LoopReport, EngineError> {
        let handle = self.handle.take().ok_or(EngineError::NotStarted)?;
        handle.join().map_err(|_| EngineError::Panicked)?
    }

    pub fn stop_and_join(&mut self) -> Result<LoopReport, EngineError> {
        self.stop();
        self.join()
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.stop();
            let _ = handle.join();
        }
    }
}

enum Suspend {
    Completed,
    Interrupted,
    Cancelled,
}

fn run<P: RenderPass>(
    shared: &LoopShared,
    timing: FrameTiming,
    mut pass: P,
) -> Result<LoopReport, EngineError> {
    let mut report = LoopReport::default();

    while shared.is_running() {
        let started = Instant::now();
        if let Err(e) = pass.render_pass() {
            log::error!("render pass failed on frame {}: {:#}", report.frames, e);
            shared
                .state
                .store(LoopState::Stopped as u8, Ordering::Release);
            return Err(EngineError::RenderPass(e));
        }
        let elapsed = started.elapsed();
        report.frames += 1;
        report.last_frame_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

        match suspend(shared, timing.sleep_duration(elapsed)) {
            Suspend::Completed | Suspend::Cancelled => {}
            Suspend::Interrupted => report.interrupted_sleeps += 1,
        }
    }

    log::info!(
        "game loop exited after {} frames ({} interrupted sleeps)",
        report.frames,
        report.interrupted_sleeps
    );
    Ok(report)
}

fn suspend(shared: &LoopShared, duration: Duration) -> Suspend {
    let deadline = Instant::now() + duration;
    thread::park_timeout(duration);

    if !shared.is_running() {
        return Suspend::Cancelled;
    }
    let now = Instant::now();
    if now < deadline {
        log::warn!(
            "frame sleep interrupted {}ms early, continuing",
            (deadline - now).as_millis()
        );
        return Suspend::Interrupted;
    }
    Suspend::Completed
}
