//! Concurrent key-press runner
//!
//! Owns one executor per [`KeyTask`]. Every executor waits on its own
//! interval and on a cancellation signal shared by the whole run; on each
//! tick it injects its target through the [`KeyInjector`] port.
//!
//! Cancellation is broadcast once: the run holds the only
//! [`watch::Sender`], and dropping it wakes every executor at the same time.
//! [`Runner::stop`] returns only after all executors have exited, so no key
//! event is sent after it resolves.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, info_span, trace, warn, Instrument};

use crate::domain::keys::{KeyTarget, KeyTask};
use crate::domain::runner::RunnerState;

use super::ports::KeyInjector;

/// State guarded by the runner mutex. Executors never touch it.
#[derive(Default)]
struct RunState {
    state: RunnerState,
    cancel: Option<watch::Sender<()>>,
    executors: Vec<JoinHandle<()>>,
}

/// Drives independent periodic key presses.
pub struct Runner {
    injector: Arc<dyn KeyInjector>,
    run: Mutex<RunState>,
}

impl Runner {
    /// Create an idle runner that injects through `injector`
    pub fn new(injector: Arc<dyn KeyInjector>) -> Self {
        Self {
            injector,
            run: Mutex::new(RunState::default()),
        }
    }

    // The lock is never held across an await, so a poisoned guard is still consistent.
    fn lock(&self) -> MutexGuard<'_, RunState> {
        self.run.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start one executor per task and return immediately.
    ///
    /// Does nothing if a run is already in progress. Must be called from
    /// within a tokio runtime.
    pub fn start(&self, tasks: Vec<KeyTask>) {
        let mut run = self.lock();
        if run.state.is_running() {
            debug!("start ignored: runner already running");
            return;
        }

        let (cancel_tx, cancel_rx) = watch::channel(());
        let executors: Vec<JoinHandle<()>> = tasks
            .into_iter()
            .enumerate()
            .map(|(index, task)| {
                let span = info_span!("executor", index, target = %task.target);
                tokio::spawn(
                    run_executor(task, Arc::clone(&self.injector), cancel_rx.clone())
                        .instrument(span),
                )
            })
            .collect();

        info!(tasks = executors.len(), "runner started");
        run.executors = executors;
        run.cancel = Some(cancel_tx);
        run.state = RunnerState::Running;
    }

    /// Cancel every executor and wait until all of them have exited.
    ///
    /// Does nothing if the runner is idle. The runner reports idle as soon
    /// as cancellation is signalled, before the join completes.
    pub async fn stop(&self) {
        let (cancel, executors) = {
            let mut run = self.lock();
            if !run.state.is_running() {
                debug!("stop ignored: runner idle");
                return;
            }
            run.state = RunnerState::Idle;
            (run.cancel.take(), std::mem::take(&mut run.executors))
        };

        drop(cancel);

        let count = executors.len();
        for executor in executors {
            if let Err(e) = executor.await {
                warn!(error = %e, "executor ended abnormally");
            }
        }
        info!(tasks = count, "runner stopped");
    }

    /// Whether a run is in progress
    pub fn is_running(&self) -> bool {
        self.lock().state.is_running()
    }

    /// Current lifecycle state
    pub fn state(&self) -> RunnerState {
        self.lock().state
    }

    /// Number of executors owned by the current run
    pub fn active_tasks(&self) -> usize {
        self.lock().executors.len()
    }
}

/// Executor loop for one task.
///
/// The first press happens one interval after start. Ticks that fall due
/// while an injection is still running are skipped, never replayed.
async fn run_executor(
    task: KeyTask,
    injector: Arc<dyn KeyInjector>,
    mut cancel: watch::Receiver<()>,
) {
    if task.interval.is_zero() {
        warn!("zero interval, executor not started");
        return;
    }

    let mut ticker = time::interval_at(Instant::now() + task.interval, task.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            // Nothing is ever sent; this resolves only when the sender is dropped.
            _ = cancel.changed() => break,
            _ = ticker.tick() => press_once(task.target, &injector).await,
        }
    }
    debug!("executor exited");
}

/// One tick. Failures and panics stay inside this call.
async fn press_once(target: KeyTarget, injector: &Arc<dyn KeyInjector>) {
    let injector = Arc::clone(injector);
    match tokio::spawn(async move { injector.inject(target).await }).await {
        Ok(Ok(())) => trace!("key injected"),
        Ok(Err(e)) => debug!(error = %e, "injection failed"),
        Err(e) => warn!(error = %e, "injection panicked"),
    }
}
