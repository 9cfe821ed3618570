//! TestRun - lifecycle of one timed exercise attempt.
//!
//! All state lives behind one mutex. The countdown and the elapsed-time
//! ticker are the only asynchronous writers; each checks its cancel token
//! under that mutex before touching state, and every path that retires a
//! timer cancels it while holding the same mutex. A stale timer therefore
//! can never mutate a run that has moved on.
//!
//! Snapshots are sent after the state mutex is released. A second mutex,
//! taken before that release, keeps them in the order the state changed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::Instant;

use super::snapshots::SnapshotListener;
use super::timers::{CancelToken, ScheduledTask};
use crate::application::completion::CompletionRecorder;
use crate::domain::feat::{Feat, DEFAULT_DURATION_MINUTES};
use crate::domain::foundation::StateMachine;
use crate::domain::test_run::{milestone_for, TestPhase, TestRunSnapshot};
use crate::ports::Clock;

pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 3;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);
/// Shorter tick intervals are raised to this.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

/// Timing knobs for a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestRunSettings {
    /// Seconds used by [`TestRun::start_default_countdown`].
    pub countdown_seconds: u32,
    /// How often the ticker refreshes elapsed time and checks expiry.
    pub tick_interval: Duration,
}

impl TestRunSettings {
    fn normalized(self) -> Self {
        Self {
            tick_interval: self.tick_interval.max(MIN_TICK_INTERVAL),
            ..self
        }
    }
}

impl Default for TestRunSettings {
    fn default() -> Self {
        Self {
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

#[derive(Debug)]
struct RunState {
    feat: Option<Feat>,
    phase: TestPhase,
    rep_count: u32,
    // Start of the current active segment and the elapsed time carried
    // into it from before the last pause.
    segment_start: Option<Instant>,
    carried: Duration,
    elapsed: Duration,
    paused_elapsed: Duration,
    last_milestone: Option<u32>,
    test_duration: Duration,
    countdown: Option<ScheduledTask>,
    ticker: Option<ScheduledTask>,
}

impl RunState {
    fn new() -> Self {
        Self {
            feat: None,
            phase: TestPhase::Ready,
            rep_count: 0,
            segment_start: None,
            carried: Duration::ZERO,
            elapsed: Duration::ZERO,
            paused_elapsed: Duration::ZERO,
            last_milestone: None,
            test_duration: Duration::from_secs(u64::from(DEFAULT_DURATION_MINUTES) * 60),
            countdown: None,
            ticker: None,
        }
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        match self.segment_start {
            Some(start) => self.carried + now.saturating_duration_since(start),
            None => self.elapsed,
        }
    }

    /// Moves to `target` if the edge exists. Returns whether it moved.
    fn set_phase(&mut self, target: TestPhase) -> bool {
        match self.phase.transition_to(target) {
            Ok(next) => {
                tracing::debug!(from = %self.phase, to = %next, "Test phase transition");
                self.phase = next;
                true
            }
            Err(e) => {
                tracing::debug!(phase = %self.phase, error = %e, "Ignoring invalid transition");
                false
            }
        }
    }

    fn cancel_countdown(&mut self) {
        if let Some(task) = self.countdown.take() {
            task.cancel();
        }
    }

    fn cancel_ticker(&mut self) {
        if let Some(task) = self.ticker.take() {
            task.cancel();
        }
    }

    fn snapshot(&self) -> TestRunSnapshot {
        TestRunSnapshot {
            feat_id: self.feat.as_ref().map(|f| f.id.clone()),
            movement: self.feat.as_ref().map(|f| f.movement.clone()),
            phase: self.phase,
            rep_count: self.rep_count,
            elapsed: self.elapsed,
            paused_elapsed: self.paused_elapsed,
            test_duration: self.test_duration,
            last_milestone: self.last_milestone,
        }
    }
}

struct Shared {
    state: Mutex<RunState>,
    clock: Arc<dyn Clock>,
    recorder: Option<CompletionRecorder>,
    settings: TestRunSettings,
    runtime: Option<Handle>,
    snapshots: watch::Sender<TestRunSnapshot>,
    publish_order: Mutex<()>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, RunState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Releases `state` and sends the snapshot taken while it was held.
    fn publish(&self, state: MutexGuard<'_, RunState>) {
        let snapshot = state.snapshot();
        let _order = self.publish_order.lock().unwrap_or_else(PoisonError::into_inner);
        drop(state);
        self.snapshots.send_replace(snapshot);
    }

    fn runtime(&self) -> Option<Handle> {
        self.runtime.clone().or_else(|| Handle::try_current().ok())
    }

    fn reset_locked(&self, state: &mut RunState) {
        state.cancel_countdown();
        state.cancel_ticker();
        state.rep_count = 0;
        state.segment_start = None;
        state.carried = Duration::ZERO;
        state.elapsed = Duration::ZERO;
        state.paused_elapsed = Duration::ZERO;
        state.last_milestone = None;
        state.set_phase(TestPhase::Ready);
    }

    fn start_test_locked(self: &Arc<Self>, state: &mut RunState) -> bool {
        if !matches!(state.phase, TestPhase::Ready | TestPhase::Countdown { .. }) {
            tracing::debug!(phase = %state.phase, "Ignoring start outside Ready/Countdown");
            return false;
        }
        if !state.set_phase(TestPhase::Active) {
            return false;
        }

        state.cancel_countdown();
        state.cancel_ticker();
        state.rep_count = 0;
        state.carried = Duration::ZERO;
        state.elapsed = Duration::ZERO;
        state.paused_elapsed = Duration::ZERO;
        state.segment_start = Some(self.clock.now());
        self.spawn_ticker(state);
        true
    }

    /// Moves to `Complete` and hands the result to the recorder.
    ///
    /// Only `Active` and `Paused` can complete, so a run is recorded at
    /// most once between resets.
    fn complete_locked(&self, state: &mut RunState) -> bool {
        let was_active = state.phase.is_active();
        let target = TestPhase::Complete {
            final_rep_count: state.rep_count,
        };
        if !state.set_phase(target) {
            return false;
        }

        if was_active {
            state.elapsed = state.elapsed_at(self.clock.now());
        }
        state.cancel_ticker();
        state.cancel_countdown();

        tracing::info!(
            feat_id = ?state.feat.as_ref().map(|f| f.id.as_str()),
            rep_count = state.rep_count,
            elapsed_ms = state.elapsed.as_millis() as u64,
            "Test run complete"
        );

        if let (Some(recorder), Some(feat)) = (self.recorder.clone(), state.feat.as_ref()) {
            let feat_id = feat.id.clone();
            let rep_count = state.rep_count;
            let duration = state.elapsed;
            match self.runtime() {
                Some(runtime) => {
                    runtime.spawn(async move {
                        recorder.record(feat_id, rep_count, duration).await;
                    });
                }
                None => tracing::warn!(feat_id = %feat_id, "No Tokio runtime, completion not recorded"),
            }
        }
        true
    }

    fn spawn_countdown(self: &Arc<Self>, state: &mut RunState, seconds: u32) {
        let Some(runtime) = self.runtime() else {
            tracing::warn!("No Tokio runtime, countdown not scheduled");
            return;
        };
        let weak = Arc::downgrade(self);
        let clock = self.clock.clone();
        state.countdown = Some(ScheduledTask::spawn(&runtime, move |token| {
            run_countdown(weak, clock, token, seconds)
        }));
    }

    fn spawn_ticker(self: &Arc<Self>, state: &mut RunState) {
        let Some(runtime) = self.runtime() else {
            tracing::warn!("No Tokio runtime, ticker not scheduled");
            return;
        };
        let weak = Arc::downgrade(self);
        let clock = self.clock.clone();
        let interval = self.settings.tick_interval;
        state.ticker = Some(ScheduledTask::spawn(&runtime, move |token| {
            run_ticker(weak, clock, token, interval)
        }));
    }
}

async fn run_countdown(weak: Weak<Shared>, clock: Arc<dyn Clock>, token: CancelToken, seconds: u32) {
    let mut remaining = seconds;
    loop {
        clock.sleep(COUNTDOWN_STEP).await;

        {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut state = shared.lock();
            if token.is_cancelled() {
                return;
            }

            remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                shared.start_test_locked(&mut state);
                shared.publish(state);
                return;
            }
            state.set_phase(TestPhase::Countdown { remaining });
            shared.publish(state);
        }
    }
}

async fn run_ticker(weak: Weak<Shared>, clock: Arc<dyn Clock>, token: CancelToken, interval: Duration) {
    loop {
        {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut state = shared.lock();
            if token.is_cancelled() || !state.phase.is_active() {
                return;
            }

            state.elapsed = state.elapsed_at(clock.now());
            if state.elapsed >= state.test_duration {
                shared.complete_locked(&mut state);
                shared.publish(state);
                return;
            }
            shared.publish(state);
        }

        clock.sleep(interval).await;
    }
}

/// State machine for a single timed attempt.
///
/// ```text
/// configure ─> Ready ─start_countdown─> Countdown(n..1) ─> Active <─> Paused
///                 └──────────start_test────────────────────┘  │         │
///                                          complete/expiry ─> Complete <┘
/// ```
///
/// Operations are total: calling one from a phase where it does not apply
/// is a silent no-op. Timers and background recording run on the Tokio
/// runtime the run was created on, so any thread may drive it.
pub struct TestRun {
    shared: Arc<Shared>,
}

impl TestRun {
    /// Creates a run in `Ready` bound to the current Tokio runtime, if any.
    ///
    /// Without a recorder, completions are not persisted.
    pub fn new(clock: Arc<dyn Clock>, recorder: Option<CompletionRecorder>, settings: TestRunSettings) -> Self {
        Self::build(Handle::try_current().ok(), clock, recorder, settings)
    }

    /// Creates a run whose timers are spawned on `runtime`.
    pub fn with_runtime(
        runtime: Handle,
        clock: Arc<dyn Clock>,
        recorder: Option<CompletionRecorder>,
        settings: TestRunSettings,
    ) -> Self {
        Self::build(Some(runtime), clock, recorder, settings)
    }

    fn build(
        runtime: Option<Handle>,
        clock: Arc<dyn Clock>,
        recorder: Option<CompletionRecorder>,
        settings: TestRunSettings,
    ) -> Self {
        let state = RunState::new();
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                clock,
                recorder,
                settings: settings.normalized(),
                runtime,
                snapshots,
                publish_order: Mutex::new(()),
            }),
        }
    }

    /// Binds the run to `feat` and resets it.
    pub fn configure(&self, feat: Feat) {
        let mut state = self.shared.lock();
        tracing::debug!(feat_id = %feat.id, test_duration_secs = feat.test_duration().as_secs(), "Configuring test run");
        state.test_duration = feat.test_duration();
        state.feat = Some(feat);
        self.shared.reset_locked(&mut state);
        self.shared.publish(state);
    }

    /// Starts a countdown of `seconds`, replacing any countdown in flight.
    ///
    /// Shows `seconds, seconds-1, .., 1`, one per second, then starts the
    /// test. Zero starts the test immediately.
    pub fn start_countdown(&self, seconds: u32) {
        let mut state = self.shared.lock();
        if seconds == 0 {
            state.cancel_countdown();
            if self.shared.start_test_locked(&mut state) {
                self.shared.publish(state);
            }
            return;
        }

        if !state.set_phase(TestPhase::Countdown { remaining: seconds }) {
            return;
        }
        state.cancel_countdown();
        self.shared.spawn_countdown(&mut state, seconds);
        self.shared.publish(state);
    }

    /// Starts a countdown using the configured default length.
    pub fn start_default_countdown(&self) {
        self.start_countdown(self.shared.settings.countdown_seconds);
    }

    /// Enters `Active` from `Ready` or `Countdown` and starts the ticker.
    pub fn start_test(&self) {
        let mut state = self.shared.lock();
        if self.shared.start_test_locked(&mut state) {
            self.shared.publish(state);
        }
    }

    pub fn increment_rep(&self) {
        let mut state = self.shared.lock();
        if !state.phase.is_active() {
            return;
        }
        state.rep_count = state.rep_count.saturating_add(1);
        if let Some(milestone) = milestone_for(state.rep_count) {
            tracing::debug!(milestone, "Rep milestone reached");
            state.last_milestone = Some(milestone);
        }
        self.shared.publish(state);
    }

    pub fn decrement_rep(&self) {
        let mut state = self.shared.lock();
        if !state.phase.is_active() || state.rep_count == 0 {
            return;
        }
        state.rep_count -= 1;
        self.shared.publish(state);
    }

    /// Freezes elapsed time and stops the ticker. Only valid while `Active`.
    pub fn pause_test(&self) {
        let mut state = self.shared.lock();
        if !state.phase.is_active() {
            return;
        }
        let elapsed = state.elapsed_at(self.shared.clock.now());
        if !state.set_phase(TestPhase::Paused) {
            return;
        }
        state.elapsed = elapsed;
        state.paused_elapsed = elapsed;
        state.cancel_ticker();
        self.shared.publish(state);
    }

    /// Continues from the frozen elapsed time. Only valid while `Paused`.
    pub fn resume_test(&self) {
        let mut state = self.shared.lock();
        if state.phase != TestPhase::Paused {
            return;
        }
        if !state.set_phase(TestPhase::Active) {
            return;
        }
        state.carried = state.paused_elapsed;
        state.elapsed = state.paused_elapsed;
        state.segment_start = Some(self.shared.clock.now());
        self.shared.spawn_ticker(&mut state);
        self.shared.publish(state);
    }

    /// Finishes the attempt from `Active` or `Paused`.
    ///
    /// Persistence happens in the background; the phase is `Complete` when
    /// this returns.
    pub fn complete_test(&self) {
        let mut state = self.shared.lock();
        if self.shared.complete_locked(&mut state) {
            self.shared.publish(state);
        }
    }

    /// Cancels all timers and returns to `Ready`, keeping the feat.
    pub fn reset(&self) {
        let mut state = self.shared.lock();
        self.shared.reset_locked(&mut state);
        self.shared.publish(state);
    }

    /// Listener that sees a fresh snapshot after every change.
    pub fn subscribe(&self) -> SnapshotListener {
        SnapshotListener::new(self.shared.snapshots.subscribe())
    }

    pub fn snapshot(&self) -> TestRunSnapshot {
        self.shared.lock().snapshot()
    }

    pub fn phase(&self) -> TestPhase {
        self.shared.lock().phase
    }

    pub fn is_active(&self) -> bool {
        self.phase().is_active()
    }

    pub fn rep_count(&self) -> u32 {
        self.shared.lock().rep_count
    }

    pub fn elapsed(&self) -> Duration {
        self.shared.lock().elapsed
    }

    pub fn paused_elapsed(&self) -> Duration {
        self.shared.lock().paused_elapsed
    }

    /// Baseline such that `now - start_time` is the active elapsed time.
    /// Pauses shift it forward. `None` until the test starts.
    pub fn start_time(&self) -> Option<Instant> {
        let state = self.shared.lock();
        state
            .segment_start
            .map(|start| start.checked_sub(state.carried).unwrap_or(start))
    }

    pub fn last_milestone(&self) -> Option<u32> {
        self.shared.lock().last_milestone
    }

    pub fn test_duration(&self) -> Duration {
        self.shared.lock().test_duration
    }

    pub fn feat(&self) -> Option<Feat> {
        self.shared.lock().feat.clone()
    }

    pub fn settings(&self) -> TestRunSettings {
        self.shared.settings
    }
}

impl std::fmt::Debug for TestRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestRun").field("snapshot", &self.snapshot()).finish()
    }
}
