//! Rotation timers.
//!
//! Two tokio tasks, one per cycle, each sending a tick message to the main
//! loop on a fixed period.  They only send; all state changes happen where
//! the messages are received, one at a time.
//!
//! [`RotationTimers`] is an RAII guard: dropping it aborts both tasks, so a
//! teardown, an early return, or a configuration change that replaces the
//! guard can never leave a timer ticking against stale list lengths.
//!
//! ## For contributors
//!
//! Timers never fire immediately: the first tick arrives one full period
//! after [`RotationTimers::spawn`].  Tests drive them with tokio's paused
//! clock (`#[tokio::test(start_paused = true)]`).

use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::app::Effect;
use crate::config::Settings;
use crate::rotation::RotationMsg;

/// Periods for the two timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub slide_period: Duration,
    pub ad_period: Duration,
    /// Start the slide timer at all.  `false` when the state being driven has
    /// already lost autoplay.
    pub autoplay: bool,
}

impl Schedule {
    pub fn new(settings: &Settings, autoplay: bool) -> Self {
        Self {
            slide_period: settings.slide_period(),
            ad_period: settings.ad_period(),
            autoplay,
        }
    }
}

/// Handle to the running timer tasks.
#[derive(Debug)]
pub struct RotationTimers {
    slide: Option<JoinHandle<()>>,
    ad: JoinHandle<()>,
}

impl RotationTimers {
    /// Start both timers.  Must be called from inside a tokio runtime.
    pub fn spawn(schedule: Schedule, tx: UnboundedSender<RotationMsg>) -> Self {
        let slide = schedule.autoplay.then(|| {
            spawn_ticker(schedule.slide_period, RotationMsg::SlideTick, tx.clone())
        });
        let ad = spawn_ticker(schedule.ad_period, RotationMsg::AdTick, tx);

        tracing::debug!(
            slide_period_ms = schedule.slide_period.as_millis() as u64,
            ad_period_ms = schedule.ad_period.as_millis() as u64,
            autoplay = schedule.autoplay,
            "rotation timers started"
        );

        Self { slide, ad }
    }

    /// Cancel the slide timer, leaving the overlay timer running.
    pub fn stop_autoplay(&mut self) {
        if let Some(handle) = self.slide.take() {
            handle.abort();
            tracing::debug!("slide timer stopped");
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.slide.is_some()
    }
}

impl Drop for RotationTimers {
    fn drop(&mut self) {
        if let Some(handle) = self.slide.take() {
            handle.abort();
        }
        self.ad.abort();
        tracing::debug!("rotation timers aborted");
    }
}

/// The live timers plus the sender they tick into.  Carries out the
/// [`Effect`]s that `App` hands back to the host loop.
#[derive(Debug)]
pub struct TimerDriver {
    tx: UnboundedSender<RotationMsg>,
    timers: Option<RotationTimers>,
}

impl TimerDriver {
    /// Spawn the first pair of timers.  Must be called from inside a tokio
    /// runtime.
    pub fn start(schedule: Schedule, tx: UnboundedSender<RotationMsg>) -> Self {
        let timers = Some(RotationTimers::spawn(schedule, tx.clone()));
        Self { tx, timers }
    }

    /// `schedule` is only read for [`Effect::RestartTimers`].
    pub fn handle(
        &mut self,
        effect: Effect,
        schedule: Schedule,
        rx: &mut UnboundedReceiver<RotationMsg>,
    ) {
        match effect {
            Effect::None => {}
            Effect::StopAutoplay => {
                if let Some(timers) = self.timers.as_mut().filter(|t| t.is_autoplaying()) {
                    timers.stop_autoplay();
                }
            }
            Effect::RestartTimers => {
                // Old tasks go first, then any ticks they already queued.
                drop(self.timers.take());
                let mut stale = 0;
                while rx.try_recv().is_ok() {
                    stale += 1;
                }
                tracing::debug!(stale, "restarting rotation timers");
                self.timers = Some(RotationTimers::spawn(schedule, self.tx.clone()));
            }
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.timers.as_ref().is_some_and(RotationTimers::is_autoplaying)
    }
}

fn spawn_ticker(
    period: Duration,
    msg: RotationMsg,
    tx: UnboundedSender<RotationMsg>,
) -> JoinHandle<()> {
    let first = time::Instant::now() + period;
    tokio::spawn(async move {
        let mut interval = time::interval_at(first, period);
        // A stalled UI should see one late tick, not a burst of catch-up ticks.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            // Receiver gone: the main loop has exited.
            if tx.send(msg).is_err() {
                return;
            }
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
