//! Refresh scheduler - the periodic trigger behind live clocks
//!
//! Once per interval the scheduler takes a single reference instant,
//! re-queries the clock source for every slot, records readings in the
//! registry, and publishes one update per slot on the subscription
//! channel. Slots are independent: a failing zone degrades its own
//! slot and nothing else.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use meridian_core::{CivilMoment, MeridianError, MeridianResult, SlotId};
use meridian_engine::ClockSource;

use crate::SlotRegistry;

/// Scheduler configuration
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// Time between ticks
    pub tick_interval: Duration,
    /// Update channel capacity
    pub channel_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            tick_interval: Duration::from_secs(1),
            channel_capacity: 64,
        }
    }
}

/// One published reading: a slot's fresh civil moment, or the typed
/// failure that degraded it this tick
#[derive(Clone, Debug)]
pub struct ClockUpdate {
    pub slot: SlotId,
    pub result: MeridianResult<CivilMoment>,
}

/// Subscription handle for scheduler updates
pub type UpdateReceiver = mpsc::Receiver<ClockUpdate>;

/// Lifecycle phase. Stopped is terminal: a stopped scheduler is not
/// restarted, a fresh one is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerPhase {
    Idle,
    Running,
    Stopped,
}

enum State {
    Idle,
    Running {
        shutdown: watch::Sender<bool>,
        handle: JoinHandle<()>,
    },
    Stopped,
}

/// Interval-driven refresh loop over a slot registry
pub struct RefreshScheduler {
    clock: ClockSource,
    slots: SlotRegistry,
    config: SchedulerConfig,
    state: State,
}

impl RefreshScheduler {
    pub fn new(clock: ClockSource, slots: SlotRegistry) -> Self {
        Self::with_config(clock, slots, SchedulerConfig::default())
    }

    pub fn with_config(clock: ClockSource, slots: SlotRegistry, config: SchedulerConfig) -> Self {
        RefreshScheduler {
            clock,
            slots,
            config,
            state: State::Idle,
        }
    }

    pub fn phase(&self) -> SchedulerPhase {
        match self.state {
            State::Idle => SchedulerPhase::Idle,
            State::Running { .. } => SchedulerPhase::Running,
            State::Stopped => SchedulerPhase::Stopped,
        }
    }

    pub fn slots(&self) -> &SlotRegistry {
        &self.slots
    }

    /// Arm the periodic trigger and hand back the update subscription
    ///
    /// The first tick fires immediately. Missed ticks are skipped, not
    /// queued; the presentation push per tick is assumed to be
    /// effectively instantaneous, so back-pressure does not arise.
    pub fn start(&mut self) -> MeridianResult<UpdateReceiver> {
        if !matches!(self.state, State::Idle) {
            return Err(MeridianError::SchedulerNotIdle);
        }

        let (tx, rx) = mpsc::channel(self.config.channel_capacity);
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let clock = self.clock.clone();
        let slots = self.slots.clone();
        let tick_interval = self.config.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = interval.tick() => {
                        if !Self::run_tick(&clock, &slots, &tx).await {
                            break; // subscriber dropped
                        }
                    }
                }
            }
        });

        self.state = State::Running { shutdown, handle };
        Ok(rx)
    }

    /// One tick: a single shared instant, one query and one published
    /// update per slot. Returns false once the subscriber is gone.
    async fn run_tick(
        clock: &ClockSource,
        slots: &SlotRegistry,
        tx: &mpsc::Sender<ClockUpdate>,
    ) -> bool {
        let reference = Utc::now();
        for (slot, zone) in slots.selections() {
            let result = clock.now(&zone, reference);
            match &result {
                Ok(moment) => slots.record(slot, moment.clone()),
                Err(err) => {
                    tracing::warn!(slot = slot.index(), zone = zone.as_str(), error = %err,
                        "slot update unavailable");
                }
            }
            if tx.send(ClockUpdate { slot, result }).await.is_err() {
                return false;
            }
        }
        true
    }

    /// Disarm the trigger. No tick fires after this returns: the loop
    /// task is awaited, not just signalled.
    pub async fn stop(&mut self) {
        if let State::Running { shutdown, handle } =
            std::mem::replace(&mut self.state, State::Stopped)
        {
            let _ = shutdown.send(true);
            let _ = handle.await;
        }
    }
}
