use std::{future::Future, time::Duration};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::{Handler, Invocation, TimerInfo};

/// Fixed-period trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    period: Duration,
    grace: Duration,
}

impl Schedule {
    pub fn new(period: Duration, grace: Duration) -> Self {
        Self { period, grace }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// A tick counts as past due once it fires later than `deadline + grace`.
    pub fn is_past_due(&self, deadline: Instant, now: Instant) -> bool {
        now.saturating_duration_since(deadline) > self.grace
    }

    /// Fires `handler` every period until `shutdown` resolves, passing each
    /// completed [`Invocation`] to `on_run` and returning how many completed.
    ///
    /// The first tick fires immediately. Ticks missed while a slow invocation
    /// was running are skipped, the next one is reported as past due. An error
    /// from `shutdown` stops the schedule and is returned.
    pub async fn run<F, E, C>(
        &self,
        handler: Handler,
        rng: &mut fastrand::Rng,
        shutdown: F,
        mut on_run: C,
    ) -> Result<u64, E>
    where
        F: Future<Output = Result<(), E>>,
        C: FnMut(Invocation),
    {
        let mut ticker = time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tokio::pin!(shutdown);

        let mut fired = 0;
        let stopped = loop {
            let deadline = tokio::select! {
                deadline = ticker.tick() => deadline,
                res = &mut shutdown => break res,
            };

            let info = TimerInfo {
                past_due: self.is_past_due(deadline, Instant::now()),
            };
            debug!(?info, "tick");

            tokio::select! {
                invocation = handler.run(info, rng) => {
                    fired += 1;
                    on_run(invocation);
                }
                res = &mut shutdown => break res,
            }
        };

        info!(fired, stopped_ok = stopped.is_ok(), "schedule stopped");
        stopped.map(|()| fired)
    }
}
