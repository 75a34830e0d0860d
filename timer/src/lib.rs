//! Scheduled greeter.
//!
//! A [`Handler`] is what the scheduler fires: it logs when it ran, greets one
//! of [`NAMES`] at random and optionally lingers for a while before
//! returning. [`Schedule`] drives a handler on a fixed period and tells it
//! whether the tick arrived late.

mod schedule;

pub use schedule::Schedule;

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::info;

pub const NAMES: [&str; 4] = ["Carla", "Chema", "Marta", "Manuel"];

/// How long [`Handler::pausing`] lingers after greeting.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(5);

/// Trigger status handed to a handler on each invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerInfo {
    pub past_due: bool,
}

/// Record of a single invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub ran_at: DateTime<Utc>,
    pub past_due: bool,
    pub name: &'static str,
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handler {
    pause: Option<Duration>,
}

impl Handler {
    pub fn immediate() -> Self {
        Self { pause: None }
    }

    pub fn pausing() -> Self {
        Self::with_pause(DEFAULT_PAUSE)
    }

    pub fn with_pause(pause: Duration) -> Self {
        Self { pause: Some(pause) }
    }

    pub fn pause(&self) -> Option<Duration> {
        self.pause
    }

    pub async fn run(&self, info: TimerInfo, rng: &mut fastrand::Rng) -> Invocation {
        let ran_at = Utc::now();

        if info.past_due {
            info!("The timer is past due!");
        }
        info!(
            "timer trigger function ran at {}",
            ran_at.to_rfc3339_opts(SecondsFormat::Micros, false)
        );

        let start = Instant::now();

        let name = pick_name(rng);
        println!("{}", greeting(name));

        if let Some(pause) = self.pause {
            time::sleep(pause).await;
        }

        let elapsed = start.elapsed();
        println!("{}", elapsed.as_secs_f64());

        Invocation {
            ran_at,
            past_due: info.past_due,
            name,
            elapsed,
        }
    }
}

pub fn pick_name(rng: &mut fastrand::Rng) -> &'static str {
    NAMES[rng.usize(..NAMES.len())]
}

pub fn greeting(name: &str) -> String {
    format!("Hola {name}")
}
