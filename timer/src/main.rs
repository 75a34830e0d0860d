use anyhow::Context;
use clap::Parser;
use sandbox_timer::{Handler, Schedule, TimerInfo};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Greets someone on a schedule.
#[derive(Debug, Parser)]
#[command(name = "timer", version)]
struct Cli {
    /// Seconds between invocations
    #[arg(long, env = "TIMER_PERIOD_SECS", default_value_t = 300)]
    period_secs: u64,

    /// Lateness tolerated before an invocation is flagged past due
    #[arg(long, env = "TIMER_GRACE_MS", default_value_t = 1000)]
    grace_ms: u64,

    /// Linger five seconds after each greeting
    #[arg(long, env = "TIMER_PAUSE")]
    pause: bool,

    /// Fire a single invocation and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.period_secs > 0, "--period-secs must be positive");

    let handler = if cli.pause {
        Handler::pausing()
    } else {
        Handler::immediate()
    };
    let mut rng = fastrand::Rng::new();

    if cli.once {
        handler.run(TimerInfo::default(), &mut rng).await;
        return Ok(());
    }

    let schedule = Schedule::new(
        Duration::from_secs(cli.period_secs),
        Duration::from_millis(cli.grace_ms),
    );
    info!(period = ?schedule.period(), pause = ?handler.pause(), "timer started");

    schedule
        .run(handler, &mut rng, tokio::signal::ctrl_c(), |_| ())
        .await
        .context("failed to listen for ctrl-c")?;

    Ok(())
}

fn main() {
    if let Err(err) = start().context("timer failed") {
        println!("Error: {err:#}");
        std::process::exit(1);
    }
}
