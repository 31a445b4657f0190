//! Periodic polling of the metrics backend.
//!
//! The cycle owns two request streams: the metrics fetch (`/getstats/`,
//! parameterized by an averaging window) and the network-info fetch
//! (`/getnetwork/`). On spawn it fires one immediate metrics request with a
//! short warm-up window plus one network request, then repeats the metrics
//! request on a fixed cadence with the full window.
//!
//! Every fetch runs in its own task and the ticker never waits for
//! completions, so a slow response may still be in flight when the next tick
//! fires; both are allowed to proceed. Results arrive as [`PollEvent`]s on a
//! channel drained non-blockingly by the app loop, which is the single
//! place poll outcomes are consumed.

pub mod client;
pub mod payload;

pub use client::{FetchError, StatsClient};
pub use payload::{MetricReading, NetworkResponse, StatsResponse};

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Outcome of one request, delivered to the app loop.
#[derive(Debug)]
pub enum PollEvent {
    Stats(Result<StatsResponse, FetchError>),
    Network(Result<NetworkResponse, FetchError>),
}

/// Timing knobs for the cycle.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    /// Interval between metrics ticks.
    pub refresh: Duration,
    /// Averaging window passed to the backend on steady-state ticks.
    pub averaging: Duration,
    /// Shorter averaging window for the immediate startup tick, so the
    /// first data lands fast.
    pub warmup: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            refresh: Duration::from_millis(2500),
            averaging: Duration::from_millis(2500),
            warmup: Duration::from_millis(500),
        }
    }
}

enum Command {
    Refresh,
}

/// Handle to the running poll task.
///
/// Dropping the handle aborts the cycle; in-flight requests are simply
/// abandoned.
#[derive(Debug)]
pub struct PollCycle {
    events: mpsc::Receiver<PollEvent>,
    commands: mpsc::Sender<Command>,
    task: JoinHandle<()>,
}

impl PollCycle {
    /// Spawn the cycle on the current tokio runtime.
    pub fn spawn(client: StatsClient, schedule: Schedule) -> Self {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (cmd_tx, cmd_rx) = mpsc::channel(4);

        let task = tokio::spawn(run(client, schedule, event_tx, cmd_rx));

        Self {
            events: event_rx,
            commands: cmd_tx,
            task,
        }
    }

    /// Take the next pending poll outcome without blocking.
    pub fn try_next(&mut self) -> Option<PollEvent> {
        self.events.try_recv().ok()
    }

    /// Request an immediate metrics + network fetch outside the cadence.
    pub fn request_refresh(&self) {
        let _ = self.commands.try_send(Command::Refresh);
    }
}

impl Drop for PollCycle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    client: StatsClient,
    schedule: Schedule,
    events: mpsc::Sender<PollEvent>,
    mut commands: mpsc::Receiver<Command>,
) {
    // Startup: one fast metrics tick, then the network info
    spawn_stats(&client, schedule.warmup, &events);
    spawn_network(&client, &events);

    // Steady state begins one full interval after startup
    let start = tokio::time::Instant::now() + schedule.refresh;
    let mut ticker = tokio::time::interval_at(start, schedule.refresh);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                spawn_stats(&client, schedule.averaging, &events);
            }
            cmd = commands.recv() => match cmd {
                Some(Command::Refresh) => {
                    spawn_stats(&client, schedule.averaging, &events);
                    spawn_network(&client, &events);
                }
                None => break,
            }
        }

        if events.is_closed() {
            break;
        }
    }
}

fn spawn_stats(client: &StatsClient, window: Duration, events: &mpsc::Sender<PollEvent>) {
    let client = client.clone();
    let events = events.clone();
    tokio::spawn(async move {
        let result = client.fetch_stats(window).await;
        let _ = events.send(PollEvent::Stats(result)).await;
    });
}

fn spawn_network(client: &StatsClient, events: &mpsc::Sender<PollEvent>) {
    let client = client.clone();
    let events = events.clone();
    tokio::spawn(async move {
        let result = client.fetch_network().await;
        let _ = events.send(PollEvent::Network(result)).await;
    });
}
