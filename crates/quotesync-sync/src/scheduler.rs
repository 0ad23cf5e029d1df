//! Periodic sync driver.
//!
//! One pass at start (unless disabled), then one pass per interval. Every
//! outcome is published as a `StatusReport` on a watch channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use quotesync_core::config::SyncConfig;
use quotesync_core::models::{Severity, StatusReport, SyncOutcome};
use quotesync_core::traits::{IPersistedStore, IRemoteEndpoint};

use crate::engine::SyncEngine;

/// Runs the engine on a timer and exposes manual triggers.
pub struct SyncScheduler<S, R> {
    engine: Arc<SyncEngine<S, R>>,
    status: Arc<watch::Sender<StatusReport>>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl<S, R> SyncScheduler<S, R>
where
    S: IPersistedStore + 'static,
    R: IRemoteEndpoint + 'static,
{
    /// Start the periodic loop on the current tokio runtime.
    pub fn spawn(engine: Arc<SyncEngine<S, R>>, config: &SyncConfig) -> Self {
        let (status, _) = watch::channel(StatusReport::new("Not synced yet.", Severity::Info));
        let status = Arc::new(status);
        let (shutdown, shutdown_rx) = watch::channel(false);

        let period = Duration::from_secs(config.interval_secs.max(1));
        let task = tokio::spawn(run_loop(
            engine.clone(),
            status.clone(),
            shutdown_rx,
            period,
            config.sync_on_start,
        ));
        tracing::info!(
            interval_secs = period.as_secs(),
            sync_on_start = config.sync_on_start,
            "quotesync: sync scheduler started"
        );

        Self {
            engine,
            status,
            shutdown,
            task,
        }
    }

    /// Run a pass now, through the same entry point as the timer.
    pub async fn sync_now(&self) -> SyncOutcome {
        run_and_publish(&self.engine, &self.status).await
    }

    /// Subscribe to status updates.
    pub fn subscribe(&self) -> watch::Receiver<StatusReport> {
        self.status.subscribe()
    }

    /// The most recently published status.
    pub fn current_status(&self) -> StatusReport {
        self.status.borrow().clone()
    }

    pub fn engine(&self) -> &Arc<SyncEngine<S, R>> {
        &self.engine
    }

    /// Stop the loop and wait for it. A pass already running completes first.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            tracing::warn!("quotesync: sync scheduler task ended abnormally: {e}");
        }
        tracing::info!("quotesync: sync scheduler stopped");
    }
}

async fn run_loop<S, R>(
    engine: Arc<SyncEngine<S, R>>,
    status: Arc<watch::Sender<StatusReport>>,
    mut shutdown: watch::Receiver<bool>,
    period: Duration,
    sync_on_start: bool,
) where
    S: IPersistedStore,
    R: IRemoteEndpoint,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    if !sync_on_start {
        // The first tick of an interval completes immediately.
        ticker.tick().await;
    }

    loop {
        tokio::select! {
            biased;
            // Err means every sender is gone, which is also a stop signal.
            _ = shutdown.changed() => break,
            _ = ticker.tick() => {
                run_and_publish(&engine, &status).await;
            }
        }
    }
}

async fn run_and_publish<S, R>(
    engine: &SyncEngine<S, R>,
    status: &watch::Sender<StatusReport>,
) -> SyncOutcome
where
    S: IPersistedStore,
    R: IRemoteEndpoint,
{
    if !engine.is_syncing() {
        status.send_replace(StatusReport::syncing());
    }
    let outcome = engine.sync().await;
    if outcome != SyncOutcome::Skipped {
        status.send_replace(StatusReport::from(&outcome));
    }
    outcome
}
