// src/schedule/task.rs

use std::future::Future;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use tracing::{error, info};

/// Runs a job immediately and then once per period until stopped.
///
/// Every tick spawns its own job, so a job that outlives the period does not
/// delay the next one. Dropping the handle also ends the loop.
pub struct RepeatingTask {
    period: Duration,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl RepeatingTask {
    pub fn start<F, Fut>(period: Duration, mut job: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            info!("Starting repeating task with interval: {:?}", period);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        tokio::spawn(job());
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            info!("Repeating task shutting down");
                            break;
                        }
                    }
                }
            }
        });

        Self {
            period,
            shutdown_tx,
            handle,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stops scheduling new runs. Jobs already in flight finish on their own.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Waits for the scheduling loop to exit. Call `stop` first.
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            error!("Repeating task join error: {}", e);
        }
    }
}
