use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A periodic tick source owned by whoever drives the view.
///
/// Every `period` the task sends `tick` into the channel; the first tick fires
/// immediately. Dropping the handle aborts the task, which also closes its
/// sender. The task stops on its own once the receiver is gone.
#[derive(Debug)]
pub struct IntervalTask {
    name: &'static str,
    period: Duration,
    handle: JoinHandle<()>,
}

impl IntervalTask {
    /// Must be called from within a tokio runtime.
    pub fn spawn<T>(name: &'static str, period: Duration, tx: mpsc::Sender<T>, tick: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(tick.clone()).await.is_err() {
                    tracing::debug!(task = name, "receiver closed, stopping interval");
                    break;
                }
            }
        });
        tracing::debug!(task = name, period_ms = period.as_millis() as u64, "interval started");
        Self {
            name,
            period,
            handle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for IntervalTask {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(task = self.name, "interval cancelled");
    }
}
