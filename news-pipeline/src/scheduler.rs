use crate::pipeline::NewsPipeline;
use news_core::{NewsbotError, Result, ScheduleConfig};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Drives a [`NewsPipeline`]: first tick after the initial delay, then one tick per interval.
/// The next sleep is armed only after the current run finishes, so runs never overlap.
pub struct Scheduler {
    config: ScheduleConfig,
    pipeline: NewsPipeline,
}

impl Scheduler {
    pub fn new(config: ScheduleConfig, pipeline: NewsPipeline) -> Self {
        Self { config, pipeline }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Spawns the timer loop on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// [`NewsbotError::SchedulingUnavailable`] when called outside a runtime. Callers log it and
    /// keep serving commands without scheduled updates.
    pub fn spawn(self) -> Result<JoinHandle<()>> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| NewsbotError::SchedulingUnavailable(e.to_string()))?;

        info!(
            interval_secs = self.config.interval_secs(),
            initial_delay_secs = self.config.initial_delay_secs(),
            destination = %self.pipeline.destination(),
            "Scheduled news updates"
        );
        Ok(handle.spawn(self.run()))
    }

    /// Timer loop; only returns when the task is dropped or aborted.
    pub async fn run(self) {
        tokio::time::sleep(self.config.initial_delay()).await;

        let mut tick: u64 = 0;
        loop {
            tick += 1;
            info!(tick = tick, "step: scheduler tick");

            // Each run gets its own task so a panic inside a source or publisher skips the tick
            // instead of ending the loop.
            let pipeline = self.pipeline.clone();
            match tokio::spawn(async move { pipeline.run_once().await }).await {
                Ok(outcome) if !outcome.delivered => {
                    warn!(tick = tick, "Scheduled run not delivered; waiting for next tick");
                }
                Ok(_) => {}
                Err(e) => {
                    error!(tick = tick, error = %e, "Scheduled run aborted");
                }
            }

            tokio::time::sleep(self.config.interval()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use news_core::{Destination, FormattedMessage, NewsBatch, NewsSource, Publisher};
    use std::sync::Arc;

    struct EmptySource;

    #[async_trait]
    impl NewsSource for EmptySource {
        async fn fetch(&self, _currency: Option<&str>, _limit: usize) -> NewsBatch {
            NewsBatch::empty()
        }
    }

    struct NullPublisher;

    #[async_trait]
    impl Publisher for NullPublisher {
        async fn publish(&self, _: &Destination, _: &FormattedMessage) -> news_core::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_spawn_without_runtime_is_scheduling_unavailable() {
        let pipeline = NewsPipeline::new(
            Arc::new(EmptySource),
            Arc::new(NullPublisher),
            Destination::Id(1),
            3,
        );
        let scheduler = Scheduler::new(ScheduleConfig::new(60, 0).unwrap(), pipeline);

        let err = scheduler.spawn().unwrap_err();
        assert!(matches!(err, NewsbotError::SchedulingUnavailable(_)));
    }
}
