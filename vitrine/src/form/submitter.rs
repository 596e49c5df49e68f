//! The submission transport seam.

use std::time::Duration;

use async_trait::async_trait;

use super::FormData;
use crate::error::SubmissionError;

/// Sends a validated form somewhere.
///
/// Completion is asynchronous and single-shot: one call per submission, no
/// retries. `Ok` carries a human-readable detail (receipt, ticket number).
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: FormData) -> Result<String, SubmissionError>;
}

/// A submitter that waits a fixed latency and then succeeds.
///
/// Stands in for a backend on a static site.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, payload: FormData) -> Result<String, SubmissionError> {
        log::debug!(
            "SimulatedSubmitter: sending {} field(s), {}ms latency",
            payload.len(),
            self.latency.as_millis()
        );
        tokio::time::sleep(self.latency).await;
        Ok(format!("{} field(s) received", payload.len()))
    }
}
