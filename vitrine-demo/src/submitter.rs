use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use vitrine::error::SubmissionError;
use vitrine::form::{FormData, Submitter};

/// A backend that drops every other request.
#[derive(Debug)]
pub struct FlakySubmitter {
    latency: Duration,
    calls: AtomicUsize,
}

impl FlakySubmitter {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Submitter for FlakySubmitter {
    async fn submit(&self, payload: FormData) -> Result<String, SubmissionError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        if call % 2 == 0 {
            return Err(SubmissionError::Transport("connection reset".to_string()));
        }
        Ok(format!("ticket #{call} ({} field(s))", payload.len()))
    }
}
