use std::time::Duration;

/// Stand-in for a refresh against the mail backend. It only waits; no ticket
/// data is refetched.
#[derive(Debug, Clone)]
pub struct SyncStub {
    latency: Duration,
}

impl SyncStub {
    pub fn new(latency: Duration) -> Self {
        SyncStub { latency }
    }

    pub async fn run(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
