use std::time::Duration;

/// Politeness throttle between detail fetches: a fixed pause once one line
/// is finished and before the next one starts.
pub struct Pacer {
    period: Duration,
}

impl Pacer {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub async fn pause(&self) {
        if !self.period.is_zero() {
            tokio::time::sleep(self.period).await;
        }
    }
}
