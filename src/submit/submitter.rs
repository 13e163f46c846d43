use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{info, warn};

use super::error::SubmitError;
use super::snapshot::ListingSnapshot;

/// Notice shown after a successful simulated submission.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully! Check the log for data.";

/// What a successful submission reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Message shown to the user.
    pub message: String,
}

/// Delivers a listing snapshot somewhere.
pub trait Submitter: Send + Sync {
    /// Starts delivering `snapshot`. The returned future resolves once the
    /// outcome is known.
    fn submit(
        &self,
        snapshot: ListingSnapshot,
    ) -> BoxFuture<'static, Result<SubmitReceipt, SubmitError>>;
}

/// Stand-in for a listing backend: logs the payload, waits, and succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Creates a submitter that takes `delay` to "deliver" each listing.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(
        &self,
        snapshot: ListingSnapshot,
    ) -> BoxFuture<'static, Result<SubmitReceipt, SubmitError>> {
        let delay = self.delay;
        async move {
            match serde_json::to_string_pretty(&snapshot) {
                Ok(payload) => info!(%payload, "form submission data"),
                Err(e) => warn!(error = %e, "could not serialize submission data"),
            }
            tokio::time::sleep(delay).await;
            Ok(SubmitReceipt {
                message: SUCCESS_MESSAGE.to_string(),
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::FormFields;
    use crate::staging::ImageStaging;

    fn snapshot() -> ListingSnapshot {
        ListingSnapshot::assemble(&FormFields::sample(), &ImageStaging::default(), Utc::now())
    }

    #[tokio::test]
    async fn simulated_submit_succeeds() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(5));
        let receipt = submitter.submit(snapshot()).await.unwrap();
        assert_eq!(receipt.message, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn simulated_submit_waits_for_delay() {
        let delay = Duration::from_millis(30);
        let submitter = SimulatedSubmitter::new(delay);
        let started = std::time::Instant::now();
        submitter.submit(snapshot()).await.unwrap();
        assert!(started.elapsed() >= delay);
    }

    #[test]
    fn success_message_points_at_the_log() {
        assert!(SUCCESS_MESSAGE.starts_with("Form submitted successfully!"));
        assert!(SUCCESS_MESSAGE.ends_with("Check the log for data."));
    }
}
