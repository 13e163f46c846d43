use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{info, warn};

use super::error::SubmitError;
use super::snapshot::ListingSnapshot;
use super::submitter::{SubmitReceipt, Submitter};

type Outcome = Result<SubmitReceipt, SubmitError>;

/// Runs one submission at a time on a tokio runtime and hands the outcome
/// back to the synchronous UI loop.
pub struct SubmissionController {
    submitter: Arc<dyn Submitter>,
    runtime: Handle,
    pending: Option<oneshot::Receiver<Outcome>>,
}

impl SubmissionController {
    /// Creates an idle controller that spawns submissions on `runtime`.
    pub fn new(submitter: Arc<dyn Submitter>, runtime: Handle) -> Self {
        Self {
            submitter,
            runtime,
            pending: None,
        }
    }

    /// Returns `true` while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts submitting `snapshot`.
    ///
    /// Returns [`SubmitError::AlreadySubmitting`] if a submission is still in
    /// flight; the new snapshot is discarded.
    pub fn begin(&mut self, snapshot: ListingSnapshot) -> Result<(), SubmitError> {
        if self.is_submitting() {
            warn!("submit refused: already submitting");
            return Err(SubmitError::AlreadySubmitting);
        }

        let (tx, rx) = oneshot::channel();
        let submission = self.submitter.submit(snapshot);
        self.runtime.spawn(async move {
            // The receiver is gone only if the controller was dropped.
            let _ = tx.send(submission.await);
        });
        self.pending = Some(rx);
        info!("submission started");
        Ok(())
    }

    /// Checks for a finished submission without blocking.
    ///
    /// Returns `None` while idle or still waiting. Once an outcome is
    /// returned the controller is idle again.
    pub fn poll(&mut self) -> Option<Outcome> {
        let rx = self.pending.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(SubmitError::Interrupted),
        };
        self.pending = None;
        match &outcome {
            Ok(_) => info!("submission completed"),
            Err(e) => warn!(error = %e, "submission failed"),
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use chrono::Utc;
    use futures::FutureExt;
    use futures::future::BoxFuture;

    use super::*;
    use crate::model::FormFields;
    use crate::staging::ImageStaging;
    use crate::submit::{SUCCESS_MESSAGE, SimulatedSubmitter};

    struct RejectingSubmitter;

    impl Submitter for RejectingSubmitter {
        fn submit(&self, _: ListingSnapshot) -> BoxFuture<'static, Outcome> {
            async { Err(SubmitError::Rejected("duplicate listing".into())) }.boxed()
        }
    }

    struct PanickingSubmitter;

    impl Submitter for PanickingSubmitter {
        fn submit(&self, _: ListingSnapshot) -> BoxFuture<'static, Outcome> {
            futures::future::lazy(|_| -> Outcome { panic!("backend exploded") }).boxed()
        }
    }

    fn snapshot() -> ListingSnapshot {
        ListingSnapshot::assemble(&FormFields::sample(), &ImageStaging::default(), Utc::now())
    }

    fn simulated(delay_ms: u64) -> SubmissionController {
        SubmissionController::new(
            Arc::new(SimulatedSubmitter::new(Duration::from_millis(delay_ms))),
            Handle::current(),
        )
    }

    async fn wait_for(controller: &mut SubmissionController) -> Outcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = controller.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "submission never finished");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn idle_controller_polls_none() {
        let mut controller = simulated(0);
        assert!(!controller.is_submitting());
        assert!(controller.poll().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn begin_enters_submitting_until_outcome() {
        let mut controller = simulated(20);
        controller.begin(snapshot()).unwrap();
        assert!(controller.is_submitting());

        let outcome = wait_for(&mut controller).await;
        assert_eq!(outcome.unwrap().message, SUCCESS_MESSAGE);
        assert!(!controller.is_submitting());
        assert!(controller.poll().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn second_begin_while_busy_is_refused() {
        let mut controller = simulated(200);
        controller.begin(snapshot()).unwrap();
        assert_eq!(
            controller.begin(snapshot()),
            Err(SubmitError::AlreadySubmitting)
        );
        assert!(controller.is_submitting());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn can_submit_again_after_completion() {
        let mut controller = simulated(0);
        controller.begin(snapshot()).unwrap();
        wait_for(&mut controller).await.unwrap();
        assert!(controller.begin(snapshot()).is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn rejection_is_reported_and_returns_to_idle() {
        let mut controller =
            SubmissionController::new(Arc::new(RejectingSubmitter), Handle::current());
        controller.begin(snapshot()).unwrap();
        let outcome = wait_for(&mut controller).await;
        assert_eq!(
            outcome,
            Err(SubmitError::Rejected("duplicate listing".into()))
        );
        assert!(!controller.is_submitting());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn panicking_task_is_interrupted() {
        let mut controller =
            SubmissionController::new(Arc::new(PanickingSubmitter), Handle::current());
        controller.begin(snapshot()).unwrap();
        assert_eq!(wait_for(&mut controller).await, Err(SubmitError::Interrupted));
    }
}
