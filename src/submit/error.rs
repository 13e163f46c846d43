/// Errors that can end a submission.
///
/// The simulated submitter never fails on its own; these cover refused
/// double submits, a dropped task, and what a real backend can report.
/// There is no retry: any error returns the form to the idle state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// The receiving side refused the listing.
    #[error("listing rejected: {0}")]
    Rejected(String),

    /// The receiving side could not be reached.
    #[error("listing service unavailable: {0}")]
    Unavailable(String),

    /// The submission task ended without reporting an outcome.
    #[error("submission was interrupted")]
    Interrupted,
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn unavailable_names_the_cause() {
        let err = SubmitError::Unavailable("connection refused".into());
        assert_snapshot!(err.to_string(), @"listing service unavailable: connection refused");
    }

    #[test]
    fn rejected_names_the_reason() {
        let err = SubmitError::Rejected("duplicate listing".into());
        assert_snapshot!(err.to_string(), @"listing rejected: duplicate listing");
    }

    #[test]
    fn unit_variants() {
        assert_snapshot!(SubmitError::AlreadySubmitting.to_string(), @"a submission is already in progress");
        assert_snapshot!(SubmitError::Interrupted.to_string(), @"submission was interrupted");
    }
}
