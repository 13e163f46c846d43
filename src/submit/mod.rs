//! Listing submission: snapshot assembly, the submitter seam, and the
//! controller that runs one submission at a time.
//!
//! There is no real backend. [`SimulatedSubmitter`] logs the JSON payload
//! and succeeds after a fixed delay; a real backend plugs in through the
//! [`Submitter`] trait.

mod controller;
mod error;
mod snapshot;
mod submitter;

pub use controller::SubmissionController;
pub use error::SubmitError;
pub use snapshot::{ListingSnapshot, ParsedAmounts};
pub use submitter::{SUCCESS_MESSAGE, SimulatedSubmitter, SubmitReceipt, Submitter};
