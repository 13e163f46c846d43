//! Offline TUI for drafting rental-property listings.
//!
//! The [`model`] layer holds the draft and its validation rules, [`staging`]
//! checks image files picked from disk, and [`submit`] hands a finished draft
//! to a [`Submitter`](submit::Submitter) on a tokio runtime. [`tui`] ties them
//! together in a single form screen.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod model;
pub mod staging;
pub mod submit;
pub mod tui;
