//! Application intake: validation, the append-only log, and chat notification hand-off.

pub mod domain;
pub mod message;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, ApplicationRecord, ApplicationStatus, ApplicationSubmission, NewApplication,
};
pub use message::render_notification;
pub use repository::{ApplicationLog, InMemoryApplicationLog, RepositoryError};
pub use router::{application_router, SubmitResponse, SUBMISSION_ACCEPTED};
pub use service::{istanbul_offset, ApplicationIntakeService, IntakeError, IntakeReceipt};
pub use validation::ValidationError;
