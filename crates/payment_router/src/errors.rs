//! Error types for the routing core.

use crate::consts;

/// Result alias wrapping the error variant into an `error_stack::Report`,
/// so context can be attached as errors cross module boundaries.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures a processor collaborator can report out-of-band. The routing core
/// never inspects the variant; it only logs the report and collapses it.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConnectorError {
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("Failed to execute a processing step: {0:?}")]
    ProcessingStepFailed(Option<String>),
    #[error("Failed to handle connector response")]
    ResponseHandlingFailed,
}

/// Router-level failure taxonomy. Every variant is recovered inside
/// [`route`](crate::core::payments::PaymentRouter::route) and rendered into a
/// [`Failure`](crate::types::PaymentResult::Failure) result; none escape as
/// `Err`.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// The request failed the brand/currency eligibility rule; no processor
    /// was contacted.
    #[error("{}", consts::AMEX_USD_ONLY_MESSAGE)]
    RejectedByPolicy,
    /// The direct-capture processor explicitly reported a failed sale; its
    /// own message is surfaced verbatim.
    #[error("{message}")]
    ProcessorDeclined { message: String },
    /// A processor call failed out-of-band. The cause is logged at the
    /// boundary, never surfaced to the caller.
    #[error("{}", consts::GENERIC_FAILURE_MESSAGE)]
    ProcessorUnavailable,
}
