use aws_sdk_sqs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Transport-level failure raised while receiving a batch of messages.
///
/// Every receive failure is classified as either retryable (transient, safe
/// to issue the same call again) or fatal (permanent, must abort the drain).
/// The drain loop swallows retryable failures and propagates fatal ones.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Transient transport fault. The same receive call may be retried.
    #[error("retryable transport failure while receiving messages: {0}")]
    Retryable(String),

    /// Permanent fault. Aborts the whole drain and surfaces to the caller.
    #[error("fatal transport failure while receiving messages: {0}")]
    Fatal(String),
}

impl RetrievalError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, RetrievalError::Retryable(_))
    }
}

/// Failure while decoding a compressed message body.
#[derive(Debug, Error)]
pub enum DecompressionError {
    #[error("message body is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("message body is not a valid compressed stream: {0}")]
    InvalidStream(#[from] std::io::Error),

    #[error("decompressed message body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Error returned by a full drain of the queue.
///
/// A drain either yields the complete finalized batch or fails with one of
/// these; partially drained or partially decompressed batches are never
/// returned.
#[derive(Debug, Error)]
pub enum DrainError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("decompressing all messages failed: message \"{message_id}\": {source}")]
    Decompression {
        message_id: String,
        source: DecompressionError,
    },
}

/// Error returned when acknowledging (deleting) a single message.
#[derive(Debug, Error)]
pub enum AcknowledgeError {
    /// The message carries no receipt handle, so there is nothing to delete.
    /// Raised before any network call is made.
    #[error("receipt handle on message is missing")]
    MissingReceiptHandle,

    #[error("message \"{message_id}\" not acknowledged: {cause}")]
    NotAcknowledged { message_id: String, cause: String },
}

/// Error returned when publishing a single message.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to serialize message payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to send message to queue: {0}")]
    Transport(String),
}

/// Error loading queue endpoint configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {name}")]
    MissingVariable { name: String },
}

/// Classifies an AWS SDK failure into the retryable/fatal taxonomy used by
/// the drain loop.
///
/// Timeouts, dispatch failures, and malformed responses are transient.
/// Service-reported errors are transient only when SQS signals throttling or
/// an internal/availability fault; anything else (bad queue URL, access
/// denied, invalid request) is permanent.
pub(crate) fn classify_sdk_error<E, R>(error: SdkError<E, R>) -> RetrievalError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let rendered = DisplayErrorContext(&error).to_string();
    let retryable = match &error {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            true
        }
        SdkError::ServiceError(context) => is_retryable_code(context.err().meta().code()),
        _ => false,
    };
    if retryable {
        RetrievalError::Retryable(rendered)
    } else {
        RetrievalError::Fatal(rendered)
    }
}

fn is_retryable_code(code: Option<&str>) -> bool {
    matches!(
        code,
        Some(
            "RequestThrottled"
                | "ThrottlingException"
                | "RequestThrottledException"
                | "ServiceUnavailable"
                | "InternalError"
                | "InternalFailure"
                | "RequestTimeout"
        )
    )
}
