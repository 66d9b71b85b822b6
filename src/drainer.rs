use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use serde::Serialize;
use tracing::debug;

mod finalize;
mod options;

pub use options::DrainOptions;

use crate::client::QueueEndpointConfig;
use crate::errors::{AcknowledgeError, DrainError, RetrievalError, SendError, classify_sdk_error};
use crate::message::{Message, SendReceipt};

const MAX_NUMBER_OF_MESSAGES: i32 = 10;

/// A single receive call against the queue.
///
/// Returns whatever the queue currently has visible, up to the per-call
/// ceiling of ten messages. An empty batch is a valid outcome meaning
/// "nothing visible right now"; the drain loop treats it as its termination
/// signal. The trait seam exists so the drain engine can run against any
/// poller, including scripted ones in tests.
#[async_trait]
pub trait BatchPoller: Send + Sync {
    async fn receive_batch(&self) -> Result<Vec<Message>, RetrievalError>;
}

/// An SQS client bound to one queue.
///
/// Drains the queue to exhaustion, acknowledges (deletes) consumed messages,
/// and publishes new ones. The client and queue URL are fixed at
/// construction; a drainer is cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct SqsMessageDrainer {
    sqs_client: aws_sdk_sqs::Client,
    queue_url: String,
}

impl SqsMessageDrainer {
    pub fn new(sqs_client: aws_sdk_sqs::Client, queue_url: &str) -> Self {
        SqsMessageDrainer {
            sqs_client,
            queue_url: queue_url.to_string(),
        }
    }

    /// Builds a drainer with its own client from explicit endpoint
    /// configuration.
    pub fn from_config(config: &QueueEndpointConfig) -> Self {
        SqsMessageDrainer {
            sqs_client: config.build_client(),
            queue_url: config.queue_url.clone(),
        }
    }

    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    /// Drains every currently-visible message from the queue.
    ///
    /// Polls repeatedly until a receive call comes back empty, then finalizes
    /// the accumulated batch per `options`. See [`drain_queue`] for the loop
    /// semantics.
    pub async fn drain_all(&self, options: DrainOptions) -> Result<Vec<Message>, DrainError> {
        drain_queue(self, options).await
    }

    /// Deletes a message from the queue by its receipt handle, marking it
    /// durably consumed.
    ///
    /// Fails with [`AcknowledgeError::MissingReceiptHandle`] before any
    /// network call when the message carries no handle. Transport failures
    /// are not retried here; callers wanting at-least-once semantics retry
    /// acknowledgement themselves and accept possible redelivery.
    pub async fn acknowledge(&self, message: &Message) -> Result<String, AcknowledgeError> {
        let receipt_handle = message
            .receipt_handle
            .as_deref()
            .ok_or(AcknowledgeError::MissingReceiptHandle)?;
        let message_id = message.id.as_deref().unwrap_or("<unknown>");

        self.sqs_client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|error| AcknowledgeError::NotAcknowledged {
                message_id: message_id.to_string(),
                cause: DisplayErrorContext(&error).to_string(),
            })?;

        Ok(format!("Message \"{message_id}\" acknowledged."))
    }

    /// Publishes one message to the queue, tagged with a caller-supplied
    /// group key for queue-side ordering.
    ///
    /// The payload is serialized to JSON. Single-shot: no retry, no batching;
    /// transport failures surface as-is.
    ///
    /// ```rust,no_run
    /// use rs_sqs_drainer::client::create_sqs_client_from_env;
    /// use rs_sqs_drainer::drainer::SqsMessageDrainer;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct ErrorReport {
    ///     module: String,
    ///     message: String,
    /// }
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = create_sqs_client_from_env().await;
    /// let queue_url = "https://sqs.us-east-1.amazonaws.com/123456789012/errors.fifo";
    /// let drainer = SqsMessageDrainer::new(client, queue_url);
    ///
    /// let report = ErrorReport {
    ///     module: "orders".to_string(),
    ///     message: "feed sync failed".to_string(),
    /// };
    /// let receipt = drainer.send_message(&report, "Error_Reports").await?;
    /// println!("queued as {:?}", receipt.message_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_message<T: Serialize>(
        &self,
        payload: &T,
        group_key: &str,
    ) -> Result<SendReceipt, SendError> {
        let body = serde_json::to_string(payload)?;

        let output = self
            .sqs_client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .message_group_id(group_key)
            .send()
            .await
            .map_err(|error| SendError::Transport(DisplayErrorContext(&error).to_string()))?;

        Ok(SendReceipt::from(output))
    }
}

#[async_trait]
impl BatchPoller for SqsMessageDrainer {
    async fn receive_batch(&self) -> Result<Vec<Message>, RetrievalError> {
        let output = self
            .sqs_client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(MAX_NUMBER_OF_MESSAGES)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        Ok(output
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(Message::from)
            .collect())
    }
}

/// Drains a queue to exhaustion through any [`BatchPoller`].
///
/// Exactly one receive call is outstanding at a time. Non-empty batches are
/// accumulated in call order; an empty batch ends the loop. Retryable
/// transport failures are swallowed and the call is reissued, without
/// backoff, until [`DrainOptions::max_receive_retries`] (unbounded by
/// default) runs out. A fatal failure aborts immediately and discards
/// everything accumulated so far: the drain is all-or-nothing.
pub async fn drain_queue<P>(poller: &P, options: DrainOptions) -> Result<Vec<Message>, DrainError>
where
    P: BatchPoller + ?Sized,
{
    let mut drained: Vec<Message> = Vec::new();
    let mut consecutive_retryable: u32 = 0;

    loop {
        match poller.receive_batch().await {
            Ok(batch) => {
                consecutive_retryable = 0;
                if batch.is_empty() {
                    break;
                }
                debug!(count = batch.len(), "received message batch");
                drained.extend(batch);
            }
            Err(error) if error.is_retryable() => {
                consecutive_retryable += 1;
                if let Some(cap) = options.max_receive_retries {
                    if consecutive_retryable > cap {
                        return Err(error.into());
                    }
                }
                debug!(%error, "transient receive failure, polling again");
            }
            Err(error) => return Err(error.into()),
        }
    }

    finalize::finalize_messages(drained, &options).await
}
