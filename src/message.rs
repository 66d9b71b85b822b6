use aws_sdk_sqs::operation::send_message::SendMessageOutput;

/// A single message drained from the queue.
///
/// The `receipt_handle` is a single-use capability token proving receipt of
/// one specific delivery. It is required to acknowledge (delete) the message
/// and is valid only until the queue-side visibility timeout expires. It is
/// `None` only for messages synthesized locally, never for messages returned
/// by a poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Queue-assigned message id.
    pub id: Option<String>,

    /// Single-use token required to delete this delivery. Never logged and
    /// never used for anything but acknowledgement.
    pub receipt_handle: Option<String>,

    /// Raw message body. May be a base64-wrapped compressed stream until the
    /// finalizer decodes it.
    pub body: Option<String>,
}

impl From<aws_sdk_sqs::types::Message> for Message {
    fn from(message: aws_sdk_sqs::types::Message) -> Self {
        Message {
            id: message.message_id,
            receipt_handle: message.receipt_handle,
            body: message.body,
        }
    }
}

/// Queue-assigned result of a successful publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    /// Id assigned to the new message by the queue.
    pub message_id: Option<String>,

    /// Sequence number within the message group, for FIFO queues.
    pub sequence_number: Option<String>,
}

impl From<SendMessageOutput> for SendReceipt {
    fn from(output: SendMessageOutput) -> Self {
        SendReceipt {
            message_id: output.message_id,
            sequence_number: output.sequence_number,
        }
    }
}
