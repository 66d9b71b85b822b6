use futures::future::try_join_all;

use super::DrainOptions;
use crate::decompress::decompress;
use crate::errors::DrainError;
use crate::message::Message;

/// Post-processes a drained batch before it is handed to the caller.
///
/// Without `decompress` this is the identity. With it, every message that
/// has a body gets the body replaced by its decompressed text; bodiless
/// messages pass through untouched. All decompressions run concurrently and
/// the result preserves input order. One failure fails the whole batch.
pub(super) async fn finalize_messages(
    messages: Vec<Message>,
    options: &DrainOptions,
) -> Result<Vec<Message>, DrainError> {
    if !options.decompress {
        return Ok(messages);
    }
    try_join_all(messages.into_iter().map(decompress_message_body)).await
}

async fn decompress_message_body(mut message: Message) -> Result<Message, DrainError> {
    let Some(body) = message.body.take() else {
        return Ok(message);
    };
    match decompress(&body) {
        Ok(plaintext) => {
            message.body = Some(plaintext);
            Ok(message)
        }
        Err(source) => Err(DrainError::Decompression {
            message_id: message
                .id
                .clone()
                .unwrap_or_else(|| "<unknown>".to_string()),
            source,
        }),
    }
}
