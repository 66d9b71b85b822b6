/// Options controlling a single drain of the queue.
///
/// # Fields
/// - `decompress`: when true, every drained message body is treated as a
///   base64-wrapped compressed stream and replaced with its decoded text.
/// - `max_receive_retries`: cap on consecutive retryable receive failures
///   before the drain gives up and surfaces the last error. `None` retries
///   indefinitely, trusting the SDK's own retry policy underneath.
#[derive(Debug, Clone, Default)]
pub struct DrainOptions {
    pub decompress: bool,
    pub max_receive_retries: Option<u32>,
}

impl DrainOptions {
    /// Options that decompress every body and otherwise keep the defaults.
    pub fn decompressing() -> Self {
        DrainOptions {
            decompress: true,
            ..DrainOptions::default()
        }
    }
}
