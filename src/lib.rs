//! # AWS SQS Drainer
//!
//! An asynchronous AWS SQS client that drains a queue to exhaustion: it
//! polls repeatedly until a receive call comes back empty, retries transient
//! transport faults, and hands back the complete batch or nothing at all.
//! Compressed message bodies (base64-wrapped deflate streams) can be decoded
//! transparently, and the client also covers the other side of the
//! at-least-once contract: per-message acknowledgement (delete by receipt
//! handle) and grouped publishing.
//!
//! ## Features
//!
//! - Poll-until-exhaustion draining with retryable/fatal error classification
//! - All-or-nothing semantics: a drain yields the full batch or a single error
//! - Concurrent, order-preserving decompression of message bodies
//! - Acknowledgement by single-use receipt handle, no internal retry
//! - Publishing with a caller-chosen message group key
//! - Trait-based poller seam for testing the drain loop without AWS
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rs_sqs_drainer::client::create_sqs_client_from_env;
//! use rs_sqs_drainer::drainer::{DrainOptions, SqsMessageDrainer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_sqs_client_from_env().await;
//!     let queue_url = "https://sqs.region.amazonaws.com/account/queue-name";
//!     let drainer = SqsMessageDrainer::new(client, queue_url);
//!
//!     let messages = drainer.drain_all(DrainOptions::decompressing()).await?;
//!     for message in &messages {
//!         println!("drained: {:?}", message.body);
//!         drainer.acknowledge(message).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod decompress;
pub mod drainer;
pub mod errors;
pub mod message;
