// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Region-cached SQS clients with typed queue operations.
//!
//! [`SqsClients`] owns one HTTP transport and hands out one [`Sqs`] client per region, building it
//! on first use. Every [`Sqs`] operation takes a closure that fills in the SDK request builder,
//! performs a single round trip and returns the part of the response callers need: a queue URL,
//! a list, a map or nothing at all. Lists and maps the service leaves out come back empty.
//!
//! # Example
//!
//! ```rust,ignore
//! use regional::{ClientSettings, Region};
//! use sqs_flow::SqsClients;
//!
//! # async fn example(http_client: aws_smithy_runtime_api::client::http::SharedHttpClient) -> sqs_flow::Result<()> {
//! let clients = SqsClients::new(ClientSettings::new(http_client));
//! let sqs = clients.get(&Region::new("eu-west-1"))?;
//!
//! let queue_url = sqs.get_queue_url(|request| request.queue_name("orders")).await?;
//! sqs.send_message(|request| request.queue_url(&queue_url).message_body("hello"))
//!     .await?;
//!
//! for message in sqs.receive_message(|request| request.queue_url(&queue_url).max_number_of_messages(10)).await? {
//!     if let Some(receipt_handle) = message.receipt_handle() {
//!         sqs.delete_message(|request| request.queue_url(&queue_url).receipt_handle(receipt_handle))
//!             .await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod clients;
mod error;
mod operations;

pub use clients::{Sqs, SqsClients};
pub use error::{Error, Result};

pub use aws_sdk_sqs::{Client, types};
