// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Region-keyed cache of AWS SDK clients.
//!
//! Building an SDK client is not free: it resolves credentials, wires the HTTP transport into
//! the runtime and prepares the endpoint. This crate keeps one client per region for the
//! lifetime of the table that owns it.
//!
//! - [`RegionCache`] is the lookup table. Its [`get_or_try_insert_with`][RegionCache::get_or_try_insert_with]
//!   runs the constructor at most once per key, even under concurrent first access, and never
//!   stores a failed construction.
//! - [`ClientSettings`] carries the construction parameters shared by every client of a table:
//!   the HTTP transport, the credentials provider, the [`EndpointPolicy`] and the SDK behavior
//!   version.
//! - [`validate_region`] rejects malformed region ids before any client is built.
//!
//! # Example
//!
//! ```
//! use regional::RegionCache;
//!
//! #[derive(Debug)]
//! struct Client(String);
//!
//! let cache: RegionCache<Client, &str> = RegionCache::new();
//!
//! let first = cache.get_or_try_insert_with(&"eu-west-1", |region| {
//!     Ok::<_, regional::Error>(Client(format!("client for {region}")))
//! })?;
//! let second = cache.get_or_try_insert_with(&"eu-west-1", |_| -> regional::Result<Client> {
//!     unreachable!("the client is already cached")
//! })?;
//!
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! # Ok::<(), regional::Error>(())
//! ```
//!
//! # Features
//!
//! - `test-util`: enables the [`testing`] module with an in-process HTTP client that returns
//!   canned responses, for exercising SDK clients without a network.

mod cache;
mod endpoint;
mod error;
mod region;
mod settings;

#[cfg(any(feature = "test-util", test))]
pub mod testing;

pub use cache::RegionCache;
pub use endpoint::EndpointPolicy;
pub use error::{Error, Result};
pub use region::validate_region;
pub use settings::{ClientSettings, ClientSettingsBuilder};

pub use aws_types::region::Region;
