// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Flattens continuation-token paginated APIs into a single lazy stream.
//!
//! Many cloud listing operations return results one page at a time, together with an opaque
//! token that must be sent back to get the next page. [`paginate`] drives that loop and exposes
//! the items of all pages as one [`Stream`][futures_util::Stream]:
//!
//! - The first request carries no token. Every following request carries the token returned by
//!   the previous response, verbatim. The loop ends after a response without a token.
//! - Items are yielded in the order the pages return them, pages in the order they are fetched.
//!   Nothing is reordered or deduplicated.
//! - A page is only requested once every item of the previous page has been consumed.
//! - An error from a page request is yielded once and ends the stream. Items yielded before it
//!   stay yielded. Nothing is retried.
//!
//! The stream cannot be restarted. To list again, call the operation again; that starts over
//! from the first page.
//!
//! # Example
//!
//! ```
//! use futures::TryStreamExt;
//! use pagewise::{Page, paginate};
//!
//! # futures::executor::block_on(async {
//! let numbers = paginate(|token: Option<String>| async move {
//!     Ok::<_, std::io::Error>(match token.as_deref() {
//!         None => Page::new(vec![1, 2], Some("second".to_string())),
//!         Some("second") => Page::last(vec![3]),
//!         Some(other) => unreachable!("unexpected token {other}"),
//!     })
//! });
//!
//! let numbers: Vec<i32> = numbers.try_collect().await?;
//! assert_eq!(numbers, vec![1, 2, 3]);
//! # Ok::<(), std::io::Error>(())
//! # });
//! ```
//!
//! There is no upper bound on the number of pages: a service that never stops returning tokens
//! produces an endless stream.

mod page;
mod paginate;

pub use page::Page;
pub use paginate::paginate;
