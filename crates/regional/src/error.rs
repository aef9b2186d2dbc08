// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// The result for fallible operations that use the [`Error`][enum@Error] type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while preparing a regional client.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The region id is empty or not shaped like an AWS region (`us-east-1`, `eu-west-2`, ...).
    #[error("invalid region id {0:?}")]
    InvalidRegion(String),
}
