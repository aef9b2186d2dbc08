// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use aws_sdk_cloudwatch::error::BuildError;

/// The result for fallible operations that use the [`Error`][enum@Error] type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while building a CloudWatch client or talking to CloudWatch.
///
/// Service failures are forwarded untouched from the SDK; nothing is retried at this layer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The client for a region could not be built.
    #[error(transparent)]
    Region(#[from] regional::Error),

    /// The request template produced an invalid request.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// CloudWatch or the transport rejected the request.
    #[error(transparent)]
    Service(Box<aws_sdk_cloudwatch::Error>),
}

impl Error {
    pub(crate) fn from_sdk(error: impl Into<aws_sdk_cloudwatch::Error>) -> Self {
        Self::Service(Box::new(error.into()))
    }
}

impl From<aws_sdk_cloudwatch::Error> for Error {
    fn from(error: aws_sdk_cloudwatch::Error) -> Self {
        Self::Service(Box::new(error))
    }
}
