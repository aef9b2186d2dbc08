// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// The result for fallible operations that use the [`Error`][enum@Error] type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while building an SQS client or talking to SQS.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The client for a region could not be built.
    #[error(transparent)]
    Region(#[from] regional::Error),

    /// SQS or the transport rejected the request.
    #[error(transparent)]
    Service(Box<aws_sdk_sqs::Error>),

    /// SQS accepted the request but its response carried no queue URL.
    #[error("the response of {operation} carried no queue URL")]
    MissingQueueUrl {
        /// The operation whose response was incomplete.
        operation: &'static str,
    },
}

impl Error {
    pub(crate) fn from_sdk(error: impl Into<aws_sdk_sqs::Error>) -> Self {
        Self::Service(Box::new(error.into()))
    }

    /// The SDK error, if SQS or the transport rejected the request.
    #[must_use]
    pub fn as_service(&self) -> Option<&aws_sdk_sqs::Error> {
        match self {
            Self::Service(error) => Some(error),
            _ => None,
        }
    }
}

impl From<aws_sdk_sqs::Error> for Error {
    fn from(error: aws_sdk_sqs::Error) -> Self {
        Self::Service(Box::new(error))
    }
}
