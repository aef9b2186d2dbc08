// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use aws_types::region::Region;

/// How a client picks the endpoint it sends requests to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EndpointPolicy {
    /// Leave endpoint selection to the SDK's own resolver.
    Resolve,

    /// Pin the endpoint to `https://<service>.<region>.amazonaws.com`.
    Regional,

    /// Send every request to this URL, whatever the region. Meant for local emulators.
    Fixed(String),
}

impl EndpointPolicy {
    /// Returns the endpoint override for `service` in `region`, or `None` when the SDK should
    /// resolve the endpoint itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use regional::{EndpointPolicy, Region};
    ///
    /// let region = Region::new("eu-north-1");
    /// assert_eq!(
    ///     EndpointPolicy::Regional.endpoint_url("sqs", &region).as_deref(),
    ///     Some("https://sqs.eu-north-1.amazonaws.com")
    /// );
    /// assert_eq!(EndpointPolicy::Resolve.endpoint_url("sqs", &region), None);
    /// ```
    #[must_use]
    pub fn endpoint_url(&self, service: &str, region: &Region) -> Option<String> {
        match self {
            Self::Resolve => None,
            Self::Regional => Some(format!("https://{service}.{region}.amazonaws.com")),
            Self::Fixed(url) => Some(url.clone()),
        }
    }
}
