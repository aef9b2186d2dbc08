// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::operation::get_metric_data::builders::GetMetricDataInputBuilder;
use aws_sdk_cloudwatch::types::MetricDataResult;
use futures_util::Stream;
use regional::{ClientSettings, EndpointPolicy, Region, RegionCache};

use crate::{Result, metric_data};

/// Endpoint prefix of CloudWatch, as in `monitoring.<region>.amazonaws.com`.
const ENDPOINT_PREFIX: &str = "monitoring";

/// A CloudWatch client bound to one region.
#[derive(Debug, Clone)]
pub struct CloudWatch {
    client: Client,
}

impl CloudWatch {
    /// Wraps an SDK client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The underlying SDK client, for operations this crate does not wrap.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Streams the results of `GetMetricData`, following continuation tokens until the last page.
    ///
    /// `template` fills in the request. It is applied to a fresh request for every page, after the
    /// continuation token and a page size of [`MAX_DATAPOINTS`][crate::MAX_DATAPOINTS] have been
    /// set, so it may override the page size.
    ///
    /// The stream is lazy and yields each result as soon as its page arrives. A failed page ends
    /// the stream with that error. Listing again means calling this method again.
    pub fn get_metric_data<'a, F>(&'a self, template: F) -> impl Stream<Item = Result<MetricDataResult>> + Send + 'a
    where
        F: Fn(GetMetricDataInputBuilder) -> GetMetricDataInputBuilder + Send + 'a,
    {
        metric_data(&self.client, template)
    }
}

/// The CloudWatch clients of one HTTP transport, one per region.
///
/// Clients are built on first use with the table's [`ClientSettings`] and then shared by every
/// caller asking for the same region. Unless the settings say otherwise, endpoints are left to the
/// SDK's resolver.
#[derive(Debug)]
pub struct CloudWatchClients {
    settings: ClientSettings,
    clients: RegionCache<CloudWatch>,
}

impl CloudWatchClients {
    /// Creates an empty table that builds clients from `settings`.
    #[must_use]
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            settings,
            clients: RegionCache::new(),
        }
    }

    /// The settings clients are built with.
    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Returns the client for `region`, building it if this is the first request for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Region`][crate::Error::Region] if the region id is malformed. Failed
    /// builds are not cached.
    pub fn get(&self, region: &Region) -> Result<Arc<CloudWatch>> {
        self.clients.get_or_try_insert_with(region, |region| self.build(region))
    }

    /// Drops the cached client for `region`, so that the next [`get`][Self::get] builds a new one.
    pub fn evict(&self, region: &Region) -> Option<Arc<CloudWatch>> {
        self.clients.remove(region)
    }

    /// Regions that currently have a client.
    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        self.clients.regions()
    }

    fn build(&self, region: &Region) -> Result<CloudWatch> {
        regional::validate_region(region)?;

        let mut config = aws_sdk_cloudwatch::Config::builder()
            .behavior_version(self.settings.behavior_version())
            .http_client(self.settings.http_client().clone())
            .credentials_provider(self.settings.credentials_provider().clone())
            .region(region.clone());

        if let Some(url) = self
            .settings
            .endpoint_url(ENDPOINT_PREFIX, region, &EndpointPolicy::Resolve)
        {
            config = config.endpoint_url(url);
        }

        Ok(CloudWatch::new(Client::from_conf(config.build())))
    }
}

#[cfg(test)]
mod tests {
    use std::pin::pin;

    use aws_credential_types::Credentials;
    use futures::StreamExt;
    use regional::testing::CannedHttpClient;

    use super::*;
    use crate::Error;

    fn clients(endpoint: Option<EndpointPolicy>) -> CloudWatchClients {
        clients_over(&CannedHttpClient::new(), endpoint)
    }

    fn clients_over(transport: &CannedHttpClient, endpoint: Option<EndpointPolicy>) -> CloudWatchClients {
        let mut settings = ClientSettings::builder(transport.shared())
            .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"));
        if let Some(endpoint) = endpoint {
            settings = settings.endpoint(endpoint);
        }
        CloudWatchClients::new(settings.build())
    }

    #[test]
    fn assert_types() {
        static_assertions::assert_impl_all!(CloudWatchClients: Send, Sync, std::fmt::Debug);
        static_assertions::assert_impl_all!(CloudWatch: Send, Sync, Clone);
    }

    #[test]
    fn same_region_returns_same_client() {
        let clients = clients(None);

        let first = clients.get(&Region::new("us-east-1")).unwrap();
        let second = clients.get(&Region::new("us-east-1")).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn distinct_regions_return_distinct_clients() {
        let clients = clients(None);

        let east = clients.get(&Region::new("us-east-1")).unwrap();
        let west = clients.get(&Region::new("us-west-2")).unwrap();

        assert!(!Arc::ptr_eq(&east, &west));
        assert_eq!(east.client().config().region(), Some(&Region::new("us-east-1")));
        assert_eq!(west.client().config().region(), Some(&Region::new("us-west-2")));

        let mut regions = clients.regions();
        regions.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
        assert_eq!(regions, [Region::new("us-east-1"), Region::new("us-west-2")]);
    }

    #[test]
    fn invalid_region_is_rejected_and_not_cached() {
        let clients = clients(None);

        let error = clients.get(&Region::new("us east 1")).unwrap_err();

        assert!(matches!(error, Error::Region(regional::Error::InvalidRegion(_))));
        assert!(clients.regions().is_empty());
    }

    #[test]
    fn evict_forces_a_new_client() {
        let clients = clients(None);
        let region = Region::new("eu-west-1");

        let first = clients.get(&region).unwrap();
        assert!(clients.evict(&region).is_some());
        let second = clients.get(&region).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
    }

    /// Issues one rejected `GetMetricData` request through `cloudwatch` and returns the URI it went to.
    async fn request_uri(transport: &CannedHttpClient, cloudwatch: &CloudWatch) -> String {
        transport.respond(400, "");
        let mut results = pin!(cloudwatch.get_metric_data(|request| request));
        assert!(matches!(results.next().await, Some(Err(Error::Service(_)))));
        transport.requests().remove(0).uri
    }

    #[tokio::test]
    async fn sdk_resolves_the_endpoint_by_default() {
        let transport = CannedHttpClient::new();
        let clients = clients_over(&transport, None);

        let cloudwatch = clients.get(&Region::new("eu-central-1")).unwrap();
        let uri = request_uri(&transport, &cloudwatch).await;

        assert!(uri.starts_with("https://monitoring.eu-central-1.amazonaws.com"), "{uri}");
    }

    #[tokio::test]
    async fn regional_endpoint_uses_the_monitoring_prefix() {
        let transport = CannedHttpClient::new();
        let clients = clients_over(&transport, Some(EndpointPolicy::Regional));

        let cloudwatch = clients.get(&Region::new("ap-northeast-1")).unwrap();
        let uri = request_uri(&transport, &cloudwatch).await;

        assert!(uri.starts_with("https://monitoring.ap-northeast-1.amazonaws.com"), "{uri}");
    }

    #[tokio::test]
    async fn fixed_endpoint_overrides_resolution() {
        let transport = CannedHttpClient::new();
        let clients = clients_over(&transport, Some(EndpointPolicy::Fixed("http://localhost:4566".to_string())));

        let cloudwatch = clients.get(&Region::new("us-east-1")).unwrap();
        let uri = request_uri(&transport, &cloudwatch).await;

        assert!(uri.starts_with("http://localhost:4566"), "{uri}");
    }
}
