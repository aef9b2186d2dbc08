// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use aws_sdk_sqs::{Client, config};
use regional::{ClientSettings, EndpointPolicy, Region, RegionCache};

use crate::Result;

/// Endpoint prefix of SQS, as in `sqs.<region>.amazonaws.com`.
const ENDPOINT_PREFIX: &str = "sqs";

/// An SQS client bound to one region.
///
/// The queue operations live in the `impl` blocks of this type; each one is a single request and
/// response round trip.
#[derive(Debug, Clone)]
pub struct Sqs {
    pub(crate) client: Client,
}

impl Sqs {
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
}

/// The SQS clients of one HTTP transport, one per region.
///
/// Unless the settings say otherwise, clients talk to `https://sqs.<region>.amazonaws.com`.
#[derive(Debug)]
pub struct SqsClients {
    settings: ClientSettings,
    clients: RegionCache<Sqs>,
}

impl SqsClients {
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
    pub fn get(&self, region: &Region) -> Result<Arc<Sqs>> {
        self.get_with(region, |config| config)
    }

    /// Like [`get`][Self::get], but lets `customize` adjust the SDK configuration before the
    /// client is built.
    ///
    /// `customize` only runs when this call builds the client. If the region already has a client,
    /// that client is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Region`][crate::Error::Region] if the region id is malformed.
    pub fn get_with(&self, region: &Region, customize: impl FnOnce(config::Builder) -> config::Builder) -> Result<Arc<Sqs>> {
        self.clients
            .get_or_try_insert_with(region, |region| self.build(region, customize))
    }

    /// Drops the cached client for `region`, so that the next [`get`][Self::get] builds a new one.
    pub fn evict(&self, region: &Region) -> Option<Arc<Sqs>> {
        self.clients.remove(region)
    }

    /// Regions that currently have a client.
    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        self.clients.regions()
    }

    fn build(&self, region: &Region, customize: impl FnOnce(config::Builder) -> config::Builder) -> Result<Sqs> {
        regional::validate_region(region)?;

        let mut config = config::Builder::new()
            .behavior_version(self.settings.behavior_version())
            .http_client(self.settings.http_client().clone())
            .credentials_provider(self.settings.credentials_provider().clone())
            .region(region.clone());

        if let Some(url) = self
            .settings
            .endpoint_url(ENDPOINT_PREFIX, region, &EndpointPolicy::Regional)
        {
            config = config.endpoint_url(url);
        }

        Ok(Sqs::new(Client::from_conf(customize(config).build())))
    }
}
