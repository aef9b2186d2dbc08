// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use aws_config::environment::EnvironmentVariableCredentialsProvider;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_smithy_runtime_api::client::behavior_version::BehaviorVersion;
use aws_smithy_runtime_api::client::http::SharedHttpClient;
use aws_types::region::Region;

use crate::EndpointPolicy;

/// Construction parameters shared by every client of a client table.
///
/// The settings are captured when a client is built and cannot be changed for that client
/// afterward. Cloning is cheap: the transport and the credentials provider are reference counted.
///
/// # Examples
///
/// ```rust,ignore
/// use aws_credential_types::Credentials;
/// use regional::{ClientSettings, EndpointPolicy};
///
/// let settings = ClientSettings::builder(http_client)
///     .credentials_provider(Credentials::new("AKID", "secret", None, None, "static"))
///     .endpoint(EndpointPolicy::Fixed("http://localhost:4566".to_string()))
///     .build();
///
/// assert_eq!(settings.endpoint(), Some(&EndpointPolicy::Fixed("http://localhost:4566".to_string())));
/// ```
#[derive(Debug, Clone)]
pub struct ClientSettings {
    http_client: SharedHttpClient,
    credentials_provider: SharedCredentialsProvider,
    endpoint: Option<EndpointPolicy>,
    behavior_version: BehaviorVersion,
}

impl ClientSettings {
    /// Starts building settings around `http_client`, the transport reused by every client.
    ///
    /// Unless overridden, credentials come from the process environment
    /// (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_SESSION_TOKEN`), the endpoint policy is
    /// left to the service table and the latest SDK behavior version is used.
    #[must_use]
    pub fn builder(http_client: SharedHttpClient) -> ClientSettingsBuilder {
        ClientSettingsBuilder {
            http_client,
            credentials_provider: None,
            endpoint: None,
            behavior_version: None,
        }
    }

    /// Settings with every default applied.
    #[must_use]
    pub fn new(http_client: SharedHttpClient) -> Self {
        Self::builder(http_client).build()
    }

    /// The HTTP transport.
    #[must_use]
    pub fn http_client(&self) -> &SharedHttpClient {
        &self.http_client
    }

    /// The credentials provider.
    #[must_use]
    pub fn credentials_provider(&self) -> &SharedCredentialsProvider {
        &self.credentials_provider
    }

    /// The endpoint policy, if one was set explicitly.
    #[must_use]
    pub fn endpoint(&self) -> Option<&EndpointPolicy> {
        self.endpoint.as_ref()
    }

    /// The SDK behavior version.
    #[must_use]
    pub fn behavior_version(&self) -> BehaviorVersion {
        self.behavior_version.clone()
    }

    /// Returns the endpoint override for `service` in `region`.
    ///
    /// The explicitly configured policy wins; `default` applies otherwise.
    #[must_use]
    pub fn endpoint_url(&self, service: &str, region: &Region, default: &EndpointPolicy) -> Option<String> {
        self.endpoint.as_ref().unwrap_or(default).endpoint_url(service, region)
    }
}

/// Builder for [`ClientSettings`].
#[derive(Debug)]
pub struct ClientSettingsBuilder {
    http_client: SharedHttpClient,
    credentials_provider: Option<SharedCredentialsProvider>,
    endpoint: Option<EndpointPolicy>,
    behavior_version: Option<BehaviorVersion>,
}

impl ClientSettingsBuilder {
    /// Resolves credentials with `provider` instead of the process environment.
    #[must_use]
    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials_provider = Some(SharedCredentialsProvider::new(provider));
        self
    }

    /// Overrides the endpoint policy of the service table.
    #[must_use]
    pub fn endpoint(mut self, policy: EndpointPolicy) -> Self {
        self.endpoint = Some(policy);
        self
    }

    /// Pins the SDK behavior version.
    #[must_use]
    pub fn behavior_version(mut self, version: BehaviorVersion) -> Self {
        self.behavior_version = Some(version);
        self
    }

    /// Builds the settings.
    #[must_use]
    pub fn build(self) -> ClientSettings {
        ClientSettings {
            http_client: self.http_client,
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| SharedCredentialsProvider::new(EnvironmentVariableCredentialsProvider::new())),
            endpoint: self.endpoint,
            behavior_version: self.behavior_version.unwrap_or_else(BehaviorVersion::latest),
        }
    }
}
