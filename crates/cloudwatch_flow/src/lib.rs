// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Region-cached CloudWatch clients with metric data exposed as a lazy stream.
//!
//! [`CloudWatchClients`] owns one HTTP transport and hands out one [`CloudWatch`] client per
//! region, building it on first use. [`CloudWatch::get_metric_data`] follows the continuation
//! tokens of `GetMetricData` and yields every [`MetricDataResult`][types::MetricDataResult] of
//! every page as a single stream.
//!
//! # Example
//!
//! ```rust,ignore
//! use aws_sdk_cloudwatch::primitives::DateTime;
//! use aws_sdk_cloudwatch::types::{Metric, MetricDataQuery, MetricStat};
//! use cloudwatch_flow::CloudWatchClients;
//! use futures::TryStreamExt;
//! use regional::{ClientSettings, Region};
//!
//! # async fn example(http_client: aws_smithy_runtime_api::client::http::SharedHttpClient) -> cloudwatch_flow::Result<()> {
//! let clients = CloudWatchClients::new(ClientSettings::new(http_client));
//! let cloudwatch = clients.get(&Region::new("us-east-1"))?;
//!
//! let query = MetricDataQuery::builder()
//!     .id("cpu")
//!     .metric_stat(
//!         MetricStat::builder()
//!             .metric(Metric::builder().namespace("AWS/EC2").metric_name("CPUUtilization").build())
//!             .period(300)
//!             .stat("Average")
//!             .build()?,
//!     )
//!     .build()?;
//!
//! let results: Vec<_> = cloudwatch
//!     .get_metric_data(|request| {
//!         request
//!             .metric_data_queries(query.clone())
//!             .start_time(DateTime::from_secs(1_700_000_000))
//!             .end_time(DateTime::from_secs(1_700_003_600))
//!     })
//!     .try_collect()
//!     .await?;
//! # let _ = results;
//! # Ok(())
//! # }
//! ```

mod clients;
mod error;
mod metric_data;

pub use clients::{CloudWatch, CloudWatchClients};
pub use error::{Error, Result};
pub use metric_data::{MAX_DATAPOINTS, MetricDataSource, metric_data};

pub use aws_sdk_cloudwatch::{Client, types};
