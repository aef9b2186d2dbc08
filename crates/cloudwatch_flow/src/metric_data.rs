// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::error::BuildError;
use aws_sdk_cloudwatch::operation::get_metric_data::builders::GetMetricDataInputBuilder;
use aws_sdk_cloudwatch::operation::get_metric_data::{GetMetricDataInput, GetMetricDataOutput};
use aws_sdk_cloudwatch::types::MetricDataResult;
use futures_util::Stream;
use pagewise::Page;

use crate::{Error, Result};

/// Page size requested from `GetMetricData` unless the request template overrides it.
pub const MAX_DATAPOINTS: i32 = 5000;

/// Anything that can answer a single `GetMetricData` request.
///
/// Implemented for the SDK [`Client`]. Other implementations stand in for CloudWatch in tests.
pub trait MetricDataSource: Send + Sync {
    /// Sends one `GetMetricData` request and returns its page of results.
    fn fetch(&self, input: GetMetricDataInput) -> impl Future<Output = Result<GetMetricDataOutput>> + Send;
}

impl MetricDataSource for Client {
    #[tracing::instrument(
        name = "cloudwatch.get_metric_data",
        skip_all,
        fields(continued = input.next_token.is_some())
    )]
    async fn fetch(&self, input: GetMetricDataInput) -> Result<GetMetricDataOutput> {
        self.get_metric_data()
            .set_metric_data_queries(input.metric_data_queries)
            .set_start_time(input.start_time)
            .set_end_time(input.end_time)
            .set_next_token(input.next_token)
            .set_scan_by(input.scan_by)
            .set_max_datapoints(input.max_datapoints)
            .set_label_options(input.label_options)
            .send()
            .await
            .map_err(Error::from_sdk)
    }
}

/// Streams every [`MetricDataResult`] of a `GetMetricData` listing against `source`.
///
/// Each page starts from a request carrying only the continuation token and a page size of
/// [`MAX_DATAPOINTS`]; `template` then fills in the rest. The stream stops after the first page
/// without a token, or after the first error.
pub fn metric_data<'a, S, F>(source: &'a S, template: F) -> impl Stream<Item = Result<MetricDataResult>> + Send + 'a
where
    S: MetricDataSource,
    F: Fn(GetMetricDataInputBuilder) -> GetMetricDataInputBuilder + Send + 'a,
{
    pagewise::paginate(move |token| {
        let input = template(
            GetMetricDataInput::builder()
                .set_next_token(token)
                .max_datapoints(MAX_DATAPOINTS),
        )
        .build();
        fetch_page(source, input)
    })
}

async fn fetch_page<S: MetricDataSource>(
    source: &S,
    input: std::result::Result<GetMetricDataInput, BuildError>,
) -> Result<Page<MetricDataResult>> {
    let output = source.fetch(input?).await?;
    Ok(Page::new(output.metric_data_results.unwrap_or_default(), output.next_token))
}
