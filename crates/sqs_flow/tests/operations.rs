// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "test code")]

//! Queue operations against an in-process transport with canned JSON responses.

use std::collections::HashMap;
use std::sync::Arc;

use aws_credential_types::Credentials;
use regional::testing::CannedHttpClient;
use regional::{ClientSettings, Region};
use sqs_flow::{Error, Sqs, SqsClients};

const QUEUE_URL: &str = "https://sqs.eu-west-1.amazonaws.com/123456789012/orders";

fn sqs(transport: &CannedHttpClient) -> Arc<Sqs> {
    let settings = ClientSettings::builder(transport.shared())
        .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
        .build();
    SqsClients::new(settings).get(&Region::new("eu-west-1")).unwrap()
}

#[tokio::test]
async fn get_queue_url_returns_the_url() {
    let transport = CannedHttpClient::new();
    transport.respond(200, format!(r#"{{"QueueUrl":"{QUEUE_URL}"}}"#));

    let url = sqs(&transport).get_queue_url(|request| request.queue_name("orders")).await.unwrap();

    assert_eq!(url, QUEUE_URL);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].uri.starts_with("https://sqs.eu-west-1.amazonaws.com"), "{}", requests[0].uri);
    assert_eq!(requests[0].target.as_deref(), Some("AmazonSQS.GetQueueUrl"));
    assert!(requests[0].body.as_deref().unwrap_or_default().contains(r#""QueueName":"orders""#));
}

#[tokio::test]
async fn create_queue_without_url_is_an_error() {
    let transport = CannedHttpClient::new();
    transport.respond(200, "{}");

    let error = sqs(&transport).create_queue(|request| request.queue_name("orders")).await.unwrap_err();

    assert!(matches!(error, Error::MissingQueueUrl { operation: "CreateQueue" }));
}

#[tokio::test]
async fn create_queue_returns_the_url() {
    let transport = CannedHttpClient::new();
    transport.respond(200, format!(r#"{{"QueueUrl":"{QUEUE_URL}"}}"#));

    let url = sqs(&transport).create_queue(|request| request.queue_name("orders")).await.unwrap();

    assert_eq!(url, QUEUE_URL);
    assert_eq!(transport.requests()[0].target.as_deref(), Some("AmazonSQS.CreateQueue"));
}

#[tokio::test]
async fn list_queues_returns_every_url() {
    let transport = CannedHttpClient::new();
    transport.respond(200, format!(r#"{{"QueueUrls":["{QUEUE_URL}","{QUEUE_URL}-dlq"]}}"#));

    let urls = sqs(&transport).list_queues(|request| request.queue_name_prefix("orders")).await.unwrap();

    assert_eq!(urls, [QUEUE_URL.to_string(), format!("{QUEUE_URL}-dlq")]);
}

#[tokio::test]
async fn list_all_queues_sends_an_unfiltered_request() {
    let transport = CannedHttpClient::new();
    transport.respond(200, format!(r#"{{"QueueUrls":["{QUEUE_URL}"]}}"#));

    let urls = sqs(&transport).list_all_queues().await.unwrap();

    assert_eq!(urls, [QUEUE_URL]);
    let request = &transport.requests()[0];
    assert_eq!(request.target.as_deref(), Some("AmazonSQS.ListQueues"));
    assert!(!request.body.as_deref().unwrap_or_default().contains("QueueNamePrefix"));
}

#[tokio::test]
async fn absent_lists_and_maps_come_back_empty() {
    let transport = CannedHttpClient::new();
    let sqs = sqs(&transport);

    assert!(sqs.list_queues(|request| request).await.unwrap().is_empty());
    assert!(sqs.receive_message(|request| request.queue_url(QUEUE_URL)).await.unwrap().is_empty());
    assert!(sqs.list_queue_tags(|request| request.queue_url(QUEUE_URL)).await.unwrap().is_empty());
    assert!(
        sqs.get_queue_attributes(|request| request.queue_url(QUEUE_URL))
            .await
            .unwrap()
            .is_empty()
    );

    assert_eq!(transport.requests().len(), 4);
}

#[tokio::test]
async fn receive_message_returns_the_messages() {
    let transport = CannedHttpClient::new();
    transport.respond(
        200,
        r#"{"Messages":[{"MessageId":"m1","ReceiptHandle":"r1","Body":"hello"},{"MessageId":"m2","ReceiptHandle":"r2","Body":"world"}]}"#,
    );

    let messages = sqs(&transport)
        .receive_message(|request| request.queue_url(QUEUE_URL).max_number_of_messages(10))
        .await
        .unwrap();

    let bodies: Vec<_> = messages.iter().filter_map(|message| message.body()).collect();
    assert_eq!(bodies, ["hello", "world"]);
    assert_eq!(messages[1].receipt_handle(), Some("r2"));
}

#[tokio::test]
async fn queue_attributes_are_keyed_by_name() {
    let transport = CannedHttpClient::new();
    transport.respond(200, r#"{"Attributes":{"VisibilityTimeout":"30","DelaySeconds":"0"}}"#);

    let attributes = sqs(&transport)
        .get_queue_attributes(|request| request.queue_url(QUEUE_URL))
        .await
        .unwrap();

    assert_eq!(
        attributes,
        HashMap::from([
            ("VisibilityTimeout".to_string(), "30".to_string()),
            ("DelaySeconds".to_string(), "0".to_string()),
        ])
    );
}

#[tokio::test]
async fn queue_tags_are_returned() {
    let transport = CannedHttpClient::new();
    transport.respond(200, r#"{"Tags":{"team":"billing"}}"#);

    let tags = sqs(&transport).list_queue_tags(|request| request.queue_url(QUEUE_URL)).await.unwrap();

    assert_eq!(tags, HashMap::from([("team".to_string(), "billing".to_string())]));
}

#[tokio::test]
async fn send_message_returns_the_full_output() {
    let transport = CannedHttpClient::new();
    transport.respond(200, r#"{"MessageId":"m1","SequenceNumber":"7"}"#);

    let output = sqs(&transport)
        .send_message(|request| request.queue_url(QUEUE_URL).message_body("hello"))
        .await
        .unwrap();

    assert_eq!(output.message_id(), Some("m1"));
    assert_eq!(output.sequence_number(), Some("7"));

    let request = &transport.requests()[0];
    assert_eq!(request.target.as_deref(), Some("AmazonSQS.SendMessage"));
    assert!(request.body.as_deref().unwrap_or_default().contains(r#""MessageBody":"hello""#));
}

#[tokio::test]
async fn unit_operations_send_one_request_each() {
    let transport = CannedHttpClient::new();
    let sqs = sqs(&transport);

    sqs.delete_queue(|request| request.queue_url(QUEUE_URL)).await.unwrap();
    sqs.purge_queue(|request| request.queue_url(QUEUE_URL)).await.unwrap();
    sqs.tag_queue(|request| request.queue_url(QUEUE_URL).tags("team", "billing"))
        .await
        .unwrap();
    sqs.untag_queue(|request| request.queue_url(QUEUE_URL).tag_keys("team"))
        .await
        .unwrap();
    sqs.delete_message(|request| request.queue_url(QUEUE_URL).receipt_handle("r1"))
        .await
        .unwrap();

    let targets: Vec<_> = transport.requests().into_iter().filter_map(|request| request.target).collect();
    assert_eq!(
        targets,
        [
            "AmazonSQS.DeleteQueue",
            "AmazonSQS.PurgeQueue",
            "AmazonSQS.TagQueue",
            "AmazonSQS.UntagQueue",
            "AmazonSQS.DeleteMessage",
        ]
    );
}

#[tokio::test]
async fn service_errors_are_forwarded() {
    let transport = CannedHttpClient::new();
    transport.respond_with_headers(
        400,
        &[("x-amzn-query-error", "AWS.SimpleQueueService.NonExistentQueue;Sender")],
        r#"{"__type":"com.amazonaws.sqs#QueueDoesNotExist","message":"The specified queue does not exist."}"#,
    );

    let error = sqs(&transport).get_queue_url(|request| request.queue_name("missing")).await.unwrap_err();

    assert!(matches!(error.as_service(), Some(aws_sdk_sqs::Error::QueueDoesNotExist(_))), "{error:?}");
    assert_eq!(transport.requests().len(), 1, "client errors are not retried");
}

#[tokio::test]
async fn unmodeled_errors_keep_their_code() {
    use aws_sdk_sqs::error::ProvideErrorMetadata;

    let transport = CannedHttpClient::new();
    transport.respond(400, r#"{"__type":"com.amazonaws.sqs#AccessDenied","message":"Not allowed."}"#);

    let error = sqs(&transport).purge_queue(|request| request.queue_url(QUEUE_URL)).await.unwrap_err();

    let service = error.as_service().unwrap();
    assert_eq!(service.code(), Some("AccessDenied"));
    assert_eq!(service.message(), Some("Not allowed."));
}

#[tokio::test]
async fn batch_outputs_report_each_entry() {
    use aws_sdk_sqs::types::SendMessageBatchRequestEntry;

    let transport = CannedHttpClient::new();
    transport.respond(
        200,
        r#"{"Successful":[{"Id":"1","MessageId":"m1","MD5OfMessageBody":"5d41402abc4b2a76b9719d911017c592"}],"Failed":[{"Id":"2","SenderFault":true,"Code":"InvalidParameterValue"}]}"#,
    );

    let entries = ["1", "2"].map(|id| {
        SendMessageBatchRequestEntry::builder()
            .id(id)
            .message_body("hello")
            .build()
            .unwrap()
    });
    let output = sqs(&transport)
        .send_message_batch(|request| request.queue_url(QUEUE_URL).set_entries(Some(entries.to_vec())))
        .await
        .unwrap();

    assert_eq!(output.successful().len(), 1);
    assert_eq!(output.failed()[0].id(), "2");
}
