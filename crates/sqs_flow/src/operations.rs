// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::HashMap;

use aws_sdk_sqs::operation::add_permission::builders::AddPermissionFluentBuilder;
use aws_sdk_sqs::operation::change_message_visibility::builders::ChangeMessageVisibilityFluentBuilder;
use aws_sdk_sqs::operation::change_message_visibility_batch::ChangeMessageVisibilityBatchOutput;
use aws_sdk_sqs::operation::change_message_visibility_batch::builders::ChangeMessageVisibilityBatchFluentBuilder;
use aws_sdk_sqs::operation::create_queue::builders::CreateQueueFluentBuilder;
use aws_sdk_sqs::operation::delete_message::builders::DeleteMessageFluentBuilder;
use aws_sdk_sqs::operation::delete_message_batch::DeleteMessageBatchOutput;
use aws_sdk_sqs::operation::delete_message_batch::builders::DeleteMessageBatchFluentBuilder;
use aws_sdk_sqs::operation::delete_queue::builders::DeleteQueueFluentBuilder;
use aws_sdk_sqs::operation::get_queue_attributes::builders::GetQueueAttributesFluentBuilder;
use aws_sdk_sqs::operation::get_queue_url::builders::GetQueueUrlFluentBuilder;
use aws_sdk_sqs::operation::list_dead_letter_source_queues::builders::ListDeadLetterSourceQueuesFluentBuilder;
use aws_sdk_sqs::operation::list_queue_tags::builders::ListQueueTagsFluentBuilder;
use aws_sdk_sqs::operation::list_queues::builders::ListQueuesFluentBuilder;
use aws_sdk_sqs::operation::purge_queue::builders::PurgeQueueFluentBuilder;
use aws_sdk_sqs::operation::receive_message::builders::ReceiveMessageFluentBuilder;
use aws_sdk_sqs::operation::remove_permission::builders::RemovePermissionFluentBuilder;
use aws_sdk_sqs::operation::send_message::SendMessageOutput;
use aws_sdk_sqs::operation::send_message::builders::SendMessageFluentBuilder;
use aws_sdk_sqs::operation::send_message_batch::SendMessageBatchOutput;
use aws_sdk_sqs::operation::send_message_batch::builders::SendMessageBatchFluentBuilder;
use aws_sdk_sqs::operation::set_queue_attributes::builders::SetQueueAttributesFluentBuilder;
use aws_sdk_sqs::operation::tag_queue::builders::TagQueueFluentBuilder;
use aws_sdk_sqs::operation::untag_queue::builders::UntagQueueFluentBuilder;
use aws_sdk_sqs::types::Message;

use crate::{Error, Result, Sqs};

// Every operation takes a closure that fills in the SDK request builder, sends the request once and
// maps the response to the part callers need. Service errors are forwarded untouched.

/// Permissions.
impl Sqs {
    /// Grants another account access to a queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.add_permission", skip_all)]
    pub async fn add_permission(&self, request: impl FnOnce(AddPermissionFluentBuilder) -> AddPermissionFluentBuilder) -> Result<()> {
        request(self.client.add_permission()).send().await.map_err(Error::from_sdk)?;
        Ok(())
    }

    /// Revokes a permission granted with [`add_permission`][Self::add_permission].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.remove_permission", skip_all)]
    pub async fn remove_permission(
        &self,
        request: impl FnOnce(RemovePermissionFluentBuilder) -> RemovePermissionFluentBuilder,
    ) -> Result<()> {
        request(self.client.remove_permission()).send().await.map_err(Error::from_sdk)?;
        Ok(())
    }
}

/// Queues.
impl Sqs {
    /// Creates a queue and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request and [`Error::MissingQueueUrl`] if the
    /// response names no queue.
    #[tracing::instrument(name = "sqs.create_queue", skip_all)]
    pub async fn create_queue(&self, request: impl FnOnce(CreateQueueFluentBuilder) -> CreateQueueFluentBuilder) -> Result<String> {
        let output = request(self.client.create_queue()).send().await.map_err(Error::from_sdk)?;
        output.queue_url.ok_or(Error::MissingQueueUrl { operation: "CreateQueue" })
    }

    /// Deletes a queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.delete_queue", skip_all)]
    pub async fn delete_queue(&self, request: impl FnOnce(DeleteQueueFluentBuilder) -> DeleteQueueFluentBuilder) -> Result<()> {
        request(self.client.delete_queue()).send().await.map_err(Error::from_sdk)?;
        Ok(())
    }

    /// Looks up the URL of a queue by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request, for example because the queue does not
    /// exist, and [`Error::MissingQueueUrl`] if the response names no queue.
    #[tracing::instrument(name = "sqs.get_queue_url", skip_all)]
    pub async fn get_queue_url(&self, request: impl FnOnce(GetQueueUrlFluentBuilder) -> GetQueueUrlFluentBuilder) -> Result<String> {
        let output = request(self.client.get_queue_url()).send().await.map_err(Error::from_sdk)?;
        output.queue_url.ok_or(Error::MissingQueueUrl { operation: "GetQueueUrl" })
    }

    /// Returns the requested attributes of a queue, keyed by attribute name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.get_queue_attributes", skip_all)]
    pub async fn get_queue_attributes(
        &self,
        request: impl FnOnce(GetQueueAttributesFluentBuilder) -> GetQueueAttributesFluentBuilder,
    ) -> Result<HashMap<String, String>> {
        let output = request(self.client.get_queue_attributes())
            .send()
            .await
            .map_err(Error::from_sdk)?;
        Ok(output
            .attributes
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| (name.as_str().to_owned(), value))
            .collect())
    }

    /// Sets attributes of a queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.set_queue_attributes", skip_all)]
    pub async fn set_queue_attributes(
        &self,
        request: impl FnOnce(SetQueueAttributesFluentBuilder) -> SetQueueAttributesFluentBuilder,
    ) -> Result<()> {
        request(self.client.set_queue_attributes())
            .send()
            .await
            .map_err(Error::from_sdk)?;
        Ok(())
    }

    /// Returns the URLs of the queues visible to the caller.
    ///
    /// Only the page SQS returns for this request is included; pass a `next_token` to continue.
    /// A request left untouched lists every queue, as [`list_all_queues`][Self::list_all_queues] does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.list_queues", skip_all)]
    pub async fn list_queues(&self, request: impl FnOnce(ListQueuesFluentBuilder) -> ListQueuesFluentBuilder) -> Result<Vec<String>> {
        let output = request(self.client.list_queues()).send().await.map_err(Error::from_sdk)?;
        Ok(output.queue_urls().to_vec())
    }

    /// Returns the URLs of the queues visible to the caller, without any filter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    pub async fn list_all_queues(&self) -> Result<Vec<String>> {
        self.list_queues(|request| request).await
    }

    /// Returns the URLs of the queues that use a queue as their dead-letter queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.list_dead_letter_source_queues", skip_all)]
    pub async fn list_dead_letter_source_queues(
        &self,
        request: impl FnOnce(ListDeadLetterSourceQueuesFluentBuilder) -> ListDeadLetterSourceQueuesFluentBuilder,
    ) -> Result<Vec<String>> {
        let output = request(self.client.list_dead_letter_source_queues())
            .send()
            .await
            .map_err(Error::from_sdk)?;
        Ok(output.queue_urls().to_vec())
    }

    /// Deletes every message of a queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.purge_queue", skip_all)]
    pub async fn purge_queue(&self, request: impl FnOnce(PurgeQueueFluentBuilder) -> PurgeQueueFluentBuilder) -> Result<()> {
        request(self.client.purge_queue()).send().await.map_err(Error::from_sdk)?;
        Ok(())
    }
}

/// Tags.
impl Sqs {
    /// Returns the tags of a queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.list_queue_tags", skip_all)]
    pub async fn list_queue_tags(
        &self,
        request: impl FnOnce(ListQueueTagsFluentBuilder) -> ListQueueTagsFluentBuilder,
    ) -> Result<HashMap<String, String>> {
        let output = request(self.client.list_queue_tags()).send().await.map_err(Error::from_sdk)?;
        Ok(output.tags.unwrap_or_default())
    }

    /// Adds or replaces tags of a queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.tag_queue", skip_all)]
    pub async fn tag_queue(&self, request: impl FnOnce(TagQueueFluentBuilder) -> TagQueueFluentBuilder) -> Result<()> {
        request(self.client.tag_queue()).send().await.map_err(Error::from_sdk)?;
        Ok(())
    }

    /// Removes tags from a queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.untag_queue", skip_all)]
    pub async fn untag_queue(&self, request: impl FnOnce(UntagQueueFluentBuilder) -> UntagQueueFluentBuilder) -> Result<()> {
        request(self.client.untag_queue()).send().await.map_err(Error::from_sdk)?;
        Ok(())
    }
}

/// Messages.
impl Sqs {
    /// Sends one message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.send_message", skip_all)]
    pub async fn send_message(&self, request: impl FnOnce(SendMessageFluentBuilder) -> SendMessageFluentBuilder) -> Result<SendMessageOutput> {
        request(self.client.send_message()).send().await.map_err(Error::from_sdk)
    }

    /// Sends up to ten messages in one request.
    ///
    /// Entries fail individually; the output lists the successful and the failed ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request as a whole.
    #[tracing::instrument(name = "sqs.send_message_batch", skip_all)]
    pub async fn send_message_batch(
        &self,
        request: impl FnOnce(SendMessageBatchFluentBuilder) -> SendMessageBatchFluentBuilder,
    ) -> Result<SendMessageBatchOutput> {
        request(self.client.send_message_batch()).send().await.map_err(Error::from_sdk)
    }

    /// Receives the messages currently available, up to the requested maximum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.receive_message", skip_all)]
    pub async fn receive_message(&self, request: impl FnOnce(ReceiveMessageFluentBuilder) -> ReceiveMessageFluentBuilder) -> Result<Vec<Message>> {
        let output = request(self.client.receive_message()).send().await.map_err(Error::from_sdk)?;
        Ok(output.messages.unwrap_or_default())
    }

    /// Deletes a received message by its receipt handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.delete_message", skip_all)]
    pub async fn delete_message(&self, request: impl FnOnce(DeleteMessageFluentBuilder) -> DeleteMessageFluentBuilder) -> Result<()> {
        request(self.client.delete_message()).send().await.map_err(Error::from_sdk)?;
        Ok(())
    }

    /// Deletes up to ten received messages in one request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request as a whole.
    #[tracing::instrument(name = "sqs.delete_message_batch", skip_all)]
    pub async fn delete_message_batch(
        &self,
        request: impl FnOnce(DeleteMessageBatchFluentBuilder) -> DeleteMessageBatchFluentBuilder,
    ) -> Result<DeleteMessageBatchOutput> {
        request(self.client.delete_message_batch()).send().await.map_err(Error::from_sdk)
    }

    /// Changes how long a received message stays invisible to other consumers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request.
    #[tracing::instrument(name = "sqs.change_message_visibility", skip_all)]
    pub async fn change_message_visibility(
        &self,
        request: impl FnOnce(ChangeMessageVisibilityFluentBuilder) -> ChangeMessageVisibilityFluentBuilder,
    ) -> Result<()> {
        request(self.client.change_message_visibility())
            .send()
            .await
            .map_err(Error::from_sdk)?;
        Ok(())
    }

    /// Changes the visibility timeout of up to ten messages in one request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Service`] if SQS rejects the request as a whole.
    #[tracing::instrument(name = "sqs.change_message_visibility_batch", skip_all)]
    pub async fn change_message_visibility_batch(
        &self,
        request: impl FnOnce(ChangeMessageVisibilityBatchFluentBuilder) -> ChangeMessageVisibilityBatchFluentBuilder,
    ) -> Result<ChangeMessageVisibilityBatchOutput> {
        request(self.client.change_message_visibility_batch())
            .send()
            .await
            .map_err(Error::from_sdk)
    }
}
