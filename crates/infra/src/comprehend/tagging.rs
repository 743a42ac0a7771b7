//! リソースタグの呼び出し

use async_trait::async_trait;
use aws_sdk_comprehend::types as sdk;
use awsctl_domain::{
    binding::Tag,
    comprehend::{TagResource, TagResourceRequest, TagResourceResponse},
    operation::Operation,
};

use super::AwsComprehendClient;
use crate::{
    InfraError,
    invoke::{Invoke, classify_sdk_error},
};

pub(super) fn sdk_tags(tags: &[Tag]) -> Result<Vec<sdk::Tag>, InfraError> {
    tags.iter()
        .map(|tag| {
            Ok(sdk::Tag::builder()
                .key(&tag.key)
                .set_value(tag.value.clone())
                .build()?)
        })
        .collect()
}

#[async_trait]
impl Invoke<TagResource> for AwsComprehendClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = TagResource::NAME, resource_arn = %request.resource_arn))]
    async fn invoke(&self, request: TagResourceRequest) -> Result<TagResourceResponse, InfraError> {
        self.client
            .tag_resource()
            .resource_arn(request.resource_arn.into_string())
            .set_tags(Some(sdk_tags(&request.tags)?))
            .send()
            .await
            .map_err(|e| classify_sdk_error(TagResource::NAME, &self.endpoint, e))?;

        Ok(TagResourceResponse {})
    }
}
