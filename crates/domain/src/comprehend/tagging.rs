//! リソースタグ操作

use serde::Serialize;

use crate::{
    DomainError,
    binding::{Tag, require, require_non_empty},
    operation::{AwsService, Operation},
    projection::DefaultOutput,
    value_objects::ResourceArn,
};

/// Comprehend リソースにタグを付与する
pub struct TagResource;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceParams {
    pub resource_arn: Option<String>,
    #[serde(rename = "Tag")]
    pub tags:         Option<Vec<Tag>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResourceRequest {
    pub resource_arn: ResourceArn,
    pub tags:         Vec<Tag>,
}

/// 応答本体を持たない
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagResourceResponse {}

impl Operation for TagResource {
    type Params = TagResourceParams;
    type Request = TagResourceRequest;
    type Response = TagResourceResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Nothing;
    const MUTATING: bool = true;
    const NAME: &'static str = "TagResource";
    const SERVICE: AwsService = AwsService::Comprehend;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        let resource_arn = require(Self::NAME, "ResourceArn", params.resource_arn.clone())?;
        Ok(TagResourceRequest {
            resource_arn: ResourceArn::new(resource_arn)?,
            tags:         require_non_empty(Self::NAME, "Tag", params.tags.clone())?,
        })
    }

    fn target(params: &Self::Params) -> String {
        params
            .resource_arn
            .clone()
            .unwrap_or_else(|| Self::NAME.to_string())
    }
}
