//! スタジオ操作

use std::collections::BTreeMap;

use serde::Serialize;

use super::types::{Studio, StudioEncryptionKeyType};
use crate::{
    DomainError,
    binding::{Tag, require},
    operation::{AwsService, Operation, PaginatedOperation},
    pagination::PageRequest,
    projection::DefaultOutput,
    request::FieldGroup,
    value_objects::StudioId,
};

/// スタジオの暗号化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionConfiguration {
    pub key_type: StudioEncryptionKeyType,
    pub key_arn:  Option<String>,
}

#[derive(Default)]
struct EncryptionConfigurationDraft {
    key_type: Option<StudioEncryptionKeyType>,
    key_arn:  Option<String>,
}

/// タグのリストを Nimble のタグマップに変換する（値なしのタグは空文字）
fn tag_map(tags: &[Tag]) -> BTreeMap<String, String> {
    tags.iter()
        .map(|tag| (tag.key.clone(), tag.value.clone().unwrap_or_default()))
        .collect()
}

// ===== ListStudios =====

/// スタジオの一覧を取得する
///
/// ページサイズを指定できないため、件数上限はレスポンスの切り詰めで守る。
pub struct ListStudios;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListStudiosParams {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStudiosRequest {
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListStudiosResponse {
    pub studios:    Vec<Studio>,
    pub next_token: Option<String>,
}

impl Operation for ListStudios {
    type Params = ListStudiosParams;
    type Request = ListStudiosRequest;
    type Response = ListStudiosResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Field("Studios");
    const NAME: &'static str = "ListStudios";
    const SERVICE: AwsService = AwsService::Nimble;

    fn build_request(_params: &Self::Params) -> Result<Self::Request, DomainError> {
        Ok(ListStudiosRequest::default())
    }
}

impl PaginatedOperation for ListStudios {
    const MAX_PAGE_SIZE: Option<i32> = None;

    fn apply_page(request: &mut Self::Request, page: &PageRequest) {
        request.next_token = page.token.clone();
    }

    fn item_count(response: &Self::Response) -> usize {
        response.studios.len()
    }

    fn next_token(response: &Self::Response) -> Option<&str> {
        response.next_token.as_deref()
    }

    fn truncate_items(response: &mut Self::Response, len: usize) {
        response.studios.truncate(len);
    }
}

// ===== GetStudio =====

/// スタジオを取得する
pub struct GetStudio;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetStudioParams {
    pub studio_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStudioRequest {
    pub studio_id: StudioId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetStudioResponse {
    pub studio: Option<Studio>,
}

impl Operation for GetStudio {
    type Params = GetStudioParams;
    type Request = GetStudioRequest;
    type Response = GetStudioResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Field("Studio");
    const NAME: &'static str = "GetStudio";
    const SERVICE: AwsService = AwsService::Nimble;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        let studio_id = require(Self::NAME, "StudioId", params.studio_id.clone())?;
        Ok(GetStudioRequest {
            studio_id: StudioId::new(studio_id)?,
        })
    }
}

// ===== CreateStudio =====

/// スタジオを作成する
pub struct CreateStudio;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStudioParams {
    pub studio_name:    Option<String>,
    pub display_name:   Option<String>,
    pub admin_role_arn: Option<String>,
    pub user_role_arn:  Option<String>,
    pub client_token:   Option<String>,
    #[serde(rename = "StudioEncryptionConfiguration_KeyType")]
    pub studio_encryption_configuration_key_type: Option<StudioEncryptionKeyType>,
    #[serde(rename = "StudioEncryptionConfiguration_KeyArn")]
    pub studio_encryption_configuration_key_arn: Option<String>,
    #[serde(rename = "Tag")]
    pub tags:           Option<Vec<Tag>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStudioRequest {
    pub studio_name:                     String,
    pub display_name:                    String,
    pub admin_role_arn:                  String,
    pub user_role_arn:                   String,
    pub client_token:                    Option<String>,
    pub studio_encryption_configuration: Option<EncryptionConfiguration>,
    pub tags:                            Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStudioResponse {
    pub studio: Option<Studio>,
}

impl Operation for CreateStudio {
    type Params = CreateStudioParams;
    type Request = CreateStudioRequest;
    type Response = CreateStudioResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Field("Studio");
    const MUTATING: bool = true;
    const NAME: &'static str = "CreateStudio";
    const SERVICE: AwsService = AwsService::Nimble;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        let mut encryption = FieldGroup::<EncryptionConfigurationDraft>::new();
        encryption
            .set(params.studio_encryption_configuration_key_type, |e, v| {
                e.key_type = Some(v);
            })
            .set(params.studio_encryption_configuration_key_arn.clone(), |e, v| {
                e.key_arn = Some(v);
            });

        let studio_encryption_configuration = encryption.finish_with(|draft| {
            Ok(EncryptionConfiguration {
                key_type: require(
                    Self::NAME,
                    "StudioEncryptionConfiguration_KeyType",
                    draft.key_type,
                )?,
                key_arn:  draft.key_arn,
            })
        })?;

        Ok(CreateStudioRequest {
            studio_name: require(Self::NAME, "StudioName", params.studio_name.clone())?,
            display_name: require(Self::NAME, "DisplayName", params.display_name.clone())?,
            admin_role_arn: require(Self::NAME, "AdminRoleArn", params.admin_role_arn.clone())?,
            user_role_arn: require(Self::NAME, "UserRoleArn", params.user_role_arn.clone())?,
            client_token: params.client_token.clone(),
            studio_encryption_configuration,
            tags: params
                .tags
                .as_deref()
                .filter(|tags| !tags.is_empty())
                .map(tag_map),
        })
    }

    fn target(params: &Self::Params) -> String {
        params
            .studio_name
            .clone()
            .unwrap_or_else(|| Self::NAME.to_string())
    }
}

// ===== DeleteStudio =====

/// スタジオを削除する
pub struct DeleteStudio;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteStudioParams {
    pub studio_id:    Option<String>,
    pub client_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudioRequest {
    pub studio_id:    StudioId,
    pub client_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteStudioResponse {
    pub studio: Option<Studio>,
}

impl Operation for DeleteStudio {
    type Params = DeleteStudioParams;
    type Request = DeleteStudioRequest;
    type Response = DeleteStudioResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Field("Studio");
    const MUTATING: bool = true;
    const NAME: &'static str = "DeleteStudio";
    const SERVICE: AwsService = AwsService::Nimble;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        let studio_id = require(Self::NAME, "StudioId", params.studio_id.clone())?;
        Ok(DeleteStudioRequest {
            studio_id:    StudioId::new(studio_id)?,
            client_token: params.client_token.clone(),
        })
    }

    fn target(params: &Self::Params) -> String {
        params
            .studio_id
            .clone()
            .unwrap_or_else(|| Self::NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_params() -> CreateStudioParams {
        CreateStudioParams {
            studio_name: Some("render".to_string()),
            display_name: Some("Render Farm".to_string()),
            admin_role_arn: Some("arn:aws:iam::123456789012:role/admin".to_string()),
            user_role_arn: Some("arn:aws:iam::123456789012:role/user".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_暗号化設定が未指定ならグループは省略される() {
        let request = CreateStudio::build_request(&create_params()).unwrap();

        assert_eq!(request.studio_encryption_configuration, None);
        assert_eq!(request.tags, None);
    }

    #[test]
    fn test_キーarnだけ指定するとキー種別の欠落を報告する() {
        let params = CreateStudioParams {
            studio_encryption_configuration_key_arn: Some(
                "arn:aws:kms:us-east-1:123456789012:key/abc".to_string(),
            ),
            ..create_params()
        };

        let err = CreateStudio::build_request(&params).unwrap_err();

        assert!(matches!(
            err,
            DomainError::MissingParameter {
                parameter: "StudioEncryptionConfiguration_KeyType",
                ..
            }
        ));
    }

    #[test]
    fn test_キー種別を指定すると暗号化設定を構築する() {
        let params = CreateStudioParams {
            studio_encryption_configuration_key_type: Some(StudioEncryptionKeyType::AwsOwnedKey),
            ..create_params()
        };

        let request = CreateStudio::build_request(&params).unwrap();

        assert_eq!(
            request.studio_encryption_configuration,
            Some(EncryptionConfiguration {
                key_type: StudioEncryptionKeyType::AwsOwnedKey,
                key_arn:  None,
            })
        );
    }

    #[test]
    fn test_タグはマップに変換され値なしは空文字になる() {
        let params = CreateStudioParams {
            tags: Some(vec!["team=vfx".parse().unwrap(), "draft".parse().unwrap()]),
            ..create_params()
        };

        let request = CreateStudio::build_request(&params).unwrap();

        assert_eq!(
            request.tags,
            Some(BTreeMap::from([
                ("draft".to_string(), String::new()),
                ("team".to_string(), "vfx".to_string()),
            ]))
        );
    }

    #[test]
    fn test_削除の確認対象はスタジオidになる() {
        let params = DeleteStudioParams {
            studio_id:    Some("stid-123".to_string()),
            client_token: None,
        };

        assert_eq!(DeleteStudio::target(&params), "stid-123");
    }

    #[test]
    fn test_list_studiosはページサイズを設定しない() {
        let mut request = ListStudios::build_request(&ListStudiosParams {}).unwrap();

        ListStudios::apply_page(
            &mut request,
            &PageRequest {
                token:     Some("next".to_string()),
                page_size: Some(10),
            },
        );

        assert_eq!(request.next_token.as_deref(), Some("next"));
        assert_eq!(ListStudios::MAX_PAGE_SIZE, None);
    }
}
