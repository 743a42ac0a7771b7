//! スタジオの呼び出し

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_nimble::types as sdk;
use awsctl_domain::{
    nimble::{
        CreateStudio,
        CreateStudioRequest,
        CreateStudioResponse,
        DeleteStudio,
        DeleteStudioRequest,
        DeleteStudioResponse,
        EncryptionConfiguration,
        GetStudio,
        GetStudioRequest,
        GetStudioResponse,
        ListStudios,
        ListStudiosRequest,
        ListStudiosResponse,
        Studio,
        StudioEncryptionConfigurationView,
    },
    operation::Operation,
};

use super::AwsNimbleClient;
use crate::{
    InfraError,
    convert::{owned, sorted_tags, to_utc},
    invoke::{Invoke, classify_sdk_error},
};

pub(super) fn studio(value: &sdk::Studio) -> Studio {
    Studio {
        studio_id:                       owned(value.studio_id()),
        studio_name:                     owned(value.studio_name()),
        display_name:                    owned(value.display_name()),
        arn:                             owned(value.arn()),
        state:                           value.state().map(|s| s.as_str().to_string()),
        status_code:                     value.status_code().map(|s| s.as_str().to_string()),
        status_message:                  owned(value.status_message()),
        home_region:                     owned(value.home_region()),
        studio_url:                      owned(value.studio_url()),
        sso_client_id:                   owned(value.sso_client_id()),
        admin_role_arn:                  owned(value.admin_role_arn()),
        user_role_arn:                   owned(value.user_role_arn()),
        studio_encryption_configuration: value.studio_encryption_configuration().map(|c| {
            StudioEncryptionConfigurationView {
                key_arn:  owned(c.key_arn()),
                key_type: c.key_type().as_str().to_string(),
            }
        }),
        created_at:                      value.created_at().and_then(to_utc),
        updated_at:                      value.updated_at().and_then(to_utc),
        tags:                            sorted_tags(value.tags()),
    }
}

fn sdk_encryption(
    config: EncryptionConfiguration,
) -> Result<sdk::StudioEncryptionConfiguration, InfraError> {
    Ok(sdk::StudioEncryptionConfiguration::builder()
        .key_type(sdk::StudioEncryptionConfigurationKeyType::from(
            config.key_type.as_str(),
        ))
        .set_key_arn(config.key_arn)
        .build()?)
}

#[async_trait]
impl Invoke<ListStudios> for AwsNimbleClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = ListStudios::NAME))]
    async fn invoke(&self, request: ListStudiosRequest) -> Result<ListStudiosResponse, InfraError> {
        let output = self
            .client
            .list_studios()
            .set_next_token(request.next_token)
            .send()
            .await
            .map_err(|e| classify_sdk_error(ListStudios::NAME, &self.endpoint, e))?;

        Ok(ListStudiosResponse {
            studios:    output.studios().iter().map(studio).collect(),
            next_token: owned(output.next_token()),
        })
    }
}

#[async_trait]
impl Invoke<GetStudio> for AwsNimbleClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = GetStudio::NAME, studio_id = %request.studio_id))]
    async fn invoke(&self, request: GetStudioRequest) -> Result<GetStudioResponse, InfraError> {
        let output = self
            .client
            .get_studio()
            .studio_id(request.studio_id.into_string())
            .send()
            .await
            .map_err(|e| classify_sdk_error(GetStudio::NAME, &self.endpoint, e))?;

        Ok(GetStudioResponse {
            studio: output.studio().map(studio),
        })
    }
}

#[async_trait]
impl Invoke<CreateStudio> for AwsNimbleClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = CreateStudio::NAME, studio_name = %request.studio_name))]
    async fn invoke(&self, request: CreateStudioRequest) -> Result<CreateStudioResponse, InfraError> {
        let encryption = request
            .studio_encryption_configuration
            .map(sdk_encryption)
            .transpose()?;
        let tags: Option<HashMap<String, String>> =
            request.tags.map(|tags| tags.into_iter().collect());

        let output = self
            .client
            .create_studio()
            .studio_name(request.studio_name)
            .display_name(request.display_name)
            .admin_role_arn(request.admin_role_arn)
            .user_role_arn(request.user_role_arn)
            .set_client_token(request.client_token)
            .set_studio_encryption_configuration(encryption)
            .set_tags(tags)
            .send()
            .await
            .map_err(|e| classify_sdk_error(CreateStudio::NAME, &self.endpoint, e))?;

        Ok(CreateStudioResponse {
            studio: output.studio().map(studio),
        })
    }
}

#[async_trait]
impl Invoke<DeleteStudio> for AwsNimbleClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = DeleteStudio::NAME, studio_id = %request.studio_id))]
    async fn invoke(&self, request: DeleteStudioRequest) -> Result<DeleteStudioResponse, InfraError> {
        let output = self
            .client
            .delete_studio()
            .studio_id(request.studio_id.into_string())
            .set_client_token(request.client_token)
            .send()
            .await
            .map_err(|e| classify_sdk_error(DeleteStudio::NAME, &self.endpoint, e))?;

        Ok(DeleteStudioResponse {
            studio: output.studio().map(studio),
        })
    }
}

#[cfg(test)]
mod tests {
    use awsctl_domain::nimble::StudioEncryptionKeyType;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_暗号化設定はsdkの型に変換される() {
        let converted = sdk_encryption(EncryptionConfiguration {
            key_type: StudioEncryptionKeyType::CustomerManagedKey,
            key_arn:  Some("arn:aws:kms:us-west-2:123456789012:key/k".to_string()),
        })
        .unwrap();

        assert_eq!(
            converted.key_type(),
            &sdk::StudioEncryptionConfigurationKeyType::CustomerManagedKey
        );
        assert_eq!(
            converted.key_arn(),
            Some("arn:aws:kms:us-west-2:123456789012:key/k")
        );
    }

    #[test]
    fn test_スタジオを変換する() {
        let value = sdk::Studio::builder()
            .studio_id("stid-1")
            .studio_name("render")
            .state(sdk::StudioState::Ready)
            .tags("team", "vfx")
            .build();

        let converted = studio(&value);

        assert_eq!(converted.studio_id.as_deref(), Some("stid-1"));
        assert_eq!(converted.state.as_deref(), Some("READY"));
        assert_eq!(
            converted.tags.and_then(|t| t.get("team").cloned()),
            Some("vfx".to_string())
        );
    }
}
