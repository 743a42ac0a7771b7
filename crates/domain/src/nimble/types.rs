//! Nimble Studio の列挙トークンとレスポンス共通型

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

define_token_enum! {
    /// スタジオの暗号化キーの種別
    pub enum StudioEncryptionKeyType {
        AwsOwnedKey => "AWS_OWNED_KEY",
        CustomerManagedKey => "CUSTOMER_MANAGED_KEY",
    }
}

define_token_enum! {
    /// 起動プロファイルの状態
    pub enum LaunchProfileState {
        CreateInProgress => "CREATE_IN_PROGRESS",
        Ready => "READY",
        UpdateInProgress => "UPDATE_IN_PROGRESS",
        DeleteInProgress => "DELETE_IN_PROGRESS",
        Deleted => "DELETED",
        DeleteFailed => "DELETE_FAILED",
        CreateFailed => "CREATE_FAILED",
        UpdateFailed => "UPDATE_FAILED",
    }
}

/// スタジオの暗号化設定（レスポンス表現）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudioEncryptionConfigurationView {
    pub key_arn:  Option<String>,
    pub key_type: String,
}

/// スタジオ
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Studio {
    pub studio_id:                       Option<String>,
    pub studio_name:                     Option<String>,
    pub display_name:                    Option<String>,
    pub arn:                             Option<String>,
    pub state:                           Option<String>,
    pub status_code:                     Option<String>,
    pub status_message:                  Option<String>,
    pub home_region:                     Option<String>,
    pub studio_url:                      Option<String>,
    pub sso_client_id:                   Option<String>,
    pub admin_role_arn:                  Option<String>,
    pub user_role_arn:                   Option<String>,
    pub studio_encryption_configuration: Option<StudioEncryptionConfigurationView>,
    pub created_at:                      Option<DateTime<Utc>>,
    pub updated_at:                      Option<DateTime<Utc>>,
    pub tags:                            Option<BTreeMap<String, String>>,
}

/// 起動プロファイル
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchProfile {
    pub launch_profile_id:    Option<String>,
    pub name:                 Option<String>,
    pub description:          Option<String>,
    pub arn:                  Option<String>,
    pub state:                Option<String>,
    pub status_code:          Option<String>,
    pub status_message:       Option<String>,
    pub ec2_subnet_ids:       Vec<String>,
    pub studio_component_ids: Vec<String>,
    pub created_at:           Option<DateTime<Utc>>,
    pub created_by:           Option<String>,
    pub updated_at:           Option<DateTime<Utc>>,
    pub updated_by:           Option<String>,
    pub tags:                 Option<BTreeMap<String, String>>,
}
