//! `awsctl nimble` サブコマンド

use awsctl_domain::{
    binding::Tag,
    nimble::{
        CreateStudio,
        CreateStudioParams,
        DeleteStudio,
        DeleteStudioParams,
        GetStudio,
        GetStudioParams,
        LaunchProfileState,
        ListLaunchProfiles,
        ListLaunchProfilesParams,
        ListStudios,
        ListStudiosParams,
        StudioEncryptionKeyType,
    },
    projection::Output,
};
use awsctl_infra::{AwsContext, AwsNimbleClient, ClientCache, LazyClient};
use clap::{Args, Subcommand};

use super::common::{ForceArgs, OutputArgs, PagingArgs, non_empty};
use crate::{confirm::Force, error::CliError, pipeline, usecase};

/// Amazon Nimble Studio の操作
#[derive(Debug, Subcommand)]
pub enum NimbleCommand {
    /// スタジオの一覧を取得する
    ListStudios(ListStudiosArgs),
    /// スタジオを取得する（パイプライン入力: StudioId）
    GetStudio(GetStudioArgs),
    /// スタジオを作成する
    CreateStudio(CreateStudioArgs),
    /// スタジオを削除する（パイプライン入力: StudioId）
    DeleteStudio(DeleteStudioArgs),
    /// スタジオの起動プロファイル一覧を取得する（パイプライン入力: StudioId）
    ListLaunchProfiles(ListLaunchProfilesArgs),
}

impl NimbleCommand {
    /// コマンドを実行する
    pub async fn run(self, cache: &ClientCache, context: &AwsContext) -> Result<Output, CliError> {
        let client = LazyClient::<AwsNimbleClient>::new(cache, context);

        match self {
            Self::ListStudios(args) => {
                let selector = args.output.selector();
                usecase::execute_paginated::<ListStudios, _>(
                    &client,
                    &ListStudiosParams {},
                    args.paging.paging(),
                    &selector,
                )
                .await
            }
            Self::GetStudio(mut args) => {
                pipeline::fill_from_stdin(&mut args.studio_id)?;
                let selector = args.output.selector();
                usecase::execute::<GetStudio, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    &mut Force,
                )
                .await
            }
            Self::CreateStudio(args) => {
                let selector = args.output.selector();
                let mut confirm = args.force.confirmer();
                usecase::execute::<CreateStudio, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    confirm.as_mut(),
                )
                .await
            }
            Self::DeleteStudio(mut args) => {
                pipeline::fill_from_stdin(&mut args.studio_id)?;
                let selector = args.output.selector();
                let mut confirm = args.force.confirmer();
                usecase::execute::<DeleteStudio, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    confirm.as_mut(),
                )
                .await
            }
            Self::ListLaunchProfiles(mut args) => {
                pipeline::fill_from_stdin(&mut args.studio_id)?;
                let selector = args.output.selector();
                let paging = args.paging.paging();
                usecase::execute_paginated::<ListLaunchProfiles, _>(
                    &client,
                    &args.into_params(),
                    paging,
                    &selector,
                )
                .await
            }
        }
    }
}

// ===== スタジオ =====

#[derive(Debug, Args)]
pub struct ListStudiosArgs {
    #[command(flatten)]
    pub paging: PagingArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct GetStudioArgs {
    /// スタジオ ID
    #[arg(long)]
    pub studio_id: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl GetStudioArgs {
    pub fn into_params(self) -> GetStudioParams {
        GetStudioParams {
            studio_id: self.studio_id,
        }
    }
}

#[derive(Debug, Args)]
pub struct CreateStudioArgs {
    /// スタジオ名（URL に使われる）
    #[arg(long)]
    pub studio_name: Option<String>,

    /// 表示名
    #[arg(long)]
    pub display_name: Option<String>,

    /// 管理者ロールの ARN
    #[arg(long)]
    pub admin_role_arn: Option<String>,

    /// ユーザーロールの ARN
    #[arg(long)]
    pub user_role_arn: Option<String>,

    /// 冪等性トークン（省略時は SDK が生成する）
    #[arg(long)]
    pub client_token: Option<String>,

    /// 暗号化キーの種別
    #[arg(long = "studio-encryption-configuration-key-type", value_name = "KEY_TYPE")]
    pub encryption_key_type: Option<StudioEncryptionKeyType>,

    /// 顧客管理キーの ARN
    #[arg(long = "studio-encryption-configuration-key-arn", value_name = "KEY_ARN")]
    pub encryption_key_arn: Option<String>,

    /// タグ（`Key=Value`、カンマ区切り可）
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<Tag>,

    #[command(flatten)]
    pub force: ForceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CreateStudioArgs {
    pub fn into_params(self) -> CreateStudioParams {
        CreateStudioParams {
            studio_name: self.studio_name,
            display_name: self.display_name,
            admin_role_arn: self.admin_role_arn,
            user_role_arn: self.user_role_arn,
            client_token: self.client_token,
            studio_encryption_configuration_key_type: self.encryption_key_type,
            studio_encryption_configuration_key_arn: self.encryption_key_arn,
            tags: non_empty(self.tags),
        }
    }
}

#[derive(Debug, Args)]
pub struct DeleteStudioArgs {
    /// スタジオ ID
    #[arg(long)]
    pub studio_id: Option<String>,

    /// 冪等性トークン（省略時は SDK が生成する）
    #[arg(long)]
    pub client_token: Option<String>,

    #[command(flatten)]
    pub force: ForceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl DeleteStudioArgs {
    pub fn into_params(self) -> DeleteStudioParams {
        DeleteStudioParams {
            studio_id:    self.studio_id,
            client_token: self.client_token,
        }
    }
}

// ===== 起動プロファイル =====

#[derive(Debug, Args)]
pub struct ListLaunchProfilesArgs {
    /// スタジオ ID
    #[arg(long)]
    pub studio_id: Option<String>,

    /// このユーザーが利用できるプロファイルに絞り込む
    #[arg(long)]
    pub principal_id: Option<String>,

    /// プロファイルの状態で絞り込む（カンマ区切り可）
    #[arg(long = "state", value_delimiter = ',')]
    pub states: Vec<LaunchProfileState>,

    #[command(flatten)]
    pub paging: PagingArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ListLaunchProfilesArgs {
    pub fn into_params(self) -> ListLaunchProfilesParams {
        ListLaunchProfilesParams {
            studio_id:    self.studio_id,
            principal_id: self.principal_id,
            states:       non_empty(self.states),
        }
    }
}
