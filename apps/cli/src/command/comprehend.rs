//! `awsctl comprehend` サブコマンド

use awsctl_domain::{
    binding::Tag,
    comprehend::{
        DescribeEntitiesDetectionJob,
        DescribeEntitiesDetectionJobParams,
        DetectDominantLanguage,
        DetectDominantLanguageParams,
        DetectEntities,
        DetectEntitiesParams,
        DetectKeyPhrases,
        DetectKeyPhrasesParams,
        DetectSentiment,
        DetectSentimentParams,
        DocumentReadAction,
        DocumentReadFeatureType,
        DocumentReadMode,
        InputFormat,
        JobStatus,
        LanguageCode,
        ListEntitiesDetectionJobs,
        ListEntitiesDetectionJobsParams,
        StartEntitiesDetectionJob,
        StartEntitiesDetectionJobParams,
        StopEntitiesDetectionJob,
        StopEntitiesDetectionJobParams,
        TagResource,
        TagResourceParams,
    },
    projection::Output,
};
use awsctl_infra::{AwsComprehendClient, AwsContext, ClientCache, LazyClient};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use super::common::{ForceArgs, OutputArgs, PagingArgs, non_empty};
use crate::{confirm::Force, error::CliError, pipeline, usecase};

/// Amazon Comprehend の操作
#[derive(Debug, Subcommand)]
pub enum ComprehendCommand {
    /// テキストの主要言語を検出する（パイプライン入力: Text）
    DetectDominantLanguage(DetectDominantLanguageArgs),
    /// テキストの感情を検出する（パイプライン入力: Text）
    DetectSentiment(DetectSentimentArgs),
    /// テキスト中のエンティティを検出する（パイプライン入力: Text）
    DetectEntities(DetectEntitiesArgs),
    /// テキスト中のキーフレーズを検出する（パイプライン入力: Text）
    DetectKeyPhrases(DetectKeyPhrasesArgs),
    /// エンティティ検出ジョブを開始する
    StartEntitiesDetectionJob(StartEntitiesDetectionJobArgs),
    /// エンティティ検出ジョブのプロパティを取得する（パイプライン入力: JobId）
    DescribeEntitiesDetectionJob(DescribeEntitiesDetectionJobArgs),
    /// エンティティ検出ジョブの一覧を取得する
    ListEntitiesDetectionJobs(ListEntitiesDetectionJobsArgs),
    /// エンティティ検出ジョブを停止する（パイプライン入力: JobId）
    StopEntitiesDetectionJob(StopEntitiesDetectionJobArgs),
    /// リソースにタグを付与する（パイプライン入力: ResourceArn）
    TagResource(TagResourceArgs),
}

impl ComprehendCommand {
    /// コマンドを実行する
    ///
    /// クライアントは最初のリモート呼び出しの直前に生成する。
    pub async fn run(self, cache: &ClientCache, context: &AwsContext) -> Result<Output, CliError> {
        let client = LazyClient::<AwsComprehendClient>::new(cache, context);

        match self {
            Self::DetectDominantLanguage(mut args) => {
                pipeline::fill_from_stdin(&mut args.text)?;
                let selector = args.output.selector();
                usecase::execute::<DetectDominantLanguage, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    &mut Force,
                )
                .await
            }
            Self::DetectSentiment(mut args) => {
                pipeline::fill_from_stdin(&mut args.text)?;
                let selector = args.output.selector();
                usecase::execute::<DetectSentiment, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    &mut Force,
                )
                .await
            }
            Self::DetectEntities(mut args) => {
                pipeline::fill_from_stdin(&mut args.text)?;
                let selector = args.output.selector();
                usecase::execute::<DetectEntities, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    &mut Force,
                )
                .await
            }
            Self::DetectKeyPhrases(mut args) => {
                pipeline::fill_from_stdin(&mut args.text)?;
                let selector = args.output.selector();
                usecase::execute::<DetectKeyPhrases, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    &mut Force,
                )
                .await
            }
            Self::StartEntitiesDetectionJob(args) => {
                let selector = args.output.selector();
                let mut confirm = args.force.confirmer();
                usecase::execute::<StartEntitiesDetectionJob, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    confirm.as_mut(),
                )
                .await
            }
            Self::DescribeEntitiesDetectionJob(mut args) => {
                pipeline::fill_from_stdin(&mut args.job_id)?;
                let selector = args.output.selector();
                usecase::execute::<DescribeEntitiesDetectionJob, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    &mut Force,
                )
                .await
            }
            Self::ListEntitiesDetectionJobs(args) => {
                let selector = args.output.selector();
                let paging = args.paging.paging();
                usecase::execute_paginated::<ListEntitiesDetectionJobs, _>(
                    &client,
                    &args.into_params(),
                    paging,
                    &selector,
                )
                .await
            }
            Self::StopEntitiesDetectionJob(mut args) => {
                pipeline::fill_from_stdin(&mut args.job_id)?;
                let selector = args.output.selector();
                let mut confirm = args.force.confirmer();
                usecase::execute::<StopEntitiesDetectionJob, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    confirm.as_mut(),
                )
                .await
            }
            Self::TagResource(mut args) => {
                pipeline::fill_from_stdin(&mut args.resource_arn)?;
                let selector = args.output.selector();
                let mut confirm = args.force.confirmer();
                usecase::execute::<TagResource, _>(
                    &client,
                    &args.into_params(),
                    &selector,
                    confirm.as_mut(),
                )
                .await
            }
        }
    }
}

// ===== Detect 系 =====

#[derive(Debug, Args)]
pub struct DetectDominantLanguageArgs {
    /// 分析するテキスト
    #[arg(long)]
    pub text: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl DetectDominantLanguageArgs {
    pub fn into_params(self) -> DetectDominantLanguageParams {
        DetectDominantLanguageParams { text: self.text }
    }
}

#[derive(Debug, Args)]
pub struct DetectSentimentArgs {
    /// 分析するテキスト
    #[arg(long)]
    pub text: Option<String>,

    /// テキストの言語（`en`、`ja` など）
    #[arg(long)]
    pub language_code: Option<LanguageCode>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl DetectSentimentArgs {
    pub fn into_params(self) -> DetectSentimentParams {
        DetectSentimentParams {
            text:          self.text,
            language_code: self.language_code,
        }
    }
}

#[derive(Debug, Args)]
pub struct DetectEntitiesArgs {
    /// 分析するテキスト
    #[arg(long)]
    pub text: Option<String>,

    /// テキストの言語（カスタムエンドポイント指定時は省略可）
    #[arg(long)]
    pub language_code: Option<LanguageCode>,

    /// カスタムエンティティ認識モデルのエンドポイント ARN
    #[arg(long)]
    pub endpoint_arn: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl DetectEntitiesArgs {
    pub fn into_params(self) -> DetectEntitiesParams {
        DetectEntitiesParams {
            text:          self.text,
            language_code: self.language_code,
            endpoint_arn:  self.endpoint_arn,
        }
    }
}

#[derive(Debug, Args)]
pub struct DetectKeyPhrasesArgs {
    /// 分析するテキスト
    #[arg(long)]
    pub text: Option<String>,

    /// テキストの言語
    #[arg(long)]
    pub language_code: Option<LanguageCode>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl DetectKeyPhrasesArgs {
    pub fn into_params(self) -> DetectKeyPhrasesParams {
        DetectKeyPhrasesParams {
            text:          self.text,
            language_code: self.language_code,
        }
    }
}

// ===== エンティティ検出ジョブ =====

#[derive(Debug, Args)]
pub struct StartEntitiesDetectionJobArgs {
    /// ジョブ名
    #[arg(long)]
    pub job_name: Option<String>,

    /// 入出力の S3 にアクセスする IAM ロールの ARN
    #[arg(long)]
    pub data_access_role_arn: Option<String>,

    /// カスタムエンティティ認識モデルの ARN
    #[arg(long)]
    pub entity_recognizer_arn: Option<String>,

    /// 入力文書の言語
    #[arg(long)]
    pub language_code: Option<LanguageCode>,

    /// 冪等性トークン（省略時は SDK が生成する）
    #[arg(long)]
    pub client_request_token: Option<String>,

    /// 処理用ボリュームを暗号化する KMS キー
    #[arg(long)]
    pub volume_kms_key_id: Option<String>,

    /// 入力文書の S3 URI
    #[arg(long = "input-data-config-s3-uri", value_name = "S3_URI")]
    pub input_s3_uri: Option<String>,

    /// 入力ファイルの文書区切り
    #[arg(long = "input-data-config-input-format", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// PDF / 画像の読み取り方法
    #[arg(long)]
    pub document_read_action: Option<DocumentReadAction>,

    /// 読み取り方法の適用範囲
    #[arg(long)]
    pub document_read_mode: Option<DocumentReadMode>,

    /// Textract で抽出する要素（カンマ区切り可）
    #[arg(long = "document-read-feature-type", value_delimiter = ',')]
    pub feature_types: Vec<DocumentReadFeatureType>,

    /// 出力先の S3 URI
    #[arg(long = "output-data-config-s3-uri", value_name = "S3_URI")]
    pub output_s3_uri: Option<String>,

    /// 出力を暗号化する KMS キー
    #[arg(long = "output-data-config-kms-key-id", value_name = "KEY_ID")]
    pub output_kms_key_id: Option<String>,

    /// VPC のセキュリティグループ ID（カンマ区切り可）
    #[arg(long = "vpc-security-group-id", value_delimiter = ',')]
    pub security_group_ids: Vec<String>,

    /// VPC のサブネット ID（カンマ区切り可）
    #[arg(long = "vpc-subnet", value_delimiter = ',')]
    pub subnets: Vec<String>,

    /// タグ（`Key=Value`、カンマ区切り可）
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<Tag>,

    #[command(flatten)]
    pub force: ForceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl StartEntitiesDetectionJobArgs {
    pub fn into_params(self) -> StartEntitiesDetectionJobParams {
        StartEntitiesDetectionJobParams {
            job_name: self.job_name,
            data_access_role_arn: self.data_access_role_arn,
            entity_recognizer_arn: self.entity_recognizer_arn,
            language_code: self.language_code,
            client_request_token: self.client_request_token,
            volume_kms_key_id: self.volume_kms_key_id,
            input_data_config_s3_uri: self.input_s3_uri,
            input_data_config_input_format: self.input_format,
            document_reader_config_document_read_action: self.document_read_action,
            document_reader_config_document_read_mode: self.document_read_mode,
            document_reader_config_feature_types: non_empty(self.feature_types),
            output_data_config_s3_uri: self.output_s3_uri,
            output_data_config_kms_key_id: self.output_kms_key_id,
            vpc_config_security_group_ids: non_empty(self.security_group_ids),
            vpc_config_subnets: non_empty(self.subnets),
            tags: non_empty(self.tags),
        }
    }
}

#[derive(Debug, Args)]
pub struct DescribeEntitiesDetectionJobArgs {
    /// ジョブ ID
    #[arg(long)]
    pub job_id: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl DescribeEntitiesDetectionJobArgs {
    pub fn into_params(self) -> DescribeEntitiesDetectionJobParams {
        DescribeEntitiesDetectionJobParams {
            job_id: self.job_id,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListEntitiesDetectionJobsArgs {
    /// ジョブ名で絞り込む
    #[arg(long = "filter-job-name", value_name = "NAME")]
    pub job_name: Option<String>,

    /// ジョブの状態で絞り込む
    #[arg(long = "filter-job-status", value_name = "STATUS")]
    pub job_status: Option<JobStatus>,

    /// この日時より前に投入されたジョブ（RFC 3339）
    #[arg(long = "filter-submit-time-before", value_name = "TIME")]
    pub submit_time_before: Option<DateTime<Utc>>,

    /// この日時より後に投入されたジョブ（RFC 3339）
    #[arg(long = "filter-submit-time-after", value_name = "TIME")]
    pub submit_time_after: Option<DateTime<Utc>>,

    #[command(flatten)]
    pub paging: PagingArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ListEntitiesDetectionJobsArgs {
    pub fn into_params(self) -> ListEntitiesDetectionJobsParams {
        ListEntitiesDetectionJobsParams {
            filter_job_name:           self.job_name,
            filter_job_status:         self.job_status,
            filter_submit_time_before: self.submit_time_before,
            filter_submit_time_after:  self.submit_time_after,
        }
    }
}

#[derive(Debug, Args)]
pub struct StopEntitiesDetectionJobArgs {
    /// ジョブ ID
    #[arg(long)]
    pub job_id: Option<String>,

    #[command(flatten)]
    pub force: ForceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl StopEntitiesDetectionJobArgs {
    pub fn into_params(self) -> StopEntitiesDetectionJobParams {
        StopEntitiesDetectionJobParams {
            job_id: self.job_id,
        }
    }
}

// ===== タグ =====

#[derive(Debug, Args)]
pub struct TagResourceArgs {
    /// タグを付与するリソースの ARN
    #[arg(long)]
    pub resource_arn: Option<String>,

    /// タグ（`Key=Value`、カンマ区切り可）
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<Tag>,

    #[command(flatten)]
    pub force: ForceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl TagResourceArgs {
    pub fn into_params(self) -> TagResourceParams {
        TagResourceParams {
            resource_arn: self.resource_arn,
            tags:         non_empty(self.tags),
        }
    }
}
