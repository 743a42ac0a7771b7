//! エンティティ検出ジョブ（非同期）操作
//!
//! 入力・出力・VPC 設定はネストしたグループとして構築し、葉がすべて未指定の
//! グループはリクエストから省略する。

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::{
    DocumentReadAction,
    DocumentReadFeatureType,
    DocumentReadMode,
    EntitiesDetectionJobProperties,
    InputFormat,
    JobStatus,
    LanguageCode,
};
use crate::{
    DomainError,
    binding::{Tag, require, require_non_empty},
    operation::{AwsService, Operation, PaginatedOperation},
    pagination::PageRequest,
    projection::DefaultOutput,
    request::FieldGroup,
    value_objects::JobId,
};

// ===== リクエストのグループ =====

/// ジョブの入力設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDataConfig {
    pub s3_uri:                 String,
    pub input_format:           Option<InputFormat>,
    pub document_reader_config: Option<DocumentReaderConfig>,
}

/// PDF / 画像の読み取り設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReaderConfig {
    pub document_read_action: DocumentReadAction,
    pub document_read_mode:   Option<DocumentReadMode>,
    pub feature_types:        Option<Vec<DocumentReadFeatureType>>,
}

/// ジョブの出力設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDataConfig {
    pub s3_uri:     String,
    pub kms_key_id: Option<String>,
}

/// ジョブを実行する VPC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VpcConfig {
    pub security_group_ids: Vec<String>,
    pub subnets:            Vec<String>,
}

/// ジョブ一覧の絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitiesDetectionJobFilter {
    pub job_name:           Option<String>,
    pub job_status:         Option<JobStatus>,
    pub submit_time_before: Option<DateTime<Utc>>,
    pub submit_time_after:  Option<DateTime<Utc>>,
}

// 必須メンバーを持つグループの構築途中の形
#[derive(Default)]
struct InputDataConfigDraft {
    s3_uri:                 Option<String>,
    input_format:           Option<InputFormat>,
    document_reader_config: Option<DocumentReaderConfig>,
}

#[derive(Default)]
struct DocumentReaderConfigDraft {
    document_read_action: Option<DocumentReadAction>,
    document_read_mode:   Option<DocumentReadMode>,
    feature_types:        Option<Vec<DocumentReadFeatureType>>,
}

#[derive(Default)]
struct OutputDataConfigDraft {
    s3_uri:     Option<String>,
    kms_key_id: Option<String>,
}

#[derive(Default)]
struct VpcConfigDraft {
    security_group_ids: Option<Vec<String>>,
    subnets:            Option<Vec<String>>,
}

// ===== StartEntitiesDetectionJob =====

/// エンティティ検出ジョブを開始する
pub struct StartEntitiesDetectionJob;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartEntitiesDetectionJobParams {
    pub job_name:                                  Option<String>,
    pub data_access_role_arn:                      Option<String>,
    pub entity_recognizer_arn:                     Option<String>,
    pub language_code:                             Option<LanguageCode>,
    pub client_request_token:                      Option<String>,
    pub volume_kms_key_id:                         Option<String>,
    #[serde(rename = "InputDataConfig_S3Uri")]
    pub input_data_config_s3_uri:                  Option<String>,
    #[serde(rename = "InputDataConfig_InputFormat")]
    pub input_data_config_input_format:            Option<InputFormat>,
    #[serde(rename = "DocumentReaderConfig_DocumentReadAction")]
    pub document_reader_config_document_read_action: Option<DocumentReadAction>,
    #[serde(rename = "DocumentReaderConfig_DocumentReadMode")]
    pub document_reader_config_document_read_mode: Option<DocumentReadMode>,
    #[serde(rename = "DocumentReaderConfig_FeatureType")]
    pub document_reader_config_feature_types:      Option<Vec<DocumentReadFeatureType>>,
    #[serde(rename = "OutputDataConfig_S3Uri")]
    pub output_data_config_s3_uri:                 Option<String>,
    #[serde(rename = "OutputDataConfig_KmsKeyId")]
    pub output_data_config_kms_key_id:             Option<String>,
    #[serde(rename = "VpcConfig_SecurityGroupId")]
    pub vpc_config_security_group_ids:             Option<Vec<String>>,
    #[serde(rename = "VpcConfig_Subnet")]
    pub vpc_config_subnets:                        Option<Vec<String>>,
    #[serde(rename = "Tag")]
    pub tags:                                      Option<Vec<Tag>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartEntitiesDetectionJobRequest {
    pub job_name:              Option<String>,
    pub data_access_role_arn:  String,
    pub entity_recognizer_arn: Option<String>,
    pub language_code:         LanguageCode,
    pub client_request_token:  Option<String>,
    pub volume_kms_key_id:     Option<String>,
    pub input_data_config:     InputDataConfig,
    pub output_data_config:    OutputDataConfig,
    pub vpc_config:            Option<VpcConfig>,
    pub tags:                  Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartEntitiesDetectionJobResponse {
    pub job_id:                Option<String>,
    pub job_arn:               Option<String>,
    pub job_status:            Option<String>,
    pub entity_recognizer_arn: Option<String>,
}

impl StartEntitiesDetectionJob {
    fn document_reader_config(
        params: &StartEntitiesDetectionJobParams,
    ) -> Result<Option<DocumentReaderConfig>, DomainError> {
        let mut group = FieldGroup::<DocumentReaderConfigDraft>::new();
        group
            .set(params.document_reader_config_document_read_action, |g, v| {
                g.document_read_action = Some(v);
            })
            .set(params.document_reader_config_document_read_mode, |g, v| {
                g.document_read_mode = Some(v);
            })
            .set(params.document_reader_config_feature_types.clone(), |g, v| {
                g.feature_types = Some(v);
            });

        group.finish_with(|draft| {
            Ok(DocumentReaderConfig {
                document_read_action: require(
                    Self::NAME,
                    "DocumentReaderConfig_DocumentReadAction",
                    draft.document_read_action,
                )?,
                document_read_mode:   draft.document_read_mode,
                feature_types:        draft.feature_types,
            })
        })
    }

    fn input_data_config(
        params: &StartEntitiesDetectionJobParams,
    ) -> Result<InputDataConfig, DomainError> {
        let mut group = FieldGroup::<InputDataConfigDraft>::new();
        group
            .set(params.input_data_config_s3_uri.clone(), |g, v| {
                g.s3_uri = Some(v);
            })
            .set(params.input_data_config_input_format, |g, v| {
                g.input_format = Some(v);
            })
            .set(Self::document_reader_config(params)?, |g, v| {
                g.document_reader_config = Some(v);
            });

        // 入力設定はグループごと必須
        let draft = group.finish().unwrap_or_default();
        Ok(InputDataConfig {
            s3_uri:                 require(Self::NAME, "InputDataConfig_S3Uri", draft.s3_uri)?,
            input_format:           draft.input_format,
            document_reader_config: draft.document_reader_config,
        })
    }

    fn output_data_config(
        params: &StartEntitiesDetectionJobParams,
    ) -> Result<OutputDataConfig, DomainError> {
        let mut group = FieldGroup::<OutputDataConfigDraft>::new();
        group
            .set(params.output_data_config_s3_uri.clone(), |g, v| {
                g.s3_uri = Some(v);
            })
            .set(params.output_data_config_kms_key_id.clone(), |g, v| {
                g.kms_key_id = Some(v);
            });

        let draft = group.finish().unwrap_or_default();
        Ok(OutputDataConfig {
            s3_uri:     require(Self::NAME, "OutputDataConfig_S3Uri", draft.s3_uri)?,
            kms_key_id: draft.kms_key_id,
        })
    }

    fn vpc_config(
        params: &StartEntitiesDetectionJobParams,
    ) -> Result<Option<VpcConfig>, DomainError> {
        let mut group = FieldGroup::<VpcConfigDraft>::new();
        group
            .set(params.vpc_config_security_group_ids.clone(), |g, v| {
                g.security_group_ids = Some(v);
            })
            .set(params.vpc_config_subnets.clone(), |g, v| {
                g.subnets = Some(v);
            });

        group.finish_with(|draft| {
            Ok(VpcConfig {
                security_group_ids: require_non_empty(
                    Self::NAME,
                    "VpcConfig_SecurityGroupId",
                    draft.security_group_ids,
                )?,
                subnets:            require_non_empty(
                    Self::NAME,
                    "VpcConfig_Subnet",
                    draft.subnets,
                )?,
            })
        })
    }
}

impl Operation for StartEntitiesDetectionJob {
    type Params = StartEntitiesDetectionJobParams;
    type Request = StartEntitiesDetectionJobRequest;
    type Response = StartEntitiesDetectionJobResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Response;
    const MUTATING: bool = true;
    const NAME: &'static str = "StartEntitiesDetectionJob";
    const SERVICE: AwsService = AwsService::Comprehend;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        Ok(StartEntitiesDetectionJobRequest {
            job_name:              params.job_name.clone(),
            data_access_role_arn:  require(
                Self::NAME,
                "DataAccessRoleArn",
                params.data_access_role_arn.clone(),
            )?,
            entity_recognizer_arn: params.entity_recognizer_arn.clone(),
            language_code:         require(Self::NAME, "LanguageCode", params.language_code)?,
            client_request_token:  params.client_request_token.clone(),
            volume_kms_key_id:     params.volume_kms_key_id.clone(),
            input_data_config:     Self::input_data_config(params)?,
            output_data_config:    Self::output_data_config(params)?,
            vpc_config:            Self::vpc_config(params)?,
            tags:                  params.tags.clone().filter(|tags| !tags.is_empty()),
        })
    }

    fn target(params: &Self::Params) -> String {
        params
            .job_name
            .clone()
            .or_else(|| params.input_data_config_s3_uri.clone())
            .unwrap_or_else(|| Self::NAME.to_string())
    }
}

// ===== DescribeEntitiesDetectionJob =====

/// エンティティ検出ジョブのプロパティを取得する
pub struct DescribeEntitiesDetectionJob;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEntitiesDetectionJobParams {
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeEntitiesDetectionJobRequest {
    pub job_id: JobId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEntitiesDetectionJobResponse {
    pub entities_detection_job_properties: Option<EntitiesDetectionJobProperties>,
}

impl Operation for DescribeEntitiesDetectionJob {
    type Params = DescribeEntitiesDetectionJobParams;
    type Request = DescribeEntitiesDetectionJobRequest;
    type Response = DescribeEntitiesDetectionJobResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Field("EntitiesDetectionJobProperties");
    const NAME: &'static str = "DescribeEntitiesDetectionJob";
    const SERVICE: AwsService = AwsService::Comprehend;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        let job_id = require(Self::NAME, "JobId", params.job_id.clone())?;
        Ok(DescribeEntitiesDetectionJobRequest {
            job_id: JobId::new(job_id)?,
        })
    }
}

// ===== ListEntitiesDetectionJobs =====

/// エンティティ検出ジョブの一覧を取得する
pub struct ListEntitiesDetectionJobs;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEntitiesDetectionJobsParams {
    #[serde(rename = "Filter_JobName")]
    pub filter_job_name:           Option<String>,
    #[serde(rename = "Filter_JobStatus")]
    pub filter_job_status:         Option<JobStatus>,
    #[serde(rename = "Filter_SubmitTimeBefore")]
    pub filter_submit_time_before: Option<DateTime<Utc>>,
    #[serde(rename = "Filter_SubmitTimeAfter")]
    pub filter_submit_time_after:  Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEntitiesDetectionJobsRequest {
    pub filter:      Option<EntitiesDetectionJobFilter>,
    pub next_token:  Option<String>,
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListEntitiesDetectionJobsResponse {
    pub entities_detection_job_properties_list: Vec<EntitiesDetectionJobProperties>,
    pub next_token:                             Option<String>,
}

impl Operation for ListEntitiesDetectionJobs {
    type Params = ListEntitiesDetectionJobsParams;
    type Request = ListEntitiesDetectionJobsRequest;
    type Response = ListEntitiesDetectionJobsResponse;

    const DEFAULT_OUTPUT: DefaultOutput =
        DefaultOutput::Field("EntitiesDetectionJobPropertiesList");
    const NAME: &'static str = "ListEntitiesDetectionJobs";
    const SERVICE: AwsService = AwsService::Comprehend;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        let mut filter = FieldGroup::<EntitiesDetectionJobFilter>::new();
        filter
            .set(params.filter_job_name.clone(), |f, v| f.job_name = Some(v))
            .set(params.filter_job_status, |f, v| f.job_status = Some(v))
            .set(params.filter_submit_time_before, |f, v| {
                f.submit_time_before = Some(v);
            })
            .set(params.filter_submit_time_after, |f, v| {
                f.submit_time_after = Some(v);
            });

        Ok(ListEntitiesDetectionJobsRequest {
            filter:      filter.finish(),
            next_token:  None,
            max_results: None,
        })
    }
}

impl PaginatedOperation for ListEntitiesDetectionJobs {
    const MAX_PAGE_SIZE: Option<i32> = Some(500);

    fn apply_page(request: &mut Self::Request, page: &PageRequest) {
        request.next_token = page.token.clone();
        request.max_results = page.page_size;
    }

    fn item_count(response: &Self::Response) -> usize {
        response.entities_detection_job_properties_list.len()
    }

    fn next_token(response: &Self::Response) -> Option<&str> {
        response.next_token.as_deref()
    }

    fn truncate_items(response: &mut Self::Response, len: usize) {
        response.entities_detection_job_properties_list.truncate(len);
    }
}

// ===== StopEntitiesDetectionJob =====

/// エンティティ検出ジョブを停止する
pub struct StopEntitiesDetectionJob;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopEntitiesDetectionJobParams {
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopEntitiesDetectionJobRequest {
    pub job_id: JobId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopEntitiesDetectionJobResponse {
    pub job_id:     Option<String>,
    pub job_status: Option<String>,
}

impl Operation for StopEntitiesDetectionJob {
    type Params = StopEntitiesDetectionJobParams;
    type Request = StopEntitiesDetectionJobRequest;
    type Response = StopEntitiesDetectionJobResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Response;
    const MUTATING: bool = true;
    const NAME: &'static str = "StopEntitiesDetectionJob";
    const SERVICE: AwsService = AwsService::Comprehend;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        let job_id = require(Self::NAME, "JobId", params.job_id.clone())?;
        Ok(StopEntitiesDetectionJobRequest {
            job_id: JobId::new(job_id)?,
        })
    }

    fn target(params: &Self::Params) -> String {
        params
            .job_id
            .clone()
            .unwrap_or_else(|| Self::NAME.to_string())
    }
}
