//! エンティティ検出ジョブの呼び出し

use async_trait::async_trait;
use aws_sdk_comprehend::types as sdk;
use awsctl_domain::{
    comprehend::{
        DescribeEntitiesDetectionJob,
        DescribeEntitiesDetectionJobRequest,
        DescribeEntitiesDetectionJobResponse,
        EntitiesDetectionJobFilter,
        EntitiesDetectionJobProperties,
        InputDataConfig,
        InputDataConfigView,
        ListEntitiesDetectionJobs,
        ListEntitiesDetectionJobsRequest,
        ListEntitiesDetectionJobsResponse,
        OutputDataConfig,
        OutputDataConfigView,
        StartEntitiesDetectionJob,
        StartEntitiesDetectionJobRequest,
        StartEntitiesDetectionJobResponse,
        StopEntitiesDetectionJob,
        StopEntitiesDetectionJobRequest,
        StopEntitiesDetectionJobResponse,
        VpcConfig,
    },
    operation::Operation,
};

use super::{AwsComprehendClient, detect::sdk_language, tagging::sdk_tags};
use crate::{
    InfraError,
    convert::{owned, to_smithy, to_utc},
    invoke::{Invoke, classify_sdk_error},
};

// ===== リクエスト変換 =====

fn sdk_input_data_config(config: InputDataConfig) -> Result<sdk::InputDataConfig, InfraError> {
    let reader = config
        .document_reader_config
        .map(|reader| {
            sdk::DocumentReaderConfig::builder()
                .document_read_action(sdk::DocumentReadAction::from(
                    reader.document_read_action.as_str(),
                ))
                .set_document_read_mode(
                    reader
                        .document_read_mode
                        .map(|m| sdk::DocumentReadMode::from(m.as_str())),
                )
                .set_feature_types(reader.feature_types.map(|types| {
                    types
                        .iter()
                        .map(|t| sdk::DocumentReadFeatureTypes::from(t.as_str()))
                        .collect()
                }))
                .build()
        })
        .transpose()?;

    Ok(sdk::InputDataConfig::builder()
        .s3_uri(config.s3_uri)
        .set_input_format(config.input_format.map(|f| sdk::InputFormat::from(f.as_str())))
        .set_document_reader_config(reader)
        .build()?)
}

fn sdk_output_data_config(config: OutputDataConfig) -> Result<sdk::OutputDataConfig, InfraError> {
    Ok(sdk::OutputDataConfig::builder()
        .s3_uri(config.s3_uri)
        .set_kms_key_id(config.kms_key_id)
        .build()?)
}

fn sdk_vpc_config(config: VpcConfig) -> Result<sdk::VpcConfig, InfraError> {
    Ok(sdk::VpcConfig::builder()
        .set_security_group_ids(Some(config.security_group_ids))
        .set_subnets(Some(config.subnets))
        .build()?)
}

fn sdk_filter(filter: EntitiesDetectionJobFilter) -> sdk::EntitiesDetectionJobFilter {
    sdk::EntitiesDetectionJobFilter::builder()
        .set_job_name(filter.job_name)
        .set_job_status(filter.job_status.map(|s| sdk::JobStatus::from(s.as_str())))
        .set_submit_time_before(filter.submit_time_before.as_ref().map(to_smithy))
        .set_submit_time_after(filter.submit_time_after.as_ref().map(to_smithy))
        .build()
}

// ===== レスポンス変換 =====

pub(super) fn job_properties(value: &sdk::EntitiesDetectionJobProperties) -> EntitiesDetectionJobProperties {
    EntitiesDetectionJobProperties {
        job_id:                owned(value.job_id()),
        job_arn:               owned(value.job_arn()),
        job_name:              owned(value.job_name()),
        job_status:            value.job_status().map(|s| s.as_str().to_string()),
        message:               owned(value.message()),
        submit_time:           value.submit_time().and_then(to_utc),
        end_time:              value.end_time().and_then(to_utc),
        entity_recognizer_arn: owned(value.entity_recognizer_arn()),
        input_data_config:     value.input_data_config().map(|c| InputDataConfigView {
            s3_uri:       c.s3_uri().to_string(),
            input_format: c.input_format().map(|f| f.as_str().to_string()),
        }),
        output_data_config:    value.output_data_config().map(|c| OutputDataConfigView {
            s3_uri:     c.s3_uri().to_string(),
            kms_key_id: owned(c.kms_key_id()),
        }),
        language_code:         value.language_code().map(|l| l.as_str().to_string()),
        data_access_role_arn:  owned(value.data_access_role_arn()),
        volume_kms_key_id:     owned(value.volume_kms_key_id()),
    }
}

// ===== Invoke 実装 =====

#[async_trait]
impl Invoke<StartEntitiesDetectionJob> for AwsComprehendClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = StartEntitiesDetectionJob::NAME))]
    async fn invoke(
        &self,
        request: StartEntitiesDetectionJobRequest,
    ) -> Result<StartEntitiesDetectionJobResponse, InfraError> {
        let vpc_config = request.vpc_config.map(sdk_vpc_config).transpose()?;
        let tags = request.tags.as_deref().map(sdk_tags).transpose()?;

        let output = self
            .client
            .start_entities_detection_job()
            .input_data_config(sdk_input_data_config(request.input_data_config)?)
            .output_data_config(sdk_output_data_config(request.output_data_config)?)
            .data_access_role_arn(request.data_access_role_arn)
            .language_code(sdk_language(request.language_code))
            .set_job_name(request.job_name)
            .set_entity_recognizer_arn(request.entity_recognizer_arn)
            .set_client_request_token(request.client_request_token)
            .set_volume_kms_key_id(request.volume_kms_key_id)
            .set_vpc_config(vpc_config)
            .set_tags(tags)
            .send()
            .await
            .map_err(|e| classify_sdk_error(StartEntitiesDetectionJob::NAME, &self.endpoint, e))?;

        Ok(StartEntitiesDetectionJobResponse {
            job_id:                owned(output.job_id()),
            job_arn:               owned(output.job_arn()),
            job_status:            output.job_status().map(|s| s.as_str().to_string()),
            entity_recognizer_arn: owned(output.entity_recognizer_arn()),
        })
    }
}

#[async_trait]
impl Invoke<DescribeEntitiesDetectionJob> for AwsComprehendClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = DescribeEntitiesDetectionJob::NAME, job_id = %request.job_id))]
    async fn invoke(
        &self,
        request: DescribeEntitiesDetectionJobRequest,
    ) -> Result<DescribeEntitiesDetectionJobResponse, InfraError> {
        let output = self
            .client
            .describe_entities_detection_job()
            .job_id(request.job_id.into_string())
            .send()
            .await
            .map_err(|e| {
                classify_sdk_error(DescribeEntitiesDetectionJob::NAME, &self.endpoint, e)
            })?;

        Ok(DescribeEntitiesDetectionJobResponse {
            entities_detection_job_properties: output
                .entities_detection_job_properties()
                .map(job_properties),
        })
    }
}

#[async_trait]
impl Invoke<ListEntitiesDetectionJobs> for AwsComprehendClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = ListEntitiesDetectionJobs::NAME, page_size = ?request.max_results))]
    async fn invoke(
        &self,
        request: ListEntitiesDetectionJobsRequest,
    ) -> Result<ListEntitiesDetectionJobsResponse, InfraError> {
        let output = self
            .client
            .list_entities_detection_jobs()
            .set_filter(request.filter.map(sdk_filter))
            .set_next_token(request.next_token)
            .set_max_results(request.max_results)
            .send()
            .await
            .map_err(|e| classify_sdk_error(ListEntitiesDetectionJobs::NAME, &self.endpoint, e))?;

        Ok(ListEntitiesDetectionJobsResponse {
            entities_detection_job_properties_list: output
                .entities_detection_job_properties_list()
                .iter()
                .map(job_properties)
                .collect(),
            next_token:                             owned(output.next_token()),
        })
    }
}

#[async_trait]
impl Invoke<StopEntitiesDetectionJob> for AwsComprehendClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = StopEntitiesDetectionJob::NAME, job_id = %request.job_id))]
    async fn invoke(
        &self,
        request: StopEntitiesDetectionJobRequest,
    ) -> Result<StopEntitiesDetectionJobResponse, InfraError> {
        let output = self
            .client
            .stop_entities_detection_job()
            .job_id(request.job_id.into_string())
            .send()
            .await
            .map_err(|e| classify_sdk_error(StopEntitiesDetectionJob::NAME, &self.endpoint, e))?;

        Ok(StopEntitiesDetectionJobResponse {
            job_id:     owned(output.job_id()),
            job_status: output.job_status().map(|s| s.as_str().to_string()),
        })
    }
}
