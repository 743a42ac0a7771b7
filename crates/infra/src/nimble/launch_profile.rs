//! 起動プロファイルの呼び出し

use async_trait::async_trait;
use aws_sdk_nimble::types as sdk;
use awsctl_domain::{
    nimble::{
        LaunchProfile,
        ListLaunchProfiles,
        ListLaunchProfilesRequest,
        ListLaunchProfilesResponse,
    },
    operation::Operation,
};

use super::AwsNimbleClient;
use crate::{
    InfraError,
    convert::{owned, sorted_tags, to_utc},
    invoke::{Invoke, classify_sdk_error},
};

fn launch_profile(value: &sdk::LaunchProfile) -> LaunchProfile {
    LaunchProfile {
        launch_profile_id:    owned(value.launch_profile_id()),
        name:                 owned(value.name()),
        description:          owned(value.description()),
        arn:                  owned(value.arn()),
        state:                value.state().map(|s| s.as_str().to_string()),
        status_code:          value.status_code().map(|s| s.as_str().to_string()),
        status_message:       owned(value.status_message()),
        ec2_subnet_ids:       value.ec2_subnet_ids().to_vec(),
        studio_component_ids: value.studio_component_ids().to_vec(),
        created_at:           value.created_at().and_then(to_utc),
        created_by:           owned(value.created_by()),
        updated_at:           value.updated_at().and_then(to_utc),
        updated_by:           owned(value.updated_by()),
        tags:                 sorted_tags(value.tags()),
    }
}

#[async_trait]
impl Invoke<ListLaunchProfiles> for AwsNimbleClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = ListLaunchProfiles::NAME, studio_id = %request.studio_id, page_size = ?request.max_results))]
    async fn invoke(
        &self,
        request: ListLaunchProfilesRequest,
    ) -> Result<ListLaunchProfilesResponse, InfraError> {
        let states = request.states.map(|states| {
            states
                .iter()
                .map(|s| sdk::LaunchProfileState::from(s.as_str()))
                .collect()
        });

        let output = self
            .client
            .list_launch_profiles()
            .studio_id(request.studio_id.into_string())
            .set_principal_id(request.principal_id)
            .set_states(states)
            .set_next_token(request.next_token)
            .set_max_results(request.max_results)
            .send()
            .await
            .map_err(|e| classify_sdk_error(ListLaunchProfiles::NAME, &self.endpoint, e))?;

        Ok(ListLaunchProfilesResponse {
            launch_profiles: output.launch_profiles().iter().map(launch_profile).collect(),
            next_token:      owned(output.next_token()),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_起動プロファイルを変換する() {
        let value = sdk::LaunchProfile::builder()
            .launch_profile_id("lp-1")
            .name("artist")
            .state(sdk::LaunchProfileState::Ready)
            .ec2_subnet_ids("subnet-1")
            .build();

        let converted = launch_profile(&value);

        assert_eq!(converted.launch_profile_id.as_deref(), Some("lp-1"));
        assert_eq!(converted.state.as_deref(), Some("READY"));
        assert_eq!(converted.ec2_subnet_ids, vec!["subnet-1".to_string()]);
        assert!(converted.studio_component_ids.is_empty());
    }
}
