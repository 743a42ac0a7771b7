//! 起動プロファイル操作

use serde::Serialize;

use super::types::{LaunchProfile, LaunchProfileState};
use crate::{
    DomainError,
    binding::require,
    operation::{AwsService, Operation, PaginatedOperation},
    pagination::PageRequest,
    projection::DefaultOutput,
    value_objects::StudioId,
};

/// スタジオの起動プロファイル一覧を取得する
pub struct ListLaunchProfiles;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListLaunchProfilesParams {
    pub studio_id:    Option<String>,
    pub principal_id: Option<String>,
    #[serde(rename = "State")]
    pub states:       Option<Vec<LaunchProfileState>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLaunchProfilesRequest {
    pub studio_id:    StudioId,
    pub principal_id: Option<String>,
    pub states:       Option<Vec<LaunchProfileState>>,
    pub next_token:   Option<String>,
    pub max_results:  Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListLaunchProfilesResponse {
    pub launch_profiles: Vec<LaunchProfile>,
    pub next_token:      Option<String>,
}

impl Operation for ListLaunchProfiles {
    type Params = ListLaunchProfilesParams;
    type Request = ListLaunchProfilesRequest;
    type Response = ListLaunchProfilesResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Field("LaunchProfiles");
    const NAME: &'static str = "ListLaunchProfiles";
    const SERVICE: AwsService = AwsService::Nimble;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        let studio_id = require(Self::NAME, "StudioId", params.studio_id.clone())?;
        Ok(ListLaunchProfilesRequest {
            studio_id:    StudioId::new(studio_id)?,
            principal_id: params.principal_id.clone(),
            states:       params.states.clone().filter(|states| !states.is_empty()),
            next_token:   None,
            max_results:  None,
        })
    }
}

impl PaginatedOperation for ListLaunchProfiles {
    const MAX_PAGE_SIZE: Option<i32> = Some(100);

    fn apply_page(request: &mut Self::Request, page: &PageRequest) {
        request.next_token = page.token.clone();
        request.max_results = page.page_size;
    }

    fn item_count(response: &Self::Response) -> usize {
        response.launch_profiles.len()
    }

    fn next_token(response: &Self::Response) -> Option<&str> {
        response.next_token.as_deref()
    }

    fn truncate_items(response: &mut Self::Response, len: usize) {
        response.launch_profiles.truncate(len);
    }
}
