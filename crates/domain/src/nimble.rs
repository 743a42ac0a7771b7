//! # Amazon Nimble Studio 操作
//!
//! スタジオと起動プロファイルの管理を行う操作を定義する。
//!
//! ## 操作一覧
//!
//! | 操作 | 既定の出力 | 変更 | ページング |
//! |------|-----------|------|-----------|
//! | [`ListStudios`] | `Studios` | | ✓ (ページサイズ指定なし) |
//! | [`GetStudio`] | `Studio` | | |
//! | [`CreateStudio`] | `Studio` | ✓ | |
//! | [`DeleteStudio`] | `Studio` | ✓ | |
//! | [`ListLaunchProfiles`] | `LaunchProfiles` | | ✓ (最大 100) |

mod launch_profile;
mod studio;
mod types;

pub use launch_profile::{
    ListLaunchProfiles,
    ListLaunchProfilesParams,
    ListLaunchProfilesRequest,
    ListLaunchProfilesResponse,
};
pub use studio::{
    CreateStudio,
    CreateStudioParams,
    CreateStudioRequest,
    CreateStudioResponse,
    DeleteStudio,
    DeleteStudioParams,
    DeleteStudioRequest,
    DeleteStudioResponse,
    EncryptionConfiguration,
    GetStudio,
    GetStudioParams,
    GetStudioRequest,
    GetStudioResponse,
    ListStudios,
    ListStudiosParams,
    ListStudiosRequest,
    ListStudiosResponse,
};
pub use types::{
    LaunchProfile,
    LaunchProfileState,
    Studio,
    StudioEncryptionConfigurationView,
    StudioEncryptionKeyType,
};
