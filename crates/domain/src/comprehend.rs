//! # Amazon Comprehend 操作
//!
//! テキスト分析（言語・感情・エンティティ・キーフレーズの検出）と、
//! エンティティ検出ジョブの管理を行う操作を定義する。
//!
//! ## 操作一覧
//!
//! | 操作 | 既定の出力 | 変更 | ページング |
//! |------|-----------|------|-----------|
//! | [`DetectDominantLanguage`] | `Languages` | | |
//! | [`DetectSentiment`] | レスポンス全体 | | |
//! | [`DetectEntities`] | `Entities` | | |
//! | [`DetectKeyPhrases`] | `KeyPhrases` | | |
//! | [`StartEntitiesDetectionJob`] | レスポンス全体 | ✓ | |
//! | [`DescribeEntitiesDetectionJob`] | `EntitiesDetectionJobProperties` | | |
//! | [`ListEntitiesDetectionJobs`] | `EntitiesDetectionJobPropertiesList` | | ✓ (最大 500) |
//! | [`StopEntitiesDetectionJob`] | レスポンス全体 | ✓ | |
//! | [`TagResource`] | なし | ✓ | |

mod detect;
mod entities_job;
mod tagging;
mod types;

pub use detect::{
    DetectDominantLanguage,
    DetectDominantLanguageParams,
    DetectDominantLanguageRequest,
    DetectDominantLanguageResponse,
    DetectEntities,
    DetectEntitiesParams,
    DetectEntitiesRequest,
    DetectEntitiesResponse,
    DetectKeyPhrases,
    DetectKeyPhrasesParams,
    DetectKeyPhrasesRequest,
    DetectKeyPhrasesResponse,
    DetectSentiment,
    DetectSentimentParams,
    DetectSentimentRequest,
    DetectSentimentResponse,
};
pub use entities_job::{
    DescribeEntitiesDetectionJob,
    DescribeEntitiesDetectionJobParams,
    DescribeEntitiesDetectionJobRequest,
    DescribeEntitiesDetectionJobResponse,
    DocumentReaderConfig,
    EntitiesDetectionJobFilter,
    InputDataConfig,
    ListEntitiesDetectionJobs,
    ListEntitiesDetectionJobsParams,
    ListEntitiesDetectionJobsRequest,
    ListEntitiesDetectionJobsResponse,
    OutputDataConfig,
    StartEntitiesDetectionJob,
    StartEntitiesDetectionJobParams,
    StartEntitiesDetectionJobRequest,
    StartEntitiesDetectionJobResponse,
    StopEntitiesDetectionJob,
    StopEntitiesDetectionJobParams,
    StopEntitiesDetectionJobRequest,
    StopEntitiesDetectionJobResponse,
    VpcConfig,
};
pub use tagging::{TagResource, TagResourceParams, TagResourceRequest, TagResourceResponse};
pub use types::{
    DocumentReadAction,
    DocumentReadFeatureType,
    DocumentReadMode,
    DominantLanguage,
    EntitiesDetectionJobProperties,
    Entity,
    InputDataConfigView,
    InputFormat,
    JobStatus,
    KeyPhrase,
    LanguageCode,
    OutputDataConfigView,
    SentimentScore,
};
