//! 同期テキスト分析（Detect 系）操作

use serde::Serialize;

use super::types::{DominantLanguage, Entity, KeyPhrase, LanguageCode, SentimentScore};
use crate::{
    DomainError,
    binding::require,
    operation::{AwsService, Operation},
    projection::DefaultOutput,
};

// ===== DetectDominantLanguage =====

/// テキストの主要言語を検出する
pub struct DetectDominantLanguage;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectDominantLanguageParams {
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectDominantLanguageRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectDominantLanguageResponse {
    pub languages: Vec<DominantLanguage>,
}

impl Operation for DetectDominantLanguage {
    type Params = DetectDominantLanguageParams;
    type Request = DetectDominantLanguageRequest;
    type Response = DetectDominantLanguageResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Field("Languages");
    const NAME: &'static str = "DetectDominantLanguage";
    const SERVICE: AwsService = AwsService::Comprehend;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        Ok(DetectDominantLanguageRequest {
            text: require(Self::NAME, "Text", params.text.clone())?,
        })
    }
}

// ===== DetectSentiment =====

/// テキストの感情を検出する
pub struct DetectSentiment;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectSentimentParams {
    pub text:          Option<String>,
    pub language_code: Option<LanguageCode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectSentimentRequest {
    pub text:          String,
    pub language_code: LanguageCode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectSentimentResponse {
    pub sentiment:       Option<String>,
    pub sentiment_score: Option<SentimentScore>,
}

impl Operation for DetectSentiment {
    type Params = DetectSentimentParams;
    type Request = DetectSentimentRequest;
    type Response = DetectSentimentResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Response;
    const NAME: &'static str = "DetectSentiment";
    const SERVICE: AwsService = AwsService::Comprehend;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        Ok(DetectSentimentRequest {
            text:          require(Self::NAME, "Text", params.text.clone())?,
            language_code: require(Self::NAME, "LanguageCode", params.language_code)?,
        })
    }
}

// ===== DetectEntities =====

/// テキスト中のエンティティを検出する
///
/// カスタムエンドポイント（`EndpointArn`）を指定した場合、言語はモデルから決まるため
/// `LanguageCode` は省略できる。
pub struct DetectEntities;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectEntitiesParams {
    pub text:          Option<String>,
    pub language_code: Option<LanguageCode>,
    pub endpoint_arn:  Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectEntitiesRequest {
    pub text:          String,
    pub language_code: Option<LanguageCode>,
    pub endpoint_arn:  Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectEntitiesResponse {
    pub entities: Vec<Entity>,
}

impl Operation for DetectEntities {
    type Params = DetectEntitiesParams;
    type Request = DetectEntitiesRequest;
    type Response = DetectEntitiesResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Field("Entities");
    const NAME: &'static str = "DetectEntities";
    const SERVICE: AwsService = AwsService::Comprehend;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        let text = require(Self::NAME, "Text", params.text.clone())?;

        if params.endpoint_arn.is_none() && params.language_code.is_none() {
            return Err(DomainError::MissingParameter {
                operation: Self::NAME,
                parameter: "LanguageCode",
            });
        }

        Ok(DetectEntitiesRequest {
            text,
            language_code: params.language_code,
            endpoint_arn: params.endpoint_arn.clone(),
        })
    }
}

// ===== DetectKeyPhrases =====

/// テキスト中のキーフレーズを検出する
pub struct DetectKeyPhrases;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectKeyPhrasesParams {
    pub text:          Option<String>,
    pub language_code: Option<LanguageCode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectKeyPhrasesRequest {
    pub text:          String,
    pub language_code: LanguageCode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectKeyPhrasesResponse {
    pub key_phrases: Vec<KeyPhrase>,
}

impl Operation for DetectKeyPhrases {
    type Params = DetectKeyPhrasesParams;
    type Request = DetectKeyPhrasesRequest;
    type Response = DetectKeyPhrasesResponse;

    const DEFAULT_OUTPUT: DefaultOutput = DefaultOutput::Field("KeyPhrases");
    const NAME: &'static str = "DetectKeyPhrases";
    const SERVICE: AwsService = AwsService::Comprehend;

    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError> {
        Ok(DetectKeyPhrasesRequest {
            text:          require(Self::NAME, "Text", params.text.clone())?,
            language_code: require(Self::NAME, "LanguageCode", params.language_code)?,
        })
    }
}
