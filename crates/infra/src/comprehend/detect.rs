//! 同期テキスト分析の呼び出し

use async_trait::async_trait;
use aws_sdk_comprehend::types as sdk;
use awsctl_domain::{
    comprehend::{
        DetectDominantLanguage,
        DetectDominantLanguageRequest,
        DetectDominantLanguageResponse,
        DetectEntities,
        DetectEntitiesRequest,
        DetectEntitiesResponse,
        DetectKeyPhrases,
        DetectKeyPhrasesRequest,
        DetectKeyPhrasesResponse,
        DetectSentiment,
        DetectSentimentRequest,
        DetectSentimentResponse,
        DominantLanguage,
        Entity,
        KeyPhrase,
        LanguageCode,
        SentimentScore,
    },
    operation::Operation,
};

use super::AwsComprehendClient;
use crate::{
    InfraError,
    convert::owned,
    invoke::{Invoke, classify_sdk_error},
};

pub(super) fn sdk_language(code: LanguageCode) -> sdk::LanguageCode {
    sdk::LanguageCode::from(code.as_str())
}

fn entity(value: &sdk::Entity) -> Entity {
    Entity {
        score:        value.score(),
        entity_type:  value.r#type().map(|t| t.as_str().to_string()),
        text:         owned(value.text()),
        begin_offset: value.begin_offset(),
        end_offset:   value.end_offset(),
    }
}

fn key_phrase(value: &sdk::KeyPhrase) -> KeyPhrase {
    KeyPhrase {
        score:        value.score(),
        text:         owned(value.text()),
        begin_offset: value.begin_offset(),
        end_offset:   value.end_offset(),
    }
}

#[async_trait]
impl Invoke<DetectDominantLanguage> for AwsComprehendClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = DetectDominantLanguage::NAME))]
    async fn invoke(
        &self,
        request: DetectDominantLanguageRequest,
    ) -> Result<DetectDominantLanguageResponse, InfraError> {
        let output = self
            .client
            .detect_dominant_language()
            .text(request.text)
            .send()
            .await
            .map_err(|e| classify_sdk_error(DetectDominantLanguage::NAME, &self.endpoint, e))?;

        Ok(DetectDominantLanguageResponse {
            languages: output
                .languages()
                .iter()
                .map(|l| DominantLanguage {
                    language_code: owned(l.language_code()),
                    score:         l.score(),
                })
                .collect(),
        })
    }
}

#[async_trait]
impl Invoke<DetectSentiment> for AwsComprehendClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = DetectSentiment::NAME))]
    async fn invoke(
        &self,
        request: DetectSentimentRequest,
    ) -> Result<DetectSentimentResponse, InfraError> {
        let output = self
            .client
            .detect_sentiment()
            .text(request.text)
            .language_code(sdk_language(request.language_code))
            .send()
            .await
            .map_err(|e| classify_sdk_error(DetectSentiment::NAME, &self.endpoint, e))?;

        Ok(DetectSentimentResponse {
            sentiment:       output.sentiment().map(|s| s.as_str().to_string()),
            sentiment_score: output.sentiment_score().map(|s| SentimentScore {
                positive: s.positive(),
                negative: s.negative(),
                neutral:  s.neutral(),
                mixed:    s.mixed(),
            }),
        })
    }
}

#[async_trait]
impl Invoke<DetectEntities> for AwsComprehendClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = DetectEntities::NAME))]
    async fn invoke(
        &self,
        request: DetectEntitiesRequest,
    ) -> Result<DetectEntitiesResponse, InfraError> {
        let output = self
            .client
            .detect_entities()
            .text(request.text)
            .set_language_code(request.language_code.map(sdk_language))
            .set_endpoint_arn(request.endpoint_arn)
            .send()
            .await
            .map_err(|e| classify_sdk_error(DetectEntities::NAME, &self.endpoint, e))?;

        Ok(DetectEntitiesResponse {
            entities: output.entities().iter().map(entity).collect(),
        })
    }
}

#[async_trait]
impl Invoke<DetectKeyPhrases> for AwsComprehendClient {
    #[tracing::instrument(skip_all, level = "debug", fields(operation = DetectKeyPhrases::NAME))]
    async fn invoke(
        &self,
        request: DetectKeyPhrasesRequest,
    ) -> Result<DetectKeyPhrasesResponse, InfraError> {
        let output = self
            .client
            .detect_key_phrases()
            .text(request.text)
            .language_code(sdk_language(request.language_code))
            .send()
            .await
            .map_err(|e| classify_sdk_error(DetectKeyPhrases::NAME, &self.endpoint, e))?;

        Ok(DetectKeyPhrasesResponse {
            key_phrases: output.key_phrases().iter().map(key_phrase).collect(),
        })
    }
}
