//! Comprehend の列挙トークンとレスポンス共通型

use chrono::{DateTime, Utc};
use serde::Serialize;

define_token_enum! {
    /// 分析対象テキストの言語
    pub enum LanguageCode {
        En => "en",
        Es => "es",
        Fr => "fr",
        De => "de",
        It => "it",
        Pt => "pt",
        Ar => "ar",
        Hi => "hi",
        Ja => "ja",
        Ko => "ko",
        Zh => "zh",
        ZhTw => "zh-TW",
    }
}

define_token_enum! {
    /// 非同期ジョブの状態
    pub enum JobStatus {
        Submitted => "SUBMITTED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Failed => "FAILED",
        StopRequested => "STOP_REQUESTED",
        Stopped => "STOPPED",
    }
}

define_token_enum! {
    /// 入力ファイルの文書区切り
    pub enum InputFormat {
        OneDocPerFile => "ONE_DOC_PER_FILE",
        OneDocPerLine => "ONE_DOC_PER_LINE",
    }
}

define_token_enum! {
    /// PDF / 画像の読み取り方法
    pub enum DocumentReadAction {
        TextractDetectDocumentText => "TEXTRACT_DETECT_DOCUMENT_TEXT",
        TextractAnalyzeDocument => "TEXTRACT_ANALYZE_DOCUMENT",
    }
}

define_token_enum! {
    /// 読み取り方法の適用範囲
    pub enum DocumentReadMode {
        ServiceDefault => "SERVICE_DEFAULT",
        ForceDocumentReadAction => "FORCE_DOCUMENT_READ_ACTION",
    }
}

define_token_enum! {
    /// `TEXTRACT_ANALYZE_DOCUMENT` で抽出する要素
    pub enum DocumentReadFeatureType {
        Tables => "TABLES",
        Forms => "FORMS",
    }
}

/// 検出された言語
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DominantLanguage {
    pub language_code: Option<String>,
    pub score:         Option<f32>,
}

/// 感情ごとの確信度
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentScore {
    pub positive: Option<f32>,
    pub negative: Option<f32>,
    pub neutral:  Option<f32>,
    pub mixed:    Option<f32>,
}

/// 検出されたエンティティ
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entity {
    pub score:        Option<f32>,
    #[serde(rename = "Type")]
    pub entity_type:  Option<String>,
    pub text:         Option<String>,
    pub begin_offset: Option<i32>,
    pub end_offset:   Option<i32>,
}

/// 検出されたキーフレーズ
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyPhrase {
    pub score:        Option<f32>,
    pub text:         Option<String>,
    pub begin_offset: Option<i32>,
    pub end_offset:   Option<i32>,
}

/// ジョブの入力設定（レスポンス表現）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputDataConfigView {
    #[serde(rename = "S3Uri")]
    pub s3_uri:       String,
    pub input_format: Option<String>,
}

/// ジョブの出力設定（レスポンス表現）
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputDataConfigView {
    #[serde(rename = "S3Uri")]
    pub s3_uri:     String,
    pub kms_key_id: Option<String>,
}

/// エンティティ検出ジョブのプロパティ
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntitiesDetectionJobProperties {
    pub job_id:                Option<String>,
    pub job_arn:               Option<String>,
    pub job_name:              Option<String>,
    pub job_status:            Option<String>,
    pub message:               Option<String>,
    pub submit_time:           Option<DateTime<Utc>>,
    pub end_time:              Option<DateTime<Utc>>,
    pub entity_recognizer_arn: Option<String>,
    pub input_data_config:     Option<InputDataConfigView>,
    pub output_data_config:    Option<OutputDataConfigView>,
    pub language_code:         Option<String>,
    pub data_access_role_arn:  Option<String>,
    pub volume_kms_key_id:     Option<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;
    use strum::VariantNames;

    use super::*;

    #[rstest]
    #[case("en", LanguageCode::En)]
    #[case("EN", LanguageCode::En)]
    #[case("zh-TW", LanguageCode::ZhTw)]
    #[case("zh-tw", LanguageCode::ZhTw)]
    fn test_言語コードは大文字小文字を区別せずパースする(
        #[case] input: &str,
        #[case] expected: LanguageCode,
    ) {
        assert_eq!(LanguageCode::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_未知のトークンはパースできない() {
        assert!(JobStatus::from_str("RUNNING").is_err());
    }

    #[test]
    fn test_トークンはワイヤー表現でシリアライズされる() {
        let value = serde_json::to_value(JobStatus::StopRequested).unwrap();
        assert_eq!(value, json!("STOP_REQUESTED"));
    }

    #[test]
    fn test_variantsはワイヤートークンを列挙する() {
        assert_eq!(InputFormat::VARIANTS, &["ONE_DOC_PER_FILE", "ONE_DOC_PER_LINE"]);
    }

    #[test]
    fn test_エンティティの種別はtypeとしてシリアライズされる() {
        let entity = Entity {
            score:        Some(0.5),
            entity_type:  Some("PERSON".to_string()),
            text:         Some("Jane".to_string()),
            begin_offset: Some(0),
            end_offset:   Some(4),
        };

        let value = serde_json::to_value(entity).unwrap();

        assert_eq!(value["Type"], json!("PERSON"));
        assert_eq!(value["BeginOffset"], json!(0));
    }
}
