//! # リモート呼び出し
//!
//! 1 つの操作につき 1 回のリモート呼び出しを行うインターフェースと、
//! SDK エラーの分類を提供する。
//!
//! ## 設計方針
//!
//! - **操作ごとの実装**: クライアントは対応する操作ごとに [`Invoke`] を実装する
//! - **テスト容易性**: ユースケース層は [`Invoke`] にのみ依存し、テストではモックに差し替える
//! - **エラー分類**: 名前解決の失敗だけを [`InfraErrorKind::NameResolution`] に分け、
//!   それ以外はサービスのエラーコードとメッセージを変えずに伝播する
//!
//! [`InfraErrorKind::NameResolution`]: crate::error::InfraErrorKind::NameResolution

use std::error::Error as StdError;

use async_trait::async_trait;
use aws_smithy_types::error::{display::DisplayErrorContext, metadata::ProvideErrorMetadata};
use awsctl_domain::operation::Operation;

use crate::InfraError;

/// 単一操作のリモート呼び出し
#[async_trait]
pub trait Invoke<Op: Operation>: Send + Sync {
    /// リクエストを送信し、完了まで待つ
    async fn invoke(&self, request: Op::Request) -> Result<Op::Response, InfraError>;
}

// DNS の失敗を示すメッセージ（hyper / getaddrinfo）
const NAME_RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "Name or service not known",
    "nodename nor servname",
    "No such host is known",
    "Temporary failure in name resolution",
];

/// エラーの原因チェーンから名前解決の失敗を探す
///
/// 見つかった場合、その原因のメッセージを返す。
pub fn name_resolution_cause(err: &(dyn StdError + 'static)) -> Option<String> {
    let mut current = Some(err);
    while let Some(e) = current {
        let text = e.to_string();
        if NAME_RESOLUTION_MARKERS.iter().any(|m| text.contains(m)) {
            return Some(text);
        }
        current = e.source();
    }
    None
}

/// SDK のエラーをインフラ層のエラーに分類する
pub fn classify_sdk_error<E>(operation: &'static str, endpoint: &str, err: E) -> InfraError
where
    E: StdError + ProvideErrorMetadata + Send + Sync + 'static,
{
    if let Some(cause) = name_resolution_cause(&err) {
        tracing::debug!(operation, endpoint, cause = %cause, "エンドポイントの名前解決に失敗しました");
        return InfraError::name_resolution(operation, endpoint, cause);
    }

    let code = err.code().map(str::to_string);
    let message = match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(&err).to_string(),
    };
    InfraError::service(operation, code, message, err)
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use aws_smithy_types::error::ErrorMetadata;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::error::InfraErrorKind;

    /// SDK エラーの代わりに使う原因チェーン付きのエラー
    #[derive(Debug)]
    struct FakeSdkError {
        meta:   ErrorMetadata,
        source: Option<std::io::Error>,
    }

    impl fmt::Display for FakeSdkError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "dispatch failure")
        }
    }

    impl StdError for FakeSdkError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source.as_ref().map(|e| e as &(dyn StdError + 'static))
        }
    }

    impl ProvideErrorMetadata for FakeSdkError {
        fn meta(&self) -> &ErrorMetadata {
            &self.meta
        }
    }

    fn dns_failure() -> FakeSdkError {
        FakeSdkError {
            meta:   ErrorMetadata::default(),
            source: Some(std::io::Error::other(
                "dns error: failed to lookup address information: Name or service not known",
            )),
        }
    }

    #[test]
    fn test_原因チェーンの名前解決エラーを検出する() {
        let err = dns_failure();

        let cause = name_resolution_cause(&err);

        assert_eq!(
            cause.as_deref(),
            Some("dns error: failed to lookup address information: Name or service not known")
        );
    }

    #[rstest]
    #[case::hyper("dns error: no record found")]
    #[case::linux("Name or service not known")]
    #[case::macos("nodename nor servname provided, or not known")]
    #[case::windows("No such host is known. (os error 11001)")]
    fn test_プラットフォームごとの名前解決エラーを検出する(#[case] text: &str) {
        let err = std::io::Error::other(text.to_string());

        assert_eq!(name_resolution_cause(&err).as_deref(), Some(text));
    }

    #[test]
    fn test_名前解決以外の接続エラーは検出しない() {
        let err = std::io::Error::other("connection refused");

        assert_eq!(name_resolution_cause(&err), None);
    }

    #[test]
    fn test_名前解決エラーはエンドポイントと操作名を添えて再送出される() {
        let endpoint = "https://comprehend.xx-nowhere-1.amazonaws.com";

        let err = classify_sdk_error("DetectSentiment", endpoint, dns_failure());

        assert!(err.is_name_resolution());
        let message = err.to_string();
        assert!(message.contains("failed to lookup address information"));
        assert!(message.contains(endpoint));
        assert!(message.contains("DetectSentiment"));
    }

    #[test]
    fn test_サービスエラーはコードとメッセージを保持する() {
        let err = FakeSdkError {
            meta:   ErrorMetadata::builder()
                .code("ResourceNotFoundException")
                .message("Job not found")
                .build(),
            source: None,
        };

        let err = classify_sdk_error("DescribeEntitiesDetectionJob", "https://x", err);

        assert_eq!(
            err.as_service(),
            Some((Some("ResourceNotFoundException"), "Job not found"))
        );
        assert!(matches!(err.kind(), InfraErrorKind::Service { .. }));
    }

    #[test]
    fn test_メッセージのないエラーは表示文字列を使う() {
        let err = FakeSdkError {
            meta:   ErrorMetadata::default(),
            source: Some(std::io::Error::other("connection reset")),
        };

        let err = classify_sdk_error("ListStudios", "https://x", err);

        let (code, message) = err.as_service().unwrap();
        assert_eq!(code, None);
        assert!(message.contains("dispatch failure"));
        assert!(message.contains("connection reset"));
    }
}
