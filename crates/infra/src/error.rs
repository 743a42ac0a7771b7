//! # インフラ層エラー定義
//!
//! AWS SDK の呼び出しで発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **名前解決エラーの分離**: DNS の失敗はエンドポイントと操作名を添えて別種別にする
//! - **サービスエラーはそのまま**: エラーコードとメッセージを書き換えずに伝播する
//! - **SpanTrace 自動捕捉**: convenience constructor でエラー生成時の呼び出し経路を記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（NameResolution, Service 等）

use std::{error::Error as StdError, fmt};

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// SDK のエラー型を保持するための型消去された source
pub type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
///
/// ## パターンマッチ
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::NameResolution { endpoint, .. } => { /* 接続先の確認を促す */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// エンドポイントの名前解決に失敗した
    ///
    /// 元のエラーメッセージに、接続先エンドポイントと操作名を付け加える。
    #[error("{message} (エンドポイント '{endpoint}' の名前解決に失敗しました。操作: {operation})")]
    NameResolution {
        operation: &'static str,
        endpoint:  String,
        message:   String,
    },

    /// リモートサービスが返したエラー
    ///
    /// AWS SDK のエラー型はジェネリクスが深く `#[from]` が困難なため、
    /// コードとメッセージを取り出し、元のエラーは source として保持する。
    #[error("{operation}: {message} ({})", code.as_deref().unwrap_or("Unknown"))]
    Service {
        operation: &'static str,
        code:      Option<String>,
        message:   String,
        #[source]
        source:    BoxedSource,
    },

    /// SDK 設定の解決に失敗した（リージョン未指定など）
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// SDK のリクエスト構築に失敗した
    #[error("入力エラー: {0}")]
    InvalidInput(String),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 名前解決エラーか
    pub fn is_name_resolution(&self) -> bool {
        matches!(self.kind, InfraErrorKind::NameResolution { .. })
    }

    /// Service バリアントの場合、エラーコードとメッセージを返す
    pub fn as_service(&self) -> Option<(Option<&str>, &str)> {
        match &self.kind {
            InfraErrorKind::Service { code, message, .. } => Some((code.as_deref(), message)),
            _ => None,
        }
    }

    /// InfraError を分解して InfraErrorKind と SpanTrace を取り出す
    pub fn into_parts(self) -> (InfraErrorKind, SpanTrace) {
        (self.kind, self.span_trace)
    }

    // ===== Convenience constructors =====

    /// 名前解決エラーを生成する
    pub fn name_resolution(
        operation: &'static str,
        endpoint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind:       InfraErrorKind::NameResolution {
                operation,
                endpoint: endpoint.into(),
                message: message.into(),
            },
            span_trace: SpanTrace::capture(),
        }
    }

    /// サービスエラーを生成する
    pub fn service(
        operation: &'static str,
        code: Option<String>,
        message: impl Into<String>,
        source: impl Into<BoxedSource>,
    ) -> Self {
        Self {
            kind:       InfraErrorKind::Service {
                operation,
                code,
                message: message.into(),
                source: source.into(),
            },
            span_trace: SpanTrace::capture(),
        }
    }

    /// 設定エラーを生成する
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Configuration(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }

    /// 入力エラーを生成する
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::InvalidInput(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl StdError for InfraError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.kind.source()
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for InfraError {
    fn from(source: aws_smithy_types::error::operation::BuildError) -> Self {
        Self {
            kind:       InfraErrorKind::InvalidInput(source.to_string()),
            span_trace: SpanTrace::capture(),
        }
    }
}
