//! # ドメイン層エラー定義
//!
//! リモート呼び出しより前に検出されるエラー（束縛エラー・射影エラー）を表現する。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **診断の具体性**: 欠落・不正なパラメータは名前で特定できるようにする
//!
//! ## エラーの種類
//!
//! | エラー種別 | 発生箇所 | 用途 |
//! |-----------|---------|------|
//! | `MissingParameter` | 束縛 | 必須パラメータの未指定 |
//! | `InvalidValue` | 束縛 | 形式・範囲の不正 |
//! | `UnknownSelector` | 射影 | 存在しないフィールド・パラメータの選択 |
//! | `Serialization` | 射影 | 出力値への変換失敗 |
//!
//! ## 使用例
//!
//! ```rust
//! use awsctl_domain::DomainError;
//!
//! let error = DomainError::MissingParameter {
//!     operation: "DetectSentiment",
//!     parameter: "Text",
//! };
//! assert!(error.to_string().contains("Text"));
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
    /// 必須パラメータが指定されていない
    ///
    /// null のまま処理を続行せず、欠落したパラメータ名を含めて即座に報告する。
    #[error("{operation}: 必須パラメータ '{parameter}' が指定されていません")]
    MissingParameter {
        /// 操作名（例: "DetectSentiment"）
        operation: &'static str,
        /// パラメータ名（例: "InputDataConfig_S3Uri"）
        parameter: &'static str,
    },

    /// パラメータの値が不正
    #[error("パラメータ '{parameter}' の値が不正です: {reason}")]
    InvalidValue {
        /// パラメータ名
        parameter: String,
        /// 不正と判断した理由
        reason:    String,
    },

    /// 射影の対象が存在しない
    #[error("'{name}' は{scope}に存在しません")]
    UnknownSelector {
        /// 指定された名前
        name:  String,
        /// 探索した対象（"レスポンス" / "パラメータ"）
        scope: &'static str,
    },

    /// シリアライズエラー
    #[error("シリアライズエラー: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    /// 不正値エラーを生成する
    pub fn invalid_value(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            parameter: parameter.into(),
            reason:    reason.into(),
        }
    }
}
