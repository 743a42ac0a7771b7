//! # CLI エラー定義
//!
//! 各層のエラーを集約し、終了コードとログ分類に対応付ける。
//!
//! ## 終了コード
//!
//! | エラー | 終了コード |
//! |--------|-----------|
//! | 束縛エラー（必須パラメータ欠落・不正値・不明な選択子） | 2 |
//! | 変更操作の確認拒否 | 3 |
//! | 名前解決エラー | 4 |
//! | その他のリモートエラー・ローカルエラー | 1 |

use awsctl_domain::DomainError;
use awsctl_infra::{InfraError, InfraErrorKind};
use awsctl_shared::event_log::error::{category, kind};
use thiserror::Error;

/// CLI 層で発生するエラー
#[derive(Debug, Error)]
pub enum CliError {
    /// パラメータ束縛・射影のエラー
    #[error(transparent)]
    Binding(#[from] DomainError),

    /// 変更操作の確認が拒否された（リモート呼び出しは行わない）
    #[error("{operation}: '{target}' への操作を中止しました")]
    Declined {
        operation: &'static str,
        target:    String,
    },

    /// リモート呼び出しのエラー
    #[error(transparent)]
    Remote(#[from] InfraError),

    /// 標準入出力のエラー
    #[error("入出力エラー: {0}")]
    Io(#[from] std::io::Error),

    /// 出力値への変換エラー
    #[error("出力のシリアライズに失敗しました: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// プロセスの終了コード
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Binding(DomainError::Serialization(_)) => 1,
            Self::Binding(_) => 2,
            Self::Declined { .. } => 3,
            Self::Remote(e) if e.is_name_resolution() => 4,
            Self::Remote(_) | Self::Io(_) | Self::Serialization(_) => 1,
        }
    }

    /// ログの `error.category`
    pub fn category(&self) -> &'static str {
        match self {
            Self::Binding(DomainError::Serialization(_)) => category::LOCAL,
            Self::Binding(_) | Self::Declined { .. } => category::BINDING,
            Self::Remote(_) => category::EXTERNAL_SERVICE,
            Self::Io(_) | Self::Serialization(_) => category::LOCAL,
        }
    }

    /// ログの `error.kind`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Binding(DomainError::MissingParameter { .. }) => kind::MISSING_PARAMETER,
            Self::Binding(DomainError::Serialization(_)) => kind::INTERNAL,
            Self::Binding(_) => kind::INVALID_VALUE,
            Self::Declined { .. } => kind::INVALID_VALUE,
            Self::Remote(e) => match e.kind() {
                InfraErrorKind::NameResolution { .. } => kind::NAME_RESOLUTION,
                InfraErrorKind::Service { .. } => kind::SERVICE,
                InfraErrorKind::Configuration(_) => kind::CONFIGURATION,
                InfraErrorKind::InvalidInput(_) | InfraErrorKind::Unexpected(_) => kind::INTERNAL,
            },
            Self::Io(_) => kind::IO,
            Self::Serialization(_) => kind::INTERNAL,
        }
    }
}
