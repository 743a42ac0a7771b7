//! # 呼び出しイベントログとエラーコンテキストの構造化ヘルパー
//!
//! `jq` で効率的に調査できるよう、ログフィールドの命名規約と
//! ヘルパーマクロを提供する。
//!
//! ## 呼び出しイベント
//!
//! [`log_invocation_event!`] マクロで出力する。`event.kind = "invocation"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "invocation")'` でフィルタできる。
//!
//! ## エラーコンテキスト
//!
//! `tracing::error!` に `error.category` + `error.kind` フィールドを直接追加する。
//! 定数は [`error`] モジュールで提供。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.service`、`error.kind`）を使用。tracing の
//! `$($field:ident).+` パターンでサポートされ、JSON 出力でフラットなキーになる。

/// 呼び出しイベントを構造化ログとして出力する。
///
/// `event.kind = "invocation"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.service`: サービス名（`comprehend` など）
/// - `event.operation`: API 操作名（`DetectSentiment` など）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
///
/// ## 推奨フィールド
///
/// - `event.target`: 変更操作の対象（ジョブ ID、スタジオ ID など）
#[macro_export]
macro_rules! log_invocation_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "invocation",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントアクション
    pub mod action {
        /// 変更操作の確認が承諾された
        pub const CONFIRMED: &str = "invocation.confirmed";
        /// 変更操作の確認が拒否された
        pub const DECLINED: &str = "invocation.declined";
        /// リモート呼び出しが完了した
        pub const COMPLETED: &str = "invocation.completed";
        /// 1 ページの取得が完了した
        pub const PAGE_FETCHED: &str = "invocation.page_fetched";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
        pub const SKIPPED: &str = "skipped";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// 呼び出し前のパラメータ束縛
        pub const BINDING: &str = "binding";
        /// 外部サービス呼び出し（AWS）
        pub const EXTERNAL_SERVICE: &str = "external_service";
        /// ローカルの入出力・設定
        pub const LOCAL: &str = "local";
    }

    /// エラー種別
    pub mod kind {
        pub const MISSING_PARAMETER: &str = "missing_parameter";
        pub const INVALID_VALUE: &str = "invalid_value";
        pub const NAME_RESOLUTION: &str = "name_resolution";
        pub const SERVICE: &str = "service";
        pub const CONFIGURATION: &str = "configuration";
        pub const IO: &str = "io";
        pub const INTERNAL: &str = "internal";
    }
}
