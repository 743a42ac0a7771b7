//! # awsctl インフラ層
//!
//! AWS SDK を使ってリモート操作を呼び出すインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはドメイン層で定義された操作（[`Operation`](awsctl_domain::operation::Operation)）に
//! 対して、具体的な呼び出し（[`Invoke`]）を提供する。SDK の型はこのクレートの外に出さない。
//!
//! ## 責務
//!
//! - **SDK 設定の解決**: リージョン・プロファイル・エンドポイントから SDK 設定を読み込み、再利用する
//! - **リクエスト変換**: ドメインのリクエストを SDK のビルダーに写す
//! - **レスポンス変換**: SDK の出力をシリアライズ可能なドメインのレスポンスに写す
//! - **エラー分類**: 名前解決エラーとサービスエラーを区別する
//!
//! ## 依存関係
//!
//! ```text
//! cli → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`aws`] - 呼び出しコンテキストと SDK 設定のキャッシュ
//! - [`comprehend`] - Amazon Comprehend クライアント
//! - [`nimble`] - Amazon Nimble Studio クライアント
//! - [`invoke`] - 呼び出しインターフェースとエラー分類
//! - [`error`] - インフラ層エラー定義

pub mod aws;
pub mod comprehend;
mod convert;
pub mod error;
pub mod invoke;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod nimble;

pub use aws::{AwsContext, ClientCache, LazyClient, ServiceClient};
pub use comprehend::AwsComprehendClient;
pub use error::{InfraError, InfraErrorKind};
pub use invoke::Invoke;
pub use nimble::AwsNimbleClient;
