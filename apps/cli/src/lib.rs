//! # awsctl CLI
//!
//! AWS API 操作を 1 コマンド 1 呼び出しでラップする CLI のアプリケーション層。
//!
//! ## モジュール構成
//!
//! - [`command`] - clap によるコマンド定義とディスパッチ
//! - [`usecase`] - 束縛 → 呼び出し → 射影の汎用アダプタ
//! - [`confirm`] - 変更操作の確認プロンプト
//! - [`pipeline`] - stdin からのパイプライン入力
//! - [`output`] - 射影結果の書き出し
//! - [`config`] - 呼び出しコンテキストの組み立て
//! - [`error`] - CLI エラーと終了コード

pub mod command;
pub mod config;
pub mod confirm;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod usecase;

pub use error::CliError;
