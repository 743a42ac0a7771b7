//! # コマンド定義
//!
//! `awsctl <service> <operation> [OPTIONS]` の形でコマンドを受け付ける。
//! 1 コマンドは 1 つのリモート API 操作に対応する。
//!
//! ## 共通オプション
//!
//! | オプション | 環境変数 | 説明 |
//! |-----------|---------|------|
//! | `--region` | `AWS_REGION`（`AWS_DEFAULT_REGION`） | 呼び出し先リージョン |
//! | `--profile` | `AWS_PROFILE` | 認証情報のプロファイル |
//! | `--endpoint-url` | `AWSCTL_ENDPOINT_URL` | エンドポイントの上書き |
//! | `--select` | | 出力の選択子 |
//!
//! 一覧操作は `--next-token` / `--max-results` / `--no-auto-iteration`、
//! 変更操作は `--force` を追加で受け付ける。

mod common;
mod comprehend;
mod nimble;

use awsctl_domain::projection::Output;
use awsctl_infra::{AwsContext, ClientCache};
use clap::{Args, Parser, Subcommand};

pub use self::{comprehend::ComprehendCommand, nimble::NimbleCommand};
use crate::error::CliError;

/// AWS API 操作を 1 コマンド 1 呼び出しでラップする CLI
#[derive(Debug, Parser)]
#[command(name = "awsctl", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// 呼び出しコンテキストの指定
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// 呼び出し先リージョン
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// 認証情報のプロファイル名
    #[arg(long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// エンドポイント URL の上書き（LocalStack など）
    #[arg(long, global = true, env = "AWSCTL_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,
}

/// サービスごとのサブコマンド
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Amazon Comprehend
    #[command(subcommand)]
    Comprehend(ComprehendCommand),
    /// Amazon Nimble Studio
    #[command(subcommand)]
    Nimble(NimbleCommand),
}

impl Command {
    /// コマンドを実行し、射影結果を返す
    pub async fn run(self, cache: &ClientCache, context: &AwsContext) -> Result<Output, CliError> {
        match self {
            Self::Comprehend(command) => command.run(cache, context).await,
            Self::Nimble(command) => command.run(cache, context).await,
        }
    }
}
