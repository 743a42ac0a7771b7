//! # awsctl
//!
//! AWS API 操作を 1 コマンド 1 呼び出しでラップする CLI。
//!
//! ## 使用例
//!
//! ```bash
//! echo "I love this product" | awsctl comprehend detect-sentiment --language-code en
//! awsctl nimble list-studios --region us-west-2 --max-results 10
//! awsctl comprehend stop-entities-detection-job --job-id 0123abcd --force
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 説明 |
//! |--------|------|
//! | `AWS_REGION` / `AWS_DEFAULT_REGION` | 呼び出し先リージョン |
//! | `AWS_PROFILE` | 認証情報のプロファイル |
//! | `AWSCTL_ENDPOINT_URL` | エンドポイントの上書き |
//! | `RUST_LOG` | ログレベル（デフォルト: `warn,awsctl=info`） |
//! | `LOG_FORMAT` | ログ形式（`json` / `pretty`） |
//!
//! コマンドの出力（JSON）は stdout、ログとエラーは stderr に書き出す。

use std::{io, process::ExitCode};

use anyhow::Context as _;
use awsctl_cli::{command::Cli, config::CliConfig, output::write_output};
use awsctl_infra::ClientCache;
use awsctl_shared::observability::{TracingConfig, init_tracing};
use clap::Parser;
use tracing::Instrument as _;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    // .env ファイルがあれば読み込む（なくてもよい）
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let tracing_config = TracingConfig::from_env("awsctl");
    let app_name = tracing_config.app_name.clone();
    init_tracing(tracing_config);

    let config = CliConfig::from_args(&cli.global);
    tracing::debug!(
        region = config.context.region.as_deref(),
        profile = config.context.profile.as_deref(),
        endpoint_url = config.context.endpoint_url.as_deref(),
        "呼び出しコンテキストを解決しました"
    );

    let cache = ClientCache::new();
    let outcome = cli
        .command
        .run(&cache, &config.context)
        .instrument(tracing::info_span!("app", app = %app_name))
        .await;

    match outcome {
        Ok(output) => {
            write_output(&mut io::stdout().lock(), &output)
                .context("コマンド出力の書き込みに失敗しました")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("error: {e}");
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
