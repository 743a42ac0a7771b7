//! # CLI 設定
//!
//! グローバルオプションと環境変数から呼び出しコンテキストを組み立てる。
//!
//! ## 優先順位
//!
//! 1. コマンドラインオプション（`--region` など）
//! 2. 環境変数（clap の `env` 属性で読む `AWS_REGION` / `AWS_PROFILE` / `AWSCTL_ENDPOINT_URL`）
//! 3. `AWS_DEFAULT_REGION`（リージョンのみ）
//! 4. SDK の既定の解決（`~/.aws/config` など）
//!
//! `.env` ファイルがあれば起動時に `dotenvy` で読み込む。

use std::env;

use awsctl_infra::AwsContext;

use crate::command::GlobalArgs;

/// CLI 全体の設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// 呼び出しコンテキスト
    pub context: AwsContext,
}

impl CliConfig {
    /// グローバルオプションとプロセスの環境変数から設定を組み立てる
    pub fn from_args(args: &GlobalArgs) -> Self {
        Self::resolve(args, |key| env::var(key).ok())
    }

    /// 環境変数の参照を差し替えて設定を組み立てる
    fn resolve(args: &GlobalArgs, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let region = non_blank(args.region.clone())
            .or_else(|| non_blank(lookup("AWS_DEFAULT_REGION")));

        Self {
            context: AwsContext {
                region,
                profile: non_blank(args.profile.clone()),
                endpoint_url: non_blank(args.endpoint_url.clone()),
            },
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
