//! # Amazon Comprehend クライアント
//!
//! `aws-sdk-comprehend` を使用して、ドメイン層の Comprehend 操作に
//! [`Invoke`](crate::invoke::Invoke) を実装する。
//!
//! ドメインのリクエストを SDK のビルダーへ、SDK の出力をドメインのレスポンスへ変換する。
//! 変換は操作のグループ（同期検出・検出ジョブ・タグ）ごとにサブモジュールに分ける。

mod detect;
mod entities_job;
mod tagging;

use aws_sdk_comprehend::Client;

/// AWS Comprehend クライアント
#[derive(Debug, Clone)]
pub struct AwsComprehendClient {
    client:   Client,
    endpoint: String,
}

impl AwsComprehendClient {
    /// 新しい Comprehend クライアントを作成する
    ///
    /// `endpoint` は名前解決エラーのメッセージに含める接続先。
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    /// 接続先エンドポイント
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
