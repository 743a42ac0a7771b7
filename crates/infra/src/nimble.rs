//! # Amazon Nimble Studio クライアント
//!
//! `aws-sdk-nimble` を使用して、ドメイン層の Nimble Studio 操作に
//! [`Invoke`](crate::invoke::Invoke) を実装する。

mod launch_profile;
mod studio;

use aws_sdk_nimble::Client;

/// AWS Nimble Studio クライアント
#[derive(Debug, Clone)]
pub struct AwsNimbleClient {
    client:   Client,
    endpoint: String,
}

impl AwsNimbleClient {
    /// 新しい Nimble Studio クライアントを作成する
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    /// 接続先エンドポイント
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
