//! # AWS 接続管理
//!
//! 呼び出しコンテキスト（リージョン・プロファイル・エンドポイント）から
//! SDK の設定を解決し、サービスクライアントを生成する。
//!
//! ## 設計方針
//!
//! - **明示的なコンテキスト**: 「現在のリージョン」のような大域状態は持たず、
//!   呼び出しごとに [`AwsContext`] を渡す
//! - **設定の再利用**: 同じコンテキストに対する SDK 設定は [`ClientCache`] で一度だけ読み込む
//! - **認証情報**: SDK のデフォルト認証チェーン（環境変数・プロファイル・IAM ロール）で解決する
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use awsctl_infra::aws::{AwsContext, ClientCache};
//!
//! async fn setup() -> Result<(), awsctl_infra::InfraError> {
//!     let cache = ClientCache::new();
//!     let context = AwsContext {
//!         region: Some("us-east-1".to_string()),
//!         ..Default::default()
//!     };
//!     let comprehend = cache.comprehend(&context).await?;
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use awsctl_domain::operation::{AwsService, Operation};
use tokio::sync::{Mutex, OnceCell};

use crate::{
    InfraError,
    comprehend::AwsComprehendClient,
    invoke::Invoke,
    nimble::AwsNimbleClient,
};

/// 呼び出しコンテキスト
///
/// `None` の項目は SDK の既定の解決（環境変数・設定ファイル）に委ねる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AwsContext {
    pub region:       Option<String>,
    pub profile:      Option<String>,
    pub endpoint_url: Option<String>,
}

impl AwsContext {
    /// 呼び出し先のエンドポイント URL
    ///
    /// カスタムエンドポイントが指定されていればそれを、なければサービスの既定を返す。
    pub fn endpoint_for(&self, service: AwsService, region: &str) -> String {
        self.endpoint_url
            .clone()
            .unwrap_or_else(|| service.default_endpoint(region))
    }
}

/// SDK 設定のキャッシュ
///
/// 1 プロセス 1 コマンドのため競合はしないが、共有参照から使えるよう
/// 非同期 Mutex で保護する。
#[derive(Debug, Default)]
pub struct ClientCache {
    configs: Mutex<HashMap<AwsContext, SdkConfig>>,
}

impl ClientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// コンテキストに対応する SDK 設定を取得する（初回のみ読み込む）
    pub async fn sdk_config(&self, context: &AwsContext) -> Result<SdkConfig, InfraError> {
        let mut configs = self.configs.lock().await;
        if let Some(config) = configs.get(context) {
            return Ok(config.clone());
        }

        let config = load_sdk_config(context).await;
        if config.region().is_none() {
            return Err(InfraError::configuration(
                "リージョンが指定されていません（--region または AWS_REGION を指定してください）",
            ));
        }

        tracing::debug!(
            region = ?config.region(),
            profile = ?context.profile,
            endpoint_url = ?context.endpoint_url,
            "SDK 設定を読み込みました"
        );
        configs.insert(context.clone(), config.clone());
        Ok(config)
    }

    /// 読み込み済みの SDK 設定の数
    pub async fn loaded_count(&self) -> usize {
        self.configs.lock().await.len()
    }

    /// Comprehend クライアントを生成する
    pub async fn comprehend(&self, context: &AwsContext) -> Result<AwsComprehendClient, InfraError> {
        let config = self.sdk_config(context).await?;
        let endpoint = context.endpoint_for(AwsService::Comprehend, &region_of(&config));
        Ok(AwsComprehendClient::new(
            aws_sdk_comprehend::Client::new(&config),
            endpoint,
        ))
    }

    /// Nimble Studio クライアントを生成する
    pub async fn nimble(&self, context: &AwsContext) -> Result<AwsNimbleClient, InfraError> {
        let config = self.sdk_config(context).await?;
        let endpoint = context.endpoint_for(AwsService::Nimble, &region_of(&config));
        Ok(AwsNimbleClient::new(aws_sdk_nimble::Client::new(&config), endpoint))
    }
}

/// コンテキストから SDK 設定を読み込む
pub async fn load_sdk_config(context: &AwsContext) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &context.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &context.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint_url) = &context.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}

// ===== 遅延解決クライアント =====

/// コンテキストから生成できるサービスクライアント
#[async_trait]
pub trait ServiceClient: Send + Sync + Sized {
    async fn connect(cache: &ClientCache, context: &AwsContext) -> Result<Self, InfraError>;
}

#[async_trait]
impl ServiceClient for AwsComprehendClient {
    async fn connect(cache: &ClientCache, context: &AwsContext) -> Result<Self, InfraError> {
        cache.comprehend(context).await
    }
}

#[async_trait]
impl ServiceClient for AwsNimbleClient {
    async fn connect(cache: &ClientCache, context: &AwsContext) -> Result<Self, InfraError> {
        cache.nimble(context).await
    }
}

/// 最初の呼び出し時にクライアントを生成し、以降は使い回すハンドル
///
/// パラメータの束縛エラーは SDK 設定の解決より先に報告したいため、
/// クライアントの生成はリモート呼び出しの直前まで遅らせる。
pub struct LazyClient<'a, S> {
    cache:   &'a ClientCache,
    context: &'a AwsContext,
    client:  OnceCell<S>,
}

impl<'a, S: ServiceClient> LazyClient<'a, S> {
    pub fn new(cache: &'a ClientCache, context: &'a AwsContext) -> Self {
        Self {
            cache,
            context,
            client: OnceCell::new(),
        }
    }

    /// クライアントを取得する（初回のみ生成する）
    pub async fn get(&self) -> Result<&S, InfraError> {
        self.client
            .get_or_try_init(|| S::connect(self.cache, self.context))
            .await
    }
}

#[async_trait]
impl<S, Op> Invoke<Op> for LazyClient<'_, S>
where
    Op: Operation,
    S: ServiceClient + Invoke<Op>,
{
    async fn invoke(&self, request: Op::Request) -> Result<Op::Response, InfraError> {
        self.get().await?.invoke(request).await
    }
}

fn region_of(config: &SdkConfig) -> String {
    config
        .region()
        .map(|r| r.as_ref().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use awsctl_domain::comprehend::{
        DetectDominantLanguage,
        DetectDominantLanguageRequest,
        DetectDominantLanguageResponse,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    static CONNECTS: AtomicUsize = AtomicUsize::new(0);

    /// 生成回数を数えるだけのクライアント
    struct CountingClient;

    #[async_trait]
    impl ServiceClient for CountingClient {
        async fn connect(_cache: &ClientCache, _context: &AwsContext) -> Result<Self, InfraError> {
            CONNECTS.fetch_add(1, Ordering::SeqCst);
            Ok(Self)
        }
    }

    #[async_trait]
    impl Invoke<DetectDominantLanguage> for CountingClient {
        async fn invoke(
            &self,
            _request: DetectDominantLanguageRequest,
        ) -> Result<DetectDominantLanguageResponse, InfraError> {
            Ok(DetectDominantLanguageResponse::default())
        }
    }

    #[tokio::test]
    async fn test_遅延クライアントは最初の呼び出しで一度だけ生成される() {
        let cache = ClientCache::new();
        let context = AwsContext::default();
        let sut = LazyClient::<CountingClient>::new(&cache, &context);
        let request = DetectDominantLanguageRequest {
            text: "hello".to_string(),
        };

        assert_eq!(CONNECTS.load(Ordering::SeqCst), 0);

        Invoke::<DetectDominantLanguage>::invoke(&sut, request.clone()).await.unwrap();
        Invoke::<DetectDominantLanguage>::invoke(&sut, request).await.unwrap();

        assert_eq!(CONNECTS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_カスタムエンドポイントが優先される() {
        let context = AwsContext {
            endpoint_url: Some("http://localhost:4566".to_string()),
            ..Default::default()
        };

        assert_eq!(
            context.endpoint_for(AwsService::Comprehend, "us-east-1"),
            "http://localhost:4566"
        );
    }

    #[test]
    fn test_エンドポイント未指定ならサービスの既定を使う() {
        let context = AwsContext::default();

        assert_eq!(
            context.endpoint_for(AwsService::Nimble, "us-west-2"),
            "https://nimble.us-west-2.amazonaws.com"
        );
    }

    #[tokio::test]
    async fn test_同じコンテキストの設定は再利用される() {
        let cache = ClientCache::new();
        let context = AwsContext {
            region:       Some("us-east-1".to_string()),
            profile:      None,
            endpoint_url: Some("http://localhost:4566".to_string()),
        };

        cache.sdk_config(&context).await.unwrap();
        cache.sdk_config(&context).await.unwrap();

        assert_eq!(cache.loaded_count().await, 1);
    }

    #[tokio::test]
    async fn test_異なるコンテキストは別々に読み込まれる() {
        let cache = ClientCache::new();
        let east = AwsContext {
            region: Some("us-east-1".to_string()),
            ..Default::default()
        };
        let west = AwsContext {
            region: Some("us-west-2".to_string()),
            ..Default::default()
        };

        let east_config = cache.sdk_config(&east).await.unwrap();
        let west_config = cache.sdk_config(&west).await.unwrap();

        assert_eq!(cache.loaded_count().await, 2);
        assert_eq!(east_config.region().map(|r| r.as_ref()), Some("us-east-1"));
        assert_eq!(west_config.region().map(|r| r.as_ref()), Some("us-west-2"));
    }
}
