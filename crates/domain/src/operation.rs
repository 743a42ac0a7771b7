//! # 操作の汎用アダプタ
//!
//! 1 つのリモート API 操作を、リクエスト形状・レスポンス形状・既定の射影の組として宣言する。
//!
//! 操作ごとに手順を複製せず、束縛 → リクエスト構築 → 呼び出し → 射影の流れは
//! 呼び出し側（CLI のユースケース層）で一度だけ実装する。各操作はこのトレイトで
//! 自身の形状と対応付けだけを提供する。

use std::fmt;

use serde::Serialize;

use crate::{
    DomainError,
    pagination::PageRequest,
    projection::DefaultOutput,
};

/// 呼び出し先の AWS サービス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum AwsService {
    #[strum(serialize = "comprehend")]
    Comprehend,
    #[strum(serialize = "nimble")]
    Nimble,
}

impl AwsService {
    /// エンドポイントのホスト名プレフィックス
    pub fn endpoint_prefix(self) -> &'static str {
        self.into()
    }

    /// 既定のエンドポイント URL を組み立てる
    pub fn default_endpoint(self, region: &str) -> String {
        format!("https://{}.{}.amazonaws.com", self.endpoint_prefix(), region)
    }
}

/// 単一のリモート API 操作
///
/// 型そのものは値を持たない（`pub struct DetectSentiment;` のような単位構造体）。
pub trait Operation {
    /// 呼び出し先サービス
    const SERVICE: AwsService;

    /// API 操作名（例: `DetectSentiment`）
    const NAME: &'static str;

    /// 選択子が省略されたときの出力
    const DEFAULT_OUTPUT: DefaultOutput;

    /// リソースを変更する操作か（確認プロンプトの対象）
    const MUTATING: bool = false;

    /// 束縛済みパラメータ
    ///
    /// `^Name` 選択子で参照できるよう、AWS のパラメータ名でシリアライズする。
    type Params: Serialize + fmt::Debug + Send + Sync;

    /// リモート操作のリクエスト
    type Request: fmt::Debug + Clone + Send + Sync + 'static;

    /// リモート操作のレスポンス
    type Response: Serialize + fmt::Debug + Send + 'static;

    /// 束縛済みパラメータからリクエストを構築する
    ///
    /// 必須パラメータの欠落はここで [`DomainError::MissingParameter`] として報告する。
    fn build_request(params: &Self::Params) -> Result<Self::Request, DomainError>;

    /// 確認プロンプトに表示する操作対象
    fn target(_params: &Self::Params) -> String {
        Self::NAME.to_string()
    }
}

/// 継続カーソルでページングする一覧操作
pub trait PaginatedOperation: Operation {
    /// ページサイズの上限（ページサイズを指定できない操作は `None`）
    const MAX_PAGE_SIZE: Option<i32>;

    /// リクエストにカーソルとページサイズを設定する
    fn apply_page(request: &mut Self::Request, page: &PageRequest);

    /// レスポンスに含まれるアイテム数
    fn item_count(response: &Self::Response) -> usize;

    /// レスポンスの次カーソル
    fn next_token(response: &Self::Response) -> Option<&str>;

    /// アイテムを先頭から `len` 件に切り詰める
    fn truncate_items(response: &mut Self::Response, len: usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_既定のエンドポイントを組み立てる() {
        assert_eq!(
            AwsService::Comprehend.default_endpoint("us-east-1"),
            "https://comprehend.us-east-1.amazonaws.com"
        );
        assert_eq!(
            AwsService::Nimble.default_endpoint("eu-west-2"),
            "https://nimble.eu-west-2.amazonaws.com"
        );
    }

    #[test]
    fn test_サービス名はエンドポイントプレフィックスと一致する() {
        assert_eq!(AwsService::Comprehend.to_string(), "comprehend");
        assert_eq!(AwsService::Nimble.endpoint_prefix(), "nimble");
    }
}
