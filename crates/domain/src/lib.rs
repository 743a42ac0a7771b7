//! # awsctl ドメイン層
//!
//! AWS API 操作を 1 コマンド 1 呼び出しでラップするための汎用アダプタと、
//! 各サービス（Comprehend / Nimble Studio）の操作モデルを定義する。
//!
//! ## 設計方針
//!
//! 操作ごとに同じ手順（パラメータ束縛 → リクエスト構築 → 呼び出し → 射影）を
//! 繰り返し書くのではなく、[`operation::Operation`] トレイトで形状だけを宣言し、
//! 手順そのものは一度だけ実装する。
//!
//! - **パラメータ束縛**: [`binding`] - 必須パラメータの検証と診断
//! - **リクエスト構築**: [`request`] - ネストしたグループの null 抑制
//! - **射影**: [`projection`] - 出力対象の選択
//! - **ページネーション**: [`pagination`] - カーソル再生の状態機械
//!
//! ## 依存関係の方向
//!
//! ```text
//! cli → infra → domain
//!   ↘           ↗
//!      shared
//! ```
//!
//! ドメイン層は AWS SDK にも I/O にも依存しない。SDK 型との変換はインフラ層が担う。
//!
//! ## 使用例
//!
//! ```rust
//! use awsctl_domain::{
//!     comprehend::{DetectDominantLanguage, DetectDominantLanguageParams},
//!     operation::Operation,
//! };
//!
//! let params = DetectDominantLanguageParams {
//!     text: Some("Bonjour tout le monde".to_string()),
//! };
//! let request = DetectDominantLanguage::build_request(&params).unwrap();
//! assert_eq!(request.text, "Bonjour tout le monde");
//! ```

#[macro_use]
mod macros;

pub mod binding;
pub mod comprehend;
pub mod error;
pub mod nimble;
pub mod operation;
pub mod pagination;
pub mod projection;
pub mod request;
pub mod value_objects;

pub use error::DomainError;
