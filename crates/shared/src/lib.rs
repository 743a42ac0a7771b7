//! # awsctl 共有ユーティリティ
//!
//! このクレートは、awsctl 全体で使用されるログ・トレーシングの共通基盤を提供する。
//!
//! ## 設計方針
//!
//! - 他のクレート（infra, cli）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - subscriber の初期化は `observability` feature でのみ有効化する

pub mod canonical_log;
pub mod event_log;
pub mod observability;

pub use canonical_log::CanonicalLogLine;
