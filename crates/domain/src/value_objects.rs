//! # 共通値オブジェクト
//!
//! 複数の操作で共有されるリソース識別子を定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: 識別子を `String` のまま扱わず、型で取り違えを防ぐ
//! - **束縛時の検証**: 空文字・長さ超過はリモート呼び出し前に束縛エラーとして報告する
//!
//! ## 含まれる型
//!
//! | 型 | 用途 | 最大長 |
//! |---|------|-------|
//! | [`JobId`] | Comprehend 非同期ジョブ ID | 32 |
//! | [`ResourceArn`] | タグ付け対象の ARN | 256 |
//! | [`StudioId`] | Nimble Studio のスタジオ ID | 256 |

define_identifier! {
    /// Comprehend 非同期ジョブ ID
    pub struct JobId {
        parameter: "JobId",
        max_length: 32,
    }
}

define_identifier! {
    /// Comprehend リソースの ARN
    pub struct ResourceArn {
        parameter: "ResourceArn",
        max_length: 256,
    }
}

define_identifier! {
    /// Nimble Studio のスタジオ ID
    pub struct StudioId {
        parameter: "StudioId",
        max_length: 256,
    }
}
