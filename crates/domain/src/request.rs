//! # リクエスト構築
//!
//! 束縛済みパラメータからリクエスト値を組み立てる際の、
//! ネストしたグループフィールドの null 抑制を提供する。
//!
//! ## 不変条件
//!
//! 複合フィールドは、その葉フィールドが 1 つ以上指定された場合に限り存在する。
//! 葉がすべて未指定のグループは空のオブジェクトとして送らず、フィールドごと省略する。
//!
//! ## 使用例
//!
//! ```rust
//! use awsctl_domain::request::FieldGroup;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct OutputConfig {
//!     s3_uri:     Option<String>,
//!     kms_key_id: Option<String>,
//! }
//!
//! let mut group = FieldGroup::<OutputConfig>::new();
//! group
//!     .set(None::<String>, |c, v| c.s3_uri = Some(v))
//!     .set(None::<String>, |c, v| c.kms_key_id = Some(v));
//! assert_eq!(group.finish(), None);
//! ```

use crate::DomainError;

/// 遅延構築される複合フィールド
///
/// 子フィールドを先に設定し、実際に値が設定されたかどうかで
/// 親ノードを付与するか省略するかを決める。
#[derive(Debug, Default)]
pub struct FieldGroup<T> {
    value:   T,
    touched: bool,
}

impl<T: Default> FieldGroup<T> {
    /// 空のグループを作成する
    pub fn new() -> Self {
        Self {
            value:   T::default(),
            touched: false,
        }
    }

    /// 指定済みの値だけをグループに反映する
    ///
    /// `source` が `None` の場合はグループに触れない。空文字や 0 などの
    /// 「空だが指定された」値は `Some` なので反映される。
    ///
    /// ネストしたグループは、子グループの [`finish`](Self::finish) の結果をそのまま渡す。
    pub fn set<V>(&mut self, source: Option<V>, apply: impl FnOnce(&mut T, V)) -> &mut Self {
        if let Some(value) = source {
            apply(&mut self.value, value);
            self.touched = true;
        }
        self
    }

    /// 子グループを確定してこのグループに反映する
    ///
    /// 子グループの葉が 1 つも設定されていなければ、このグループにも触れない。
    pub fn set_group<C: Default>(
        &mut self,
        child: FieldGroup<C>,
        apply: impl FnOnce(&mut T, C),
    ) -> &mut Self {
        self.set(child.finish(), apply)
    }

    /// 1 つ以上の葉フィールドが設定されたか
    pub fn is_set(&self) -> bool {
        self.touched
    }

    /// グループを確定する
    ///
    /// 葉フィールドが 1 つも設定されていなければ `None` を返す。
    pub fn finish(self) -> Option<T> {
        self.touched.then_some(self.value)
    }

    /// グループを確定し、存在する場合に限り必須メンバーを検証・変換する
    ///
    /// グループ自体が省略された場合は検証を行わない。
    pub fn finish_with<U>(
        self,
        validate: impl FnOnce(T) -> Result<U, DomainError>,
    ) -> Result<Option<U>, DomainError> {
        self.finish().map(validate).transpose()
    }
}
