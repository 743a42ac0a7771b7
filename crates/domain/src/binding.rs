//! # パラメータ束縛
//!
//! 外部から渡された名前付き引数を、操作ごとの型付きパラメータに束縛する際の
//! 共通ヘルパーを提供する。
//!
//! ## 設計方針
//!
//! - **未指定と空の区別**: パラメータは `Option` で保持し、`Some("")` と `None` を区別する
//! - **即時診断**: 必須パラメータの欠落はリモート呼び出しより前に名前付きで報告する
//! - **不変性**: 束縛済みのパラメータは呼び出し完了まで変更しない

use std::str::FromStr;

use serde::Serialize;

use crate::DomainError;

/// 必須パラメータを取り出す
///
/// `None` の場合は、操作名とパラメータ名を含む [`DomainError::MissingParameter`] を返す。
///
/// # 使用例
///
/// ```rust
/// use awsctl_domain::binding::require;
///
/// let text = require("DetectSentiment", "Text", Some("hello".to_string())).unwrap();
/// assert_eq!(text, "hello");
///
/// let missing = require::<String>("DetectSentiment", "Text", None);
/// assert!(missing.is_err());
/// ```
pub fn require<T>(
    operation: &'static str,
    parameter: &'static str,
    value: Option<T>,
) -> Result<T, DomainError> {
    value.ok_or(DomainError::MissingParameter {
        operation,
        parameter,
    })
}

/// 必須のリストパラメータを取り出す
///
/// 未指定に加えて、要素が 1 つもないリストも欠落として扱う。
pub fn require_non_empty<T>(
    operation: &'static str,
    parameter: &'static str,
    value: Option<Vec<T>>,
) -> Result<Vec<T>, DomainError> {
    match value {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(DomainError::MissingParameter {
            operation,
            parameter,
        }),
    }
}

/// リソースタグ
///
/// コマンドラインでは `Key=Value` 形式で指定する。`=` がない場合は値なしのタグになる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key:   String,
    pub value: Option<String>,
}

impl FromStr for Tag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = match s.split_once('=') {
            Some((key, value)) => (key.trim(), Some(value.to_string())),
            None => (s.trim(), None),
        };

        if key.is_empty() {
            return Err(DomainError::invalid_value(
                "Tag",
                format!("キーが空です: {s:?}"),
            ));
        }

        Ok(Self {
            key: key.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_requireは値があればそのまま返す() {
        assert_eq!(require("Op", "Name", Some(0)).unwrap(), 0);
    }

    #[test]
    fn test_requireは空文字を指定済みとして扱う() {
        assert_eq!(require("Op", "Name", Some(String::new())).unwrap(), "");
    }

    #[test]
    fn test_requireは欠落したパラメータ名を報告する() {
        let err = require::<String>("GetStudio", "StudioId", None).unwrap_err();

        assert!(matches!(
            err,
            DomainError::MissingParameter {
                operation: "GetStudio",
                parameter: "StudioId",
            }
        ));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(vec![]))]
    fn test_require_non_emptyは空リストを欠落として扱う(#[case] value: Option<Vec<String>>) {
        let err = require_non_empty("TagResource", "Tag", value).unwrap_err();
        assert!(matches!(err, DomainError::MissingParameter { parameter: "Tag", .. }));
    }

    #[rstest]
    #[case("team=nlp", "team", Some("nlp"))]
    #[case("team=", "team", Some(""))]
    #[case("team", "team", None)]
    #[case("url=https://a=b", "url", Some("https://a=b"))]
    fn test_tagをパースする(
        #[case] input: &str,
        #[case] key: &str,
        #[case] value: Option<&str>,
    ) {
        let tag: Tag = input.parse().unwrap();

        assert_eq!(
            tag,
            Tag {
                key:   key.to_string(),
                value: value.map(str::to_string),
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("=value")]
    #[case("  =value")]
    fn test_キーが空のtagは不正値になる(#[case] input: &str) {
        assert!(input.parse::<Tag>().is_err());
    }
}
