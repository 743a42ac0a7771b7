//! # レスポンス射影
//!
//! レスポンス（またはパラメータ）のうち、コマンドの出力とする部分を選択する。
//!
//! ## 選択子
//!
//! | 表記 | バリアント | 出力 |
//! |------|-----------|------|
//! | （省略） | [`Selector::Default`] | 操作ごとの既定（[`DefaultOutput`]） |
//! | `*` | [`Selector::Response`] | レスポンス全体 |
//! | `Name` | [`Selector::Field`] | レスポンスの指定フィールド |
//! | `^Name` | [`Selector::Parameter`] | 指定パラメータの値（パススルー） |
//!
//! 射影は純粋関数であり、データの変換は行わない。

use std::str::FromStr;

use serde_json::Value;

use crate::DomainError;

/// 出力対象の選択子
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// 操作ごとの既定
    #[default]
    Default,
    /// レスポンス全体
    Response,
    /// レスポンスの指定フィールド
    Field(String),
    /// 指定パラメータの値
    Parameter(String),
}

impl FromStr for Selector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(DomainError::invalid_value("Select", "空の選択子は指定できません")),
            "*" => Ok(Self::Response),
            _ => match s.strip_prefix('^') {
                Some("") => Err(DomainError::invalid_value(
                    "Select",
                    "'^' の後にパラメータ名が必要です",
                )),
                Some(name) => Ok(Self::Parameter(name.to_string())),
                None => Ok(Self::Field(s.to_string())),
            },
        }
    }
}

/// 操作ごとの既定の出力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultOutput {
    /// レスポンスの指定フィールド
    Field(&'static str),
    /// レスポンス全体
    Response,
    /// 出力なし（戻り値のない変更操作）
    Nothing,
}

/// コマンドの出力
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Value(Value),
    Nothing,
}

/// レスポンスを射影する
///
/// `response` と `params` はそれぞれレスポンスとパラメータを JSON 化したもの。
/// 同じ入力に対して常に同じ出力を返し、選択子が指定した部分以外を含めない。
pub fn project(
    selector: &Selector,
    default: DefaultOutput,
    response: &Value,
    params: &Value,
) -> Result<Output, DomainError> {
    match selector {
        Selector::Default => match default {
            DefaultOutput::Field(name) => field(response, name, "レスポンス").map(Output::Value),
            DefaultOutput::Response => Ok(Output::Value(response.clone())),
            DefaultOutput::Nothing => Ok(Output::Nothing),
        },
        Selector::Response => Ok(Output::Value(response.clone())),
        Selector::Field(name) => field(response, name, "レスポンス").map(Output::Value),
        Selector::Parameter(name) => field(params, name, "パラメータ").map(Output::Value),
    }
}

/// パラメータ選択子を入力だけで解決する
///
/// `^Name` 以外の選択子には `None` を返す。レスポンスを必要としないため、
/// リモート呼び出しより前に存在しないパラメータ名を報告できる。
pub fn project_parameter(
    selector: &Selector,
    params: &Value,
) -> Result<Option<Output>, DomainError> {
    let Selector::Parameter(name) = selector else {
        return Ok(None);
    };
    field(params, name, "パラメータ").map(|value| Some(Output::Value(value)))
}

fn field(value: &Value, name: &str, scope: &'static str) -> Result<Value, DomainError> {
    value
        .get(name)
        .cloned()
        .ok_or_else(|| DomainError::UnknownSelector {
            name: name.to_string(),
            scope,
        })
}

/// ページごとの射影結果を 1 つの出力にまとめる
///
/// 配列は連結し、スカラー値は要素として追加し、null は読み飛ばす。
/// すべてのページが [`Output::Nothing`] の場合は `Nothing` を返す。
pub fn merge_pages(pages: impl IntoIterator<Item = Output>) -> Output {
    let mut merged = Vec::new();
    let mut any = false;

    for page in pages {
        let Output::Value(value) = page else {
            continue;
        };
        any = true;
        match value {
            Value::Null => {}
            Value::Array(items) => merged.extend(items),
            other => merged.push(other),
        }
    }

    if any {
        Output::Value(Value::Array(merged))
    } else {
        Output::Nothing
    }
}
