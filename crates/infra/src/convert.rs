//! SDK 型とドメイン型の変換

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

/// SDK の日時をドメインの日時に変換する
pub(crate) fn to_utc(value: &aws_smithy_types::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(value.secs(), value.subsec_nanos())
}

/// ドメインの日時を SDK の日時に変換する
pub(crate) fn to_smithy(value: &DateTime<Utc>) -> aws_smithy_types::DateTime {
    aws_smithy_types::DateTime::from_millis(value.timestamp_millis())
}

/// 任意の `&str` を所有する文字列にする
pub(crate) fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// タグマップをキー順のマップにする
pub(crate) fn sorted_tags(tags: Option<&HashMap<String, String>>) -> Option<BTreeMap<String, String>> {
    tags.map(|tags| {
        tags.iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    })
}
