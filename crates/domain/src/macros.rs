/// AWS のワイヤートークンを持つ列挙型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - 列挙型（`strum` による `FromStr` / `Display` / `IntoStaticStr` / `VariantNames`）
/// - `as_str()`: ワイヤートークンへの参照
/// - `Serialize` impl（ワイヤートークンの文字列として出力）
///
/// パースは ASCII の大文字小文字を区別しない（`in_progress` も `IN_PROGRESS` として受け付ける）。
///
/// # 使用例
///
/// ```rust
/// use std::str::FromStr;
///
/// use awsctl_domain::comprehend::JobStatus;
///
/// let status = JobStatus::from_str("in_progress").unwrap();
/// assert_eq!(status, JobStatus::InProgress);
/// assert_eq!(status.as_str(), "IN_PROGRESS");
/// ```
macro_rules! define_token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $Name:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            strum::EnumString, strum::Display, strum::IntoStaticStr, strum::VariantNames,
        )]
        #[strum(ascii_case_insensitive)]
        $vis enum $Name {
            $(
                $(#[$vmeta])*
                #[strum(serialize = $token)]
                $Variant,
            )+
        }

        impl $Name {
            /// ワイヤートークンを取得する
            pub fn as_str(&self) -> &'static str {
                self.into()
            }
        }

        impl serde::Serialize for $Name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

/// バリデーション付き識別子 Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: trim + 空チェック + 最大長チェック
/// - `as_str()`: 文字列参照
/// - `into_string()`: 所有権を持つ文字列に変換
/// - `Display` impl
///
/// # 引数
///
/// - `parameter`: エラーメッセージに使うパラメータ名（例: `"JobId"`）
/// - `max_length`: 最大文字数（`chars().count()` でカウント）
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use awsctl_domain::value_objects::JobId;
///
/// let id = JobId::new("  0123456789abcdef  ")?;
/// assert_eq!(id.as_str(), "0123456789abcdef");
/// assert!(JobId::new("").is_err());
/// # Ok(())
/// # }
/// ```
macro_rules! define_identifier {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            parameter: $parameter:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize,
        )]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into().trim().to_string();

                if value.is_empty() {
                    return Err($crate::DomainError::invalid_value(
                        $parameter,
                        "空文字は指定できません",
                    ));
                }

                if value.chars().count() > $max_length {
                    return Err($crate::DomainError::invalid_value(
                        $parameter,
                        format!("{} 文字以内である必要があります", $max_length),
                    ));
                }

                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
