//! # パイプライン入力
//!
//! 各コマンドはパイプライン入力を受け取るパラメータを 1 つ持つ（`Text`、`JobId`、`StudioId` など）。
//! そのパラメータがコマンドラインで指定されず、stdin が端末でない場合に限り、
//! stdin の内容（前後の空白を除く）を束縛する。

use std::io::{self, IsTerminal, Read};

use crate::error::CliError;

/// 未指定のパイプラインパラメータを stdin から埋める
pub fn fill_from_stdin(slot: &mut Option<String>) -> Result<(), CliError> {
    let stdin = io::stdin();
    let is_terminal = stdin.is_terminal();
    fill(slot, stdin.lock(), is_terminal)
}

/// 未指定のパイプラインパラメータを `reader` から埋める
///
/// 指定済み、または入力が端末の場合は何も読まない。空の入力は未指定のまま残す。
pub fn fill(
    slot: &mut Option<String>,
    mut reader: impl Read,
    is_terminal: bool,
) -> Result<(), CliError> {
    if slot.is_some() || is_terminal {
        return Ok(());
    }

    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;

    let value = buf.trim();
    if !value.is_empty() {
        tracing::debug!(bytes = value.len(), "パイプライン入力を束縛しました");
        *slot = Some(value.to_string());
    }
    Ok(())
}
