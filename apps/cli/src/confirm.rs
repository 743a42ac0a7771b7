//! # 変更操作の確認
//!
//! リソースを変更する操作の前に、stderr へ確認プロンプトを出して stdin から応答を読む。
//! `--force` が指定された場合は確認しない。
//!
//! パイプライン入力で stdin を消費した場合、プロンプトは EOF を読んで拒否扱いになる。
//! パイプラインで変更操作を流すときは `--force` を併用する。

use std::io::{self, BufRead, Stderr, StdinLock, Write};

use crate::error::CliError;

/// 変更操作の実行可否を判断する
pub trait Confirm {
    /// `operation` を `target` に対して実行してよいか
    fn confirm(&mut self, operation: &str, target: &str) -> Result<bool, CliError>;
}

/// 常に承諾する（`--force`）
#[derive(Debug, Clone, Copy, Default)]
pub struct Force;

impl Confirm for Force {
    fn confirm(&mut self, _operation: &str, _target: &str) -> Result<bool, CliError> {
        Ok(true)
    }
}

/// 対話的に確認する
///
/// `y` / `yes`（大文字小文字を区別しない）のみを承諾とみなす。
#[derive(Debug)]
pub struct Prompt<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Prompt<StdinLock<'static>, Stderr> {
    /// stdin / stderr を使うプロンプト
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, operation: &str, target: &str) -> Result<bool, CliError> {
        write!(
            self.output,
            "{operation} を '{target}' に対して実行します。Continue? [y/N] "
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("y\n", true)]
    #[case("YES\n", true)]
    #[case("  yes  \n", true)]
    #[case("n\n", false)]
    #[case("\n", false)]
    #[case("", false)]
    #[case("yep\n", false)]
    fn test_応答に応じて承諾を判定する(#[case] answer: &str, #[case] expected: bool) {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new(answer), &mut output);

        let confirmed = prompt.confirm("DeleteStudio", "st-123").unwrap();

        assert_eq!(confirmed, expected);
    }

    #[test]
    fn test_プロンプトに操作名と対象を表示する() {
        let mut output = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("n\n"), &mut output);

        prompt.confirm("StopEntitiesDetectionJob", "job-1").unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert_eq!(
            shown,
            "StopEntitiesDetectionJob を 'job-1' に対して実行します。Continue? [y/N] "
        );
    }

    #[test]
    fn test_forceは常に承諾する() {
        assert!(Force.confirm("DeleteStudio", "st-123").unwrap());
    }
}
