//! 射影結果の stdout への書き出し

use std::io::Write;

use awsctl_domain::projection::Output;

use crate::error::CliError;

/// 射影結果を整形済み JSON として書き出す（出力なしの場合は何も書かない）
pub fn write_output(out: &mut impl Write, output: &Output) -> Result<(), CliError> {
    match output {
        Output::Nothing => Ok(()),
        Output::Value(value) => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
            out.flush()?;
            Ok(())
        }
    }
}
