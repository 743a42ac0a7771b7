//! 各コマンドに共通するオプション

use awsctl_domain::projection::Selector;
use clap::Args;

use crate::{
    confirm::{Confirm, Force, Prompt},
    usecase::Paging,
};

/// 出力の選択
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// 出力する値（`*` でレスポンス全体、`Name` でフィールド、`^Name` で入力パラメータ）
    #[arg(long, value_name = "SELECTOR")]
    pub select: Option<Selector>,
}

impl OutputArgs {
    pub fn selector(&self) -> Selector {
        self.select.clone().unwrap_or_default()
    }
}

/// 一覧操作のページング
#[derive(Debug, Clone, Default, Args)]
pub struct PagingArgs {
    /// 前回の呼び出しで返された継続カーソル
    #[arg(long, value_name = "TOKEN")]
    pub next_token: Option<String>,

    /// 取得するアイテム数の上限
    #[arg(long, value_name = "COUNT")]
    pub max_results: Option<u32>,

    /// 自動でページを辿らず 1 回だけ呼び出す
    #[arg(long)]
    pub no_auto_iteration: bool,
}

impl PagingArgs {
    pub fn paging(&self) -> Paging {
        Paging {
            next_token:        self.next_token.clone(),
            max_results:       self.max_results,
            no_auto_iteration: self.no_auto_iteration,
        }
    }
}

/// 変更操作の確認
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ForceArgs {
    /// 確認プロンプトを出さずに実行する
    #[arg(long, short)]
    pub force: bool,
}

impl ForceArgs {
    pub fn confirmer(self) -> Box<dyn Confirm> {
        if self.force {
            Box::new(Force)
        } else {
            Box::new(Prompt::stdio())
        }
    }
}

/// 空のリストを未指定として扱う
pub fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
