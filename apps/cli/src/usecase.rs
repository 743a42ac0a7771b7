//! # 操作実行ユースケース
//!
//! すべての操作に共通する手順を一度だけ実装する汎用アダプタ。
//!
//! ```text
//! パラメータ → build_request → (確認) → invoke → project → 出力
//! ```
//!
//! ## 設計方針
//!
//! - **束縛が先**: 必須パラメータの欠落・不正値はリモート呼び出しより前に報告する
//! - **1 呼び出し 1 結果**: 途中で失敗した場合は部分的な出力を返さない
//! - **依存性注入**: 呼び出しは [`Invoke`] トレイト経由で行い、テストではモックに差し替える

use awsctl_domain::{
    operation::{Operation, PaginatedOperation},
    pagination::{PageStart, Replayer},
    projection::{Output, Selector, merge_pages, project, project_parameter},
};
use awsctl_infra::Invoke;
use awsctl_shared::{
    CanonicalLogLine,
    event_log::event::{action, result},
    log_invocation_event,
};
use crate::{confirm::Confirm, error::CliError};

/// 一覧操作のページング指定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paging {
    /// 開始カーソル
    pub next_token:        Option<String>,
    /// 取得するアイテム数の上限
    pub max_results:       Option<u32>,
    /// 1 回だけ呼び出す（上限はページサイズとして扱う）
    pub no_auto_iteration: bool,
}

/// 単一呼び出しの操作を実行する
#[tracing::instrument(skip_all, fields(service = %Op::SERVICE, operation = Op::NAME))]
pub async fn execute<Op, C>(
    client: &C,
    params: &Op::Params,
    selector: &Selector,
    confirm: &mut dyn Confirm,
) -> Result<Output, CliError>
where
    Op: Operation,
    C: Invoke<Op> + ?Sized,
{
    let mut line = CanonicalLogLine::start(Op::SERVICE.endpoint_prefix(), Op::NAME);
    let outcome = invoke_once::<Op, C>(client, params, selector, confirm, &mut line).await;
    finish(line, outcome)
}

async fn invoke_once<Op, C>(
    client: &C,
    params: &Op::Params,
    selector: &Selector,
    confirm: &mut dyn Confirm,
    line: &mut CanonicalLogLine,
) -> Result<Output, CliError>
where
    Op: Operation,
    C: Invoke<Op> + ?Sized,
{
    let request = Op::build_request(params)?;
    let params_value = serde_json::to_value(params)?;
    let echoed = project_parameter(selector, &params_value)?;

    confirm_mutation::<Op>(params, confirm)?;

    let response = client.invoke(request).await?;
    line.record_page(None);

    log_invocation_event!(
        event.service = %Op::SERVICE,
        event.operation = Op::NAME,
        event.action = action::COMPLETED,
        event.result = result::SUCCESS,
        "リモート呼び出しが完了しました"
    );

    if let Some(output) = echoed {
        return Ok(output);
    }

    let response_value = serde_json::to_value(&response)?;
    Ok(project(
        selector,
        Op::DEFAULT_OUTPUT,
        &response_value,
        &params_value,
    )?)
}

/// 一覧操作をページを辿りながら実行する
///
/// 各ページを選択子で射影して連結する。`^Name` 選択子の場合は入力を 1 回だけ返す。
#[tracing::instrument(skip_all, fields(service = %Op::SERVICE, operation = Op::NAME))]
pub async fn execute_paginated<Op, C>(
    client: &C,
    params: &Op::Params,
    paging: Paging,
    selector: &Selector,
) -> Result<Output, CliError>
where
    Op: PaginatedOperation,
    C: Invoke<Op> + ?Sized,
{
    let mut line = CanonicalLogLine::start(Op::SERVICE.endpoint_prefix(), Op::NAME);
    let outcome = replay::<Op, C>(client, params, paging, selector, &mut line).await;
    finish(line, outcome)
}

async fn replay<Op, C>(
    client: &C,
    params: &Op::Params,
    paging: Paging,
    selector: &Selector,
    line: &mut CanonicalLogLine,
) -> Result<Output, CliError>
where
    Op: PaginatedOperation,
    C: Invoke<Op> + ?Sized,
{
    let base = Op::build_request(params)?;
    let start = PageStart::new(paging.next_token, paging.max_results)?;
    let params_value = serde_json::to_value(params)?;
    let echoed = project_parameter(selector, &params_value)?;

    let mut replayer = Replayer::new(start, Op::MAX_PAGE_SIZE);
    if paging.no_auto_iteration {
        replayer = replayer.single_page();
    }

    let mut pages = Vec::new();
    let mut truncated = false;

    while let Some(page) = replayer.next_request() {
        let mut request = base.clone();
        Op::apply_page(&mut request, &page);

        let mut response = client.invoke(request).await?;

        let received = Op::item_count(&response);
        let keep = replayer.record(received, Op::next_token(&response));
        if keep < received {
            Op::truncate_items(&mut response, keep);
            truncated = true;
        }
        line.record_page(Some(keep));

        log_invocation_event!(
            event.service = %Op::SERVICE,
            event.operation = Op::NAME,
            event.action = action::PAGE_FETCHED,
            event.result = result::SUCCESS,
            page.number = replayer.pages() as u64,
            page.items = keep as u64,
            "ページを取得しました"
        );

        pages.push(response);
    }

    if let Some(cursor) = replayer.cursor().filter(|_| !truncated) {
        tracing::info!(next_token = cursor, "続きは --next-token で取得できます");
    }

    if let Some(output) = echoed {
        return Ok(output);
    }

    let mut projected = Vec::with_capacity(pages.len());
    for response in &pages {
        let response_value = serde_json::to_value(response)?;
        projected.push(project(
            selector,
            Op::DEFAULT_OUTPUT,
            &response_value,
            &params_value,
        )?);
    }
    Ok(merge_pages(projected))
}

/// 変更操作であれば実行可否を確認する
fn confirm_mutation<Op: Operation>(
    params: &Op::Params,
    confirm: &mut dyn Confirm,
) -> Result<(), CliError> {
    if !Op::MUTATING {
        return Ok(());
    }

    let target = Op::target(params);
    if confirm.confirm(Op::NAME, &target)? {
        log_invocation_event!(
            event.service = %Op::SERVICE,
            event.operation = Op::NAME,
            event.action = action::CONFIRMED,
            event.result = result::SUCCESS,
            event.target = %target,
            "変更操作が承諾されました"
        );
        Ok(())
    } else {
        log_invocation_event!(
            event.service = %Op::SERVICE,
            event.operation = Op::NAME,
            event.action = action::DECLINED,
            event.result = result::SKIPPED,
            event.target = %target,
            "変更操作が拒否されました"
        );
        Err(CliError::Declined {
            operation: Op::NAME,
            target,
        })
    }
}

fn finish(line: CanonicalLogLine, outcome: Result<Output, CliError>) -> Result<Output, CliError> {
    match &outcome {
        Ok(_) => line.succeed(),
        Err(e) => line.fail(e, e.category(), e.kind(), i32::from(e.exit_code())),
    }
    outcome
}
