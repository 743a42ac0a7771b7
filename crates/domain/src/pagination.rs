//! # ページネーション再生
//!
//! サーバーが発行する継続カーソル（`NextToken`）を辿って一覧操作を繰り返し呼び出す
//! 状態機械を提供する。I/O は持たず、次に送るリクエストと受信結果の記録だけを扱う。
//!
//! ## 状態遷移
//!
//! ```text
//! Start ──▶ Fetching ──┬──▶ Continue ──▶ Fetching ...
//!                      └──▶ Done
//! ```
//!
//! - **Start**: 呼び出し元のカーソルと取得上限で初期化する
//! - **Fetching**: ページサイズを `min(サーバー上限, 残り件数)` に設定して 1 回呼び出す
//! - **Continue**: 次カーソルが空でなく、上限未達で、ページが空でなく、
//!   カーソルが直前に送ったものと異なる場合
//! - **Done**: それ以外
//!
//! 件数 0 かつカーソルありの応答や、同じカーソルを返し続ける応答でも必ず終了する。

use crate::DomainError;

/// 再生の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    Start,
    Fetching,
    Continue,
    Done,
}

/// 呼び出し元が指定する開始条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStart {
    /// 開始カーソル
    pub token:     Option<String>,
    /// 取得件数の上限
    pub max_items: Option<usize>,
}

impl PageStart {
    /// 開始条件を作成する
    ///
    /// 空文字のカーソルは未指定として扱う。上限 0 は不正値とする。
    pub fn new(token: Option<String>, max_items: Option<u32>) -> Result<Self, DomainError> {
        if max_items == Some(0) {
            return Err(DomainError::invalid_value(
                "MaxResults",
                "1 以上である必要があります",
            ));
        }

        Ok(Self {
            token:     token.filter(|t| !t.is_empty()),
            max_items: max_items.map(|n| n as usize),
        })
    }
}

/// 1 回の呼び出しに設定するカーソルとページサイズ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub token:     Option<String>,
    /// `None` の場合はサーバーの既定ページサイズを使う
    pub page_size: Option<i32>,
}

/// カーソル再生の状態機械
///
/// # 使用例
///
/// ```rust
/// use awsctl_domain::pagination::{PageStart, ReplayState, Replayer};
///
/// let start = PageStart::new(None, Some(120)).unwrap();
/// let mut replayer = Replayer::new(start, Some(50));
///
/// let mut sizes = Vec::new();
/// let mut n = 0;
/// while let Some(page) = replayer.next_request() {
///     let size = page.page_size.unwrap() as usize;
///     sizes.push(size);
///     n += 1;
///     replayer.record(size, Some(format!("t{n}").as_str()));
/// }
/// assert_eq!(sizes, vec![50, 50, 20]);
/// assert_eq!(replayer.state(), ReplayState::Done);
/// ```
#[derive(Debug, Clone)]
pub struct Replayer {
    state:         ReplayState,
    cursor:        Option<String>,
    retrieved:     usize,
    budget:        Option<usize>,
    max_page_size: Option<i32>,
    single_page:   bool,
    pages:         usize,
}

impl Replayer {
    /// 再生を開始する
    ///
    /// `max_page_size` は操作がページサイズ指定に対応する場合のサーバー上限。
    /// ページサイズ指定のない操作では `None` を渡す。
    pub fn new(start: PageStart, max_page_size: Option<i32>) -> Self {
        Self {
            state: ReplayState::Start,
            cursor: start.token,
            retrieved: 0,
            budget: start.max_items,
            max_page_size,
            single_page: false,
            pages: 0,
        }
    }

    /// 1 ページだけ取得するモードにする
    ///
    /// 上限件数はページサイズとして扱い、次カーソルの有無にかかわらず 1 回で終了する。
    pub fn single_page(mut self) -> Self {
        self.single_page = true;
        self
    }

    /// 次に送るリクエストを取得する
    ///
    /// 終了済み（または上限到達済み）の場合は `None` を返す。
    pub fn next_request(&mut self) -> Option<PageRequest> {
        match self.state {
            ReplayState::Done | ReplayState::Fetching => return None,
            ReplayState::Start | ReplayState::Continue => {}
        }

        if self.remaining() == Some(0) {
            self.state = ReplayState::Done;
            return None;
        }

        self.state = ReplayState::Fetching;

        let page_size = match (self.remaining(), self.max_page_size) {
            (Some(remaining), Some(max)) => Some(max.min(clamp_to_i32(remaining))),
            _ => None,
        };

        Some(PageRequest {
            token: self.cursor.clone(),
            page_size,
        })
    }

    /// 受信したページを記録し、保持すべき件数を返す
    ///
    /// ページサイズを指定できない操作では、上限を超えた分を呼び出し元で切り捨てる。
    /// 戻り値はそのための件数で、`received` を超えることはない。
    pub fn record(&mut self, received: usize, next_token: Option<&str>) -> usize {
        debug_assert_eq!(self.state, ReplayState::Fetching);

        let keep = match self.remaining() {
            Some(remaining) => received.min(remaining),
            None => received,
        };
        self.retrieved += keep;
        self.pages += 1;

        let next = next_token.filter(|t| !t.is_empty());
        let budget_met = self.remaining() == Some(0);
        let repeated = next.is_some() && next == self.cursor.as_deref();

        self.state = match next {
            Some(_) if self.single_page || budget_met || received == 0 || repeated => {
                ReplayState::Done
            }
            Some(_) => ReplayState::Continue,
            None => ReplayState::Done,
        };
        self.cursor = next.map(str::to_string);

        keep
    }

    /// 現在の状態
    pub fn state(&self) -> ReplayState {
        self.state
    }

    /// 上限までの残り件数（上限なしの場合は `None`）
    pub fn remaining(&self) -> Option<usize> {
        self.budget.map(|b| b.saturating_sub(self.retrieved))
    }

    /// これまでに保持した件数
    pub fn retrieved(&self) -> usize {
        self.retrieved
    }

    /// これまでに取得したページ数
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// 最後に受信した次カーソル
    ///
    /// 上限到達や 1 ページモードで終了した場合、続きを取得するために使える。
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}

fn clamp_to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
