//! # Canonical Log Line
//!
//! コマンド完了時に、その呼び出しの重要情報を 1 行に集約した
//! サマリログ（Canonical Log Line）を出力する。
//!
//! Stripe が提唱した [Canonical Log Lines パターン](https://brandur.org/canonical-log-lines)
//! に基づき、ログの検索性・集計性を向上させる。
//!
//! ## 出力フィールド
//!
//! - `log.type = "canonical"`: マーカー
//! - `invocation.service` / `invocation.operation`: 呼び出した操作
//! - `invocation.pages`: リモート呼び出しの回数
//! - `invocation.items`: 一覧操作で保持したアイテム数
//! - `invocation.latency_ms`: コマンド開始からの経過時間
//! - `invocation.exit_code`: 失敗時のみ
//! - `error.category` / `error.kind`: 失敗時のみ（[`crate::event_log::error`] の定数）

use std::{fmt, time::Instant};

/// 1 コマンド分の Canonical Log Line
///
/// [`start`](Self::start) で計測を開始し、[`succeed`](Self::succeed) または
/// [`fail`](Self::fail) で 1 行出力する。
#[derive(Debug)]
pub struct CanonicalLogLine {
    service:   &'static str,
    operation: &'static str,
    started:   Instant,
    pages:     usize,
    items:     Option<usize>,
}

impl CanonicalLogLine {
    /// 計測を開始する
    pub fn start(service: &'static str, operation: &'static str) -> Self {
        Self {
            service,
            operation,
            started: Instant::now(),
            pages: 0,
            items: None,
        }
    }

    /// リモート呼び出し 1 回分を記録する
    ///
    /// 一覧操作では保持したアイテム数を `items` に渡す。
    pub fn record_page(&mut self, items: Option<usize>) {
        self.pages += 1;
        if let Some(n) = items {
            *self.items.get_or_insert(0) += n;
        }
    }

    /// これまでに記録した呼び出し回数
    pub fn pages(&self) -> usize {
        self.pages
    }

    fn latency_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// 成功として出力する
    pub fn succeed(self) {
        let latency_ms = self.latency_ms();
        tracing::info!(
            log.r#type = "canonical",
            invocation.service = self.service,
            invocation.operation = self.operation,
            invocation.pages = self.pages as u64,
            invocation.items = self.items.map(|n| n as u64),
            invocation.latency_ms = latency_ms,
            "コマンド完了"
        );
    }

    /// 失敗として出力する
    pub fn fail(
        self,
        error: &dyn fmt::Display,
        category: &'static str,
        kind: &'static str,
        exit_code: i32,
    ) {
        let latency_ms = self.latency_ms();
        tracing::error!(
            log.r#type = "canonical",
            invocation.service = self.service,
            invocation.operation = self.operation,
            invocation.pages = self.pages as u64,
            invocation.latency_ms = latency_ms,
            invocation.exit_code = exit_code,
            error.category = category,
            error.kind = kind,
            error.message = %error,
            "コマンド失敗"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    /// テスト用にログイベントをキャプチャする Layer
    #[derive(Clone)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    #[derive(Debug, Clone)]
    struct CapturedEvent {
        level:   tracing::Level,
        message: String,
        fields:  Vec<(String, String)>,
    }

    impl CapturedEvent {
        fn field(&self, name: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);

            let captured = CapturedEvent {
                level:   *event.metadata().level(),
                message: visitor.message.unwrap_or_default(),
                fields:  visitor.fields,
            };

            self.events.lock().unwrap().push(captured);
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields:  Vec<(String, String)>,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.message = Some(format!("{:?}", value));
            } else {
                self.fields
                    .push((field.name().to_string(), format!("{:?}", value)));
            }
        }

        fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }

        fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                self.message = Some(value.to_string());
            } else {
                self.fields
                    .push((field.name().to_string(), value.to_string()));
            }
        }
    }

    /// テスト用にキャプチャ subscriber をセットアップする
    ///
    /// 返り値の `DefaultGuard` はスコープに保持すること（ドロップでリセット）。
    fn setup_capture() -> (
        tracing::subscriber::DefaultGuard,
        Arc<Mutex<Vec<CapturedEvent>>>,
    ) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let capture = CaptureLayer {
            events: events.clone(),
        };
        let subscriber = tracing_subscriber::registry().with(capture);
        let guard = tracing::subscriber::set_default(subscriber);
        (guard, events)
    }

    #[test]
    fn test_成功時にcanonical_log_lineがinfoレベルで出力される() {
        let (_guard, events) = setup_capture();

        let mut line = CanonicalLogLine::start("comprehend", "DetectSentiment");
        line.record_page(None);
        line.succeed();

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1, "1つのログイベントが出力されること");
        assert_eq!(captured[0].level, tracing::Level::INFO);
        assert_eq!(captured[0].message, "コマンド完了");
        assert_eq!(captured[0].field("log.type"), Some("canonical"));
        assert_eq!(captured[0].field("invocation.operation"), Some("DetectSentiment"));
        assert_eq!(captured[0].field("invocation.pages"), Some("1"));
        assert_eq!(captured[0].field("invocation.items"), None);
    }

    #[test]
    fn test_一覧操作ではページ数とアイテム数を集計する() {
        let (_guard, events) = setup_capture();

        let mut line = CanonicalLogLine::start("comprehend", "ListEntitiesDetectionJobs");
        line.record_page(Some(50));
        line.record_page(Some(50));
        line.record_page(Some(20));
        assert_eq!(line.pages(), 3);
        line.succeed();

        let captured = events.lock().unwrap();
        assert_eq!(captured[0].field("invocation.pages"), Some("3"));
        assert_eq!(captured[0].field("invocation.items"), Some("120"));
        assert!(captured[0].field("invocation.latency_ms").is_some());
    }

    #[test]
    fn test_失敗時にerrorレベルで終了コードとともに出力される() {
        let (_guard, events) = setup_capture();

        let line = CanonicalLogLine::start("nimble", "GetStudio");
        line.fail(
            &"Studio not found",
            crate::event_log::error::category::EXTERNAL_SERVICE,
            crate::event_log::error::kind::SERVICE,
            1,
        );

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].level, tracing::Level::ERROR);
        assert_eq!(captured[0].message, "コマンド失敗");
        assert_eq!(captured[0].field("invocation.exit_code"), Some("1"));
        assert_eq!(captured[0].field("error.kind"), Some("service"));
        assert_eq!(captured[0].field("error.message"), Some("Studio not found"));
    }
}
