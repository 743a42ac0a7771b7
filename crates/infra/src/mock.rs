//! # テスト用モック
//!
//! ユースケーステストで使用する、応答をあらかじめ積んでおく [`Invoke`] 実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! awsctl-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use awsctl_domain::operation::Operation;

use crate::{InfraError, invoke::Invoke};

// ===== MockInvoker =====

/// 積まれた応答を順に返し、受け取ったリクエストを記録するモック
pub struct MockInvoker<Op: Operation> {
    responses: Arc<Mutex<VecDeque<Result<Op::Response, InfraError>>>>,
    requests:  Arc<Mutex<Vec<Op::Request>>>,
}

impl<Op: Operation> Clone for MockInvoker<Op> {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            requests:  Arc::clone(&self.requests),
        }
    }
}

impl<Op: Operation> Default for MockInvoker<Op> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<Op: Operation> MockInvoker<Op> {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests:  Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 成功応答を積む
    pub fn push_response(&self, response: Op::Response) -> &Self {
        lock(&self.responses).push_back(Ok(response));
        self
    }

    /// エラー応答を積む
    pub fn push_error(&self, error: InfraError) -> &Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// これまでに受け取ったリクエスト
    pub fn requests(&self) -> Vec<Op::Request> {
        lock(&self.requests).clone()
    }

    /// 呼び出し回数
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl<Op: Operation> Invoke<Op> for MockInvoker<Op> {
    async fn invoke(&self, request: Op::Request) -> Result<Op::Response, InfraError> {
        lock(&self.requests).push(request);
        lock(&self.responses).pop_front().unwrap_or_else(|| {
            Err(InfraError::unexpected(format!(
                "{} の応答が積まれていません",
                Op::NAME
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use awsctl_domain::comprehend::{
        DetectDominantLanguage,
        DetectDominantLanguageRequest,
        DetectDominantLanguageResponse,
    };

    use super::*;

    #[tokio::test]
    async fn test_積んだ応答を順に返しリクエストを記録する() {
        let mock = MockInvoker::<DetectDominantLanguage>::new();
        mock.push_response(DetectDominantLanguageResponse::default());

        let request = DetectDominantLanguageRequest {
            text: "hola".to_string(),
        };
        let first = mock.invoke(request.clone()).await;
        let second = mock.invoke(request.clone()).await;

        assert!(first.is_ok());
        assert!(second.is_err());
        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.requests()[0], request);
    }
}
