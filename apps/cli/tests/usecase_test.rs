//! 汎用アダプタ（usecase）の統合テスト
//!
//! リモート呼び出しを MockInvoker に差し替え、束縛 → 確認 → 呼び出し → 射影の
//! 流れを端から端まで検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p awsctl-cli --test usecase_test
//! ```

use std::io::Cursor;

use awsctl_cli::{
    CliError,
    confirm::{Force, Prompt},
    usecase::{Paging, execute, execute_paginated},
};
use awsctl_domain::{
    DomainError,
    binding::Tag,
    comprehend::{
        DetectSentiment,
        DetectSentimentParams,
        DetectSentimentResponse,
        EntitiesDetectionJobProperties,
        LanguageCode,
        ListEntitiesDetectionJobs,
        ListEntitiesDetectionJobsParams,
        ListEntitiesDetectionJobsResponse,
        SentimentScore,
        StopEntitiesDetectionJob,
        StopEntitiesDetectionJobParams,
        StopEntitiesDetectionJobResponse,
        TagResource,
        TagResourceParams,
        TagResourceResponse,
    },
    nimble::{ListStudios, ListStudiosParams, ListStudiosResponse, Studio},
    projection::{Output, Selector},
};
use awsctl_infra::{InfraError, mock::MockInvoker};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

// =============================================================================
// ヘルパー
// =============================================================================

fn jobs_page(range: std::ops::Range<usize>, next: Option<&str>) -> ListEntitiesDetectionJobsResponse {
    ListEntitiesDetectionJobsResponse {
        entities_detection_job_properties_list: range
            .map(|n| EntitiesDetectionJobProperties {
                job_id: Some(format!("job-{n}")),
                ..Default::default()
            })
            .collect(),
        next_token: next.map(str::to_string),
    }
}

fn studios_page(count: usize, next: Option<&str>) -> ListStudiosResponse {
    ListStudiosResponse {
        studios:    (0..count)
            .map(|n| Studio {
                studio_id: Some(format!("st-{n}")),
                ..Default::default()
            })
            .collect(),
        next_token: next.map(str::to_string),
    }
}

fn sentiment_params() -> DetectSentimentParams {
    DetectSentimentParams {
        text:          Some("I love this product".to_string()),
        language_code: Some(LanguageCode::En),
    }
}

fn output_array(output: Output) -> Vec<Value> {
    match output {
        Output::Value(Value::Array(items)) => items,
        other => panic!("配列の出力であること: {other:?}"),
    }
}

// =============================================================================
// 単一呼び出し
// =============================================================================

#[tokio::test]
async fn test_既定の選択子ではレスポンス全体を出力する() {
    // Arrange
    let sut = MockInvoker::<DetectSentiment>::new();
    sut.push_response(DetectSentimentResponse {
        sentiment:       Some("POSITIVE".to_string()),
        sentiment_score: Some(SentimentScore {
            positive: Some(0.5),
            negative: Some(0.25),
            neutral:  Some(0.125),
            mixed:    Some(0.125),
        }),
    });

    // Act
    let output = execute::<DetectSentiment, _>(
        &sut,
        &sentiment_params(),
        &Selector::Default,
        &mut Force,
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(
        output,
        Output::Value(json!({
            "Sentiment": "POSITIVE",
            "SentimentScore": {
                "Positive": 0.5,
                "Negative": 0.25,
                "Neutral": 0.125,
                "Mixed": 0.125,
            },
        }))
    );
    assert_eq!(sut.requests()[0].text, "I love this product");
}

#[tokio::test]
async fn test_フィールド選択子とパラメータ選択子で出力を切り替える() {
    let sut = MockInvoker::<DetectSentiment>::new();
    sut.push_response(DetectSentimentResponse {
        sentiment: Some("NEUTRAL".to_string()),
        ..Default::default()
    })
    .push_response(DetectSentimentResponse::default());

    let field = execute::<DetectSentiment, _>(
        &sut,
        &sentiment_params(),
        &Selector::Field("Sentiment".to_string()),
        &mut Force,
    )
    .await
    .unwrap();
    let echoed = execute::<DetectSentiment, _>(
        &sut,
        &sentiment_params(),
        &Selector::Parameter("LanguageCode".to_string()),
        &mut Force,
    )
    .await
    .unwrap();

    assert_eq!(field, Output::Value(json!("NEUTRAL")));
    assert_eq!(echoed, Output::Value(json!("en")));
}

#[tokio::test]
async fn test_必須パラメータが欠落していればリモート呼び出しをしない() {
    // Arrange
    let sut = MockInvoker::<DetectSentiment>::new();
    let params = DetectSentimentParams {
        text: None,
        ..sentiment_params()
    };

    // Act
    let err = execute::<DetectSentiment, _>(&sut, &params, &Selector::Default, &mut Force)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        CliError::Binding(DomainError::MissingParameter {
            operation: "DetectSentiment",
            parameter: "Text",
        })
    ));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(sut.call_count(), 0);
}

#[tokio::test]
async fn test_名前解決エラーはエンドポイントと操作名を添えて終了コード4になる() {
    // Arrange
    let sut = MockInvoker::<DetectSentiment>::new();
    sut.push_error(InfraError::name_resolution(
        "DetectSentiment",
        "https://comprehend.nowhere-1.amazonaws.com",
        "failed to lookup address information: Name or service not known",
    ));

    // Act
    let err = execute::<DetectSentiment, _>(
        &sut,
        &sentiment_params(),
        &Selector::Default,
        &mut Force,
    )
    .await
    .unwrap_err();

    // Assert
    let message = err.to_string();
    assert!(message.contains("failed to lookup address information"));
    assert!(message.contains("https://comprehend.nowhere-1.amazonaws.com"));
    assert!(message.contains("DetectSentiment"));
    assert_eq!(err.exit_code(), 4);
}

#[tokio::test]
async fn test_サービスエラーはコードとメッセージをそのまま伝播する() {
    let sut = MockInvoker::<DetectSentiment>::new();
    sut.push_error(InfraError::service(
        "DetectSentiment",
        Some("TextSizeLimitExceededException".to_string()),
        "Input text size exceeds limit",
        std::io::Error::other("Input text size exceeds limit"),
    ));

    let err = execute::<DetectSentiment, _>(
        &sut,
        &sentiment_params(),
        &Selector::Default,
        &mut Force,
    )
    .await
    .unwrap_err();

    let CliError::Remote(remote) = &err else {
        panic!("リモートエラーであること: {err:?}");
    };
    assert_eq!(
        remote.as_service(),
        Some((
            Some("TextSizeLimitExceededException"),
            "Input text size exceeds limit"
        ))
    );
    assert_eq!(err.exit_code(), 1);
}

// =============================================================================
// 変更操作
// =============================================================================

#[tokio::test]
async fn test_確認を拒否すると呼び出さずに終了コード3になる() {
    // Arrange
    let sut = MockInvoker::<StopEntitiesDetectionJob>::new();
    let params = StopEntitiesDetectionJobParams {
        job_id: Some("0123456789abcdef".to_string()),
    };
    let mut prompt_output = Vec::new();
    let mut prompt = Prompt::new(Cursor::new("n\n"), &mut prompt_output);

    // Act
    let err = execute::<StopEntitiesDetectionJob, _>(&sut, &params, &Selector::Default, &mut prompt)
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        CliError::Declined {
            operation: "StopEntitiesDetectionJob",
            ref target,
        } if target == "0123456789abcdef"
    ));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(sut.call_count(), 0);
}

#[tokio::test]
async fn test_束縛エラーは確認より先に報告する() {
    let sut = MockInvoker::<StopEntitiesDetectionJob>::new();
    let mut prompt_output = Vec::new();
    let mut prompt = Prompt::new(Cursor::new("y\n"), &mut prompt_output);

    let err = execute::<StopEntitiesDetectionJob, _>(
        &sut,
        &StopEntitiesDetectionJobParams::default(),
        &Selector::Default,
        &mut prompt,
    )
    .await
    .unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(prompt_output.is_empty(), "プロンプトを表示しないこと");
}

#[tokio::test]
async fn test_存在しないパラメータ選択子は変更操作を呼び出す前に報告する() {
    // Arrange
    let sut = MockInvoker::<StopEntitiesDetectionJob>::new();
    sut.push_response(StopEntitiesDetectionJobResponse::default());
    let params = StopEntitiesDetectionJobParams {
        job_id: Some("0123456789abcdef".to_string()),
    };
    let mut prompt_output = Vec::new();
    let mut prompt = Prompt::new(Cursor::new("y\n"), &mut prompt_output);

    // Act
    let err = execute::<StopEntitiesDetectionJob, _>(
        &sut,
        &params,
        &Selector::Parameter("Bogus".to_string()),
        &mut prompt,
    )
    .await
    .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        CliError::Binding(DomainError::UnknownSelector { ref name, .. }) if name == "Bogus"
    ));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(sut.call_count(), 0);
    assert!(prompt_output.is_empty(), "プロンプトを表示しないこと");
}

#[tokio::test]
async fn test_応答本体のない操作は何も出力しない() {
    // Arrange
    let sut = MockInvoker::<TagResource>::new();
    sut.push_response(TagResourceResponse {});
    let params = TagResourceParams {
        resource_arn: Some(
            "arn:aws:comprehend:us-east-1:123456789012:entities-detection-job/abc".to_string(),
        ),
        tags:         Some(vec!["team=nlp".parse::<Tag>().unwrap()]),
    };

    // Act
    let output = execute::<TagResource, _>(&sut, &params, &Selector::Default, &mut Force)
        .await
        .unwrap();

    // Assert
    assert_eq!(output, Output::Nothing);
    assert_eq!(sut.call_count(), 1);
    assert_eq!(sut.requests()[0].tags[0].key, "team");
}

// =============================================================================
// ページネーション
// =============================================================================

#[tokio::test]
async fn test_上限120でページ上限50なら50_50_20の3回で120件を出力する() {
    // Arrange
    let sut = MockInvoker::<ListEntitiesDetectionJobs>::new();
    sut.push_response(jobs_page(0..50, Some("t1")))
        .push_response(jobs_page(50..100, Some("t2")))
        .push_response(jobs_page(100..120, Some("t3")));
    let paging = Paging {
        max_results: Some(120),
        ..Default::default()
    };

    // Act
    let output = execute_paginated::<ListEntitiesDetectionJobs, _>(
        &sut,
        &ListEntitiesDetectionJobsParams::default(),
        paging,
        &Selector::Default,
    )
    .await
    .unwrap();

    // Assert
    let requests = sut.requests();
    let sizes: Vec<_> = requests.iter().map(|r| r.max_results).collect();
    let tokens: Vec<_> = requests.iter().map(|r| r.next_token.as_deref()).collect();
    assert_eq!(sizes, vec![Some(50), Some(50), Some(20)]);
    assert_eq!(tokens, vec![None, Some("t1"), Some("t2")]);

    let items = output_array(output);
    assert_eq!(items.len(), 120);
    assert_eq!(items[0]["JobId"], json!("job-0"));
    assert_eq!(items[119]["JobId"], json!("job-119"));
}

#[tokio::test]
async fn test_上限0はリモート呼び出し前に束縛エラーになる() {
    let sut = MockInvoker::<ListEntitiesDetectionJobs>::new();
    let paging = Paging {
        max_results: Some(0),
        ..Default::default()
    };

    let err = execute_paginated::<ListEntitiesDetectionJobs, _>(
        &sut,
        &ListEntitiesDetectionJobsParams::default(),
        paging,
        &Selector::Default,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        CliError::Binding(DomainError::InvalidValue { ref parameter, .. }) if parameter == "MaxResults"
    ));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(sut.call_count(), 0);
}

#[tokio::test]
async fn test_存在しないパラメータ選択子は一覧を取得する前に報告する() {
    // Arrange
    let sut = MockInvoker::<ListEntitiesDetectionJobs>::new();
    sut.push_response(jobs_page(0..3, None));

    // Act
    let err = execute_paginated::<ListEntitiesDetectionJobs, _>(
        &sut,
        &ListEntitiesDetectionJobsParams::default(),
        Paging::default(),
        &Selector::Parameter("Bogus".to_string()),
    )
    .await
    .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        CliError::Binding(DomainError::UnknownSelector { ref name, .. }) if name == "Bogus"
    ));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(sut.call_count(), 0);
}

#[tokio::test]
async fn test_ページサイズを指定できない一覧は超過分を切り捨てる() {
    // Arrange
    let sut = MockInvoker::<ListStudios>::new();
    sut.push_response(studios_page(8, Some("more")));
    let paging = Paging {
        max_results: Some(5),
        ..Default::default()
    };

    // Act
    let output = execute_paginated::<ListStudios, _>(
        &sut,
        &ListStudiosParams {},
        paging,
        &Selector::Default,
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(sut.call_count(), 1);
    assert_eq!(output_array(output).len(), 5);
}

#[tokio::test]
async fn test_件数0のページでカーソルが返っても辿るのをやめる() {
    let sut = MockInvoker::<ListStudios>::new();
    sut.push_response(studios_page(2, Some("a")))
        .push_response(studios_page(0, Some("b")));

    let output = execute_paginated::<ListStudios, _>(
        &sut,
        &ListStudiosParams {},
        Paging::default(),
        &Selector::Default,
    )
    .await
    .unwrap();

    assert_eq!(sut.call_count(), 2);
    assert_eq!(output_array(output).len(), 2);
}

#[tokio::test]
async fn test_自動で辿らない指定では1回だけ呼び出し上限をページサイズにする() {
    // Arrange
    let sut = MockInvoker::<ListEntitiesDetectionJobs>::new();
    sut.push_response(jobs_page(0..10, Some("resume-here")));
    let paging = Paging {
        next_token:        Some("start".to_string()),
        max_results:       Some(10),
        no_auto_iteration: true,
    };

    // Act
    let output = execute_paginated::<ListEntitiesDetectionJobs, _>(
        &sut,
        &ListEntitiesDetectionJobsParams::default(),
        paging,
        &Selector::Default,
    )
    .await
    .unwrap();

    // Assert
    let requests = sut.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].max_results, Some(10));
    assert_eq!(requests[0].next_token.as_deref(), Some("start"));
    assert_eq!(output_array(output).len(), 10);
}

#[tokio::test]
async fn test_自動で辿らない指定でも上限はサーバーの最大ページサイズに丸める() {
    let sut = MockInvoker::<ListEntitiesDetectionJobs>::new();
    sut.push_response(jobs_page(0..500, None));
    let paging = Paging {
        max_results: Some(1000),
        no_auto_iteration: true,
        ..Default::default()
    };

    execute_paginated::<ListEntitiesDetectionJobs, _>(
        &sut,
        &ListEntitiesDetectionJobsParams::default(),
        paging,
        &Selector::Default,
    )
    .await
    .unwrap();

    assert_eq!(sut.requests()[0].max_results, Some(500));
}

#[tokio::test]
async fn test_一覧でパラメータ選択子を指定すると入力を1回だけ返す() {
    let sut = MockInvoker::<ListEntitiesDetectionJobs>::new();
    sut.push_response(jobs_page(0..3, Some("t1")))
        .push_response(jobs_page(3..6, None));
    let params = ListEntitiesDetectionJobsParams {
        filter_job_name: Some("nightly".to_string()),
        ..Default::default()
    };

    let output = execute_paginated::<ListEntitiesDetectionJobs, _>(
        &sut,
        &params,
        Paging::default(),
        &Selector::Parameter("Filter_JobName".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(output, Output::Value(json!("nightly")));
    assert_eq!(sut.call_count(), 2);
}

#[tokio::test]
async fn test_一覧でレスポンス全体を選択するとページごとの応答を並べる() {
    let sut = MockInvoker::<ListStudios>::new();
    sut.push_response(studios_page(1, Some("t1")))
        .push_response(studios_page(1, None));

    let output = execute_paginated::<ListStudios, _>(
        &sut,
        &ListStudiosParams {},
        Paging::default(),
        &Selector::Response,
    )
    .await
    .unwrap();

    let pages = output_array(output);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0]["NextToken"], json!("t1"));
    assert_eq!(pages[1]["NextToken"], Value::Null);
}

#[tokio::test]
async fn test_途中のページで失敗した場合は部分的な出力を返さない() {
    let sut = MockInvoker::<ListStudios>::new();
    sut.push_response(studios_page(3, Some("t1")))
        .push_error(InfraError::service(
            "ListStudios",
            Some("ThrottlingException".to_string()),
            "Rate exceeded",
            std::io::Error::other("Rate exceeded"),
        ));

    let err = execute_paginated::<ListStudios, _>(
        &sut,
        &ListStudiosParams {},
        Paging::default(),
        &Selector::Default,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("ThrottlingException"));
    assert_eq!(sut.call_count(), 2);
}
