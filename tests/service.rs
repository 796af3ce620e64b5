//! Service envelope tests: every request gets 200 and a JSON report,
//! and concurrent callers never see each other's data.

use std::time::Duration;

use request_mirror::config::{CaptureConfig, MirrorConfig};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use uuid::Uuid;

mod common;

#[tokio::test]
async fn every_method_and_path_gets_a_report() {
    let (addr, shutdown) = common::spawn_mirror(common::config_capturing_nothing()).await;
    let client = common::client();

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ];
    let paths = ["/", "/deep/nested/path", "/with?query=1&second=2"];

    for method in methods {
        for path in paths {
            let response = client
                .request(method.clone(), format!("http://{addr}{path}"))
                .send()
                .await
                .unwrap();

            assert_eq!(response.status(), 200, "{method} {path} must answer 200");
            assert_eq!(
                response.headers().get(CONTENT_TYPE).unwrap(),
                "application/json"
            );
            assert_eq!(response.text().await.unwrap(), "{}");
        }
    }

    shutdown.trigger();
}

#[tokio::test]
async fn extension_methods_are_served_too() {
    let (addr, shutdown) = common::spawn_mirror(common::config_capturing_nothing()).await;

    let propfind = Method::from_bytes(b"PROPFIND").unwrap();
    let response = common::client()
        .request(propfind, format!("http://{addr}/dav"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "{}");

    shutdown.trigger();
}

#[tokio::test]
async fn head_requests_get_the_envelope() {
    let (addr, shutdown) = common::spawn_mirror(common::config_capturing_nothing()).await;

    let response = common::client()
        .head(format!("http://{addr}/"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn identical_requests_yield_identical_reports() {
    let (addr, shutdown) = common::spawn_mirror(common::config_capturing(CaptureConfig {
        uri: true,
        cookies: true,
        body: true,
        basic_auth: true,
        headers: false,
    }))
    .await;
    let client = common::client();

    let send = || {
        client
            .post(format!("http://{addr}/repeat?n=1"))
            .header("Cookie", "id=7")
            .header("Authorization", "Basic dXNlcjpwYXNz")
            .json(&serde_json::json!({"same": true}))
            .send()
    };

    let first = send().await.unwrap().text().await.unwrap();
    let second = send().await.unwrap().text().await.unwrap();

    assert_eq!(first, second, "Reports must not drift between identical requests");

    shutdown.trigger();
}

#[tokio::test]
async fn concurrent_requests_never_share_reports() {
    let (addr, shutdown) = common::spawn_mirror(common::config_capturing(CaptureConfig {
        uri: true,
        body: true,
        ..CaptureConfig::default()
    }))
    .await;

    let concurrency = 24;
    let requests_per_task = 20;
    let client = common::client();

    let mut tasks = Vec::new();
    for _ in 0..concurrency {
        let client = client.clone();
        let base = format!("http://{addr}");
        tasks.push(tokio::spawn(async move {
            for _ in 0..requests_per_task {
                let marker = Uuid::new_v4().to_string();
                let report: Value = client
                    .post(format!("{base}/echo/{marker}"))
                    .json(&serde_json::json!({ "marker": marker }))
                    .send()
                    .await
                    .unwrap()
                    .json()
                    .await
                    .unwrap();

                assert_eq!(report["uri"], format!("/echo/{marker}"));
                assert_eq!(report["body"]["marker"], Value::String(marker));
            }
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }

    shutdown.trigger();
}

#[tokio::test]
async fn shutdown_stops_accepting_requests() {
    let (addr, shutdown) = common::spawn_mirror(MirrorConfig::default()).await;
    let client = common::client();
    let url = format!("http://{addr}/");

    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), 200);

    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let refused = client.get(&url).send().await;
    assert!(refused.is_err(), "Server still answered after shutdown");
}
