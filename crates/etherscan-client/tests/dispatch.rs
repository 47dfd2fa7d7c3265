// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the dispatch primitive: API-key injection,
//! sanitization on the wire, and the strict/silent failure contract.


use etherscan_client::{EtherscanClient, EtherscanConfig, EtherscanError, QueryParams};
use fixtures::{
    EventCapture, TEST_API_KEY, assert_exact_query, client_for, config_for, mount_ok,
    received_query_pairs,
};
use serde_json::{Value, json};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use url::Url;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An empty dispatch transmits the API key and nothing else, exactly once.
#[tokio::test]
async fn empty_dispatch_transmits_only_the_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("apikey", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .request(QueryParams::new())
        .await
        .expect("dispatch succeeds");

    assert_eq!(result, json!({}));
    let pairs = received_query_pairs(&server).await;
    assert_exact_query(&pairs, &[]);
}

/// The configured key overwrites a caller-supplied `apikey` parameter.
#[tokio::test]
async fn configured_key_overrides_caller_supplied_value() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("apikey", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .request(QueryParams::new().with("apikey", "caller-key"))
        .await
        .expect("dispatch succeeds");

    let pairs = received_query_pairs(&server).await;
    assert!(!pairs.iter().any(|(_, value)| value == "caller-key"));
    assert_exact_query(&pairs, &[]);
}

/// Parameters with empty values never reach the wire.
#[tokio::test]
async fn empty_parameters_are_dropped_before_transmission() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let client = client_for(&server);
    let params = QueryParams::for_action("account", "txlist")
        .with("address", "0xabc")
        .with("startblock", None::<u64>)
        .with("sort", "");
    client.request(params).await.expect("dispatch succeeds");

    let pairs = received_query_pairs(&server).await;
    assert_exact_query(
        &pairs,
        &[
            ("module", "account"),
            ("action", "txlist"),
            ("address", "0xabc"),
        ],
    );
}

/// A 200 payload is returned untouched, envelope and all.
#[tokio::test]
async fn success_payload_passes_through_untouched() {
    let payload = json!({
        "status": "1",
        "message": "OK",
        "result": { "SafeGasPrice": "12", "ProposeGasPrice": "14", "FastGasPrice": "17" }
    });
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .request(QueryParams::for_action("gastracker", "gasoracle"))
        .await
        .expect("dispatch succeeds");

    assert_eq!(result, payload);
}

/// A non-200 answer in strict mode renders `<status> <raw body>` and logs
/// exactly one warning.
#[tokio::test]
async fn strict_mode_surfaces_api_error_and_warns_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("404 Not Found Message"))
        .expect(1)
        .mount(&server)
        .await;

    let capture = EventCapture::new();
    let _guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

    let client = client_for(&server);
    let error = client
        .request(QueryParams::for_action("account", "balance"))
        .await
        .expect_err("strict mode fails");

    assert!(error.is_api_error());
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.to_string(), "404 404 Not Found Message");
    assert_eq!(capture.count(Level::WARN), 1);
    assert_eq!(capture.count(Level::INFO), 0);
}

/// The same non-200 answer in silent mode collapses to `Value::Null` and
/// logs exactly one informational record.
#[tokio::test]
async fn silent_mode_collapses_api_errors_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("404 Not Found Message"))
        .expect(1)
        .mount(&server)
        .await;

    let capture = EventCapture::new();
    let _guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

    let mut config = config_for(&server);
    config.fail_silently = true;
    let client = EtherscanClient::new(config).expect("client builds");

    let result = client
        .request(QueryParams::for_action("account", "balance"))
        .await
        .expect("silent mode does not fail");

    assert_eq!(result, Value::Null);
    assert_eq!(capture.count(Level::INFO), 1);
    assert_eq!(capture.count(Level::WARN), 0);
}

/// Toggling the failure mode on a live client switches the outcome of the
/// next call.
#[tokio::test]
async fn toggling_failure_mode_switches_the_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    let error = client
        .request(QueryParams::new())
        .await
        .expect_err("strict mode fails");
    assert_eq!(error.to_string(), "500 boom");

    client.set_fail_silently(true);
    let result = client
        .request(QueryParams::new())
        .await
        .expect("silent mode does not fail");
    assert_eq!(result, Value::Null);
}

/// The error keeps the raw body even when the body is itself JSON (the
/// decoded rendering goes to the log only).
#[tokio::test]
async fn api_error_keeps_the_raw_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string(r#"{"message":"maintenance"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let capture = EventCapture::new();
    let _guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(capture.clone()));

    let client = client_for(&server);
    let error = client
        .request(QueryParams::new())
        .await
        .expect_err("strict mode fails");

    assert_eq!(error.to_string(), r#"503 {"message":"maintenance"}"#);
    assert_eq!(capture.count(Level::WARN), 1);
}

/// A 200 body that is not JSON is an unrecoverable parse error.
#[tokio::test]
async fn malformed_success_body_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .request(QueryParams::new())
        .await
        .expect_err("parse fails");

    assert!(matches!(error, EtherscanError::Json(_)));
}

/// Silent mode only collapses API response errors; parse errors still
/// propagate.
#[tokio::test]
async fn silent_mode_does_not_mask_malformed_success_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.fail_silently = true;
    let client = EtherscanClient::new(config).expect("client builds");

    let error = client
        .request(QueryParams::new())
        .await
        .expect_err("parse fails");

    assert!(matches!(error, EtherscanError::Json(_)));
}

/// Transport failures propagate in both modes; only HTTP status errors are
/// ever silenced.
#[tokio::test]
async fn transport_failures_propagate_in_both_modes() {
    let mut config = EtherscanConfig::new(TEST_API_KEY);
    config.base_url = Url::parse("http://127.0.0.1:9").expect("valid URL");
    config.fail_silently = true;
    let client = EtherscanClient::new(config).expect("client builds");

    let error = client
        .request(QueryParams::new())
        .await
        .expect_err("nothing listens on the discard port");

    assert!(matches!(error, EtherscanError::Http(_)));
}
