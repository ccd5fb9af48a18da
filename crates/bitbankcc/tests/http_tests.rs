/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for public and private clients
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use bitbankcc::{
    AuthMethod, BitbankError, ClientConfig, PrivateClient, PublicClient, QueryParams,
    SigningConfig,
};
use common::{failure, private_client, setup_mock_server, success, test_credentials};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let public = assert_ok!(PublicClient::new());
    assert_eq!(public.endpoint(), "https://public.bitbank.cc");

    let private = assert_ok!(PrivateClient::new(test_credentials()));
    assert_eq!(private.signing_config().auth_method, AuthMethod::RequestTime);
    assert_eq!(private.credentials().api_key(), common::TEST_API_KEY);
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default();
    let _client = assert_ok!(PublicClient::with_config(config.clone()));
    let _client = assert_ok!(PrivateClient::with_config(
        test_credentials(),
        SigningConfig::default().with_auth_method(AuthMethod::Nonce),
        config,
    ));
}

#[tokio::test]
async fn test_concurrent_requests_get_fresh_signatures() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!({
            "assets": []
        }))))
        .expect(2)
        .mount(&server)
        .await;

    let client = private_client(&server, AuthMethod::Nonce, 1_700_000_000_000);
    let (first, second) = tokio::join!(client.get_assets(), client.get_assets());
    assert_ok!(first);
    assert_ok!(second);

    let requests = server.received_requests().await.expect("recorded requests");
    let nonces: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("access-nonce").cloned())
        .collect();
    let signatures: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("access-signature").cloned())
        .collect();

    assert_eq!(requests.len(), 2);
    assert_ne!(nonces[0], nonces[1]);
    assert_ne!(signatures[0], signatures[1]);
}

#[tokio::test]
async fn test_generic_get_passes_payload_through() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/unlisted"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success(serde_json::json!({"anything": [1, 2, 3]}))),
        )
        .mount(&server)
        .await;

    let client = private_client(&server, AuthMethod::RequestTime, 1);
    let mut params = QueryParams::new();
    params.push("pair", "btc_jpy").push_opt("count", None::<u32>);
    let data: serde_json::Value = assert_ok!(client.get("/user/unlisted", &params).await);

    assert_eq!(data, serde_json::json!({"anything": [1, 2, 3]}));
    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests[0].url.query(), Some("pair=btc_jpy"));
}

#[tokio::test]
async fn test_error_kinds_are_disjoint() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure(99999)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/user/subscribe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/spot/status"))
        .respond_with(ResponseTemplate::new(500).set_body_json(failure(10001)))
        .mount(&server)
        .await;

    let client = private_client(&server, AuthMethod::RequestTime, 1);

    match client.get_assets().await {
        Err(BitbankError::Exchange(err)) => {
            assert_eq!(err.code, "99999");
            assert_eq!(err.message, "不明なエラーです。サポートにお問い合わせ下さい");
        }
        other => panic!("Expected Exchange error, got {other:?}"),
    }
    assert!(matches!(
        client.get_subscribe_status().await,
        Err(BitbankError::MalformedResponse { .. })
    ));
    assert!(matches!(
        client.get_exchange_status().await,
        Err(BitbankError::Transport(_))
    ));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on port 1
    let client = assert_ok!(PublicClient::with_config_and_endpoint(
        ClientConfig::default(),
        "http://127.0.0.1:1"
    ));
    let err = client.get_ticker("btc_jpy").await.unwrap_err();

    assert!(matches!(err, BitbankError::Transport(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_decode_error_for_unexpected_shape() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/btc_jpy/depth"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(serde_json::json!({"asks": "?"}))),
        )
        .mount(&server)
        .await;

    let client = assert_ok!(PublicClient::with_config_and_endpoint(
        ClientConfig::default(),
        &server.uri()
    ));

    assert!(matches!(
        client.get_depth("btc_jpy").await,
        Err(BitbankError::Decode(_))
    ));
}
