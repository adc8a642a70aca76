mod common;

use common::{MockEnvironment, TEST_API_KEY};
use mcp_spoonacular::client::{Error, SpoonacularClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_empty_api_key_is_rejected() {
    for key in ["", " ", "   ", "\t", "\n\r"] {
        let result = SpoonacularClient::new(key);
        assert!(
            matches!(result, Err(Error::Config(_))),
            "Key {:?} should be a configuration error",
            key
        );
    }
}

#[test]
fn test_builder_rejects_empty_key_whatever_the_options() {
    let result = SpoonacularClient::builder("")
        .allow_extra_calls(true)
        .base_url("http://localhost:1")
        .build();

    assert!(matches!(result, Err(Error::Config(_))));
}

#[tokio::test]
async fn test_api_key_header_is_sent() {
    common::init_test_logging();
    let env = MockEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/food/jokes/random"))
        .and(header("x-rapidapi-key", TEST_API_KEY))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"text\":\"joke\"}"))
        .expect(1)
        .mount(&env.server)
        .await;

    let response = env
        .client
        .get_a_random_food_joke()
        .await
        .expect("Request with a valid key should succeed");

    assert_eq!(response.text(), "{\"text\":\"joke\"}");
}

#[tokio::test]
async fn test_clients_do_not_share_keys() {
    common::init_test_logging();
    let env = MockEnvironment::new().await;
    env.mount_ok().await;

    let other = SpoonacularClient::builder("second-key")
        .base_url(env.server.uri())
        .build()
        .expect("Second client should build");

    let (first, second) = tokio::join!(
        env.client.get_random_food_trivia(),
        other.get_random_food_trivia()
    );
    first.expect("First client request should succeed");
    second.expect("Second client request should succeed");

    let mut keys: Vec<String> = env
        .requests()
        .await
        .iter()
        .map(|r| {
            r.headers
                .get("x-rapidapi-key")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        })
        .collect();
    keys.sort();

    assert_eq!(keys, vec!["second-key".to_string(), TEST_API_KEY.to_string()]);
}
