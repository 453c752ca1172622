use crate::common::anonymous_client;
use envelope_client::error::AppError;
use envelope_client::model::requests::ApiRequest;
use mockito::Server;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct Item {
    id: u64,
}

#[tokio::test]
async fn cached_execute_hits_transport_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/items/1")
        .with_status(200)
        .with_body(r#"{"code":200,"data":{"id":1}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = anonymous_client(&server.url());
    let request = ApiRequest::get("/items/1");

    let first = client
        .execute_cached::<Item>(&request, Duration::from_secs(60))
        .await
        .expect("should be Ok")
        .expect("data should be present");
    let second = client
        .execute_cached::<Item>(&request, Duration::from_secs(60))
        .await
        .expect("should be Ok")
        .expect("data should be present");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn cache_expires_after_ttl() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/items/1")
        .with_status(200)
        .with_body(r#"{"code":200,"data":{"id":1}}"#)
        .expect(2)
        .create_async()
        .await;

    let client = anonymous_client(&server.url());
    let request = ApiRequest::get("/items/1");

    client
        .execute_cached::<Item>(&request, Duration::from_millis(50))
        .await
        .expect("should be Ok");

    tokio::time::sleep(Duration::from_millis(120)).await;

    client
        .execute_cached::<Item>(&request, Duration::from_millis(50))
        .await
        .expect("should be Ok");

    mock.assert_async().await;
}

#[tokio::test]
async fn application_errors_are_not_cached() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/items/1")
        .with_status(200)
        .with_body(r#"{"code":400,"message":"bad input"}"#)
        .expect(2)
        .create_async()
        .await;

    let client = anonymous_client(&server.url());
    let request = ApiRequest::get("/items/1");

    for _ in 0..2 {
        let err = client
            .execute_cached::<Item>(&request, Duration::from_secs(60))
            .await
            .err()
            .expect("should be Err");
        match err {
            AppError::Application(e) => assert_eq!(e.code, 400),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    assert!(client.cache().is_empty().await);
    mock.assert_async().await;
}

#[tokio::test]
async fn distinct_params_use_distinct_cache_keys() {
    let mut server = Server::new_async().await;
    let page_one = server
        .mock("GET", "/items")
        .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(r#"{"code":200,"data":{"id":1}}"#)
        .expect(1)
        .create_async()
        .await;
    let page_two = server
        .mock("GET", "/items")
        .match_query(mockito::Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(r#"{"code":200,"data":{"id":2}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = anonymous_client(&server.url());

    let one = client
        .execute_cached::<Item>(
            &ApiRequest::get("/items").param("page", "1"),
            Duration::from_secs(60),
        )
        .await
        .expect("should be Ok")
        .expect("data should be present");
    let two = client
        .execute_cached::<Item>(
            &ApiRequest::get("/items").param("page", "2"),
            Duration::from_secs(60),
        )
        .await
        .expect("should be Ok")
        .expect("data should be present");

    assert_eq!(one.id, 1);
    assert_eq!(two.id, 2);
    page_one.assert_async().await;
    page_two.assert_async().await;
}
