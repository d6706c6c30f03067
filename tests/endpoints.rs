//! HTTP-level tests for the generic endpoint and the resource endpoints.
//!
//! The client is blocking, so each test runs it on a `spawn_blocking` thread
//! while the mock server is driven by the tokio runtime.

use fshelper::resources::{AssetsEndpoint, ServiceItemsEndpoint, TicketsEndpoint};
use fshelper::{Credential, FsError, RequestService};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key-0001";

async fn with_service<T, F>(uri: &str, allow_create: bool, f: F) -> Result<T, FsError>
where
    T: Send + 'static,
    F: FnOnce(&RequestService) -> Result<T, FsError> + Send + 'static,
{
    let uri = uri.to_string();
    tokio::task::spawn_blocking(move || {
        let mut service = RequestService::new(Credential::api_key(API_KEY), &uri)?
            .with_allow_create(allow_create);
        service.scoped(f)
    })
    .await
    .expect("blocking task panicked")
}

fn assets_page(range: std::ops::Range<u64>) -> Value {
    let items: Vec<Value> = range
        .map(|i| json!({"display_id": i, "name": format!("asset-{i}"), "asset_type_id": 1}))
        .collect();
    json!({ "assets": items })
}

#[tokio::test(flavor = "multi_thread")]
async fn get_returns_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets/1"))
        .and(basic_auth(API_KEY, "X"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"asset": {"display_id": 1, "name": "Monitor"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let body = with_service(&server.uri(), false, |svc| AssetsEndpoint::new(svc).get(1))
        .await
        .unwrap();

    assert_eq!(body["asset"]["display_id"], json!(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_asset_decodes_typed_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "asset": {
                "id": 90001,
                "display_id": 3,
                "name": "ThinkPad",
                "asset_type_id": 12,
                "type_fields": {"serial_number_12": "PF-1234"}
            }
        })))
        .mount(&server)
        .await;

    let asset = with_service(&server.uri(), false, |svc| {
        AssetsEndpoint::new(svc).get_asset(3)
    })
    .await
    .unwrap();

    assert_eq!(asset.name, "ThinkPad");
    assert_eq!(asset.type_field("serial_number_12"), Some(&json!("PF-1234")));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_propagates_status_without_leaking_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/77"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(format!("no ticket for key {API_KEY}")),
        )
        .mount(&server)
        .await;

    let err = with_service(&server.uri(), false, |svc| TicketsEndpoint::new(svc).get(77))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_json_is_a_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = with_service(&server.uri(), false, |svc| AssetsEndpoint::new(svc).get(2))
        .await
        .unwrap_err();

    assert!(matches!(err, FsError::Serialization(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_disabled_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let result = with_service(&server.uri(), true, |svc| {
        TicketsEndpoint::new(svc).create(json!({"subject": "hi"}), false)
    })
    .await
    .unwrap();

    assert!(result.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_sends_sanitized_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/tickets"))
        .and(body_json(json!({
            "subject": "Printer jammed",
            "email": "ann@example.com",
            "custom_fields": {"floor": 3}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"ticket": {"id": 501}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = with_service(&server.uri(), false, |svc| {
        TicketsEndpoint::new(svc).create(
            json!({
                "id": 9,
                "subject": "Printer jammed",
                "email": "ann@example.com",
                "group_id": null,
                "custom_fields": {"floor": 3, "desk": null},
                "not_a_ticket_field": "dropped"
            }),
            true,
        )
    })
    .await
    .unwrap();

    assert_eq!(created, Some(json!({"ticket": {"id": 501}})));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_strips_nulls_and_read_only_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/assets/4"))
        .and(body_json(json!({"name": "Renamed", "asset_type_id": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"asset": {"display_id": 4}})))
        .expect(1)
        .mount(&server)
        .await;

    with_service(&server.uri(), false, |svc| {
        AssetsEndpoint::new(svc).update(
            json!({"display_id": 4, "name": "Renamed", "asset_type_id": 1, "impact": null}),
            4,
        )
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_permanently_issues_delete_then_put() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/tickets/5/delete_forever"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    with_service(&server.uri(), false, |svc| TicketsEndpoint::new(svc).delete(5, true))
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let calls: Vec<(String, String)> = received
        .iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string()))
        .collect();
    assert_eq!(
        calls,
        vec![
            ("DELETE".to_string(), "/api/v2/tickets/5".to_string()),
            ("PUT".to_string(), "/api/v2/tickets/5/delete_forever".to_string()),
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_soft_issues_single_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/assets/6"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    with_service(&server.uri(), false, |svc| AssetsEndpoint::new(svc).delete(6, false))
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_delete_skips_permanent_step() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/8"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let err = with_service(&server.uri(), false, |svc| TicketsEndpoint::new(svc).delete(8, true))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(reqwest::StatusCode::FORBIDDEN));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_all_stops_on_first_short_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assets_page(1..4)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assets_page(4..7)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assets_page(7..8)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assets_page(0..0)))
        .expect(0)
        .mount(&server)
        .await;

    let sizes = with_service(&server.uri(), false, |svc| {
        let assets = AssetsEndpoint::new(svc).into_inner().with_items_per_page(3);
        assets
            .get_all(None)
            .map(|page| page.map(|items| items.len()))
            .collect::<Result<Vec<_>, _>>()
    })
    .await
    .unwrap();

    assert_eq!(sizes, vec![3, 3, 1]);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_all_full_last_page_is_followed_by_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assets_page(1..3)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assets_page(0..0)))
        .expect(1)
        .mount(&server)
        .await;

    let items = with_service(&server.uri(), false, |svc| {
        AssetsEndpoint::new(svc)
            .into_inner()
            .with_items_per_page(2)
            .collect_all(None)
    })
    .await
    .unwrap();

    assert_eq!(items.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_all_forwards_query_and_restarts_on_recall() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets"))
        .and(query_param("page", "1"))
        .and(query_param("include", "type_fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assets_page(1..3)))
        .expect(2)
        .mount(&server)
        .await;

    let (first, second) = with_service(&server.uri(), false, |svc| {
        let assets = AssetsEndpoint::new(svc);
        let first = assets.collect_all(Some("include=type_fields"))?;
        let second = assets.collect_all(Some("include=type_fields"))?;
        Ok((first.len(), second.len()))
    })
    .await
    .unwrap();

    assert_eq!((first, second), (2, 2));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_all_reports_missing_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"assets": []})))
        .expect(1)
        .mount(&server)
        .await;

    let results = with_service(&server.uri(), false, |svc| {
        Ok(TicketsEndpoint::new(svc).get_all(None).collect::<Vec<_>>())
    })
    .await
    .unwrap();

    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(FsError::Envelope { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn asset_associated_requests_and_restore() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/assets/11/requests"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"requests": [{"request_id": 4, "request_type": "Incident"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/assets/11/restore"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (requests, restored) = with_service(&server.uri(), false, |svc| {
        let assets = AssetsEndpoint::new(svc);
        Ok((assets.get_associated_requests(11)?, assets.restore(11)?))
    })
    .await
    .unwrap();

    assert_eq!(requests["requests"][0]["request_id"], json!(4));
    assert_eq!(restored, Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn place_request_posts_to_create_command() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/service_catalog/items/12/place_request"))
        .and(body_json(json!({"quantity": 1, "email": "ann@example.com"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"service_request": {"id": 321}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let placed = with_service(&server.uri(), true, |svc| {
        ServiceItemsEndpoint::for_item(svc, 12).place_request(json!({
            "quantity": 1,
            "email": "ann@example.com",
            "requested_for": null,
            "display_id": 12
        }))
    })
    .await
    .unwrap();

    assert_eq!(placed, Some(json!({"service_request": {"id": 321}})));
}

#[tokio::test(flavor = "multi_thread")]
async fn place_request_respects_disabled_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let placed = with_service(&server.uri(), false, |svc| {
        ServiceItemsEndpoint::for_item(svc, 12).place_request(json!({"quantity": 1}))
    })
    .await
    .unwrap();

    assert!(placed.is_none());
}
