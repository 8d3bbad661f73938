use std::sync::Arc;

use bank_gateway_clients::clients::http::accounts::build_accounts_gateway_http_client;
use bank_gateway_clients::clients::http::cards::build_cards_gateway_http_client;
use bank_gateway_clients::clients::http::documents::build_documents_gateway_http_client;
use bank_gateway_clients::clients::http::operations::{
    build_operations_gateway_http_client, GetOperationsQuery,
};
use bank_gateway_clients::clients::http::users::{
    build_users_gateway_http_client, build_users_gateway_load_test_http_client,
};
use bank_gateway_clients::models::{AccountType, CardType, OperationStatus, OperationType};
use bank_gateway_clients::{
    AccountsGateway, CardsGateway, ClientError, DecodeError, DocumentsGateway, Faker,
    HttpClientConfig, LoadTestEnvironment, OperationInput, OperationsGateway, RandomFaker,
    RequestStats, TransportError, UsersGateway,
};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> HttpClientConfig {
    HttpClientConfig {
        url: Url::parse(&server.uri()).unwrap(),
        ..HttpClientConfig::default()
    }
}

fn faker() -> Arc<dyn Faker> {
    Arc::new(RandomFaker::seeded(42))
}

fn user_json(id: &str) -> Value {
    json!({
        "id": id,
        "email": "ivan.petrov@example.com",
        "lastName": "Petrov",
        "firstName": "Ivan",
        "middleName": "Sergeevich",
        "phoneNumber": "+79001234567"
    })
}

fn card_json(id: &str, card_type: &str) -> Value {
    json!({
        "id": id,
        "pin": "1234",
        "cvv": "123",
        "type": card_type,
        "status": "ACTIVE",
        "accountId": "acc-1",
        "cardNumber": "4111111111111111",
        "cardHolder": "IVAN PETROV",
        "expiryDate": "2030-01-31",
        "paymentSystem": "VISA"
    })
}

fn operation_json(id: &str, operation_type: &str, status: &str) -> Value {
    json!({
        "id": id,
        "type": operation_type,
        "status": status,
        "amount": 150.25,
        "cardId": "card-1",
        "category": "money_in",
        "createdAt": "2024-05-01T10:00:00Z",
        "accountId": "acc-1"
    })
}

async fn requests_to(server: &MockServer, route: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() == route)
        .map(|request| request.body_json::<Value>().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_user_sends_generated_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("user-1") })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_users_gateway_http_client(&config_for(&server), faker()).unwrap();
    let user = client.create_user().await.unwrap();
    assert_eq!(user.id, "user-1");
    assert_eq!(user.phone_number, "+79001234567");

    let bodies = requests_to(&server, "/api/v1/users").await;
    assert_eq!(bodies.len(), 1);
    for field in ["email", "lastName", "firstName", "middleName", "phoneNumber"] {
        let value = bodies[0][field].as_str().unwrap();
        assert!(!value.is_empty(), "{field} is empty");
    }
}

#[tokio::test]
async fn test_get_user_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("user-7") })))
        .mount(&server)
        .await;

    let client = build_users_gateway_http_client(&config_for(&server), faker()).unwrap();
    let user = client.get_user("user-7").await.unwrap();

    assert_eq!(serde_json::to_value(&user).unwrap(), user_json("user-7"));
}

#[tokio::test]
async fn test_get_accounts_passes_user_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts"))
        .and(query_param("userId", "user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accounts": [{
                "id": "acc-1",
                "type": "SAVINGS",
                "cards": [],
                "status": "ACTIVE",
                "balance": 10.5
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_accounts_gateway_http_client(&config_for(&server)).unwrap();
    let accounts = client.get_accounts("user-1").await.unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_type, AccountType::Savings);
    assert_eq!(accounts[0].balance, 10.5);
}

#[tokio::test]
async fn test_open_debit_card_account_keeps_first_card() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/accounts/open-debit-card-account"))
        .and(body_partial_json(json!({ "userId": "user-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {
                "id": "acc-1",
                "type": "DEBIT_CARD",
                "cards": [card_json("card-physical", "PHYSICAL"), card_json("card-virtual", "VIRTUAL")],
                "status": "ACTIVE",
                "balance": 0.0
            }
        })))
        .mount(&server)
        .await;

    let client = build_accounts_gateway_http_client(&config_for(&server)).unwrap();
    let account = client.open_debit_card_account("user-1").await.unwrap();

    assert_eq!(account.account_type, AccountType::DebitCard);
    let card = account.first_card().unwrap();
    assert_eq!(card.id, "card-physical");
    assert_eq!(card.card_type, CardType::Physical);
}

#[tokio::test]
async fn test_issue_virtual_card() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/cards/issue-virtual-card"))
        .and(body_partial_json(json!({ "userId": "user-1", "accountId": "acc-1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "card": card_json("card-9", "VIRTUAL") })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = build_cards_gateway_http_client(&config_for(&server)).unwrap();
    let card = client.issue_virtual_card("user-1", "acc-1").await.unwrap();

    assert_eq!(card.id, "card-9");
    assert_eq!(card.card_type, CardType::Virtual);
}

#[tokio::test]
async fn test_tariff_document_has_url_and_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/documents/tariff-document/acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tariff": {
                "url": "http://localhost:8003/documents/tariff/acc-1.pdf",
                "document": "JVBERi0xLjQK"
            }
        })))
        .mount(&server)
        .await;

    let client = build_documents_gateway_http_client(&config_for(&server)).unwrap();
    let tariff = client.get_tariff_document("acc-1").await.unwrap();

    assert!(!tariff.url.as_str().is_empty());
    assert!(!tariff.document.is_empty());
}

#[tokio::test]
async fn test_make_operations_generate_valid_fields() {
    let server = MockServer::start().await;
    for (route, operation_type) in [
        ("/api/v1/operations/make-top-up-operation", "TOP_UP"),
        ("/api/v1/operations/make-purchase-operation", "PURCHASE"),
    ] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "operation": operation_json("op-1", operation_type, "COMPLETED")
            })))
            .mount(&server)
            .await;
    }

    let client = build_operations_gateway_http_client(&config_for(&server), faker()).unwrap();
    for _ in 0..5 {
        let operation = client.make_top_up_operation("card-1", "acc-1").await.unwrap();
        assert_eq!(operation.operation_type, OperationType::TopUp);
        client.make_purchase_operation("card-1", "acc-1").await.unwrap();
    }

    let allowed = ["FAILED", "COMPLETED", "IN_PROGRESS"];

    let top_ups = requests_to(&server, "/api/v1/operations/make-top-up-operation").await;
    assert_eq!(top_ups.len(), 5);
    for body in &top_ups {
        assert!(body["amount"].as_f64().unwrap() > 0.0);
        assert!(allowed.contains(&body["status"].as_str().unwrap()));
        assert_eq!(body["cardId"], "card-1");
        assert_eq!(body["accountId"], "acc-1");
        assert!(body.get("category").is_none());
    }

    let purchases = requests_to(&server, "/api/v1/operations/make-purchase-operation").await;
    assert_eq!(purchases.len(), 5);
    for body in &purchases {
        assert!(body["amount"].as_f64().unwrap() > 0.0);
        assert!(allowed.contains(&body["status"].as_str().unwrap()));
        assert!(!body["category"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_make_operation_keeps_supplied_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/operations/make-transfer-operation"))
        .and(body_partial_json(json!({ "status": "FAILED", "amount": 12.5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "operation": operation_json("op-2", "TRANSFER", "FAILED")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_operations_gateway_http_client(&config_for(&server), faker()).unwrap();
    let input = OperationInput::new("card-1", "acc-1")
        .with_status(OperationStatus::Failed)
        .with_amount(12.5);
    let operation = client
        .make_operation(OperationType::Transfer, input)
        .await
        .unwrap();

    assert_eq!(operation.status, OperationStatus::Failed);
}

#[tokio::test]
async fn test_get_operation_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/operations/op-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "operation": operation_json("op-1", "CASHBACK", "IN_PROGRESS")
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_operations_gateway_http_client(&config_for(&server), faker()).unwrap();
    let first = client.get_operation("op-1").await.unwrap();
    let second = client.get_operation("op-1").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.status, OperationStatus::InProgress);
}

#[tokio::test]
async fn test_operations_summary_and_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/operations/operations-summary"))
        .and(query_param("accountId", "acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": { "spentAmount": 10.0, "receivedAmount": 250.0, "cashbackAmount": 1.5 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/operations"))
        .and(query_param("accountId", "acc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "operations": [
                operation_json("op-1", "TOP_UP", "COMPLETED"),
                operation_json("op-2", "PURCHASE", "UNSPECIFIED")
            ]
        })))
        .mount(&server)
        .await;

    let client = build_operations_gateway_http_client(&config_for(&server), faker()).unwrap();

    let summary = client.get_operations_summary("acc-1").await.unwrap();
    assert_eq!(summary.received_amount, 250.0);
    assert_eq!(summary.cashback_amount, 1.5);

    let operations = client.get_operations("acc-1").await.unwrap();
    assert_eq!(operations.len(), 2);
    assert_eq!(operations[1].status, OperationStatus::Unspecified);

    let raw = client
        .get_operations_api(&GetOperationsQuery {
            account_id: "acc-1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(raw.status(), 200);
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/operations/operation-receipt/op-404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("operation not found"))
        .mount(&server)
        .await;

    let client = build_operations_gateway_http_client(&config_for(&server), faker()).unwrap();
    let err = client.get_operation_receipt("op-404").await.unwrap_err();

    match err {
        ClientError::Transport(TransportError::Status { status, body, .. }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "operation not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/documents/contract-document/acc-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "contract": { "url": "not a url" } })),
        )
        .mount(&server)
        .await;

    let client = build_documents_gateway_http_client(&config_for(&server)).unwrap();
    let err = client.get_contract_document("acc-1").await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(DecodeError::Json { .. })));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let config = HttpClientConfig {
        url: Url::parse("http://127.0.0.1:1").unwrap(),
        ..HttpClientConfig::default()
    };
    let client = build_users_gateway_http_client(&config, faker()).unwrap();

    let err = client.get_user("user-1").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(TransportError::Request { .. })));
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/user-1"))
        .and(wiremock::matchers::header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("user-1") })))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig {
        auth_token: Some("secret".to_string()),
        ..config_for(&server)
    };
    let client = build_users_gateway_http_client(&config, faker()).unwrap();
    client.get_user("user-1").await.unwrap();
}

#[tokio::test]
async fn test_load_test_client_groups_by_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("user-x") })))
        .mount(&server)
        .await;

    let stats = Arc::new(RequestStats::new());
    let environment = LoadTestEnvironment::new(server.uri(), stats.clone());
    let client = build_users_gateway_load_test_http_client(&environment, faker()).unwrap();

    client.get_user("user-1").await.unwrap();
    client.get_user("user-2").await.unwrap();

    let route = stats.get("GET", "/api/v1/users/{user_id}").unwrap();
    assert_eq!(route.requests, 2);
    assert_eq!(route.failures, 0);
    assert_eq!(stats.total_requests(), 2);
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bank/api/v1/users/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("user-1") })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/bank/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("user-2") })))
        .mount(&server)
        .await;

    let config = HttpClientConfig {
        url: Url::parse(&format!("{}/bank", server.uri())).unwrap(),
        ..HttpClientConfig::default()
    };
    let client = build_users_gateway_http_client(&config, faker()).unwrap();

    assert_eq!(client.get_user("user-1").await.unwrap().id, "user-1");
    assert_eq!(client.create_user().await.unwrap().id, "user-2");
}

#[tokio::test]
async fn test_identifier_is_sent_as_one_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/a%3Fb=c%2Fd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("a?b=c/d") })))
        .mount(&server)
        .await;

    let client = build_users_gateway_http_client(&config_for(&server), faker()).unwrap();
    let user = client.get_user("a?b=c/d").await.unwrap();
    assert_eq!(user.id, "a?b=c/d");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_load_test_client_counts_response_bytes() {
    let body = json!({ "user": user_json("user-1") });
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let stats = Arc::new(RequestStats::new());
    let environment = LoadTestEnvironment::new(server.uri(), stats.clone());
    let client = build_users_gateway_load_test_http_client(&environment, faker()).unwrap();
    client.get_user("user-1").await.unwrap();

    let route = stats.get("GET", "/api/v1/users/{user_id}").unwrap();
    assert_eq!(route.total_bytes, serde_json::to_vec(&body).unwrap().len() as u64);
}
