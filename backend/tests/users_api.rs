//! End-to-end tests for the users API over a JSON file and signed tokens.

use std::path::PathBuf;

use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    http::{StatusCode, header},
    test::{self as actix_test, TestRequest},
    web,
};
use attendance::inbound::http::health::HealthState;
use attendance::server::{ServerConfig, build_app, build_http_state};
use jsonwebtoken::{EncodingKey, Header, encode};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;
use zeroize::Zeroizing;

const SECRET: &[u8] = b"integration-secret";

struct Store {
    _tmp: TempDir,
    users_file: PathBuf,
}

#[fixture]
fn seeded_store() -> Store {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data_dir = tmp.path().join("data");
    seed_data::initialise(&data_dir).expect("seed data dir");
    Store {
        users_file: data_dir.join(seed_data::USERS_FILE),
        _tmp: tmp,
    }
}

fn token(secret: &[u8], claims: &Value) -> String {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret)).expect("sign token")
}

fn valid_token() -> String {
    token(SECRET, &json!({ "sub": "1", "role": "admin" }))
}

async fn init_app(
    store: &Store,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let config = ServerConfig::new(
        ("127.0.0.1".to_owned(), 0),
        store.users_file.clone(),
        Zeroizing::new(SECRET.to_vec()),
    );
    let health = web::Data::new(HealthState::new());
    actix_test::init_service(build_app(health, build_http_state(&config))).await
}

fn get(uri: &str, bearer: Option<&str>) -> Request {
    let request = TestRequest::get().uri(uri);
    match bearer {
        Some(value) => request
            .insert_header((header::AUTHORIZATION, format!("Bearer {value}")))
            .to_request(),
        None => request.to_request(),
    }
}

async fn detail(response: ServiceResponse) -> String {
    let body: Value = actix_test::read_body_json(response).await;
    body.get("detail")
        .and_then(Value::as_str)
        .expect("detail field")
        .to_owned()
}

#[rstest]
#[actix_web::test]
async fn lists_seeded_users_without_passwords(seeded_store: Store) {
    let app = init_app(&seeded_store).await;

    let response = actix_test::call_service(&app, get("/users", Some(&valid_token()))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("trace-id"));
    let users: Vec<Value> = actix_test::read_body_json(response).await;
    let emails: Vec<&str> = users
        .iter()
        .filter_map(|user| user.get("email").and_then(Value::as_str))
        .collect();
    assert_eq!(
        emails,
        vec!["admin@example.com", "emp@example.com", "jane@example.com"]
    );
    assert!(users.iter().all(|user| user.get("password").is_none()));
}

#[rstest]
#[actix_web::test]
async fn fetches_one_user_and_reports_missing_ids(seeded_store: Store) {
    let app = init_app(&seeded_store).await;
    let bearer = valid_token();

    let found = actix_test::call_service(&app, get("/users/3", Some(&bearer))).await;
    assert_eq!(found.status(), StatusCode::OK);
    let user: Value = actix_test::read_body_json(found).await;
    assert_eq!(user.get("name"), Some(&json!("Jane Smith")));
    assert_eq!(user.get("role"), Some(&json!("employee")));

    let missing = actix_test::call_service(&app, get("/users/99", Some(&bearer))).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(detail(missing).await, "User not found");
}

#[rstest]
#[case::missing_header(None, "Not authenticated")]
#[case::wrong_secret(Some(token(b"another-secret", &json!({ "sub": "1" }))), "Invalid token")]
#[case::expired(Some(token(SECRET, &json!({ "sub": "1", "exp": 1 }))), "Invalid token")]
#[case::garbage(Some("not-a-jwt".to_owned()), "Invalid token")]
#[actix_web::test]
async fn rejects_unauthenticated_requests(
    seeded_store: Store,
    #[case] bearer: Option<String>,
    #[case] expected: &str,
) {
    let app = init_app(&seeded_store).await;

    let response = actix_test::call_service(&app, get("/users", bearer.as_deref())).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("trace-id"));
    assert_eq!(detail(response).await, expected);
}

#[rstest]
#[actix_web::test]
async fn unreadable_store_is_an_internal_error(seeded_store: Store) {
    std::fs::write(&seeded_store.users_file, "{ not json").expect("corrupt store");
    let app = init_app(&seeded_store).await;

    let response = actix_test::call_service(&app, get("/users/1", Some(&valid_token()))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = detail(response).await;
    assert_eq!(body, "Internal server error");
    assert!(!body.contains("users.json"));
}

#[rstest]
#[actix_web::test]
async fn store_changes_are_visible_on_the_next_request(seeded_store: Store) {
    let app = init_app(&seeded_store).await;
    let bearer = valid_token();

    let before = actix_test::call_service(&app, get("/users/4", Some(&bearer))).await;
    assert_eq!(before.status(), StatusCode::NOT_FOUND);

    let contents = std::fs::read_to_string(&seeded_store.users_file).expect("read users");
    let mut users: Vec<Value> = serde_json::from_str(&contents).expect("users json");
    users.push(json!({
        "id": 4,
        "name": "New Hire",
        "email": "new@example.com",
        "password": seed_data::hash_password("password"),
        "role": "employee",
        "department": "Sales"
    }));
    std::fs::write(
        &seeded_store.users_file,
        serde_json::to_string(&users).expect("encode users"),
    )
    .expect("write users");

    let after = actix_test::call_service(&app, get("/users/4", Some(&bearer))).await;
    assert_eq!(after.status(), StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn health_probes_do_not_require_a_token(seeded_store: Store) {
    let app = init_app(&seeded_store).await;

    let live = actix_test::call_service(&app, get("/health/live", None)).await;
    assert_eq!(live.status(), StatusCode::OK);

    let ready = actix_test::call_service(&app, get("/health/ready", None)).await;
    assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);
}
