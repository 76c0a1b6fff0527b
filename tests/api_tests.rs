use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, HeaderValue, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use geosense_api::config::EnvironmentConfig;
use geosense_api::repositories::Repositories;
use geosense_api::{create_router, AppState};

const API_KEY: &str = "segredo";

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl TestResponse {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn json(&self) -> &Value {
        &self.body
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

struct TestApp {
    router: Router,
}

impl TestApp {
    async fn send(&self, method: Method, uri: &str, body: Option<Value>, api_key: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(key) = api_key {
            builder = builder.header("GeoSense-Api-Key", key);
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse { status, headers, body }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, Some(API_KEY)).await
    }

    async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body), Some(API_KEY)).await
    }

    async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body), Some(API_KEY)).await
    }

    async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None, Some(API_KEY)).await
    }

    async fn create_patio(&self, nome: &str) -> i64 {
        let response = self.post("/api/v1/patio", json!({ "nome": nome })).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        response.json()["data"]["id"].as_i64().unwrap()
    }

    async fn create_vaga(&self, numero: i32, tipo: i32, patio_id: i64) -> i64 {
        let response = self
            .post(
                "/api/v1/vaga",
                json!({ "numero": numero, "tipo": tipo, "status": 0, "patioId": patio_id }),
            )
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        response.json()["data"]["id"].as_i64().unwrap()
    }

    async fn post_moto(&self, placa: &str, chassi: &str, problema: Option<&str>, vaga_id: i64) -> TestResponse {
        self.post(
            "/api/v1/moto",
            json!({
                "modelo": "Honda CG 160",
                "placa": placa,
                "chassi": chassi,
                "problemaIdentificado": problema,
                "vagaId": vaga_id
            }),
        )
        .await
    }
}

fn test_config(api_key: Option<&str>) -> EnvironmentConfig {
    EnvironmentConfig {
        api_key: api_key.map(str::to_string),
        bcrypt_cost: 4,
        ..EnvironmentConfig::default()
    }
}

fn create_test_app() -> TestApp {
    create_test_app_with_key(Some(API_KEY))
}

fn create_test_app_with_key(api_key: Option<&str>) -> TestApp {
    let state = AppState::new(test_config(api_key), Repositories::in_memory());
    TestApp {
        router: create_router(state),
    }
}

#[tokio::test]
async fn test_health_check_without_key() {
    let app = create_test_app();
    let response = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "Healthy");
    assert_eq!(body["entries"]["database"]["status"], "Healthy");
    assert!(body["totalDuration"].as_str().unwrap().starts_with("00:00:"));
    assert_eq!(response.header("api-supported-versions"), Some("1.0"));
}

#[tokio::test]
async fn test_swagger_document_without_key() {
    let app = create_test_app();
    let response = app.send(Method::GET, "/swagger/v1/swagger.json", None, None).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.json()["paths"]["/api/v1/moto"].is_object());
    assert!(response.json()["components"]["securitySchemes"]["api_key"].is_object());
}

#[tokio::test]
async fn test_api_key_gate() {
    let app = create_test_app();

    let missing = app.send(Method::GET, "/api/v1/moto", None, None).await;
    assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(missing.header("api-supported-versions"), Some("1.0"));

    let wrong = app.send(Method::GET, "/api/v1/moto", None, Some("outra")).await;
    assert_eq!(wrong.status_code(), StatusCode::FORBIDDEN);

    let ok = app.get("/api/v1/moto").await;
    assert_eq!(ok.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_non_ascii_api_key_is_forbidden() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/moto")
        .header("GeoSense-Api-Key", HeaderValue::from_bytes(b"chave\xe9").unwrap())
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_huge_page_size_is_single_page() {
    let app = create_test_app();
    app.create_patio("Central").await;

    let response = app
        .get("/api/v1/patio?page=1&pageSize=9223372036854775807")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json()["totalPages"], 1);
    assert_eq!(response.json()["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_no_key_configured_rejects_everything() {
    let app = create_test_app_with_key(None);

    let response = app.send(Method::GET, "/api/v1/patio", None, Some("qualquer")).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let health = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(health.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_spot_occupancy_is_exclusive() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let vaga_id = app.create_vaga(1, 4, patio_id).await;

    let first = app.post_moto("ABC1D23", "CHASSI001", None, vaga_id).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);
    let location = format!("/api/v1/moto/{}", first.json()["data"]["id"]);
    assert_eq!(first.header("location"), Some(location.as_str()));

    let second = app.post_moto("XYZ9K88", "CHASSI002", None, vaga_id).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(second.json()["message"], "Esta vaga ya está ocupada por otra moto.");
}

#[tokio::test]
async fn test_placa_and_chassi_unique() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let vaga_a = app.create_vaga(1, 4, patio_id).await;
    let vaga_b = app.create_vaga(2, 4, patio_id).await;

    let first = app.post_moto("ABC1D23", "CHASSI001", None, vaga_a).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let same_placa = app.post_moto("abc1d23", "CHASSI002", None, vaga_b).await;
    assert_eq!(same_placa.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(same_placa.json()["message"], "Ya existe una moto con esa placa.");

    let same_chassi = app.post_moto("XYZ9K88", "CHASSI001", None, vaga_b).await;
    assert_eq!(same_chassi.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(same_chassi.json()["message"], "Ya existe una moto con ese chasis.");
}

#[tokio::test]
async fn test_moto_update_keeps_its_own_vaga() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let vaga_id = app.create_vaga(1, 4, patio_id).await;
    let created = app.post_moto("ABC1D23", "CHASSI001", None, vaga_id).await;
    let moto_id = created.json()["data"]["id"].as_i64().unwrap();

    let response = app
        .put(
            &format!("/api/v1/moto/{}", moto_id),
            json!({
                "modelo": "Yamaha Factor 150",
                "placa": "ABC1D23",
                "chassi": "CHASSI001",
                "vagaId": vaga_id
            }),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json()["data"]["modelo"], "Yamaha Factor 150");
}

#[tokio::test]
async fn test_moto_update_rejects_occupied_vaga() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let vaga_a = app.create_vaga(1, 4, patio_id).await;
    let vaga_b = app.create_vaga(2, 4, patio_id).await;
    app.post_moto("ABC1D23", "CHASSI001", None, vaga_a).await;
    let moto_b = app.post_moto("XYZ9K88", "CHASSI002", None, vaga_b).await;
    let moto_b_id = moto_b.json()["data"]["id"].as_i64().unwrap();

    let response = app
        .put(
            &format!("/api/v1/moto/{}", moto_b_id),
            json!({ "modelo": "Honda Biz", "placa": "XYZ9K88", "chassi": "CHASSI002", "vagaId": vaga_a }),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "Esta vaga ya está ocupada por otra moto.");
}

#[tokio::test]
async fn test_moto_update_rejects_placa_and_chassi_of_other_moto() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let vaga_a = app.create_vaga(1, 4, patio_id).await;
    let vaga_b = app.create_vaga(2, 4, patio_id).await;
    app.post_moto("ABC1D23", "CHASSI001", None, vaga_a).await;
    let moto_b = app.post_moto("XYZ9K88", "CHASSI002", None, vaga_b).await;
    let uri = format!("/api/v1/moto/{}", moto_b.json()["data"]["id"]);

    let same_placa = app
        .put(
            &uri,
            json!({ "modelo": "Honda Biz", "placa": "ABC1D23", "chassi": "CHASSI002", "vagaId": vaga_b }),
        )
        .await;
    assert_eq!(same_placa.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(same_placa.json()["message"], "Ya existe una moto con esa placa.");

    let same_chassi = app
        .put(
            &uri,
            json!({ "modelo": "Honda Biz", "placa": "XYZ9K88", "chassi": "CHASSI001", "vagaId": vaga_b }),
        )
        .await;
    assert_eq!(same_chassi.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(same_chassi.json()["message"], "Ya existe una moto con ese chasis.");
}

#[tokio::test]
async fn test_moto_requires_existing_vaga() {
    let app = create_test_app();
    let response = app.post_moto("ABC1D23", "CHASSI001", None, 999).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "La vaga indicada no existe.");
}

#[tokio::test]
async fn test_vaga_numero_unique_per_patio() {
    let app = create_test_app();
    let central = app.create_patio("Central").await;
    let norte = app.create_patio("Norte").await;
    app.create_vaga(7, 4, central).await;

    let duplicated = app
        .post("/api/v1/vaga", json!({ "numero": 7, "patioId": central }))
        .await;
    assert_eq!(duplicated.status_code(), StatusCode::BAD_REQUEST);

    let other_patio = app
        .post("/api/v1/vaga", json!({ "numero": 7, "patioId": norte }))
        .await;
    assert_eq!(other_patio.status_code(), StatusCode::CREATED);
    assert_eq!(other_patio.json()["data"]["tipo"], 4);
    assert_eq!(other_patio.json()["data"]["status"], 0);
}

#[tokio::test]
async fn test_vaga_update_rejects_numero_in_use() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    app.create_vaga(1, 4, patio_id).await;
    let vaga_b = app.create_vaga(2, 4, patio_id).await;

    let response = app
        .put(
            &format!("/api/v1/vaga/{}", vaga_b),
            json!({ "numero": 1, "tipo": 4, "status": 0, "patioId": patio_id }),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "Ya existe una vaga con ese número en este patio.");

    let keep_own = app
        .put(
            &format!("/api/v1/vaga/{}", vaga_b),
            json!({ "numero": 2, "tipo": 0, "status": 0, "patioId": patio_id }),
        )
        .await;
    assert_eq!(keep_own.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_vaga_requires_existing_patio() {
    let app = create_test_app();
    let response = app
        .post("/api/v1/vaga", json!({ "numero": 1, "tipo": 0, "status": 0, "patioId": 42 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["message"], "El patio indicado no existe.");
}

#[tokio::test]
async fn test_vaga_delete_restricted_while_moto_assigned() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let vaga_id = app.create_vaga(1, 4, patio_id).await;
    let moto = app.post_moto("ABC1D23", "CHASSI001", None, vaga_id).await;
    let moto_id = moto.json()["data"]["id"].as_i64().unwrap();

    let vaga = app.get(&format!("/api/v1/vaga/{}", vaga_id)).await;
    assert_eq!(vaga.json()["motoId"], moto_id);

    let rejected = app.delete(&format!("/api/v1/vaga/{}", vaga_id)).await;
    assert_eq!(rejected.status_code(), StatusCode::BAD_REQUEST);

    let deleted_moto = app.delete(&format!("/api/v1/moto/{}", moto_id)).await;
    assert_eq!(deleted_moto.status_code(), StatusCode::OK);

    let deleted = app.delete(&format!("/api/v1/vaga/{}", vaga_id)).await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    assert!(deleted.json()["message"].is_string());
}

#[tokio::test]
async fn test_patio_delete_cascades_to_vagas() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let vaga_a = app.create_vaga(1, 4, patio_id).await;
    let vaga_b = app.create_vaga(2, 0, patio_id).await;

    let detail = app.get(&format!("/api/v1/patio/{}", patio_id)).await;
    assert_eq!(detail.json()["vagas"].as_array().unwrap().len(), 2);

    let deleted = app.delete(&format!("/api/v1/patio/{}", patio_id)).await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    for vaga_id in [vaga_a, vaga_b] {
        let vaga = app.get(&format!("/api/v1/vaga/{}", vaga_id)).await;
        assert_eq!(vaga.status_code(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_patio_delete_rejected_when_vaga_has_moto() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let vaga_id = app.create_vaga(1, 4, patio_id).await;
    app.post_moto("ABC1D23", "CHASSI001", None, vaga_id).await;

    let response = app.delete(&format!("/api/v1/patio/{}", patio_id)).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let still_there = app.get(&format!("/api/v1/patio/{}", patio_id)).await;
    assert_eq!(still_there.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_usuario_email_unique_and_password_hidden() {
    let app = create_test_app();
    let usuario = json!({
        "nome": "Rafael Pinto",
        "email": "rafael@exemplo.com",
        "senha": "12345678",
        "tipo": 0
    });

    let created = app.post("/api/v1/usuario", usuario.clone()).await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    assert!(created.json()["data"].get("senha").is_none());
    let first_id = created.json()["data"]["id"].as_i64().unwrap();

    let duplicated = app.post("/api/v1/usuario", usuario).await;
    assert_eq!(duplicated.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(duplicated.json()["message"], "Ya existe un usuario con ese email.");

    let other = app
        .post(
            "/api/v1/usuario",
            json!({ "nome": "Ana", "email": "ana@exemplo.com", "senha": "abcdef", "tipo": 1 }),
        )
        .await;
    assert_eq!(other.status_code(), StatusCode::CREATED);
    let other_id = other.json()["data"]["id"].as_i64().unwrap();

    let steal_email = app
        .put(
            &format!("/api/v1/usuario/{}", other_id),
            json!({ "nome": "Ana", "email": "rafael@exemplo.com", "senha": "abcdef", "tipo": 1 }),
        )
        .await;
    assert_eq!(steal_email.status_code(), StatusCode::BAD_REQUEST);

    let keep_own = app
        .put(
            &format!("/api/v1/usuario/{}", first_id),
            json!({ "nome": "Rafael S. Pinto", "email": "rafael@exemplo.com", "senha": "87654321", "tipo": 0 }),
        )
        .await;
    assert_eq!(keep_own.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_usuario_validation_errors() {
    let app = create_test_app();
    let response = app
        .post(
            "/api/v1/usuario",
            json!({ "nome": "Ana", "email": "no-es-email", "senha": "123", "tipo": 1 }),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_pagination_and_links() {
    let app = create_test_app();
    for i in 1..=15 {
        app.create_patio(&format!("Pátio {}", i)).await;
    }

    let first = app.get("/api/v1/patio").await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let body = first.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 10);
    assert_eq!(body["totalCount"], 15);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["items"][0]["id"], 1);
    let rels: Vec<&str> = body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["rel"].as_str().unwrap())
        .collect();
    assert_eq!(rels, vec!["self", "first", "next", "last"]);

    let second = app.get("/api/v1/patio?page=2&pageSize=10").await;
    let body = second.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    let links = body["links"].as_array().unwrap();
    assert!(links.iter().any(|l| l["rel"] == "prev" && l["href"] == "/api/v1/patio?page=1&pageSize=10"));
    assert!(!links.iter().any(|l| l["rel"] == "next"));

    let invalid = app.get("/api/v1/patio?page=0").await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_risk_classification() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let reparo = app.create_vaga(1, 0, patio_id).await;
    let outra = app.create_vaga(2, 0, patio_id).await;

    let alto = app
        .post_moto("ABC1D23", "CHASSI001", Some("Motor com ruído excessivo"), reparo)
        .await;
    assert_eq!(alto.json()["data"]["risco"], "ALTO");

    let baixo = app.post_moto("XYZ9K88", "CHASSI002", Some(""), outra).await;
    assert_eq!(baixo.json()["data"]["risco"], "BAIXO");

    let listed = app.get("/api/v1/moto").await;
    assert_eq!(listed.json()["items"][0]["risco"], "ALTO");
}

#[tokio::test]
async fn test_dashboard_counts() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;
    let com_problema = app.create_vaga(1, 1, patio_id).await;
    app.create_vaga(2, 4, patio_id).await;
    let ocupada = app
        .post("/api/v1/vaga", json!({ "numero": 3, "tipo": 4, "status": 1, "patioId": patio_id }))
        .await;
    assert_eq!(ocupada.status_code(), StatusCode::CREATED);

    app.post_moto("ABC1D23", "CHASSI001", Some("Motor falhando"), com_problema)
        .await;

    let response = app.get("/api/v1/dashboard").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json(),
        &json!({
            "totalMotos": 1,
            "motosComProblema": 1,
            "totalVagas": 3,
            "vagasLivres": 2,
            "vagasOcupadas": 1,
            "vagasLivresComProblema": 1,
            "vagasLivresSemProblema": 1
        })
    );
}

#[tokio::test]
async fn test_unversioned_prefix_and_not_found() {
    let app = create_test_app();
    let patio_id = app.create_patio("Central").await;

    let response = app.get(&format!("/api/patio/{}", patio_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json()["nome"], "Central");

    let missing = app.get("/api/v1/moto/999").await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(missing.json()["code"], "NOT_FOUND");
}
