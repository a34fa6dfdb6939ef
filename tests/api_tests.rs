//! Tests de integración de la API
//!
//! Montan la aplicación completa sobre los repositorios en memoria y la
//! ejercitan request a request con tower::ServiceExt::oneshot.

use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use cab_booking_backend::config::environment::EnvironmentConfig;
use cab_booking_backend::routes::create_app;
use cab_booking_backend::state::AppState;

const ADMIN_PASSWORD: &str = "test_admin_password";

fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 3000,
        host: "127.0.0.1".to_string(),
        database_url: None,
        jwt_secret: "test_jwt_secret".to_string(),
        jwt_expiration: 86400,
        admin_password: ADMIN_PASSWORD.to_string(),
        cors_origins: vec!["*".to_string()],
        whatsapp_token: None,
        whatsapp_phone_number_id: None,
        whatsapp_recipient_phone: None,
    }
}

// App de test: en memoria, con el catálogo por defecto y sin notificador
fn test_app() -> Router {
    create_app(AppState::in_memory(test_config()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({ "password": ADMIN_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    body["token"].as_str().unwrap().to_string()
}

fn lead_payload(name: &str) -> Value {
    json!({
        "name": name,
        "phone": "9876543210",
        "address": "Sector 4",
        "vehicleType": "Sedan",
        "bookingDetails": {
            "from": "Bokaro",
            "to": "Ranchi",
            "date": "2025-01-10",
            "time": "09:00",
            "tripType": "One Way"
        }
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_lead_forces_new_status() {
    let app = test_app();

    // El cliente intenta colar un estado: el servidor lo ignora
    let mut payload = lead_payload("Asha");
    payload["status"] = json!("booked");

    let (status, body) = send(&app, Method::POST, "/api/leads", None, Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let lead = &body["data"];
    assert_eq!(lead["status"], "new");
    assert_eq!(lead["name"], "Asha");
    assert_eq!(lead["bookingDetails"]["tripType"], "One Way");
    assert!(lead["id"].as_str().is_some());
    assert!(lead["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn test_create_lead_short_phone_is_rejected() {
    let app = test_app();

    let mut payload = lead_payload("Asha");
    payload["phone"] = json!("123");

    let (status, body) = send(&app, Method::POST, "/api/leads", None, Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"].get("phone").is_some());

    // Nada llegó al almacenamiento
    let token = login(&app).await;
    let (_, leads) = send(&app, Method::GET, "/api/admin/leads", Some(&token), None).await;
    assert_eq!(leads.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_lead_missing_booking_details() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/leads",
        None,
        Some(json!({
            "name": "Asha",
            "phone": "9876543210",
            "address": "Sector 4",
            "vehicleType": "Sedan"
        })),
    )
    .await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({ "password": "not-the-password" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_admin_endpoints_reject_missing_and_invalid_tokens() {
    let app = test_app();

    // Sin token -> 401
    let (status, body) = send(&app, Method::GET, "/api/admin/leads", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.as_array().is_none());

    // Token basura -> 403
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/admin/leads",
        Some("garbage.token.value"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.as_array().is_none());

    // El resto de rutas de administración están igual de cerradas
    let (status, _) = send(&app, Method::GET, "/api/admin/routes", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, Method::GET, "/api/admin/cars", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, Method::GET, "/api/admin/tour-packages", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_lead_moderation_flow() {
    let app = test_app();

    send(&app, Method::POST, "/api/leads", None, Some(lead_payload("primero"))).await;
    send(&app, Method::POST, "/api/leads", None, Some(lead_payload("segundo"))).await;

    let token = login(&app).await;

    // Más reciente primero
    let (status, leads) = send(&app, Method::GET, "/api/admin/leads", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let leads = leads.as_array().unwrap().clone();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0]["name"], "segundo");
    assert_eq!(leads[1]["name"], "primero");

    // Transición de estado: solo cambia el estado
    let id = leads[1]["id"].as_str().unwrap().to_string();
    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/api/admin/leads/{}", id),
        Some(&token),
        Some(json!({ "status": "booked" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "booked");
    assert_eq!(updated["name"], "primero");
    assert_eq!(updated["createdAt"], leads[1]["createdAt"]);

    // La lista refleja el cambio
    let (_, leads) = send(&app, Method::GET, "/api/admin/leads", Some(&token), None).await;
    assert_eq!(leads[1]["status"], "booked");

    // Vuelta atrás permitida: booked -> new
    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/api/admin/leads/{}", id),
        Some(&token),
        Some(json!({ "status": "new" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "new");

    // Id desconocido -> 404
    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/admin/leads/00000000-0000-0000-0000-000000000000",
        Some(&token),
        Some(json!({ "status": "contacted" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Estado fuera del enum -> error de cliente
    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/admin/leads/{}", id),
        Some(&token),
        Some(json!({ "status": "archived" })),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_route_crud_flow() {
    let app = test_app();
    let token = login(&app).await;

    // El catálogo por defecto se sirve públicamente sin token
    let (status, routes) = send(&app, Method::GET, "/api/routes", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(routes.as_array().unwrap().len(), 8);

    // Alta desde el panel
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/admin/routes",
        Some(&token),
        Some(json!({
            "destination": "Patna",
            "time": "4h",
            "distance": "200 km",
            "sedan": 2000.0,
            "ertiga": 2800.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    // Aparece en la lista pública y en la de administración
    let (_, public) = send(&app, Method::GET, "/api/routes", None, None).await;
    assert!(public
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r["destination"] == "Patna"));
    let (_, admin) = send(&app, Method::GET, "/api/admin/routes", Some(&token), None).await;
    assert!(admin
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r["id"] == created["id"]));

    // Actualización
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/admin/routes/{}", id),
        Some(&token),
        Some(json!({
            "destination": "Patna",
            "time": "4h 15m",
            "distance": "200 km",
            "sedan": 2100.0,
            "ertiga": 2900.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["sedan"], 2100.0);

    // Borrado idempotente: dos veces 204
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/admin/routes/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/admin/routes/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Actualizar lo borrado -> 404
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/admin/routes/{}", id),
        Some(&token),
        Some(json!({
            "destination": "Patna",
            "time": "4h",
            "distance": "200 km",
            "sedan": 2000.0,
            "ertiga": 2800.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_route_create_rejects_non_positive_price() {
    let app = test_app();
    let token = login(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/routes",
        Some(&token),
        Some(json!({
            "destination": "Patna",
            "time": "4h",
            "distance": "200 km",
            "sedan": 0.0,
            "ertiga": 2800.0
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_car_crud_flow() {
    let app = test_app();

    // Flota por defecto pública
    let (status, cars) = send(&app, Method::GET, "/api/cars", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cars.as_array().unwrap().len(), 2);

    let token = login(&app).await;
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/admin/cars",
        Some(&token),
        Some(json!({
            "name": "Tempo",
            "models": "Traveller",
            "capacity": "12+1",
            "type": "Van"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "Van");

    let (_, cars) = send(&app, Method::GET, "/api/cars", None, None).await;
    assert_eq!(cars.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_tour_package_public_detail() {
    let app = test_app();
    let token = login(&app).await;

    // Sin paquetes: lista vacía y detalle 404
    let (_, packages) = send(&app, Method::GET, "/api/tour-packages", None, None).await;
    assert_eq!(packages.as_array().unwrap().len(), 0);
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/tour-packages/00000000-0000-0000-0000-000000000000",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/admin/tour-packages",
        Some(&token),
        Some(json!({
            "title": "Netarhat Hill Escape",
            "description": "Two days in the queen of Chotanagpur",
            "price": 8999.0,
            "duration": "2D/1N",
            "image_url": "https://example.com/netarhat.jpg"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    // Detalle público sin token
    let (status, detail) = send(
        &app,
        Method::GET,
        &format!("/api/tour-packages/{}", id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["title"], "Netarhat Hill Escape");
    assert_eq!(detail["image_url"], "https://example.com/netarhat.jpg");

    // Borrar y comprobar que el detalle desaparece
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/admin/tour-packages/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/tour-packages/{}", id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
