use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower::ServiceExt;

// Tests de forma de la API sobre un router mínimo, sin base de datos.
// La lógica de negocio se cubre en los módulos #[cfg(test)] del crate.

fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "fleet-backoffice",
                    "status": "healthy"
                }))
            }),
        )
        .route(
            "/api/auth/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "Unauthorized",
                        "message": "Credenciales inválidas",
                        "code": "UNAUTHORIZED"
                    })),
                )
            }),
        )
        .route(
            "/api/vehicle",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "Unauthorized",
                        "message": "Token de autorización requerido",
                        "code": "UNAUTHORIZED"
                    })),
                )
            }),
        )
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["service"], "fleet-backoffice");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_login_with_invalid_credentials_is_unauthorized() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "email": "nadie@example.com",
                        "password": "incorrecta"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_protected_route_without_token_is_unauthorized() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/vehicle")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Sin token nunca debe responder 200 ni 500
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
