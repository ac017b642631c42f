//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인 엔드포인트를 처리합니다.
//! 토큰이나 세션은 발급하지 않고 인증된 사용자 정보만 반환합니다.
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::{context::AppContext, errors::AppError},
    domain::{LoginRequest, UserResponse},
};

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/login`
///
/// # 응답
///
/// * `200 OK` - `{"id": 1, "email": "bob@example.com", "name": "Bob"}`
/// * `400 Bad Request` - 요청 형식 오류
/// * `404 Not Found` - 이메일 또는 비밀번호 불일치
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"bob@example.com","password":"password"}'
/// ```
#[post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = ctx.user_service.login(&payload.email, &payload.password)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use crate::{config::AppConfig, core::context::AppContext, routes::configure_all_routes};

    #[actix_web::test]
    async fn test_login_success_returns_user_without_password() {
        let ctx = web::Data::new(AppContext::build(&AppConfig::default()));
        let app = test::init_service(
            App::new().app_data(ctx.clone()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "BOB@EXAMPLE.COM", "password": "password"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"id": 1, "email": "bob@example.com", "name": "Bob"}));
    }

    #[actix_web::test]
    async fn test_login_wrong_password_is_not_found() {
        let ctx = web::Data::new(AppContext::build(&AppConfig::default()));
        let app = test::init_service(
            App::new().app_data(ctx.clone()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "tom@example.com", "password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().is_some());
    }

    #[actix_web::test]
    async fn test_login_malformed_json_returns_error_envelope() {
        let ctx = web::Data::new(AppContext::build(&AppConfig::default()));
        let app = test::init_service(
            App::new().app_data(ctx.clone()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"email\": \"bob@example.com\",")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().is_some());
    }

    #[actix_web::test]
    async fn test_login_invalid_email_is_bad_request() {
        let ctx = web::Data::new(AppContext::build(&AppConfig::default()));
        let app = test::init_service(
            App::new().app_data(ctx.clone()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "not-an-email", "password": "password"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
