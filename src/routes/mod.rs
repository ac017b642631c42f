//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인
//! - `POST /api/v1/users` - 회원가입
//! - `GET /api/v1/users/{user_id}` - 사용자 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(AppContext::build(&AppConfig::default())))
//!     .configure(configure_all_routes);
//! ```

use crate::{core::errors::AppError, handlers};
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 핸들러 진입 전 추출 단계의 실패도 `{"error": "..."}` 형식으로 응답하도록
/// JSON 본문과 경로 파라미터의 에러 핸들러를 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

/// 잘못된 JSON 본문(문법 오류, 필드 누락)은 400 `ValidationError`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 해석할 수 없는 경로 파라미터는 존재하지 않는 리소스로 보고 404 `NotFound`
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::NotFound(err.to_string()).into())
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::register_user)
            .service(handlers::users::get_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_access_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "features": {
///     "storage": "In-Memory",
///     "dependency_injection": "Constructor"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "storage": "In-Memory",
            "dependency_injection": "Constructor"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_access_service");
    }
}
