//! # Application Error Handling System
//!
//! 사용자 접근 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 디렉터리 조회 실패와 이메일 중복을 각각 `NotFound`, `ConflictError`로 표현하고,
//! `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 자동 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 검증 실패 |
//! | `NotFound` | 404 Not Found | 로그인 정보 불일치, 존재하지 않는 ID |
//! | `ConflictError` | 409 Conflict | 이미 등록된 이메일 |
//! | `ConfigError` | 500 Internal Server Error | 잘못된 설정값 |
//! | `InternalError` | 500 Internal Server Error | 잠금 오염 등 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn find(&self, id: i64) -> AppResult<User> {
//!     self.users
//!         .iter()
//!         .find(|user| user.id == id)
//!         .cloned()
//!         .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: id={}", id)))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, 핸들러에서 반환되면
/// `{"error": "..."}` 형식의 JSON 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 로그인 시 이메일/비밀번호가 일치하는 사용자가 없거나,
    /// 요청한 ID의 사용자가 존재하지 않을 때 발생합니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 대소문자 구분 없이 같은 이메일이 이미 디렉터리에 있을 때 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 설정값 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "<메시지>"}` 형식을 따릅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// let port = raw.parse::<u16>().context("PORT 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("email: 유효한 이메일 주소를 입력해주세요".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("로그인에 실패했습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 사용 중인 이메일입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_config_and_internal_errors_are_server_errors() {
        assert_eq!(
            AppError::ConfigError("bad zone".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::InternalError("poisoned".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message_format() {
        let error = AppError::ConflictError("email exist".to_string());
        assert_eq!(error.to_string(), "Conflict error: email exist");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("source error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("source error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let ok: Result<u8, &str> = Ok(7);
        let value = ok.with_context(|| panic!("must not be evaluated"));
        assert_eq!(value.ok(), Some(7));
    }
}
