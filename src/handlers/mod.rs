//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data<AppContext>`로 조립된 서비스를 전달받아
//! 요청 검증, 서비스 호출, 응답 변환만 담당합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, curl, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                  ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService / MailService           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserRepository (in-memory)          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로그인 (`POST /api/v1/auth/login`)
//! - **`users`**: 회원가입 (`POST /api/v1/users`), 사용자 조회 (`GET /api/v1/users/{id}`)
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `?` 연산자로 전파된 에러는 `AppError::error_response()`를 통해
//! `{"error": "..."}` JSON 응답으로 변환됩니다.

pub mod auth;
pub mod users;
