//! # Domain Layer Module
//!
//! 사용자 엔티티와 HTTP 요청/응답 DTO를 담는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 디렉터리가 소유하는 사용자 레코드
//! └── dto       - 요청/응답 데이터 전송 객체
//!      │
//!      ▼
//! Services (UserService, MailService)
//!      │
//!      ▼
//! Repositories (in-memory UserRepository)
//! ```

pub mod entities;
pub mod dto;

pub use entities::users::User;
pub use dto::users::request::{LoginRequest, RegisterUserRequest};
pub use dto::users::response::UserResponse;
