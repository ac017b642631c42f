//! 사용자 접근 서비스
//!
//! 메모리 상의 사용자 디렉터리 위에서 로그인, 사용자 조회, 회원가입을 제공하고
//! 성공 시 메일 알림(로그 출력)을 보내는 서비스입니다.
//! 모든 컴포넌트는 전역 싱글톤 없이 생성자 주입으로 조립됩니다.
//!
//! # Features
//!
//! - **사용자 디렉터리**: 삽입 순서를 보존하는 in-memory 저장소, 이메일 대소문자 무시 유니크
//! - **로그인/회원가입**: 성공 시 메일 알림 발송
//! - **명시적 DI**: `AppContext`가 리포지토리와 서비스를 한 번씩 생성해 연결
//! - **HTTP API**: Actix-web 기반 REST 엔드포인트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserService, MailService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← in-memory UserRepository
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_access_service::config::AppConfig;
//! use user_access_service::core::AppContext;
//!
//! let ctx = AppContext::build(&AppConfig::from_env());
//! let user = ctx.user_service.login("bob@example.com", "password")?;
//! println!("{}", user.name);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
