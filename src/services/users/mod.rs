//! 사용자 접근 서비스 모듈
//!
//! 로그인, 사용자 조회, 회원가입 비즈니스 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = ctx.user_service.login("bob@example.com", "password")?;
//! println!("{}", user.name);
//! ```

pub mod user_service;

pub use user_service::UserService;
