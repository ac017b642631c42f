//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)는 메모리 상의 사용자 디렉터리를 소유하며,
//! `Arc`로 공유되어 서비스에 명시적으로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = Arc::new(UserRepository::with_default_users());
//! let user = user_repo.find_by_id(1)?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
